//! Narrative summary — optional AI enrichment of the review step.
//!
//! Reaching the review step sends a snapshot of the record to a generator,
//! which turns it into a short advisor briefing. Generation is best-effort:
//! a generator that cannot deliver returns a fixed fallback line instead of
//! an error, so the wizard is never blocked on it.

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;

use crate::record::ClientRecord;

pub use gemini::GeminiGenerator;
pub use prompt::briefing_prompt;

/// Returned when the provider answers but with no usable text.
pub const EMPTY_NARRATIVE: &str = "Could not generate summary at this time.";

/// Returned when the provider cannot be reached or rejects the call.
pub const FALLBACK_NARRATIVE: &str =
    "The AI assistant is currently unavailable, but your data is safe.";

/// Turns a record snapshot into a narrative briefing.
///
/// Infallible by contract: implementations absorb their own failures and
/// return [`FALLBACK_NARRATIVE`] rather than an error.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(&self, record: &ClientRecord) -> String;
}

//! Submission — delivering the completed record to the practice's systems.

pub mod payload;
pub mod webhook;

use async_trait::async_trait;

use crate::error::GatewayError;

pub use payload::SubmissionPayload;
pub use webhook::WebhookGateway;

/// Source tag stamped on every submission unless configured otherwise.
pub const DEFAULT_SOURCE_TAG: &str = "Private Portal Onboarding";

/// Delivers a completed submission.
///
/// The outcome is binary: delivered, or one generic failure. No response
/// body is consumed, no retry state is kept; retrying is the caller's
/// decision.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError>;
}

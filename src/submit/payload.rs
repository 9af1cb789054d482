//! Submission payload — the flat wire shape the webhook receives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::ClientRecord;

/// One submission, as a single flat JSON object: every record field at the
/// top level plus the narrative and delivery metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub record: ClientRecord,
    /// The generated narrative. Empty when the user submitted before
    /// generation settled.
    pub ai_insight: String,
    pub submitted_at: DateTime<Utc>,
    pub source: String,
}

impl SubmissionPayload {
    /// Stamp a record snapshot for delivery, dated now.
    pub fn new(
        record: ClientRecord,
        ai_insight: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            record,
            ai_insight: ai_insight.into(),
            submitted_at: Utc::now(),
            source: source.into(),
        }
    }
}

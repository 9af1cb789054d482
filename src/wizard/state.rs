//! Submission lifecycle — the session's progress toward the webhook.

use serde::{Deserialize, Serialize};

/// Where the session stands between "still collecting" and "delivered".
///
/// Normal flow: Idle → GeneratingSummary → Ready → Submitting → Submitted.
/// A gateway failure lands in SubmissionFailed, from which Submit may be
/// retried any number of times. Submitting may also be entered straight
/// from GeneratingSummary — the user is not forced to wait for the
/// narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    GeneratingSummary,
    Ready,
    Submitting,
    Submitted,
    SubmissionFailed,
}

impl SubmissionState {
    /// Whether the session is finished. Once submitted, only restart is
    /// accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Whether a gateway call is in flight right now. Blocks retreat,
    /// another submit, and restart.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::GeneratingSummary => "generating_summary",
            Self::Ready => "ready",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
            Self::SubmissionFailed => "submission_failed",
        };
        write!(f, "{s}")
    }
}

//! Error types for the intake portal.

/// Top-level error type for the portal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Rejected wizard operations.
///
/// These are contract violations by the caller (pressing Submit off the
/// review step, say), not faults: the session stays exactly as it was.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Submission is only available from the review step")]
    NotAtReview,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("This session has already been submitted")]
    AlreadySubmitted,
}

/// Narrative generation errors.
///
/// Internal to the generator: by the time a narrative crosses the
/// generator trait boundary these have been absorbed into the fallback
/// text.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Summary request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Summary response unreadable: {reason}")]
    InvalidResponse { reason: String },
}

/// Submission delivery errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Webhook request failed: {reason}")]
    Transport { reason: String },

    #[error("Webhook rejected the submission with status {status}")]
    Rejected { status: u16 },
}

/// Result type alias for the portal.
pub type Result<T> = std::result::Result<T, Error>;

//! Portal configuration, read from the environment at startup.

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::submit::DEFAULT_SOURCE_TAG;
use crate::summary::gemini::DEFAULT_MODEL;

const DEFAULT_PORT: u16 = 8090;

/// Runtime configuration for the portal binary.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Webhook endpoint submitted records are delivered to.
    pub webhook_url: String,
    /// Gemini API key used for narrative generation.
    pub gemini_api_key: SecretString,
    /// Gemini model used for narrative generation.
    pub model: String,
    /// Source tag stamped onto every submission payload.
    pub source_tag: String,
    /// HTTP port the portal listens on.
    pub port: u16,
}

impl PortalConfig {
    /// Read configuration from the environment.
    ///
    /// `INTAKE_WEBHOOK_URL` and `GEMINI_API_KEY` are required; the rest
    /// fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("INTAKE_WEBHOOK_URL").ok(),
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("INTAKE_SUMMARY_MODEL").ok(),
            std::env::var("INTAKE_SOURCE_TAG").ok(),
            std::env::var("INTAKE_PORT").ok(),
        )
    }

    fn from_values(
        webhook_url: Option<String>,
        gemini_api_key: Option<String>,
        model: Option<String>,
        source_tag: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let webhook_url = webhook_url.ok_or_else(|| ConfigError::MissingRequired {
            key: "INTAKE_WEBHOOK_URL".into(),
            hint: "export INTAKE_WEBHOOK_URL=https://hooks.example.com/intake".into(),
        })?;
        let gemini_api_key = gemini_api_key.ok_or_else(|| ConfigError::MissingRequired {
            key: "GEMINI_API_KEY".into(),
            hint: "export GEMINI_API_KEY=<your Google AI Studio key>".into(),
        })?;
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "INTAKE_PORT".into(),
                message: format!("expected a port number, got {raw:?}"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            webhook_url,
            gemini_api_key: SecretString::from(gemini_api_key),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            source_tag: source_tag.unwrap_or_else(|| DEFAULT_SOURCE_TAG.to_string()),
            port,
        })
    }
}

//! Webhook gateway — POSTs the submission JSON to the configured endpoint.

use async_trait::async_trait;
use tracing::info;

use super::{SubmissionGateway, SubmissionPayload};
use crate::error::GatewayError;

/// HTTP gateway delivering submissions to one configured URL.
pub struct WebhookGateway {
    client: reqwest::Client,
    url: String,
}

impl WebhookGateway {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl SubmissionGateway for WebhookGateway {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError> {
        let resp = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(GatewayError::Rejected {
                status: resp.status().as_u16(),
            });
        }

        info!(source = %payload.source, "Submission delivered");
        Ok(())
    }
}

//! Gemini-backed narrative generator — one generateContent REST call per
//! briefing.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::prompt::briefing_prompt;
use super::{EMPTY_NARRATIVE, FALLBACK_NARRATIVE, SummaryGenerator};
use crate::error::SummaryError;
use crate::record::ClientRecord;

/// Default model for client briefings.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Narrative generator backed by the Gemini `generateContent` API.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the generator at a different host (tests stub the API).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn request_narrative(&self, record: &ClientRecord) -> Result<String, SummaryError> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": briefing_prompt(record) }]
            }]
        });

        let resp = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| SummaryError::RequestFailed {
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(SummaryError::RequestFailed {
                reason: format!("status {status}: {detail}"),
            });
        }

        let data: serde_json::Value = resp.json().await.map_err(|e| SummaryError::InvalidResponse {
            reason: e.to_string(),
        })?;

        Ok(extract_text(&data))
    }
}

/// Pull the narrative out of a generateContent response body. A response
/// with no usable text is not an error; it becomes the fixed
/// empty-response line.
fn extract_text(data: &serde_json::Value) -> String {
    let text = data
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        EMPTY_NARRATIVE.to_string()
    } else {
        text
    }
}

#[async_trait]
impl SummaryGenerator for GeminiGenerator {
    async fn generate(&self, record: &ClientRecord) -> String {
        match self.request_narrative(record).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Narrative generation failed, using fallback");
                FALLBACK_NARRATIVE.to_string()
            }
        }
    }
}

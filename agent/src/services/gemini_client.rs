//! Gemini API client

use async_trait::async_trait;

use shared::ApiFailure;

use crate::traits::GenerativeClient;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Thin `reqwest` wrapper around the `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (used by HTTP-level tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ApiFailure> {
        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "maxOutputTokens": 1024,
                "temperature": 0.7
            }
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ApiFailure::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                400 => ApiFailure::InvalidRequest(body),
                401 | 403 => ApiFailure::AuthenticationFailed,
                // A 429 body mentioning quota means the daily allowance is
                // gone, not just a burst limit
                429 if body.to_lowercase().contains("quota") => ApiFailure::QuotaExceeded,
                429 => ApiFailure::RateLimitExceeded,
                503 => ApiFailure::ServiceUnavailable,
                _ => ApiFailure::ServerError(format!("HTTP {status}")),
            });
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidRequest(format!("Failed to parse response: {e}")))?;

        let content = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ApiFailure::EmptyResponse);
        }

        Ok(content.to_string())
    }
}

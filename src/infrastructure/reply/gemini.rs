//! Gemini-backed reply generation over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{ReplyError, ReplyGenerator};

const MODEL: &str = "gemini-1.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HEALTH_PROBE: &str = "Hello Gemini! Are you working?";
/// How much of the probe response to surface in the health message.
const HEALTH_EXCERPT_LEN: usize = 50;

/// [`ReplyGenerator`] calling the Gemini `generateContent` endpoint.
///
/// Upstream errors are folded into the reply text rather than propagated:
/// a degraded reply must never take the chat flow down with it.
pub struct GeminiReplyGenerator {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiReplyGenerator {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, api_key }
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, ReplyError> {
        let url = format!(
            "{API_BASE}/{MODEL}:generateContent?key={}",
            self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let response: serde_json::Value = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ReplyError::EmptyResponse)
    }
}

#[async_trait]
impl ReplyGenerator for GeminiReplyGenerator {
    async fn generate_reply(&self, mood: &str, message: &str) -> String {
        let prompt = format!(
            "You are a kind friend. The user feels {mood}. Reply empathetically.\nUser: {message}\nFriend:"
        );
        match self.generate_content(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Gemini reply generation failed: {}", e);
                format!("(AI-{mood}) Gemini error: {e}")
            }
        }
    }

    async fn check_health(&self) -> (bool, String) {
        match self.generate_content(HEALTH_PROBE).await {
            Ok(text) => {
                let excerpt: String = text.chars().take(HEALTH_EXCERPT_LEN).collect();
                (true, format!("Gemini API working fine: {excerpt}..."))
            }
            Err(ReplyError::EmptyResponse) => (false, "No response from Gemini API.".to_string()),
            Err(e) => (false, format!("Error: {e}")),
        }
    }
}

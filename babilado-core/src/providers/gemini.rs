//! Gemini provider adapter
//!
//! Speaks the generateContent API: credential in the x-goog-api-key
//! header, reply text at candidates[0].content.parts[0].text.

use std::collections::HashMap;

use serde_json::{json, Value};
use url::Url;

use super::adapter::Provider;
use super::FALLBACK_REPLY;
use crate::config::{ConfigError, ResolvedProvider};
use crate::error::{ChatError, ChatResult};
use crate::protocol::ChatRequest;

/// Adapter for Google's Gemini generateContent API.
#[derive(Debug, Default)]
pub struct GeminiProvider;

impl GeminiProvider {
    /// Create a new Gemini provider adapter
    pub fn new() -> Self {
        Self
    }
}

impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn request_url(&self, config: &ResolvedProvider<'_>) -> ChatResult<Url> {
        let raw = format!(
            "{}/v1beta/models/{}:generateContent",
            config.endpoint.as_str().trim_end_matches('/'),
            config.model
        );
        Url::parse(&raw).map_err(|e| {
            ChatError::Configuration(ConfigError::Invalid {
                name: "model".to_string(),
                message: format!("could not build request URL: {}", e),
            })
        })
    }

    fn headers(&self, config: &ResolvedProvider<'_>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "x-goog-api-key".to_string(),
            config.credential.expose_secret().to_string(),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    fn build_request(&self, request: &ChatRequest, config: &ResolvedProvider<'_>) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.message}]
            }],
            "generationConfig": {
                "maxOutputTokens": config.max_output_tokens
            }
        });
        if let Some(temperature) = config.temperature {
            body["generationConfig"]["temperature"] = json!(temperature);
        }
        body
    }

    fn extract_reply(&self, payload: &Value) -> String {
        payload
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }
}

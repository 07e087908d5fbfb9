//! Inbound request validation
//!
//! Validation is framework-free: handlers pass the raw method and body,
//! and every rejection maps to a specific wire error.

use serde::Deserialize;

use super::types::ChatRequest;
use crate::error::{ChatError, ChatResult};

/// Inbound body before validation. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct RawChatBody {
    #[serde(default)]
    message: Option<String>,
}

/// Validate an inbound chat request.
///
/// Only POST is accepted. The body must be a JSON object whose `message`
/// is a string with non-whitespace content; anything else is rejected as
/// a missing message, matching the wire contract's single 400 variant.
pub fn validate_chat_request(method: &str, body: &[u8]) -> ChatResult<ChatRequest> {
    if method != "POST" {
        return Err(ChatError::MethodNotAllowed);
    }

    let raw: RawChatBody = serde_json::from_slice(body).map_err(|_| ChatError::MissingMessage)?;
    let message = raw
        .message
        .as_deref()
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .ok_or(ChatError::MissingMessage)?;

    Ok(ChatRequest::new(message))
}

//! Provider adapter trait

use std::collections::HashMap;

use serde_json::Value;
use url::Url;

use crate::config::{ProviderKind, ResolvedProvider};
use crate::error::ChatResult;
use crate::protocol::ChatRequest;

/// Adapter between the relay and one generative-AI backend.
///
/// Implementations translate a validated chat request into the backend's
/// envelope and pull the reply text back out of its response payload.
pub trait Provider: Send + Sync {
    /// Provider name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Build the full request URL for one chat call.
    fn request_url(&self, config: &ResolvedProvider<'_>) -> ChatResult<Url>;

    /// Headers to attach, including the credential.
    fn headers(&self, config: &ResolvedProvider<'_>) -> HashMap<String, String>;

    /// Build the backend's request envelope.
    fn build_request(&self, request: &ChatRequest, config: &ResolvedProvider<'_>) -> Value;

    /// Extract the reply text from a success payload.
    ///
    /// Every step of the walk is optional; any absent or mistyped field
    /// yields the fallback sentinel instead of an error.
    fn extract_reply(&self, payload: &Value) -> String;
}

/// Create a provider adapter for the configured kind.
pub fn create_provider(kind: ProviderKind) -> Box<dyn Provider> {
    match kind {
        ProviderKind::Gemini => Box::new(super::gemini::GeminiProvider::new()),
    }
}

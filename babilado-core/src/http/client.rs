//! HTTP client for provider requests

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ProviderConfig;
use crate::error::{ChatError, ChatResult};
use crate::protocol::{ChatReply, ChatRequest};
use crate::providers::Provider;

/// User agent string for HTTP requests
const USER_AGENT: &str = "babilado/0.1.0";

/// Build a pooled client with connection reuse and timeouts.
pub(crate) fn build_client() -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
}

/// HTTP client for dispatching chat requests to a provider.
///
/// Holds a single pooled `reqwest::Client`; clones share the pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a new HTTP client with connection pooling
    pub fn new() -> ChatResult<Self> {
        let client = build_client()?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Send one chat request to the provider and extract the reply.
    ///
    /// Configuration completeness is checked before any envelope is built
    /// or any connection is opened, so an incomplete configuration fails
    /// without network traffic. The call fires exactly once: no retries.
    pub async fn send_chat(
        &self,
        provider: &dyn Provider,
        config: &ProviderConfig,
        request: &ChatRequest,
    ) -> ChatResult<ChatReply> {
        let request_id = Uuid::new_v4();

        let resolved = config.resolve()?;
        let url = provider.request_url(&resolved)?;
        let envelope = provider.build_request(request, &resolved);

        info!(
            "Dispatching chat request to {} [request_id: {}]",
            provider.name(),
            request_id
        );
        debug!("Request URL: {} [request_id: {}]", url, request_id);

        let mut req_builder = self.client.post(url).json(&envelope);
        for (name, value) in provider.headers(&resolved) {
            req_builder = req_builder.header(name, value);
        }

        let response = req_builder.send().await.map_err(|e| {
            warn!(
                "Request to {} failed: {} [request_id: {}]",
                provider.name(),
                e,
                request_id
            );
            ChatError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Provider returned status {} [request_id: {}]",
                status, request_id
            );
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await.map_err(|e| {
            warn!(
                "Provider response was not valid JSON: {} [request_id: {}]",
                e, request_id
            );
            ChatError::Transport(e)
        })?;

        let reply = provider.extract_reply(&payload);
        info!("Chat request completed [request_id: {}]", request_id);

        Ok(ChatReply::new(reply))
    }
}

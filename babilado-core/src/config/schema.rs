//! Configuration schema types
//!
//! Settings that may be absent at startup stay `Option` here; `resolve`
//! reports the first missing one the moment a call actually needs it.

use std::net::SocketAddr;
use std::str::FromStr;

use url::Url;

use super::error::ConfigError;
use super::secrets::SecretString;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Generative-AI provider settings.
    pub provider: ProviderConfig,
    /// Document store settings.
    pub store: StoreConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

/// Supported generative-AI providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(format!("unknown provider kind '{}'", other)),
        }
    }
}

/// Settings for the generative-AI backend.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Which provider to dispatch to.
    pub kind: ProviderKind,
    /// Base URL of the provider API.
    pub endpoint: Option<Url>,
    /// API credential, sent per provider convention.
    pub credential: Option<SecretString>,
    /// Model identifier to request.
    pub model: Option<String>,
    /// Optional sampling temperature; omitted from requests when unset.
    pub temperature: Option<f32>,
    /// Cap on generated tokens per reply.
    pub max_output_tokens: u32,
}

impl ProviderConfig {
    /// Check that every setting a provider call needs is present.
    ///
    /// Returns the first missing field, so callers can surface a precise
    /// configuration error without ever opening a connection.
    pub fn resolve(&self) -> Result<ResolvedProvider<'_>, ConfigError> {
        let endpoint = self
            .endpoint
            .as_ref()
            .ok_or(ConfigError::Missing { field: "endpoint" })?;
        let credential = self
            .credential
            .as_ref()
            .ok_or(ConfigError::Missing {
                field: "credential",
            })?;
        let model = self
            .model
            .as_deref()
            .ok_or(ConfigError::Missing { field: "model" })?;

        Ok(ResolvedProvider {
            endpoint,
            credential,
            model,
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        })
    }
}

/// A fully-populated view of `ProviderConfig`, valid for one call.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedProvider<'a> {
    pub endpoint: &'a Url,
    pub credential: &'a SecretString,
    pub model: &'a str,
    pub temperature: Option<f32>,
    pub max_output_tokens: u32,
}

/// Settings for the document store backing the map data listing.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root URL of the store's document collection API.
    pub endpoint: Option<Url>,
    /// Optional credential, passed as a query parameter.
    pub credential: Option<SecretString>,
    /// Collection to list.
    pub collection: String,
}

/// Settings for the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub listen_addr: SocketAddr,
}

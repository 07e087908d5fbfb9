//! Babilado core library
//!
//! One message in, one normalized reply out. The relay validates an
//! inbound chat request, forwards it to a generative-AI backend through
//! a provider adapter, and extracts the reply text with a fallback
//! sentinel when the payload carries none. A document store client backs
//! the map data listing.

pub mod config;
pub mod error;
pub mod http;
pub mod protocol;
pub mod providers;
pub mod store;

pub use config::{
    Config, ConfigError, ProviderConfig, ProviderKind, SecretString, ServerConfig, StoreConfig,
};
pub use error::{ChatError, ChatResult};
pub use http::HttpClient;
pub use protocol::{validate_chat_request, ChatReply, ChatRequest};
pub use providers::{create_provider, GeminiProvider, Provider, FALLBACK_REPLY};
pub use store::{DocumentStore, StoreError};

/// Get the version of the babilado-core library
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

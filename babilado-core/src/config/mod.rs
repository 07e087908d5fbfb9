//! Configuration for the chat relay
//!
//! All settings come from environment variables, read once at startup.
//! A missing value is tolerated at load time and reported by `resolve`
//! when a call first needs it; a malformed value fails loading.

mod env;
mod error;
mod schema;
mod secrets;

pub use error::{ConfigError, ConfigResult};
pub use schema::{
    Config, ProviderConfig, ProviderKind, ResolvedProvider, ServerConfig, StoreConfig,
};
pub use secrets::SecretString;

/// Load configuration from the process environment.
pub fn from_env() -> ConfigResult<Config> {
    env::load(|name| std::env::var(name).ok())
}

/// Load configuration from an arbitrary lookup.
///
/// Tests inject a map here instead of mutating process-global state.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Config> {
    env::load(lookup)
}

//! Error types for the chat relay
//!
//! Reply extraction failures are deliberately absent here: an unreadable
//! success payload yields the fallback reply, not an error.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while handling a chat request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The inbound request used a method other than POST.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The inbound request carried no usable message.
    #[error("Message is required")]
    MissingMessage,

    /// A setting the call needed was missing or unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The provider answered with a non-success status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: String },

    /// The provider could not be reached or answered unreadably.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for chat operations
pub type ChatResult<T> = Result<T, ChatError>;

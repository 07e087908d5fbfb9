//! Wire protocol types and validation

pub mod types;
pub mod validate;

pub use types::{ChatReply, ChatRequest};
pub use validate::validate_chat_request;

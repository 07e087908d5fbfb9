//! Provider adapters for generative-AI backends

pub mod adapter;
pub mod gemini;

pub use adapter::{create_provider, Provider};
pub use gemini::GeminiProvider;

/// Reply returned when a success payload carries no extractable text.
///
/// The sentinel is a normal result, not an error: callers always get a
/// reply string and never need a null check.
pub const FALLBACK_REPLY: &str = "No response from AI.";

//! HTTP transport for provider calls
//!
//! One pooled client, one fire-once call per request: no retry, no
//! streaming, no per-call timeout tuning.

pub mod client;

pub use client::HttpClient;

//! bhujal-client
//!
//! Terminal chat surface: bounded session bookkeeping, transcript
//! rendering, and the HTTP client for the gateway.

pub mod api;
pub mod session;
pub mod transcript;

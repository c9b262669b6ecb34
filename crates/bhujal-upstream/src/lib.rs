//! bhujal-upstream
//!
//! HTTP client for the external question-answering and document-ingestion
//! service. The gateway's only suspension points are the calls made here;
//! every call carries a hard timeout and is attempted exactly once.

pub mod client;
pub mod error;

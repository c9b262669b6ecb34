//! bhujal-core
//!
//! Pure domain types and the greeting classifier.
//! No network or filesystem dependency; this is the shared vocabulary of
//! the Bhujal system.

pub mod greeting;
pub mod models;

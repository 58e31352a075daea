//! Banzuke Fetcher Library
//!
//! A Rust library for downloading sumo tournament results and ordering
//! wrestlers by rank. Results pages are fetched politely through a shared rate
//! limiter, checked against the day they were requested for, and cached on
//! disk once accepted.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

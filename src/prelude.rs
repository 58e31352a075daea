//! Prelude module for the Banzuke Fetcher library
//!
//! Re-exports the items most integrations need, so that
//! `use banzuke_fetcher::prelude::*;` is enough for typical usage.
//!
//! # Usage
//!
//! ```rust,no_run
//! use banzuke_fetcher::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::default();
//!     let client = ResultsClient::new(&config)?;
//!     let base_url = client.base_url().clone();
//!     let cache = CacheManager::new(CacheConfig::default()).await?;
//!     let limiter = Arc::new(RateLimiter::new(config.min_request_interval));
//!
//!     let coordinator = Coordinator::new(Fetcher::new(
//!         client,
//!         base_url,
//!         cache,
//!         limiter,
//!         ContentValidator::new(),
//!     ));
//!     let key = SourceKey::new(Division::Juryo, 1).expect("day 1 is a tournament day");
//!     let pages = coordinator.acquire(&[key], ExecutionMode::Sequential, false).await?;
//!     println!("{}", AcquisitionSummary::from_acquisitions(&pages));
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

pub use crate::app::{
    // Acquisition pipeline
    Acquisition,
    AcquisitionSummary,
    CacheConfig,
    CacheManager,
    ClientConfig,
    ContentValidator,
    Coordinator,
    ExecutionMode,
    FetchOutcome,
    Fetcher,
    Origin,
    PageSource,
    RateLimiter,
    ResultsClient,
    ValidationReport,

    // Domain types
    BanzukeSlot,
    BoutRow,
    Division,
    NormalizedRank,
    RikishiEntry,
    RikishiRecord,
    Side,
    SourceKey,

    // Ranking functions
    compare,
    entries_of,
    normalize,
    parse_bouts,
    parse_record,
    sort_banzuke,
};

pub use crate::config::AppConfig;

// Standard library re-exports that are commonly needed
pub use std::sync::Arc;

pub use tokio;

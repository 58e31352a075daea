//! Acquisition orchestration across divisions and days
//!
//! The coordinator drives the [`Fetcher`] over a list of [`SourceKey`]s,
//! either all at once or one at a time, and turns rejected pages into empty
//! results. Transport and cache-write failures abort the whole acquisition.
//!
//! - [`stats`] - per-run summary counts
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use banzuke_fetcher::app::{
//!     CacheManager, ClientConfig, ContentValidator, Coordinator, Division, ExecutionMode,
//!     Fetcher, RateLimiter, ResultsClient,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let client = ResultsClient::new(&config)?;
//! let base_url = client.base_url().clone();
//! let cache = CacheManager::new(Default::default()).await?;
//! let limiter = Arc::new(RateLimiter::new(config.min_request_interval));
//!
//! let fetcher = Fetcher::new(client, base_url, cache, limiter, ContentValidator::new());
//! let coordinator = Coordinator::new(fetcher);
//!
//! let keys = Coordinator::<ResultsClient>::keys_for(&[Division::Makuuchi], &[1, 2, 3]);
//! let results = coordinator.acquire(&keys, ExecutionMode::Parallel, false).await?;
//! println!("{} pages available", results.iter().filter(|a| a.outcome.is_some()).count());
//! # Ok(())
//! # }
//! ```

pub mod stats;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::app::client::PageSource;
use crate::app::fetcher::Fetcher;
use crate::app::models::{Division, FetchOutcome, SourceKey};
use crate::errors::Result;

pub use stats::AcquisitionSummary;

/// How a batch of keys is fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Issue every fetch at once; the rate limiter spaces the downloads
    #[default]
    Parallel,
    /// One fetch at a time, in input order, stopping at the first error
    Sequential,
}

/// Result for one key: `None` when the page was rejected
#[derive(Debug, Clone)]
pub struct Acquisition {
    pub key: SourceKey,
    pub outcome: Option<FetchOutcome>,
}

/// Drives fetches for many keys
#[derive(Debug)]
pub struct Coordinator<S> {
    fetcher: Fetcher<S>,
}

impl<S: PageSource> Coordinator<S> {
    pub fn new(fetcher: Fetcher<S>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Fetcher<S> {
        &self.fetcher
    }

    /// Every valid (division, day) pair, divisions outermost
    ///
    /// Days outside the tournament are skipped with a warning.
    pub fn keys_for(divisions: &[Division], days: &[u8]) -> Vec<SourceKey> {
        let mut keys = Vec::with_capacity(divisions.len() * days.len());
        for &division in divisions {
            for &day in days {
                match SourceKey::new(division, day) {
                    Some(key) => keys.push(key),
                    None => warn!("Skipping day {} for {}: not a tournament day", day, division),
                }
            }
        }
        keys
    }

    /// Fetch every key and return results in input order
    ///
    /// # Errors
    ///
    /// Returns the first transport or cache-write error encountered. In
    /// parallel mode every fetch has already run by then; in sequential mode
    /// later keys are never attempted.
    pub async fn acquire(
        &self,
        keys: &[SourceKey],
        mode: ExecutionMode,
        force_refresh: bool,
    ) -> Result<Vec<Acquisition>> {
        info!("Acquiring {} pages ({:?})", keys.len(), mode);

        let acquisitions = match mode {
            ExecutionMode::Parallel => {
                let results =
                    join_all(keys.iter().map(|&key| self.fetcher.fetch(key, force_refresh))).await;
                results
                    .into_iter()
                    .map(|result| result.map(Self::settle))
                    .collect::<Result<Vec<_>>>()?
            }
            ExecutionMode::Sequential => {
                let mut acquisitions = Vec::with_capacity(keys.len());
                for &key in keys {
                    let outcome = self.fetcher.fetch(key, force_refresh).await?;
                    acquisitions.push(Self::settle(outcome));
                }
                acquisitions
            }
        };

        let summary = AcquisitionSummary::from_acquisitions(&acquisitions);
        info!("Acquisition finished: {}", summary);

        Ok(acquisitions)
    }

    /// Turn a fetch outcome into an acquisition, dropping rejected pages
    fn settle(outcome: FetchOutcome) -> Acquisition {
        let key = outcome.key;
        if outcome.accepted {
            debug!("Accepted {} ({:?})", key, outcome.origin);
            return Acquisition {
                key,
                outcome: Some(outcome),
            };
        }

        match &outcome.validation {
            Some(report) if report.is_missing_day() => {
                warn!("Rejected {}: page has no day metadata", key);
            }
            Some(report) => {
                warn!(
                    "Rejected {}: page is for day {} instead",
                    key,
                    report
                        .actual_day
                        .map_or_else(|| "?".to_string(), |day| day.to_string())
                );
            }
            None => warn!("Rejected {}", key),
        }
        for warning in outcome.warnings() {
            warn!("  {}", warning);
        }

        Acquisition { key, outcome: None }
    }
}

//! Core application logic for the banzuke fetcher
//!
//! This module contains the acquisition pipeline (HTTP client, page cache,
//! rate limiter, validator, fetcher and coordinator) and the rank ordering
//! engine (rank normalization, banzuke comparison, results parsing).
//!
//! # Examples
//!
//! ```rust
//! use banzuke_fetcher::app::{normalize, parse_bouts, entries_of, sort_banzuke, RikishiEntry};
//!
//! let page = r#"<table>
//!   <tr><td><span class="rank">前頭一</span><span class="name">若隆景</span></td>
//!       <td>寄り切り</td>
//!       <td><span class="rank">関脇</span><span class="name">大栄翔</span></td></tr>
//! </table>"#;
//!
//! let bouts = parse_bouts(page).unwrap_or_default();
//! let mut roster = entries_of(&bouts);
//! sort_banzuke(&mut roster, RikishiEntry::slot);
//!
//! assert_eq!(roster[0].name, "大栄翔");
//! assert!(matches!(normalize("前頭十八"), banzuke_fetcher::app::NormalizedRank::Ranked { .. }));
//! ```

pub mod banzuke;
pub mod cache;
pub mod client;
pub mod coordinator;
pub mod fetcher;
pub mod hash;
pub mod models;
pub mod patterns;
pub mod results;
pub mod validation;

// Re-export main public API
pub use banzuke::{
    compare, normalize, parse_record, sort_banzuke, split_side, BanzukeSlot, DivisionRank,
    NamedTier, NormalizedRank, RankTier, RikishiRecord,
};
pub use cache::{CacheConfig, CacheKey, CacheManager, CacheStats};
pub use client::{ClientConfig, PageSource, RateLimiter, ResultsClient};
pub use coordinator::{Acquisition, AcquisitionSummary, Coordinator, ExecutionMode};
pub use fetcher::Fetcher;
pub use hash::Md5Hash;
pub use models::{Division, FetchOutcome, Origin, Side, SourceKey};
pub use results::{entries_of, parse_bouts, BoutRow, RikishiEntry};
pub use validation::{ContentValidator, ValidationReport};

//! Page cache: a key→document store with atomic replacement
//!
//! # Key Features
//!
//! - **OS-specific cache directory**: defaults to the user's cache directory
//! - **URL-derived keys**: MD5 of the page URL, rendered as lowercase hex
//! - **Atomic writes**: temp-file + rename, so readers never see partial entries
//! - **Miss-tolerant reads**: read failures are reported as misses
//!
//! # Module Organization
//!
//! - [`config`] - Configuration types and defaults
//! - [`path`] - Key derivation and file layout
//! - [`stats`] - Entry counts and disk usage
//! - [`manager`] - The store itself
//!
//! # Examples
//!
//! ```rust,no_run
//! use banzuke_fetcher::app::cache::{CacheConfig, CacheManager};
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = CacheManager::new(CacheConfig::default()).await?;
//! let url = Url::parse("https://www.sumo.or.jp/ResultData/torikumi/1/1/")?;
//! let key = CacheManager::key_for_url(&url);
//!
//! if cache.get(&key).await.is_none() {
//!     cache.put(&key, "<html>...</html>").await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod path;
pub mod stats;

// Re-export main public API
pub use config::CacheConfig;
pub use manager::CacheManager;
pub use path::{CacheKey, PathGenerator};
pub use stats::CacheStats;

//! Cache-aware, rate-limited fetch of a single results page
//!
//! Order of operations for one [`SourceKey`]:
//!
//! 1. Unless forced, return the cached page (trusted, it was validated when stored)
//! 2. Wait for the shared [`RateLimiter`]
//! 3. Download the page
//! 4. Validate its day against the key
//! 5. Cache it only if it was accepted

use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use crate::app::cache::CacheManager;
use crate::app::client::{PageSource, RateLimiter};
use crate::app::models::{FetchOutcome, Origin, SourceKey};
use crate::app::validation::ContentValidator;
use crate::errors::Result;

/// Fetches results pages through the cache and the shared rate limiter
#[derive(Debug)]
pub struct Fetcher<S> {
    source: S,
    base_url: Url,
    cache: CacheManager,
    limiter: Arc<RateLimiter>,
    validator: ContentValidator,
}

impl<S: PageSource> Fetcher<S> {
    pub fn new(
        source: S,
        base_url: Url,
        cache: CacheManager,
        limiter: Arc<RateLimiter>,
        validator: ContentValidator,
    ) -> Self {
        Self {
            source,
            base_url,
            cache,
            limiter,
            validator,
        }
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Fetch the page for `key`
    ///
    /// # Errors
    ///
    /// Returns `AppError::Download` when the network request fails and
    /// `AppError::Cache` when an accepted page cannot be stored. A page that
    /// fails validation is not an error: it comes back with `accepted: false`.
    pub async fn fetch(&self, key: SourceKey, force_refresh: bool) -> Result<FetchOutcome> {
        let url = key.url(&self.base_url)?;
        let cache_key = CacheManager::key_for_url(&url);

        if !force_refresh {
            if let Some(content) = self.cache.get(&cache_key).await {
                debug!("Using cached page for {}", key);
                return Ok(FetchOutcome {
                    key,
                    content,
                    origin: Origin::Cache,
                    accepted: true,
                    validation: None,
                });
            }
        }

        self.limiter.acquire().await;
        info!("Downloading {} from {}", key, url);
        let content = self.source.get_page(&url).await?;

        let report = self.validator.validate(&content, key.day());
        if report.is_valid {
            self.cache.put(&cache_key, &content).await?;
        } else {
            debug!("Not caching rejected page for {}", key);
        }

        Ok(FetchOutcome {
            key,
            content,
            origin: Origin::Network,
            accepted: report.is_valid,
            validation: Some(report),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use tempfile::TempDir;

    use crate::app::cache::CacheConfig;
    use crate::app::models::Division;
    use crate::errors::{AppError, DownloadError, DownloadResult};

    /// In-memory page source that counts requests
    #[derive(Default)]
    struct FakeSource {
        pages: Mutex<HashMap<String, String>>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn serve(&self, url: &Url, body: &str) {
            self.pages
                .lock()
                .unwrap()
                .insert(url.to_string(), body.to_string());
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PageSource for &FakeSource {
        async fn get_page(&self, url: &Url) -> DownloadResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.pages
                .lock()
                .unwrap()
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| DownloadError::ServerError {
                    status: 404,
                    url: url.to_string(),
                })
        }
    }

    fn day_page(heading: &str) -> String {
        format!("<html><body><h2>{}</h2><table></table></body></html>", heading)
    }

    async fn fetcher<'a>(source: &'a FakeSource, root: &TempDir) -> Fetcher<&'a FakeSource> {
        let cache = CacheManager::new(CacheConfig::with_cache_root(root.path().to_path_buf()))
            .await
            .unwrap();
        Fetcher::new(
            source,
            Url::parse("https://results.test/").unwrap(),
            cache,
            Arc::new(RateLimiter::new(Duration::from_millis(1))),
            ContentValidator::new(),
        )
    }

    fn key(day: u8) -> SourceKey {
        SourceKey::new(Division::Makuuchi, day).unwrap()
    }

    fn url_of(key: SourceKey) -> Url {
        key.url(&Url::parse("https://results.test/").unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default();
        source.serve(&url_of(key(3)), &day_page("三日目"));
        let fetcher = fetcher(&source, &temp_dir).await;

        let first = fetcher.fetch(key(3), false).await.unwrap();
        let second = fetcher.fetch(key(3), false).await.unwrap();

        assert_eq!(first.origin, Origin::Network);
        assert!(first.accepted);
        assert_eq!(second.origin, Origin::Cache);
        assert!(second.accepted);
        assert!(second.validation.is_none());
        assert_eq!(first.content, second.content);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_force_refresh_bypasses_cache() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default();
        source.serve(&url_of(key(4)), &day_page("四日目"));
        let fetcher = fetcher(&source, &temp_dir).await;

        fetcher.fetch(key(4), false).await.unwrap();
        source.serve(&url_of(key(4)), &day_page("四日目 更新"));
        let refreshed = fetcher.fetch(key(4), true).await.unwrap();

        assert_eq!(refreshed.origin, Origin::Network);
        assert!(refreshed.content.contains("更新"));
        assert_eq!(source.calls(), 2);

        // The refreshed page replaced the cached one
        let cached = fetcher.fetch(key(4), false).await.unwrap();
        assert_eq!(cached.origin, Origin::Cache);
        assert!(cached.content.contains("更新"));
    }

    #[tokio::test]
    async fn test_rejected_page_is_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default();
        // Site still shows day 5 when day 6 is requested
        source.serve(&url_of(key(6)), &day_page("五日目"));
        let fetcher = fetcher(&source, &temp_dir).await;

        let outcome = fetcher.fetch(key(6), false).await.unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.origin, Origin::Network);
        assert_eq!(outcome.validation.as_ref().unwrap().actual_day, Some(5));
        assert!(!outcome.warnings().is_empty());

        let cache_key = CacheManager::key_for_url(&url_of(key(6)));
        assert_eq!(fetcher.cache().get(&cache_key).await, None);

        // Nothing cached, so the next attempt goes back to the network
        fetcher.fetch(key(6), false).await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default();
        let fetcher = fetcher(&source, &temp_dir).await;

        let result = fetcher.fetch(key(7), false).await;
        assert!(matches!(
            result,
            Err(AppError::Download(DownloadError::ServerError { status: 404, .. }))
        ));
    }

    #[tokio::test]
    async fn test_cache_write_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default();
        source.serve(&url_of(key(8)), &day_page("八日目"));
        let fetcher = fetcher(&source, &temp_dir).await;

        let cache_key = CacheManager::key_for_url(&url_of(key(8)));
        std::fs::create_dir_all(fetcher.cache().path_for(&cache_key).join("blocker")).unwrap();

        let result = fetcher.fetch(key(8), false).await;
        assert!(matches!(result, Err(AppError::Cache(_))));
    }
}

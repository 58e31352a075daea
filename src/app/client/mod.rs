//! HTTP client for the results site
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `http`: the single-GET page download
//! - `rate_limit`: the shared minimum-interval limiter
//!
//! Downloads are reached through the [`PageSource`] trait so the fetch layer
//! can be driven by something other than the network in tests.

use std::future::Future;

use url::Url;

use crate::errors::DownloadResult;

pub mod config;
pub mod http;
pub mod rate_limit;

pub use config::ClientConfig;
pub use rate_limit::RateLimiter;

use http::HttpHandler;

/// Something that can return the raw document behind a URL
pub trait PageSource {
    /// Download the document at `url`
    ///
    /// Implementations must report transport failures and non-success
    /// responses as errors rather than returning an empty document.
    fn get_page(&self, url: &Url) -> impl Future<Output = DownloadResult<String>> + Send;
}

/// HTTP client for the results site
#[derive(Debug, Clone)]
pub struct ResultsClient {
    http_handler: HttpHandler,
    base_url: Url,
}

impl ResultsClient {
    /// Creates a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if the base URL is invalid or the HTTP client
    /// cannot be built
    pub fn new(config: &ClientConfig) -> DownloadResult<Self> {
        let base_url = config.base_url()?;
        let http_handler = HttpHandler::new(config.build_http_client()?);

        tracing::debug!("Created results client for {}", base_url);

        Ok(Self {
            http_handler,
            base_url,
        })
    }

    /// Get the base URL page paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl PageSource for ResultsClient {
    async fn get_page(&self, url: &Url) -> DownloadResult<String> {
        self.http_handler.get_page(url).await
    }
}

//! Core HTTP operations
//!
//! A single GET per page. Non-success statuses and transport failures are
//! reported to the caller as `DownloadError`; there is no automatic retry.

use reqwest::Client;
use url::Url;

use crate::errors::{DownloadError, DownloadResult};

/// HTTP operations handler
#[derive(Debug, Clone)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the HTML content of a web page
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::Http` on transport failure and
    /// `DownloadError::ServerError` for any non-2xx status
    pub async fn get_page(&self, url: &Url) -> DownloadResult<String> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Server returned HTTP {} for {}", status.as_u16(), url);
            return Err(DownloadError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Fetched page: {} ({} bytes)", url, text.len());
        Ok(text)
    }
}

//! Error types for Banzuke Fetcher
//!
//! Errors are grouped by the component that raises them. Validation rejections
//! and unparsable rank/record text are deliberately absent: those are ordinary
//! outcomes returned as values, not failures.

use std::path::PathBuf;
use thiserror::Error;

/// Network transport errors raised while downloading a results page
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request error (connection refused, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error: HTTP {status} for {url}")]
    ServerError { status: u16, url: String },

    /// Invalid URL provided or derived
    #[error("Invalid URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },
}

/// Cache store errors
///
/// Only raised by writes and directory setup; read failures are reported as
/// cache misses.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache directory not found or could not be created
    #[error("Cache directory not accessible: {path}")]
    DirectoryNotAccessible { path: PathBuf },

    /// Writing or replacing a cache entry failed
    #[error("Failed to write cache entry {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Background write task was cancelled or panicked
    #[error("Cache write task failed: {reason}")]
    TaskFailed { reason: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Download error
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Cache error
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if the error is transient, i.e. retrying later may succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Download(DownloadError::Http(_)) => true,
            AppError::Download(DownloadError::ServerError { status, .. }) => {
                *status == 429 || *status >= 500
            }
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Download(_) => "download",
            AppError::Cache(_) => "cache",
            AppError::Config(_) => "config",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Download result type alias
pub type DownloadResult<T> = std::result::Result<T, DownloadError>;

/// Cache result type alias
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_recoverability() {
        let overloaded = AppError::Download(DownloadError::ServerError {
            status: 503,
            url: "https://example.com".to_string(),
        });
        let missing = AppError::Download(DownloadError::ServerError {
            status: 404,
            url: "https://example.com".to_string(),
        });

        assert!(overloaded.is_recoverable());
        assert!(!missing.is_recoverable());
        assert_eq!(missing.category(), "download");
    }

    #[test]
    fn test_cache_error_is_not_recoverable() {
        let error = AppError::Cache(CacheError::WriteFailed {
            path: PathBuf::from("/tmp/x.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });

        assert!(!error.is_recoverable());
        assert_eq!(error.category(), "cache");
        assert!(error.to_string().contains("/tmp/x.html"));
    }

    #[test]
    fn test_generic_error_category() {
        let error = AppError::generic("no pages to print");
        assert_eq!(error.category(), "generic");
        assert!(!error.is_recoverable());
        assert_eq!(error.to_string(), "Application error: no pages to print");
    }
}

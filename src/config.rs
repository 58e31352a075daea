//! Configuration management for the banzuke fetcher
//!
//! Configuration is read from a single TOML file. Every section and key is
//! optional; anything missing falls back to the built-in defaults.
//!
//! ```toml
//! [cache]
//! cache_root = "/var/cache/banzuke"
//!
//! [client]
//! base_url = "https://www.sumo.or.jp"
//! request_timeout = "30s"
//! min_request_interval = "1s 500ms"
//!
//! [tournament]
//! basho_start = "2025-05-11"
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::{CacheConfig, ClientConfig, ContentValidator};
use crate::constants::files;
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page cache settings
    pub cache: CacheConfig,
    /// HTTP client and rate limiting settings
    pub client: ClientConfig,
    /// Tournament being fetched
    pub tournament: TournamentConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Tournament settings used for date validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Date of the first day; enables date checks when set
    pub basho_start: Option<NaiveDate>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when no command-line flag or `RUST_LOG` is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the first file found in
    /// the standard locations is used, and defaults apply if there is none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the explicit file is missing, or if the
    /// selected file cannot be read, parsed or validated
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        let config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Standard config file locations, in search order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(files::LOCAL_CONFIG_FILE)];
        if let Some(path) = Self::default_config_path() {
            paths.push(path);
        }
        paths
    }

    /// Per-user config file path, if the platform has a config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(files::APP_DIR_NAME).join(files::USER_CONFIG_FILE))
    }

    fn find_config_file() -> Option<PathBuf> {
        let found = Self::search_paths().into_iter().find(|path| path.is_file());
        if let Some(path) = &found {
            debug!("Found config file: {}", path.display());
        }
        found
    }

    /// Load configuration from a TOML file
    pub async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })?;

        let config: AppConfig = toml::from_str(&content)?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> ConfigResult<()> {
        if let Err(e) = self.client.base_url() {
            return Err(ConfigError::InvalidValue {
                field: "client.base_url".to_string(),
                value: self.client.base_url.clone(),
                reason: e.to_string(),
            });
        }

        if self.client.pool_max_per_host == 0 {
            return Err(ConfigError::InvalidValue {
                field: "client.pool_max_per_host".to_string(),
                value: "0".to_string(),
                reason: "At least one connection per host is required".to_string(),
            });
        }

        Ok(())
    }

    /// Cache settings with an optional command-line override of the root
    pub fn cache_config(&self, cache_dir: Option<PathBuf>) -> CacheConfig {
        match cache_dir {
            Some(root) => CacheConfig::with_cache_root(root),
            None => self.cache.clone(),
        }
    }

    /// Content validator for the configured tournament
    pub fn validator(&self) -> ContentValidator {
        ContentValidator::new().with_basho_start(self.tournament.basho_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    use crate::constants::{limits, site};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.client.base_url, site::BASE_URL);
        assert_eq!(
            config.client.min_request_interval,
            limits::DEFAULT_MIN_REQUEST_INTERVAL
        );
        assert_eq!(config.logging.level, "info");
        assert!(config.cache.cache_root.is_none());
        assert!(config.tournament.basho_start.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_search_paths_start_with_local_file() {
        let paths = AppConfig::search_paths();
        assert_eq!(paths[0], PathBuf::from(files::LOCAL_CONFIG_FILE));
    }

    #[tokio::test]
    async fn test_config_loading_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let result = AppConfig::load(Some(config_path)).await;
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_config_loading_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let test_config = r#"
[cache]
cache_root = "/tmp/banzuke-pages"

[client]
min_request_interval = "2s 500ms"
request_timeout = "1m"

[tournament]
basho_start = "2025-05-11"

[logging]
level = "debug"
"#;
        tokio::fs::write(&config_path, test_config).await.unwrap();

        let config = AppConfig::load(Some(config_path)).await.unwrap();

        assert_eq!(
            config.cache.cache_root,
            Some(PathBuf::from("/tmp/banzuke-pages"))
        );
        assert_eq!(
            config.client.min_request_interval,
            Duration::from_millis(2500)
        );
        assert_eq!(config.client.request_timeout, Duration::from_secs(60));
        assert_eq!(
            config.tournament.basho_start,
            NaiveDate::from_ymd_opt(2025, 5, 11)
        );
        assert_eq!(config.logging.level, "debug");

        // Unspecified values keep their defaults
        assert_eq!(config.client.base_url, site::BASE_URL);
        assert_eq!(
            config.validator().expected_date(15),
            NaiveDate::from_ymd_opt(2025, 5, 25)
        );
    }

    #[tokio::test]
    async fn test_malformed_file_is_invalid_format() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        tokio::fs::write(&config_path, "[client\nbase_url = ")
            .await
            .unwrap();

        let result = AppConfig::load(Some(config_path)).await;
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad_url.toml");
        tokio::fs::write(&config_path, "[client]\nbase_url = \"not a url\"\n")
            .await
            .unwrap();

        let result = AppConfig::load(Some(config_path)).await;
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "client.base_url"
        ));
    }

    #[test]
    fn test_cache_dir_override() {
        let config = AppConfig::default();
        let overridden = config.cache_config(Some(PathBuf::from("/tmp/elsewhere")));
        assert_eq!(overridden.cache_root, Some(PathBuf::from("/tmp/elsewhere")));
        assert!(config.cache_config(None).cache_root.is_none());
    }
}

//! Cache configuration types and defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::files;

/// Configuration for the page cache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Root directory for cached pages (OS-specific if None)
    pub cache_root: Option<PathBuf>,
}

impl CacheConfig {
    /// Create a new cache configuration with custom cache root
    pub fn with_cache_root(cache_root: PathBuf) -> Self {
        Self {
            cache_root: Some(cache_root),
        }
    }

    /// Default user-scoped cache directory
    ///
    /// - Linux: ~/.cache/banzuke-fetcher/pages
    /// - macOS: ~/Library/Caches/banzuke-fetcher/pages
    /// - Windows: %LOCALAPPDATA%/banzuke-fetcher/pages
    pub fn default_cache_root() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(files::APP_DIR_NAME).join(files::PAGES_DIR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.cache_root, None);
    }

    #[test]
    fn test_custom_root() {
        let root = PathBuf::from("/tmp/banzuke");
        let config = CacheConfig::with_cache_root(root.clone());
        assert_eq!(config.cache_root, Some(root));
    }
}

//! Key→document store with atomic replacement
//!
//! Reads never fail: a missing or unreadable entry is a cache miss. Writes go
//! through a temporary file in the cache root that is persisted over the final
//! path, so a reader sees either the previous document or the new one in full.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tokio::fs;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::constants::files;
use crate::errors::{CacheError, CacheResult};

use super::config::CacheConfig;
use super::path::{CacheKey, PathGenerator};
use super::stats::{CacheStats, DirectoryScanner};

/// Page cache rooted at a single directory
#[derive(Debug, Clone)]
pub struct CacheManager {
    cache_root: PathBuf,
}

impl CacheManager {
    /// Create a new cache manager, creating the root directory if needed
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if no cache directory can be determined or created
    pub async fn new(config: CacheConfig) -> CacheResult<Self> {
        let cache_root = match config.cache_root {
            Some(path) => path,
            None => CacheConfig::default_cache_root().ok_or_else(|| {
                CacheError::DirectoryNotAccessible {
                    path: PathBuf::from("system cache directory"),
                }
            })?,
        };

        Self::ensure_directory_exists(&cache_root).await?;

        info!(
            "Initialized cache manager with root: {}",
            cache_root.display()
        );

        Ok(Self { cache_root })
    }

    /// Get the cache root directory
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Derive the cache key for a page URL
    pub fn key_for_url(url: &Url) -> CacheKey {
        PathGenerator::key_for_url(url)
    }

    /// On-disk location of an entry
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        PathGenerator::get_file_path(&self.cache_root, key)
    }

    /// Ensure a directory exists, creating it if necessary
    async fn ensure_directory_exists(path: &Path) -> CacheResult<()> {
        if !path.exists() {
            fs::create_dir_all(path).await.map_err(|e| {
                error!("Failed to create cache directory: {}", e);
                CacheError::DirectoryNotAccessible {
                    path: path.to_path_buf(),
                }
            })?;
            debug!("Created cache directory: {}", path.display());
        }
        Ok(())
    }

    /// Look up a cached document
    ///
    /// Returns `None` when the entry is absent. Any other read failure is
    /// logged and also reported as absent.
    pub async fn get(&self, key: &CacheKey) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(content) => {
                debug!("Cache hit: {}", path.display());
                Some(content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Cache miss: {}", path.display());
                None
            }
            Err(e) => {
                warn!(
                    "Failed to read cache entry {}, treating as miss: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    /// Store a document, fully replacing any previous entry for `key`
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the directory cannot be created or the entry
    /// cannot be written and persisted.
    pub async fn put(&self, key: &CacheKey, content: &str) -> CacheResult<()> {
        Self::ensure_directory_exists(&self.cache_root).await?;

        let root = self.cache_root.clone();
        let final_path = self.path_for(key);
        let bytes = content.as_bytes().to_vec();

        let task_path = final_path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&root, &task_path, &bytes))
            .await
            .map_err(|e| CacheError::TaskFailed {
                reason: e.to_string(),
            })??;

        info!("Cached page: {}", final_path.display());
        Ok(())
    }

    /// When the entry for `key` was last written, from the file's mtime
    pub async fn last_written(&self, key: &CacheKey) -> Option<SystemTime> {
        let metadata = fs::metadata(self.path_for(key)).await.ok()?;
        metadata.modified().ok()
    }

    /// Get cache statistics
    pub async fn get_cache_stats(&self) -> CacheStats {
        DirectoryScanner::scan_cache_directory(&self.cache_root).await
    }
}

/// Write `bytes` to a temp file inside `dir` and rename it over `final_path`
///
/// The temp file is removed when its handle drops on any early return.
fn write_atomic(dir: &Path, final_path: &Path, bytes: &[u8]) -> CacheResult<()> {
    let write_failed = |source: std::io::Error| CacheError::WriteFailed {
        path: final_path.to_path_buf(),
        source,
    };

    let mut temp = tempfile::Builder::new()
        .prefix(files::TEMP_FILE_PREFIX)
        .tempfile_in(dir)
        .map_err(write_failed)?;

    temp.write_all(bytes).map_err(write_failed)?;
    temp.flush().map_err(write_failed)?;
    temp.as_file().sync_all().map_err(write_failed)?;

    temp.persist(final_path)
        .map_err(|e| write_failed(e.error))?;

    Ok(())
}

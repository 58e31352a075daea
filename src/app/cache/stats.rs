//! Cache statistics and disk usage scanning

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;

use super::path::PathGenerator;

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Cache root directory
    pub cache_root: PathBuf,
    /// Number of cached pages on disk
    pub entry_count: usize,
    /// Total size of cached pages in bytes
    pub total_bytes: u64,
    /// Most recent write to any entry
    pub last_written: Option<SystemTime>,
}

impl CacheStats {
    /// Create empty statistics for a cache root
    pub fn new(cache_root: PathBuf) -> Self {
        Self {
            cache_root,
            entry_count: 0,
            total_bytes: 0,
            last_written: None,
        }
    }

    /// Format cache size in human-readable format
    pub fn format_cache_size(&self) -> String {
        format_bytes(self.total_bytes)
    }
}

/// Directory scanner for cache statistics
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Scan the cache root on a blocking thread
    pub async fn scan_cache_directory(cache_root: &Path) -> CacheStats {
        let cache_root = cache_root.to_path_buf();
        let fallback = CacheStats::new(cache_root.clone());

        tokio::task::spawn_blocking(move || Self::scan_directory_sync(&cache_root))
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to scan cache directory: {}", e);
                fallback
            })
    }

    /// Count cache entries in `dir` (entries are never nested)
    pub fn scan_directory_sync(dir: &Path) -> CacheStats {
        let mut stats = CacheStats::new(dir.to_path_buf());

        let Ok(entries) = std::fs::read_dir(dir) else {
            return stats;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if PathGenerator::key_from_path(&path).is_none() {
                continue;
            }
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }

            stats.entry_count += 1;
            stats.total_bytes += metadata.len();
            if let Ok(modified) = metadata.modified() {
                stats.last_written = stats.last_written.max(Some(modified));
            }
        }

        stats
    }
}

/// Format bytes in human-readable format
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: u64 = 1024;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD as f64 && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD as f64;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

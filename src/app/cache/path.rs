//! Cache key derivation and file layout
//!
//! Keys are derived from the page URL alone, never from the division or day,
//! so the on-disk layout stays stable for as long as the URL scheme does.

use std::path::{Path, PathBuf};

use url::Url;

use crate::app::hash::Md5Hash;
use crate::constants::files;

/// Opaque cache key: the MD5 digest of a page URL
pub type CacheKey = Md5Hash;

/// Path generation utility for cache entries
pub struct PathGenerator;

impl PathGenerator {
    /// Derive the cache key for a URL
    pub fn key_for_url(url: &Url) -> CacheKey {
        Md5Hash::compute(url.as_str())
    }

    /// Location of the entry for `key`: `{cache_root}/{hex}.html`
    pub fn get_file_path(cache_root: &Path, key: &CacheKey) -> PathBuf {
        cache_root.join(format!("{}.{}", key.to_hex(), files::CACHE_FILE_EXTENSION))
    }

    /// Recover the key from an entry path, ignoring temp files and foreign files
    pub fn key_from_path(path: &Path) -> Option<CacheKey> {
        if path.extension().and_then(|e| e.to_str()) != Some(files::CACHE_FILE_EXTENSION) {
            return None;
        }
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| Md5Hash::from_hex(stem).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic_and_distinct() {
        let day1 = Url::parse("https://www.sumo.or.jp/ResultData/torikumi/1/1/").unwrap();
        let day2 = Url::parse("https://www.sumo.or.jp/ResultData/torikumi/1/2/").unwrap();

        assert_eq!(
            PathGenerator::key_for_url(&day1),
            PathGenerator::key_for_url(&day1)
        );
        assert_ne!(
            PathGenerator::key_for_url(&day1),
            PathGenerator::key_for_url(&day2)
        );
    }

    #[test]
    fn test_file_path_is_filesystem_safe() {
        let url = Url::parse("https://www.sumo.or.jp/ResultData/torikumi/3/10/").unwrap();
        let key = PathGenerator::key_for_url(&url);
        let path = PathGenerator::get_file_path(Path::new("/cache"), &key);

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with(".html"));
        assert!(name
            .trim_end_matches(".html")
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(path.parent(), Some(Path::new("/cache")));
    }

    #[test]
    fn test_key_from_path() {
        let url = Url::parse("https://www.sumo.or.jp/ResultData/torikumi/1/1/").unwrap();
        let key = PathGenerator::key_for_url(&url);
        let path = PathGenerator::get_file_path(Path::new("/cache"), &key);

        assert_eq!(PathGenerator::key_from_path(&path), Some(key));
        assert_eq!(
            PathGenerator::key_from_path(Path::new("/cache/.pending-abc123")),
            None
        );
        assert_eq!(PathGenerator::key_from_path(Path::new("/cache/notes.html")), None);
    }
}

//! Application constants for Banzuke Fetcher
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain.

use std::time::Duration;

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "Banzuke-Fetcher/0.1.0 (Tournament Results Tool)";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

    /// Maximum idle connections per host in pool
    pub const POOL_MAX_PER_HOST: usize = 4;
}

/// Rate limiting configuration
pub mod limits {
    use super::Duration;

    /// Minimum spacing between the start of consecutive network requests
    pub const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_secs(1);
}

/// Results site URLs
pub mod site {
    /// Base URL of the results site
    pub const BASE_URL: &str = "https://www.sumo.or.jp";

    /// Path of the daily bout results, followed by `{division_id}/{day}/`
    pub const RESULTS_PATH: &str = "ResultData/torikumi";
}

/// Tournament structure
pub mod tournament {
    /// First day of a tournament
    pub const FIRST_DAY: u8 = 1;

    /// Final day (senshuraku) of a tournament
    pub const FINAL_DAY: u8 = 15;
}

/// File operation constants
pub mod files {
    /// Extension of cached documents
    pub const CACHE_FILE_EXTENSION: &str = "html";

    /// Prefix of temporary files created during atomic cache writes
    pub const TEMP_FILE_PREFIX: &str = ".pending-";

    /// Application directory name under the user's cache/config directories
    pub const APP_DIR_NAME: &str = "banzuke-fetcher";

    /// Subdirectory of the application cache directory holding pages
    pub const PAGES_DIR_NAME: &str = "pages";

    /// Project-local configuration file name
    pub const LOCAL_CONFIG_FILE: &str = "banzuke-fetcher.toml";

    /// User configuration file name
    pub const USER_CONFIG_FILE: &str = "config.toml";
}

/// CSS selectors for results documents
pub mod selectors {
    /// Elements that carry the page's own day/date heading
    pub const DAY_METADATA: &str = "title, h1, h2, h3, .day, .date";

    /// Results table
    pub const RESULTS_TABLE: &str = "table";

    /// Rows of the results table
    pub const TABLE_ROW: &str = "tr";

    /// Cells of a results row
    pub const TABLE_CELL: &str = "td";

    /// Rank text inside a player cell
    pub const RANK: &str = ".rank";

    /// Wrestler name inside a player cell
    pub const NAME: &str = ".name";

    /// Win/loss record inside a player cell
    pub const RECORD: &str = ".perform";
}

/// Terminal output
pub mod display {
    use super::Duration;

    /// Spinner redraw interval
    pub const SPINNER_TICK: Duration = Duration::from_millis(120);

    /// Spinner frames
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

// Re-export commonly used constants for convenience
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
pub use limits::DEFAULT_MIN_REQUEST_INTERVAL;
pub use site::BASE_URL;

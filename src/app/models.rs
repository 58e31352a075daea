//! Data models for Banzuke Fetcher
//!
//! This module defines the core data structures shared by the acquisition
//! pipeline: tournament divisions, the (division, day) source key, and the
//! outcome of a single fetch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::validation::ValidationReport;
use crate::constants::{site, tournament};
use crate::errors::{DownloadError, DownloadResult};

/// Competitive divisions, declared in precedence order (highest first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Makuuchi,
    Juryo,
    Makushita,
    Sandanme,
    Jonidan,
    Jonokuchi,
}

impl Division {
    /// All divisions in precedence order
    pub const ALL: [Division; 6] = [
        Division::Makuuchi,
        Division::Juryo,
        Division::Makushita,
        Division::Sandanme,
        Division::Jonidan,
        Division::Jonokuchi,
    ];

    /// Identifier used by the results site in its URLs
    pub fn site_id(&self) -> u8 {
        match self {
            Self::Makuuchi => 1,
            Self::Juryo => 2,
            Self::Makushita => 3,
            Self::Sandanme => 4,
            Self::Jonidan => 5,
            Self::Jonokuchi => 6,
        }
    }

    /// Precedence relative to other divisions (0 is the top division)
    pub fn precedence(&self) -> u8 {
        self.site_id() - 1
    }

    /// Name as written on the banzuke
    pub fn japanese_name(&self) -> &'static str {
        match self {
            Self::Makuuchi => "幕内",
            Self::Juryo => "十両",
            Self::Makushita => "幕下",
            Self::Sandanme => "三段目",
            Self::Jonidan => "序二段",
            Self::Jonokuchi => "序ノ口",
        }
    }

    /// Lowercase romanized name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Makuuchi => "makuuchi",
            Self::Juryo => "juryo",
            Self::Makushita => "makushita",
            Self::Sandanme => "sandanme",
            Self::Jonidan => "jonidan",
            Self::Jonokuchi => "jonokuchi",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Division::ALL
            .into_iter()
            .find(|d| d.as_str() == lowered || d.japanese_name() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown division '{}', expected one of: {}",
                    s,
                    Division::ALL.map(|d| d.as_str()).join(", ")
                )
            })
    }
}

/// One of the two roster columns; East precedes West
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    East,
    West,
}

impl Side {
    /// Precedence within a rank (East first)
    pub fn precedence(&self) -> u8 {
        match self {
            Self::East => 0,
            Self::West => 1,
        }
    }

    pub fn japanese_name(&self) -> &'static str {
        match self {
            Self::East => "東",
            Self::West => "西",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::East => f.write_str("East"),
            Self::West => f.write_str("West"),
        }
    }
}

/// A single unit of acquisition work: one division on one tournament day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceKey {
    division: Division,
    day: u8,
}

impl SourceKey {
    /// Create a key, rejecting days outside the tournament
    pub fn new(division: Division, day: u8) -> Option<Self> {
        (tournament::FIRST_DAY..=tournament::FINAL_DAY)
            .contains(&day)
            .then_some(Self { division, day })
    }

    pub fn division(&self) -> Division {
        self.division
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Derive the results page URL for this key under `base`
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::InvalidUrl` if `base` cannot serve as a base URL
    pub fn url(&self, base: &Url) -> DownloadResult<Url> {
        let relative = format!(
            "{}/{}/{}/",
            site::RESULTS_PATH,
            self.division.site_id(),
            self.day
        );
        base.join(&relative).map_err(|e| DownloadError::InvalidUrl {
            url: format!("{}{}", base, relative),
            error: e.to_string(),
        })
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.division, self.day)
    }
}

/// Where the content of a fetch came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Cache,
    Network,
}

/// Result of one acquisition attempt
///
/// `accepted == false` means the content was downloaded but failed validation.
/// Callers must not use it as data, but it is not an error either.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub key: SourceKey,
    pub content: String,
    pub origin: Origin,
    pub accepted: bool,
    /// Validation details; `None` for cache hits, which were validated when written
    pub validation: Option<ValidationReport>,
}

impl FetchOutcome {
    /// Warnings raised while validating the content, if it was validated at all
    pub fn warnings(&self) -> &[String] {
        self.validation
            .as_ref()
            .map(|report| report.warnings.as_slice())
            .unwrap_or(&[])
    }
}

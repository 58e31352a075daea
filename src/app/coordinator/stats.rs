//! Summary counts for an acquisition run

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::models::Origin;

use super::Acquisition;

/// How the pages of one acquisition were obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionSummary {
    /// Accepted pages served from the cache
    pub cached: usize,
    /// Accepted pages downloaded in this run
    pub downloaded: usize,
    /// Pages rejected by validation
    pub unavailable: usize,
}

impl AcquisitionSummary {
    pub fn from_acquisitions(acquisitions: &[Acquisition]) -> Self {
        acquisitions
            .iter()
            .fold(Self::default(), |mut summary, acquisition| {
                match acquisition.outcome.as_ref().map(|o| o.origin) {
                    Some(Origin::Cache) => summary.cached += 1,
                    Some(Origin::Network) => summary.downloaded += 1,
                    None => summary.unavailable += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.cached + self.downloaded + self.unavailable
    }

    /// True when every requested page is available
    pub fn is_complete(&self) -> bool {
        self.unavailable == 0
    }
}

impl fmt::Display for AcquisitionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages: {} cached, {} downloaded, {} unavailable",
            self.total(),
            self.cached,
            self.downloaded,
            self.unavailable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Division, FetchOutcome, SourceKey};

    fn acquisition(day: u8, origin: Option<Origin>) -> Acquisition {
        let key = SourceKey::new(Division::Juryo, day).unwrap();
        Acquisition {
            key,
            outcome: origin.map(|origin| FetchOutcome {
                key,
                content: String::new(),
                origin,
                accepted: true,
                validation: None,
            }),
        }
    }

    #[test]
    fn test_counts_by_origin() {
        let summary = AcquisitionSummary::from_acquisitions(&[
            acquisition(1, Some(Origin::Cache)),
            acquisition(2, Some(Origin::Network)),
            acquisition(3, Some(Origin::Network)),
            acquisition(4, None),
        ]);

        assert_eq!(summary.cached, 1);
        assert_eq!(summary.downloaded, 2);
        assert_eq!(summary.unavailable, 1);
        assert_eq!(summary.total(), 4);
        assert!(!summary.is_complete());
        assert_eq!(
            summary.to_string(),
            "4 pages: 1 cached, 2 downloaded, 1 unavailable"
        );
    }

    #[test]
    fn test_empty_run_is_complete() {
        let summary = AcquisitionSummary::from_acquisitions(&[]);
        assert_eq!(summary.total(), 0);
        assert!(summary.is_complete());
    }
}

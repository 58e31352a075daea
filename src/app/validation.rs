//! Day/date consistency checks for downloaded results pages
//!
//! The results site sometimes serves the latest available day instead of the
//! requested one (for example before a day's bouts are published). Each page
//! names its own day and date in its headings; a page is accepted only when
//! that day matches the request.

use chrono::{Days, NaiveDate};
use scraper::Html;

use crate::app::banzuke::numeral::{normalize_digits, parse_numeral};
use crate::app::patterns::{DATE_REGEX, DAY_METADATA_SELECTOR, DAY_REGEX};
use crate::constants::tournament;

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub requested_day: u8,
    /// Day the document reports for itself
    pub actual_day: Option<u8>,
    /// Date the document reports for itself
    pub actual_date: Option<NaiveDate>,
    /// Date the requested day falls on, when the tournament start is known
    pub expected_date: Option<NaiveDate>,
    /// One message per independent issue
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// The document carried no day heading at all
    pub fn is_missing_day(&self) -> bool {
        self.actual_day.is_none()
    }
}

/// Checks that a document describes the day it was requested for
#[derive(Debug, Clone, Default)]
pub struct ContentValidator {
    basho_start: Option<NaiveDate>,
}

impl ContentValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also check dates, given the date of the tournament's first day
    pub fn with_basho_start(mut self, basho_start: Option<NaiveDate>) -> Self {
        self.basho_start = basho_start;
        self
    }

    /// Date on which `day` of the configured tournament is held
    pub fn expected_date(&self, day: u8) -> Option<NaiveDate> {
        let offset = u64::from(day.checked_sub(tournament::FIRST_DAY)?);
        self.basho_start?.checked_add_days(Days::new(offset))
    }

    /// Validate `document` against `requested_day`
    ///
    /// Only the day decides `is_valid`; a document without any day heading is
    /// invalid. When a tournament start date is configured, a page whose day
    /// matches but whose date is missing or different stays valid and carries
    /// a warning for the date.
    pub fn validate(&self, document: &str, requested_day: u8) -> ValidationReport {
        let (actual_day, actual_date) = extract_metadata(document);
        let expected_date = self.expected_date(requested_day);
        let mut warnings = Vec::new();

        match actual_day {
            None => warnings.push(format!(
                "No day metadata found in document (requested day {})",
                requested_day
            )),
            Some(day) if day != requested_day => warnings.push(format!(
                "Requested day {} but document reports day {}",
                requested_day, day
            )),
            Some(_) => {}
        }

        if let Some(expected) = expected_date {
            match actual_date {
                None => warnings.push(format!(
                    "No date metadata found in document (expected {})",
                    expected
                )),
                Some(date) if date != expected => warnings.push(format!(
                    "Expected date {} but document reports {}",
                    expected, date
                )),
                Some(_) => {}
            }
        }

        ValidationReport {
            is_valid: actual_day == Some(requested_day),
            requested_day,
            actual_day,
            actual_date,
            expected_date,
            warnings,
        }
    }
}

/// Pull the first day marker and first date out of the document headings
fn extract_metadata(document: &str) -> (Option<u8>, Option<NaiveDate>) {
    let html = Html::parse_document(document);
    let mut day = None;
    let mut date = None;

    for element in html.select(&DAY_METADATA_SELECTOR) {
        let text = normalize_digits(&element.text().collect::<String>());
        if day.is_none() {
            day = parse_day(&text);
        }
        if date.is_none() {
            date = parse_date(&text);
        }
        if day.is_some() && date.is_some() {
            break;
        }
    }

    (day, date)
}

fn parse_day(text: &str) -> Option<u8> {
    for captures in DAY_REGEX.captures_iter(text) {
        let day = match &captures[1] {
            "初日" => Some(tournament::FIRST_DAY),
            "千秋楽" => Some(tournament::FINAL_DAY),
            _ => captures
                .get(2)
                .and_then(|m| parse_numeral(m.as_str()))
                .and_then(|n| u8::try_from(n).ok()),
        };
        let in_range = |d: &u8| (tournament::FIRST_DAY..=tournament::FINAL_DAY).contains(d);
        if let Some(day) = day.filter(in_range) {
            return Some(day);
        }
    }
    None
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_REGEX.captures_iter(text).find_map(|captures| {
        let year = match (captures.get(1), captures.get(2)) {
            // Reiwa 1 is 2019
            (Some(era_year), _) => {
                let n: i32 = match era_year.as_str() {
                    "元" => 1,
                    digits => digits.parse().ok()?,
                };
                2018 + n
            }
            (None, Some(year)) => year.as_str().parse().ok()?,
            (None, None) => return None,
        };
        let month = captures[3].parse().ok()?;
        let day = captures[4].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

//! Win/loss record parsing (`6勝2敗`, `6勝2敗3休`)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::patterns::RECORD_REGEX;

use super::numeral::normalize_digits;

/// A wrestler's record so far in the tournament
///
/// `rest` is present only when the source text spells out absences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RikishiRecord {
    pub wins: u32,
    pub losses: u32,
    pub rest: Option<u32>,
}

impl RikishiRecord {
    /// Total bouts and absences accounted for
    pub fn days_accounted(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.rest.unwrap_or(0))
    }
}

impl fmt::Display for RikishiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}勝{}敗", self.wins, self.losses)?;
        if let Some(rest) = self.rest {
            write!(f, "{}休", rest)?;
        }
        Ok(())
    }
}

/// Parse record text; text in neither notation yields an empty record
pub fn parse_record(text: &str) -> RikishiRecord {
    let text = normalize_digits(text);
    let Some(captures) = RECORD_REGEX.captures(&text) else {
        return RikishiRecord::default();
    };

    let number = |index: usize| captures.get(index).and_then(|m| m.as_str().parse().ok());

    match (number(1), number(2)) {
        (Some(wins), Some(losses)) => RikishiRecord {
            wins,
            losses,
            rest: number(3),
        },
        _ => RikishiRecord::default(),
    }
}

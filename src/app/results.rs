//! Bout table extraction from a results page
//!
//! A results page holds one table row per bout:
//!
//! ```text
//! | east wrestler | technique | west wrestler |
//! ```
//!
//! Each wrestler cell carries `.rank`, `.name` and `.perform` (record)
//! elements. Rows with fewer than three cells (headings, separators) are
//! ignored.

use scraper::{ElementRef, Html};
use serde::Serialize;

use crate::app::banzuke::{
    normalize, parse_record, split_side, BanzukeSlot, NormalizedRank, RikishiRecord,
};
use crate::app::models::Side;
use crate::app::patterns::{
    NAME_SELECTOR, RANK_SELECTOR, RECORD_SELECTOR, RESULTS_TABLE_SELECTOR, TABLE_CELL_SELECTOR,
    TABLE_ROW_SELECTOR,
};

/// One wrestler as listed in a bout row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RikishiEntry {
    pub side: Side,
    /// Rank text as printed, without any side marker
    pub rank_text: String,
    pub rank: NormalizedRank,
    pub name: String,
    pub record: RikishiRecord,
}

impl RikishiEntry {
    /// Where this wrestler sits on the banzuke, if the rank is understood
    pub fn slot(&self) -> Option<BanzukeSlot> {
        self.rank.to_slot(self.side)
    }
}

/// A single bout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoutRow {
    pub east: RikishiEntry,
    /// Winning technique, empty before the bout is decided
    pub kimarite: String,
    pub west: RikishiEntry,
}

/// Extract every bout from a results page
///
/// Returns `None` when the document has no results table at all.
pub fn parse_bouts(document: &str) -> Option<Vec<BoutRow>> {
    let html = Html::parse_document(document);

    let mut tables = html.select(&RESULTS_TABLE_SELECTOR).peekable();
    tables.peek()?;

    let bouts = tables
        .flat_map(|table| table.select(&TABLE_ROW_SELECTOR))
        .filter_map(parse_row)
        .collect();

    Some(bouts)
}

/// Flatten bouts into the wrestlers appearing in them, east before west
pub fn entries_of(bouts: &[BoutRow]) -> Vec<RikishiEntry> {
    bouts
        .iter()
        .flat_map(|bout| [bout.east.clone(), bout.west.clone()])
        .collect()
}

fn parse_row(row: ElementRef<'_>) -> Option<BoutRow> {
    let cells: Vec<ElementRef<'_>> = row.select(&TABLE_CELL_SELECTOR).collect();
    if cells.len() < 3 {
        return None;
    }

    let east = parse_entry(cells[0], Side::East);
    let west = parse_entry(cells[cells.len() - 1], Side::West);
    let kimarite = text_of(cells[cells.len() / 2]);

    Some(BoutRow {
        east,
        kimarite,
        west,
    })
}

fn parse_entry(cell: ElementRef<'_>, side: Side) -> RikishiEntry {
    let rank_raw = first_text(cell, &RANK_SELECTOR).unwrap_or_default();
    let (_, rank_text) = split_side(&rank_raw);
    let rank_text = rank_text.trim().to_string();

    let name = first_text(cell, &NAME_SELECTOR).unwrap_or_else(|| text_of(cell));
    let record = first_text(cell, &RECORD_SELECTOR)
        .map(|text| parse_record(&text))
        .unwrap_or_default();

    RikishiEntry {
        side,
        rank: normalize(&rank_text),
        rank_text,
        name,
        record,
    }
}

fn first_text(cell: ElementRef<'_>, selector: &scraper::Selector) -> Option<String> {
    cell.select(selector).next().map(text_of)
}

/// Element text with runs of whitespace collapsed
fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

//! Compiled CSS selectors and regular expressions shared by the parsers

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::constants::selectors;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

selector!(DAY_METADATA_SELECTOR, selectors::DAY_METADATA);
selector!(RESULTS_TABLE_SELECTOR, selectors::RESULTS_TABLE);
selector!(TABLE_ROW_SELECTOR, selectors::TABLE_ROW);
selector!(TABLE_CELL_SELECTOR, selectors::TABLE_CELL);
selector!(RANK_SELECTOR, selectors::RANK);
selector!(NAME_SELECTOR, selectors::NAME);
selector!(RECORD_SELECTOR, selectors::RECORD);

// Day headings: 初日 (day 1), 千秋楽 (day 15), or "<numeral>日目"
regex!(DAY_REGEX, r"(初日|千秋楽|([0-9〇一二三四五六七八九十]+)日目)");
// Calendar dates, Gregorian or Reiwa era ("元" is the first year of an era)
regex!(
    DATE_REGEX,
    r"(?:令和(元|[0-9]{1,2})|([0-9]{4}))年\s*([0-9]{1,2})月\s*([0-9]{1,2})日"
);
// Win/loss record with an optional count of absences
regex!(RECORD_REGEX, r"([0-9]+)勝([0-9]+)敗(?:([0-9]+)休)?");

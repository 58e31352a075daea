//! Rank text normalization
//!
//! Raw rank strings look like `横綱`, `前頭十八`, `前頭筆頭`, `幕下五枚目` or
//! `東小結`. Unknown text (retired or unranked wrestlers, site quirks) is an
//! ordinary outcome and is handed back unchanged.

use serde::{Deserialize, Serialize};

use crate::app::models::{Division, Side};

use super::numeral::parse_numeral;
use super::{BanzukeSlot, DivisionRank, NamedTier};

/// Every tier name the normalizer recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankTier {
    Yokozuna,
    Ozeki,
    Sekiwake,
    Komusubi,
    Maegashira,
    Juryo,
    Makushita,
    Sandanme,
    Jonidan,
    Jonokuchi,
}

impl RankTier {
    pub const ALL: [RankTier; 10] = [
        RankTier::Yokozuna,
        RankTier::Ozeki,
        RankTier::Sekiwake,
        RankTier::Komusubi,
        RankTier::Maegashira,
        RankTier::Juryo,
        RankTier::Makushita,
        RankTier::Sandanme,
        RankTier::Jonidan,
        RankTier::Jonokuchi,
    ];

    pub fn japanese_name(&self) -> &'static str {
        match self {
            Self::Yokozuna => "横綱",
            Self::Ozeki => "大関",
            Self::Sekiwake => "関脇",
            Self::Komusubi => "小結",
            Self::Maegashira => "前頭",
            Self::Juryo => "十両",
            Self::Makushita => "幕下",
            Self::Sandanme => "三段目",
            Self::Jonidan => "序二段",
            Self::Jonokuchi => "序ノ口",
        }
    }

    /// Division a wrestler holding this tier competes in
    pub fn division(&self) -> Division {
        match self {
            Self::Yokozuna | Self::Ozeki | Self::Sekiwake | Self::Komusubi | Self::Maegashira => {
                Division::Makuuchi
            }
            Self::Juryo => Division::Juryo,
            Self::Makushita => Division::Makushita,
            Self::Sandanme => Division::Sandanme,
            Self::Jonidan => Division::Jonidan,
            Self::Jonokuchi => Division::Jonokuchi,
        }
    }

    /// The honorific tier this corresponds to, if it is one
    pub fn named_tier(&self) -> Option<NamedTier> {
        match self {
            Self::Yokozuna => Some(NamedTier::Yokozuna),
            Self::Ozeki => Some(NamedTier::Ozeki),
            Self::Sekiwake => Some(NamedTier::Sekiwake),
            Self::Komusubi => Some(NamedTier::Komusubi),
            _ => None,
        }
    }
}

/// Structured form of a raw rank string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedRank {
    /// A recognised tier, with its in-division position when one was written
    Ranked {
        tier: RankTier,
        position: Option<u32>,
    },
    /// Text no known tier prefixes, returned unchanged
    Unparsed(String),
}

impl NormalizedRank {
    /// Place this rank on a banzuke column
    ///
    /// Honorific tiers always sit in the top division. Numbered tiers need a
    /// positive position; without one there is no slot to place the wrestler in.
    pub fn to_slot(&self, side: Side) -> Option<BanzukeSlot> {
        let NormalizedRank::Ranked { tier, position } = self else {
            return None;
        };

        let rank = match (tier.named_tier(), position) {
            (Some(named), _) => DivisionRank::Named(named),
            (None, Some(number)) => DivisionRank::numbered(*number)?,
            (None, None) => return None,
        };

        Some(BanzukeSlot {
            division: tier.division(),
            rank,
            side,
        })
    }
}

// Suffix naming the position, as in 五枚目
const POSITION_SUFFIX: &str = "枚目";
// 筆頭 ("head of the column") is the first numbered position
const HEAD_POSITION: &str = "筆頭";

/// Parse raw rank text into a tier and optional position
///
/// Uses longest-prefix matching so that, for example, `十両` is never read
/// as a numeral.
pub fn normalize(raw: &str) -> NormalizedRank {
    let text = raw.trim();

    let matched = RankTier::ALL
        .iter()
        .filter(|tier| text.starts_with(tier.japanese_name()))
        .max_by_key(|tier| tier.japanese_name().len());

    let Some(&tier) = matched else {
        return NormalizedRank::Unparsed(raw.to_string());
    };

    let suffix = text[tier.japanese_name().len()..].trim();
    let suffix = suffix.strip_suffix(POSITION_SUFFIX).unwrap_or(suffix).trim();

    let position = match suffix {
        "" => None,
        HEAD_POSITION => Some(1),
        numeral => parse_numeral(numeral),
    };

    NormalizedRank::Ranked { tier, position }
}

/// Split a leading side marker (`東`/`西`) off rank text
pub fn split_side(raw: &str) -> (Option<Side>, &str) {
    let text = raw.trim_start();
    for side in [Side::East, Side::West] {
        if let Some(rest) = text.strip_prefix(side.japanese_name()) {
            return (Some(side), rest);
        }
    }
    (None, text)
}

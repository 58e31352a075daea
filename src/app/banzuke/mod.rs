//! Rank normalization and banzuke ordering
//!
//! - [`numeral`] - kanji/full-width numeral parsing
//! - [`rank`] - raw rank text → [`NormalizedRank`]
//! - [`order`] - the total order over [`BanzukeSlot`]s
//! - [`record`] - win/loss/absence records

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::app::models::{Division, Side};

pub mod numeral;
pub mod order;
pub mod rank;
pub mod record;

pub use order::{compare, sort_banzuke};
pub use rank::{normalize, split_side, NormalizedRank, RankTier};
pub use record::{parse_record, RikishiRecord};

/// Honorific tiers of the top division, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedTier {
    Yokozuna,
    Ozeki,
    Sekiwake,
    Komusubi,
}

impl NamedTier {
    pub const ALL: [NamedTier; 4] = [
        NamedTier::Yokozuna,
        NamedTier::Ozeki,
        NamedTier::Sekiwake,
        NamedTier::Komusubi,
    ];

    /// Precedence among named tiers (0 is highest)
    pub fn precedence(&self) -> u32 {
        match self {
            Self::Yokozuna => 0,
            Self::Ozeki => 1,
            Self::Sekiwake => 2,
            Self::Komusubi => 3,
        }
    }
}

/// A rank within a division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DivisionRank {
    Named(NamedTier),
    /// 1-based position
    Numbered(NonZeroU32),
}

impl DivisionRank {
    /// Numbered rank at `position`; there is no position 0
    pub fn numbered(position: u32) -> Option<Self> {
        NonZeroU32::new(position).map(Self::Numbered)
    }
}

/// One place on the banzuke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BanzukeSlot {
    pub division: Division,
    pub rank: DivisionRank,
    pub side: Side,
}

impl BanzukeSlot {
    pub fn new(division: Division, rank: DivisionRank, side: Side) -> Self {
        Self {
            division,
            rank,
            side,
        }
    }
}

//! Canonical banzuke ordering
//!
//! Every slot maps to a key `(division, in-division rank, side)` compared
//! lexicographically. In the top division the named tiers take in-division
//! precedence 0..=3 and numbered ranks continue from 4, so every named tier
//! sorts ahead of every maegashira.

use std::cmp::Ordering;

use crate::app::models::Division;

use super::{BanzukeSlot, DivisionRank, NamedTier};

/// Ordering key of a slot
pub type SortKey = (u8, u32, u8);

impl BanzukeSlot {
    /// In-division precedence (0 is highest)
    pub fn rank_precedence(&self) -> u32 {
        let named_offset = match self.division {
            Division::Makuuchi => NamedTier::ALL.len() as u32,
            _ => 0,
        };
        match self.rank {
            DivisionRank::Named(tier) => tier.precedence(),
            DivisionRank::Numbered(number) => named_offset + (number.get() - 1),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        (
            self.division.precedence(),
            self.rank_precedence(),
            self.side.precedence(),
        )
    }
}

/// Compare two slots in banzuke order
pub fn compare(a: &BanzukeSlot, b: &BanzukeSlot) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}

/// Stable-sort items into banzuke order; items without a slot go last
pub fn sort_banzuke<T, F>(items: &mut [T], slot_of: F)
where
    F: Fn(&T) -> Option<BanzukeSlot>,
{
    items.sort_by(|a, b| match (slot_of(a), slot_of(b)) {
        (Some(a), Some(b)) => compare(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Side;
    use proptest::prelude::*;

    fn slot(division: Division, rank: DivisionRank, side: Side) -> BanzukeSlot {
        BanzukeSlot::new(division, rank, side)
    }

    fn numbered(position: u32) -> DivisionRank {
        DivisionRank::numbered(position).unwrap()
    }

    fn representative_slots() -> Vec<BanzukeSlot> {
        let mut slots = Vec::new();
        for division in Division::ALL {
            for side in [Side::East, Side::West] {
                if division == Division::Makuuchi {
                    for tier in NamedTier::ALL {
                        slots.push(slot(division, DivisionRank::Named(tier), side));
                    }
                }
                for number in [1, 2, 3, 17, 100] {
                    slots.push(slot(division, numbered(number), side));
                }
            }
        }
        slots
    }

    #[test]
    fn test_documented_examples() {
        let yokozuna = slot(
            Division::Makuuchi,
            DivisionRank::Named(NamedTier::Yokozuna),
            Side::East,
        );
        let m1_east = slot(Division::Makuuchi, numbered(1), Side::East);
        let m1_west = slot(Division::Makuuchi, numbered(1), Side::West);

        assert_eq!(compare(&yokozuna, &m1_east), Ordering::Less);
        assert_eq!(compare(&m1_east, &m1_west), Ordering::Less);
        assert_eq!(m1_east.sort_key(), (0, 4, 0));
    }

    #[test]
    fn test_named_tiers_precede_numbered_in_top_division() {
        for tier in NamedTier::ALL {
            for side in [Side::East, Side::West] {
                let named = slot(Division::Makuuchi, DivisionRank::Named(tier), side);
                for number in [1, 2, 18] {
                    for other_side in [Side::East, Side::West] {
                        let numbered =
                            slot(Division::Makuuchi, numbered(number), other_side);
                        assert_eq!(compare(&named, &numbered), Ordering::Less);
                    }
                }
            }
        }
    }

    #[test]
    fn test_lower_divisions_use_number_directly() {
        let ms1 = slot(Division::Makushita, numbered(1), Side::East);
        assert_eq!(ms1.sort_key(), (2, 0, 0));
        let j14 = slot(Division::Juryo, numbered(14), Side::West);
        assert_eq!(compare(&j14, &ms1), Ordering::Less);
    }

    #[test]
    fn test_there_is_no_position_zero() {
        assert_eq!(DivisionRank::numbered(0), None);

        let j1 = slot(Division::Juryo, numbered(1), Side::East);
        let j2 = slot(Division::Juryo, numbered(2), Side::East);
        assert_eq!(j1.sort_key(), (1, 0, 0));
        assert_eq!(compare(&j1, &j2), Ordering::Less);
    }

    #[test]
    fn test_exhaustive_total_preorder() {
        let slots = representative_slots();

        for a in &slots {
            assert_eq!(compare(a, a), Ordering::Equal);
            for b in &slots {
                assert_eq!(compare(a, b), compare(b, a).reverse());
                // Ties only when all three components match
                if compare(a, b) == Ordering::Equal {
                    assert_eq!(a, b);
                }
                for c in &slots {
                    if compare(a, b) != Ordering::Greater && compare(b, c) != Ordering::Greater {
                        assert_ne!(compare(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_banzuke_places_unslotted_last() {
        let mut items = vec![
            ("unranked", None),
            (
                "m3w",
                Some(slot(Division::Makuuchi, numbered(3), Side::West)),
            ),
            (
                "ozeki",
                Some(slot(
                    Division::Makuuchi,
                    DivisionRank::Named(NamedTier::Ozeki),
                    Side::East,
                )),
            ),
            (
                "j1e",
                Some(slot(Division::Juryo, numbered(1), Side::East)),
            ),
        ];

        sort_banzuke(&mut items, |(_, s)| *s);
        let names: Vec<&str> = items.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["ozeki", "m3w", "j1e", "unranked"]);
    }

    fn arb_slot() -> impl Strategy<Value = BanzukeSlot> {
        let division = prop::sample::select(Division::ALL.to_vec());
        let side = prop_oneof![Just(Side::East), Just(Side::West)];
        let rank = prop_oneof![
            prop::sample::select(NamedTier::ALL.to_vec()).prop_map(DivisionRank::Named),
            (1u32..200).prop_filter_map("positions start at 1", DivisionRank::numbered),
        ];
        (division, rank, side).prop_map(|(division, rank, side)| BanzukeSlot::new(division, rank, side))
    }

    proptest! {
        #[test]
        fn prop_antisymmetric(a in arb_slot(), b in arb_slot()) {
            prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        }

        #[test]
        fn prop_transitive(a in arb_slot(), b in arb_slot(), c in arb_slot()) {
            let mut sorted = [a, b, c];
            sorted.sort_by(compare);
            prop_assert_ne!(compare(&sorted[0], &sorted[1]), Ordering::Greater);
            prop_assert_ne!(compare(&sorted[1], &sorted[2]), Ordering::Greater);
            prop_assert_ne!(compare(&sorted[0], &sorted[2]), Ordering::Greater);
        }

        #[test]
        fn prop_division_dominates(a in arb_slot(), b in arb_slot()) {
            if a.division != b.division {
                prop_assert_eq!(compare(&a, &b), a.division.cmp(&b.division));
            }
        }
    }
}

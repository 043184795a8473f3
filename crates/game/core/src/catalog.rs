//! Static enclosure catalog.
//!
//! The board layout is fixed: seven enclosures, each with a capacity, a
//! placement rule, a zone for dice matching, and optionally an adjacent
//! facility. The catalog is process-wide immutable data; lookups are total
//! by exhaustive match, so an unknown enclosure id is unrepresentable.

use strum::EnumIter;

/// Named placement zones on a player's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnclosureId {
    ProgressiveMeadow,
    PairedMeadow,
    ForestTrio,
    FoodCourt,
    KingOfTheJungle,
    SolitaryIsland,
    River,
}

/// Board half an enclosure sits in, matched against zone dice faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    Forest,
    Rocky,
    River,
}

/// Park facilities used by adjacency dice faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facility {
    Bathroom,
    Cafeteria,
}

/// How many pieces an enclosure admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capacity {
    Bounded(u8),
    Unbounded,
}

impl Capacity {
    /// Whether an enclosure holding `occupants` pieces can take one more.
    pub fn admits(self, occupants: usize) -> bool {
        match self {
            Capacity::Bounded(cap) => occupants < cap as usize,
            Capacity::Unbounded => true,
        }
    }
}

/// Species legality rule attached to an enclosure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementRule {
    /// Every occupant must share one species.
    UniformSpecies,
    /// No species may appear twice.
    DistinctSpecies,
    /// Hard occupant cap, kept as an explicit rule because scoring keys on it.
    MaxCount(u8),
    /// Any piece goes.
    Unrestricted,
    /// Any piece goes; scores per occupant.
    PerPieceScore,
}

/// Static definition of one enclosure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnclosureDef {
    pub id: EnclosureId,
    pub capacity: Capacity,
    pub rule: PlacementRule,
    pub zone: Zone,
    pub adjacent: Option<Facility>,
}

/// Fixed board layout: three forest enclosures, three rocky, the river
/// crossing the middle. Facility adjacency follows the printed board.
static CATALOG: [EnclosureDef; 7] = [
    EnclosureDef {
        id: EnclosureId::ProgressiveMeadow,
        capacity: Capacity::Bounded(6),
        rule: PlacementRule::UniformSpecies,
        zone: Zone::Forest,
        adjacent: Some(Facility::Cafeteria),
    },
    EnclosureDef {
        id: EnclosureId::PairedMeadow,
        capacity: Capacity::Bounded(6),
        rule: PlacementRule::Unrestricted,
        zone: Zone::Forest,
        adjacent: Some(Facility::Bathroom),
    },
    EnclosureDef {
        id: EnclosureId::ForestTrio,
        capacity: Capacity::Bounded(3),
        rule: PlacementRule::MaxCount(3),
        zone: Zone::Forest,
        adjacent: None,
    },
    EnclosureDef {
        id: EnclosureId::FoodCourt,
        capacity: Capacity::Bounded(6),
        rule: PlacementRule::DistinctSpecies,
        zone: Zone::Rocky,
        adjacent: Some(Facility::Cafeteria),
    },
    EnclosureDef {
        id: EnclosureId::KingOfTheJungle,
        capacity: Capacity::Bounded(1),
        rule: PlacementRule::MaxCount(1),
        zone: Zone::Rocky,
        adjacent: None,
    },
    EnclosureDef {
        id: EnclosureId::SolitaryIsland,
        capacity: Capacity::Bounded(1),
        rule: PlacementRule::MaxCount(1),
        zone: Zone::Rocky,
        adjacent: Some(Facility::Bathroom),
    },
    EnclosureDef {
        id: EnclosureId::River,
        capacity: Capacity::Unbounded,
        rule: PlacementRule::PerPieceScore,
        zone: Zone::River,
        adjacent: None,
    },
];

impl EnclosureId {
    /// All enclosures in catalog order.
    pub const ALL: [EnclosureId; 7] = [
        EnclosureId::ProgressiveMeadow,
        EnclosureId::PairedMeadow,
        EnclosureId::ForestTrio,
        EnclosureId::FoodCourt,
        EnclosureId::KingOfTheJungle,
        EnclosureId::SolitaryIsland,
        EnclosureId::River,
    ];

    /// Catalog definition for this enclosure.
    pub fn definition(self) -> &'static EnclosureDef {
        &CATALOG[self.index()]
    }

    /// Dense index into per-board storage, in catalog order.
    pub(crate) fn index(self) -> usize {
        match self {
            EnclosureId::ProgressiveMeadow => 0,
            EnclosureId::PairedMeadow => 1,
            EnclosureId::ForestTrio => 2,
            EnclosureId::FoodCourt => 3,
            EnclosureId::KingOfTheJungle => 4,
            EnclosureId::SolitaryIsland => 5,
            EnclosureId::River => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_entry_matches_its_id() {
        for id in EnclosureId::iter() {
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn zones_partition_the_board() {
        let forest = EnclosureId::iter()
            .filter(|id| id.definition().zone == Zone::Forest)
            .count();
        let rocky = EnclosureId::iter()
            .filter(|id| id.definition().zone == Zone::Rocky)
            .count();
        assert_eq!(forest, 3);
        assert_eq!(rocky, 3);
        assert_eq!(
            EnclosureId::River.definition().zone,
            Zone::River,
        );
    }

    #[test]
    fn only_the_river_is_unbounded() {
        for id in EnclosureId::iter() {
            let unbounded = id.definition().capacity == Capacity::Unbounded;
            assert_eq!(unbounded, id == EnclosureId::River);
        }
    }

    #[test]
    fn bounded_capacity_admits_below_cap() {
        assert!(Capacity::Bounded(3).admits(2));
        assert!(!Capacity::Bounded(3).admits(3));
        assert!(Capacity::Unbounded.admits(usize::MAX - 1));
    }
}

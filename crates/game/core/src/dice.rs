//! Die faces and the restriction each face imposes on the opposing player.

use crate::catalog::{EnclosureId, Facility, Zone};
use crate::state::{Board, Species};

/// The six faces of the placement die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DieFace {
    ForestZone,
    RockyZone,
    NearBathroom,
    NearCafeteria,
    OccupiedEnclosure,
    NoTrex,
}

impl DieFace {
    /// Faces in pip order, 1 through 6.
    pub const ALL: [DieFace; 6] = [
        DieFace::ForestZone,
        DieFace::RockyZone,
        DieFace::NearBathroom,
        DieFace::NearCafeteria,
        DieFace::OccupiedEnclosure,
        DieFace::NoTrex,
    ];

    /// Maps a physical roll (1-6) onto a face. Total over any input: values
    /// outside 1-6 wrap, so a misbehaving oracle cannot poison the table.
    pub fn from_roll(roll: u32) -> DieFace {
        Self::ALL[(roll.wrapping_sub(1) % 6) as usize]
    }

    /// Pip value of this face (1-6).
    pub fn value(self) -> u32 {
        match self {
            DieFace::ForestZone => 1,
            DieFace::RockyZone => 2,
            DieFace::NearBathroom => 3,
            DieFace::NearCafeteria => 4,
            DieFace::OccupiedEnclosure => 5,
            DieFace::NoTrex => 6,
        }
    }

    /// The restriction this face imposes on the player who did not roll.
    /// Pure six-entry table; applicability and clearing are the state
    /// machine's concern.
    pub fn restriction(self) -> DiceRestriction {
        match self {
            DieFace::ForestZone => DiceRestriction::Zone(Zone::Forest),
            DieFace::RockyZone => DiceRestriction::Zone(Zone::Rocky),
            DieFace::NearBathroom => DiceRestriction::Adjacent(Facility::Bathroom),
            DieFace::NearCafeteria => DiceRestriction::Adjacent(Facility::Cafeteria),
            DieFace::OccupiedEnclosure => DiceRestriction::OccupiedEnclosure,
            DieFace::NoTrex => DiceRestriction::WithoutSpecies(Species::Trex),
        }
    }
}

/// Constraint limiting where the restricted player may place their next piece.
///
/// Matched exhaustively everywhere it is consumed; adding a restriction kind
/// is a compile-time-checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceRestriction {
    /// Enclosure must sit in the given zone.
    Zone(Zone),
    /// Enclosure must already hold at least one piece.
    OccupiedEnclosure,
    /// Enclosure must not already contain the given species.
    WithoutSpecies(Species),
    /// Enclosure must be adjacent to the given facility.
    Adjacent(Facility),
}

impl DiceRestriction {
    /// Whether placing into `enclosure` on `board` satisfies this restriction.
    ///
    /// The river is the universal fallback: it satisfies every restriction.
    pub fn allows(self, board: &Board, enclosure: EnclosureId) -> bool {
        if enclosure == EnclosureId::River {
            return true;
        }
        let def = enclosure.definition();
        match self {
            DiceRestriction::Zone(zone) => def.zone == zone,
            DiceRestriction::OccupiedEnclosure => !board.occupants(enclosure).is_empty(),
            DiceRestriction::WithoutSpecies(species) => {
                !board.occupants(enclosure).contains(&species)
            }
            DiceRestriction::Adjacent(facility) => def.adjacent == Some(facility),
        }
    }
}

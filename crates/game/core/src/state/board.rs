//! Committed placements for one player, one round.

use crate::catalog::EnclosureId;
use crate::config::GameConfig;
use crate::state::Species;

/// Per-enclosure placement sequences. Insertion order is placement order and
/// is preserved for audit and tie-breaks. A board only grows within a round;
/// a fresh board replaces it when the next round starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    enclosures: [Vec<Species>; GameConfig::ENCLOSURES],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            enclosures: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl Board {
    /// Pieces in `enclosure`, in placement order.
    pub fn occupants(&self, enclosure: EnclosureId) -> &[Species] {
        &self.enclosures[enclosure.index()]
    }

    /// Occupant count of one enclosure.
    pub fn count(&self, enclosure: EnclosureId) -> usize {
        self.enclosures[enclosure.index()].len()
    }

    /// Total pieces placed on this board.
    pub fn total_pieces(&self) -> usize {
        self.enclosures.iter().map(Vec::len).sum()
    }

    /// Occurrences of `species` across the whole board.
    pub fn species_total(&self, species: Species) -> usize {
        self.enclosures
            .iter()
            .map(|pieces| pieces.iter().filter(|&&piece| piece == species).count())
            .sum()
    }

    /// Appends a piece to an enclosure. Legality is the validator's job;
    /// the board just records.
    pub(crate) fn place(&mut self, enclosure: EnclosureId, species: Species) {
        self.enclosures[enclosure.index()].push(species);
    }
}

//! Shared value types: species, player seats, winner designation.

use strum::EnumIter;

/// Piece species. The drafting pool is drawn from these six with replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Trex,
    Triceratops,
    Diplodocus,
    Stegosaurus,
    Raptor,
    Spinosaurus,
}

impl Species {
    /// All species in a fixed order, used for deterministic dealing.
    pub const ALL: [Species; 6] = [
        Species::Trex,
        Species::Triceratops,
        Species::Diplodocus,
        Species::Stegosaurus,
        Species::Raptor,
        Species::Spinosaurus,
    ];
}

/// Seat identifier. A match always has exactly two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat.
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Stable numeric form used for seed derivation.
    pub(crate) fn seat_index(self) -> u32 {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Pair of values indexed by seat. Used for hands, boards, scores, and
/// dice-restriction slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerPlayer<T> {
    pub one: T,
    pub two: T,
}

impl<T> PerPlayer<T> {
    pub fn new(one: T, two: T) -> Self {
        Self { one, two }
    }

    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }
}

impl<T> std::ops::Index<PlayerId> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        self.get(player)
    }
}

impl<T> std::ops::IndexMut<PlayerId> for PerPlayer<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        self.get_mut(player)
    }
}

/// Outcome of a finished match. Equal totals produce a tie, not a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player(PlayerId),
    Tie,
}

//! Turn bookkeeping within a round.

use crate::dice::DieFace;
use crate::state::PlayerId;

/// Tracks whose turn it is and how far through the roll-place-end cycle the
/// current turn has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Current round, 1-based.
    pub round: u8,

    /// Monotonic turn counter within the round, 1-based.
    pub turn: u32,

    /// Seat expected to act. Alternates strictly each completed turn and
    /// resets to [`PlayerId::One`] at every round start.
    pub current_player: PlayerId,

    /// Face rolled this turn, if any. `None` means a roll is still required
    /// before a placement.
    pub rolled: Option<DieFace>,

    /// Whether the current player has completed their placement this turn.
    pub placed: bool,

    /// Count of successfully executed actions. Incremented by the engine
    /// after every accepted action; callers use it as an optimistic version
    /// stamp and the engine mixes it into roll seeds.
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            round: 1,
            turn: 1,
            current_player: PlayerId::One,
            rolled: None,
            placed: false,
            nonce: 0,
        }
    }

    /// Resets the per-round counters when a new round begins.
    pub(crate) fn start_round(&mut self, round: u8) {
        self.round = round;
        self.turn = 1;
        self.current_player = PlayerId::One;
        self.rolled = None;
        self.placed = false;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

//! Authoritative match state representation.
//!
//! This module owns the data structures that describe hands, boards, turn
//! bookkeeping, and the match aggregate. Callers clone or query this state
//! but mutate it exclusively through the engine.
mod board;
mod hand;
mod turn;
mod types;

pub use board::Board;
pub use hand::{Hand, HandSlot};
pub use turn::TurnState;
pub use types::{PerPlayer, PlayerId, Species, Winner};

use crate::dice::DiceRestriction;

/// Lifecycle of a match. Exactly one phase holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    /// Created; no die rolled yet, no hands dealt.
    Waiting,
    /// Hands dealt, turns in progress.
    InProgress,
    /// Terminal; `winner` is set.
    Finished,
}

/// One seat's round-local state plus the cumulative score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    /// Drafted pieces for the current round.
    pub hand: Hand,
    /// Committed placements for the current round.
    pub board: Board,
    /// Accumulated score across completed rounds.
    pub score: u32,
}

/// Canonical snapshot of one match.
///
/// Owned by the engine's caller; every engine operation transforms one
/// snapshot into the next, and rejected operations leave it untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    /// Seed for deterministic dice rolls and dealing.
    ///
    /// Set once at match creation and never modified. Combined with the
    /// action nonce to derive a unique seed for each random event.
    pub match_seed: u64,

    /// Lifecycle phase.
    pub phase: MatchPhase,

    /// Set exactly when `phase` is [`MatchPhase::Finished`].
    pub winner: Option<Winner>,

    /// Turn bookkeeping.
    pub turn: TurnState,

    /// Per-seat hand, board, and cumulative score.
    pub players: PerPlayer<PlayerState>,

    /// Dice restriction currently binding each seat's next placement.
    /// A roll fills the opponent's slot; that player's next placement
    /// clears it.
    pub restrictions: PerPlayer<Option<DiceRestriction>>,
}

impl MatchState {
    /// Creates a fresh match in the waiting phase. Hands are dealt by the
    /// first roll.
    pub fn new(match_seed: u64) -> Self {
        Self {
            match_seed,
            phase: MatchPhase::Waiting,
            winner: None,
            turn: TurnState::new(),
            players: PerPlayer::default(),
            restrictions: PerPlayer::default(),
        }
    }

    /// Seat expected to act.
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player
    }

    /// One seat's state.
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        self.players.get(player)
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        self.players.get_mut(player)
    }

    /// Whether both hands were dealt and fully placed, i.e. the round is
    /// complete.
    pub fn hands_exhausted(&self) -> bool {
        self.players.one.hand.is_exhausted() && self.players.two.hand.is_exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_match_waits_with_empty_hands() {
        let state = MatchState::new(7);
        assert_eq!(state.phase, MatchPhase::Waiting);
        assert_eq!(state.winner, None);
        assert_eq!(state.current_player(), PlayerId::One);
        assert!(state.player(PlayerId::One).hand.is_empty());
        assert!(state.player(PlayerId::Two).hand.is_empty());
        assert!(!state.hands_exhausted());
    }

    #[test]
    fn opponent_flips_between_seats() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    }
}

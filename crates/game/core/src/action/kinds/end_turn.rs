//! Turn handover action.

use crate::action::ActionTransition;
use crate::env::MatchEnv;
use crate::state::{MatchPhase, MatchState, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndTurnError {
    #[error("match is not in progress")]
    NotInProgress,

    #[error("no piece was placed this turn")]
    NotPlacedThisTurn,
}

/// Hand the turn to the opponent. Valid only after a successful placement;
/// the next turn starts with a fresh roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction {
    pub player: PlayerId,
}

impl EndTurnAction {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl ActionTransition for EndTurnAction {
    type Error = EndTurnError;
    type Outcome = ();

    fn actor(&self) -> PlayerId {
        self.player
    }

    fn pre_validate(&self, state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != MatchPhase::InProgress {
            return Err(EndTurnError::NotInProgress);
        }
        if !state.turn.placed {
            return Err(EndTurnError::NotPlacedThisTurn);
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        state.turn.turn += 1;
        state.turn.current_player = state.turn.current_player.opponent();
        state.turn.rolled = None;
        state.turn.placed = false;
        Ok(())
    }

    fn post_validate(&self, state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        debug_assert_eq!(
            state.turn.current_player,
            self.player.opponent(),
            "turn handover flips the seat"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn handover_flips_seat_and_requires_a_fresh_roll() {
        let mut state = MatchState::new(9);
        state.phase = MatchPhase::InProgress;
        state.turn.placed = true;
        let env = MatchEnv::new(&PcgRng);
        let action = EndTurnAction::new(PlayerId::One);

        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();
        action.post_validate(&state, &env).unwrap();

        assert_eq!(state.turn.current_player, PlayerId::Two);
        assert_eq!(state.turn.turn, 2);
        assert_eq!(state.turn.rolled, None);
        assert!(!state.turn.placed);
    }

    #[test]
    fn handover_without_a_placement_is_rejected() {
        let mut state = MatchState::new(9);
        state.phase = MatchPhase::InProgress;
        let env = MatchEnv::new(&PcgRng);
        assert_eq!(
            EndTurnAction::new(PlayerId::One).pre_validate(&state, &env),
            Err(EndTurnError::NotPlacedThisTurn)
        );
    }

    #[test]
    fn handover_outside_progress_is_rejected() {
        let state = MatchState::new(9);
        let env = MatchEnv::new(&PcgRng);
        assert_eq!(
            EndTurnAction::new(PlayerId::One).pre_validate(&state, &env),
            Err(EndTurnError::NotInProgress)
        );
    }
}

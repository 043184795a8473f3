//! Die roll action.
//!
//! Rolling starts the turn's roll-place-end cycle. The very first roll of a
//! match additionally deals round-one hands and moves the match into
//! progress. The rolled restriction is stored against the opponent; the
//! opening roll stores none, so the first placement of a match is never
//! restricted.

use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::dealer;
use crate::dice::DieFace;
use crate::env::MatchEnv;
use crate::rng::compute_seed;
use crate::state::{MatchPhase, MatchState, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollError {
    #[error("match is finished")]
    MatchFinished,

    #[error("a placement is pending for the current roll")]
    PlacementPending,

    #[error("the die was already rolled this turn")]
    AlreadyRolled,
}

/// Roll the placement die; from a waiting match this also deals hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollAction {
    pub player: PlayerId,
}

impl RollAction {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

/// What the roll produced, reported back through the engine's effect list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    pub face: DieFace,
    /// Seat the rolled restriction binds; `None` for the opening roll.
    pub constrains: Option<PlayerId>,
    /// Whether this roll started the match (dealt hands, entered progress).
    pub started: bool,
}

impl ActionTransition for RollAction {
    type Error = RollError;
    type Outcome = RollOutcome;

    fn actor(&self) -> PlayerId {
        self.player
    }

    fn pre_validate(&self, state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        if state.phase == MatchPhase::Finished {
            return Err(RollError::MatchFinished);
        }
        if state.turn.rolled.is_some() {
            return Err(if state.turn.placed {
                RollError::AlreadyRolled
            } else {
                RollError::PlacementPending
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut MatchState, env: &MatchEnv<'_>) -> Result<RollOutcome, Self::Error> {
        let seed = compute_seed(
            state.match_seed,
            state.turn.nonce,
            self.player.seat_index(),
            0,
        );
        let face = DieFace::from_roll(env.rng().roll_die(seed, GameConfig::DIE_FACES));

        let started = state.phase == MatchPhase::Waiting;
        if started {
            let hands = dealer::deal_hands(env.rng(), state.match_seed, state.turn.round);
            state.players.one.hand = hands.one;
            state.players.two.hand = hands.two;
            state.phase = MatchPhase::InProgress;
        }

        // The opening roll never restricts the first placement.
        let constrains = if started {
            None
        } else {
            let target = self.player.opponent();
            *state.restrictions.get_mut(target) = Some(face.restriction());
            Some(target)
        };

        state.turn.rolled = Some(face);

        Ok(RollOutcome {
            face,
            constrains,
            started,
        })
    }

    fn post_validate(&self, state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(state.turn.rolled.is_some(), "roll must record a face");
        debug_assert_eq!(
            state.phase,
            MatchPhase::InProgress,
            "a successful roll leaves the match in progress"
        );
        debug_assert_eq!(state.players.one.hand.len(), GameConfig::HAND_SIZE);
        debug_assert_eq!(state.players.two.hand.len(), GameConfig::HAND_SIZE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn opening_roll_deals_hands_and_restricts_nobody() {
        let mut state = MatchState::new(42);
        let env = MatchEnv::new(&PcgRng);
        let action = RollAction::new(PlayerId::One);
        action.pre_validate(&state, &env).unwrap();
        let outcome = action.apply(&mut state, &env).unwrap();

        assert!(outcome.started);
        assert_eq!(outcome.constrains, None);
        assert_eq!(state.phase, MatchPhase::InProgress);
        assert_eq!(state.players.one.hand.len(), GameConfig::HAND_SIZE);
        assert_eq!(state.restrictions.one, None);
        assert_eq!(state.restrictions.two, None);
    }

    #[test]
    fn later_rolls_restrict_the_opponent() {
        let mut state = MatchState::new(42);
        state.phase = MatchPhase::InProgress;
        let env = MatchEnv::new(&PcgRng);
        let outcome = RollAction::new(PlayerId::Two).apply(&mut state, &env).unwrap();

        assert!(!outcome.started);
        assert_eq!(outcome.constrains, Some(PlayerId::One));
        assert_eq!(
            state.restrictions.one,
            Some(outcome.face.restriction())
        );
        assert_eq!(state.restrictions.two, None);
    }

    #[test]
    fn double_roll_is_rejected() {
        let mut state = MatchState::new(42);
        let env = MatchEnv::new(&PcgRng);
        RollAction::new(PlayerId::One).apply(&mut state, &env).unwrap();

        let second = RollAction::new(PlayerId::One).pre_validate(&state, &env);
        assert_eq!(second, Err(RollError::PlacementPending));

        state.turn.placed = true;
        let third = RollAction::new(PlayerId::One).pre_validate(&state, &env);
        assert_eq!(third, Err(RollError::AlreadyRolled));
    }

    #[test]
    fn finished_match_rejects_rolls() {
        let mut state = MatchState::new(42);
        state.phase = MatchPhase::Finished;
        let env = MatchEnv::new(&PcgRng);
        assert_eq!(
            RollAction::new(PlayerId::One).pre_validate(&state, &env),
            Err(RollError::MatchFinished)
        );
    }

    #[test]
    fn rolls_are_deterministic_for_a_seed() {
        let env = MatchEnv::new(&PcgRng);
        let mut first = MatchState::new(42);
        let mut second = MatchState::new(42);
        let a = RollAction::new(PlayerId::One).apply(&mut first, &env).unwrap();
        let b = RollAction::new(PlayerId::One).apply(&mut second, &env).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}

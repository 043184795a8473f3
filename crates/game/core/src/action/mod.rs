//! Player actions and the transition contract they implement.
//!
//! One file per action under `kinds/`: the action struct, its error enum,
//! and its [`ActionTransition`] impl live together. The engine drives every
//! action through the same pre-validate → apply → post-validate pipeline.

pub mod kinds;

pub use kinds::{
    EndTurnAction, EndTurnError, PlaceAction, RollAction, RollError, RollOutcome,
};

use crate::env::MatchEnv;
use crate::state::{MatchState, PlayerId};

/// Defines how a concrete action variant transforms match state.
///
/// `pre_validate` carries every rule check; once it passes, `apply` must not
/// fail on rule grounds, which is what guarantees rejected actions leave the
/// state untouched. `post_validate` asserts invariants on the mutated state.
pub trait ActionTransition {
    type Error;
    type Outcome;

    /// Seat performing this action.
    fn actor(&self) -> PlayerId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the match state directly.
    fn apply(
        &self,
        state: &mut MatchState,
        env: &MatchEnv<'_>,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum covering the three moves a player can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Roll(RollAction),
    Place(PlaceAction),
    EndTurn(EndTurnAction),
}

impl Action {
    /// Seat performing this action.
    pub fn actor(&self) -> PlayerId {
        match self {
            Action::Roll(action) => action.actor(),
            Action::Place(action) => action.actor(),
            Action::EndTurn(action) => action.actor(),
        }
    }
}

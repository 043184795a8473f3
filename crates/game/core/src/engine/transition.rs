//! Action transition dispatch.

use crate::action::{Action, ActionTransition, RollOutcome};
use crate::env::MatchEnv;
use crate::state::MatchState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Per-action result carried back to the engine for effect reporting.
pub(super) enum ActionOutcome {
    Roll(RollOutcome),
    Place,
    EndTurn,
}

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - check preconditions before mutation
/// 2. `apply` - mutate the match state and return the outcome
/// 3. `post_validate` - verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut MatchState,
    env: &MatchEnv<'_>,
) -> Result<T::Outcome, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

/// Routes an action to its transition and normalizes the outcome.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut MatchState,
    env: &MatchEnv<'_>,
) -> Result<ActionOutcome, ExecuteError> {
    match action {
        Action::Roll(transition) => {
            let outcome = drive_transition(transition, state, env).map_err(ExecuteError::Roll)?;
            Ok(ActionOutcome::Roll(outcome))
        }
        Action::Place(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Place)?;
            Ok(ActionOutcome::Place)
        }
        Action::EndTurn(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::EndTurn)?;
            Ok(ActionOutcome::EndTurn)
        }
    }
}

//! Error types for the action execution pipeline.

use crate::action::{EndTurnError, RollError};
use crate::rules::PlaceError;
use crate::state::PlayerId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the match engine.
///
/// Every variant is a normal, locally recoverable outcome; the state is left
/// exactly as it was before the rejected call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("roll failed: {0}")]
    Roll(TransitionPhaseError<RollError>),

    #[error("placement failed: {0}")]
    Place(TransitionPhaseError<PlaceError>),

    #[error("end turn failed: {0}")]
    EndTurn(TransitionPhaseError<EndTurnError>),

    #[error("invalid actor: {actor} acted on {current}'s turn")]
    ActorNotCurrent { actor: PlayerId, current: PlayerId },
}

impl ExecuteError {
    /// The placement rejection reason, when this error wraps one. Convenient
    /// for callers rendering a precise message.
    pub fn place_reason(&self) -> Option<PlaceError> {
        match self {
            ExecuteError::Place(inner) => Some(inner.error),
            _ => None,
        }
    }
}

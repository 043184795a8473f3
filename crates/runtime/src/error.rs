//! Unified error types surfaced by the match service.
//!
//! Engine rejections pass through untouched so clients can render the exact
//! rule that fired; the service adds only the failures that originate at
//! this boundary (unknown match, stale version, unknown player).

use thiserror::Error;

use crate::types::MatchId;
use park_core::ExecuteError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("match {0} not found")]
    MatchNotFound(MatchId),

    #[error("stale match version: expected nonce {expected}, actual {actual}")]
    Conflict { expected: u64, actual: u64 },

    #[error("player '{0}' has no seat in this match")]
    UnknownSeat(String),

    #[error(transparent)]
    Engine(#[from] ExecuteError),
}

impl RuntimeError {
    /// Whether this failure is a caller-retryable race rather than a rule
    /// rejection.
    pub fn is_conflict(&self) -> bool {
        matches!(self, RuntimeError::Conflict { .. })
    }
}

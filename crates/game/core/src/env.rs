//! Read-only collaborators the engine needs while executing actions.
//!
//! The engine owns no entropy of its own; the caller lends it a random
//! oracle per call. Bundling it here keeps transition signatures uniform
//! and leaves room for future read-only collaborators.

use crate::rng::RngOracle;

/// Environment lent to the engine for the duration of one action.
#[derive(Clone, Copy)]
pub struct MatchEnv<'a> {
    rng: &'a dyn RngOracle,
}

impl<'a> MatchEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

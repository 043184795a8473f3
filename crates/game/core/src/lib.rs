//! Deterministic rules engine for the two-player park drafting game.
//!
//! `park-core` is the single authoritative copy of the rules: the enclosure
//! catalog, the dice-restriction table, the placement validator, the scoring
//! tables, and the match state machine. It consumes and produces plain
//! snapshots; persistence, transport, and rendering live with the caller.
//! All state mutation flows through [`engine::MatchEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod catalog;
pub mod config;
pub mod dealer;
pub mod dice;
pub mod engine;
pub mod env;
pub mod rng;
pub mod rules;
pub mod state;

pub use action::{
    Action, ActionTransition, EndTurnAction, EndTurnError, PlaceAction, RollAction, RollError,
    RollOutcome,
};
pub use catalog::{Capacity, EnclosureDef, EnclosureId, Facility, PlacementRule, Zone};
pub use config::GameConfig;
pub use dice::{DiceRestriction, DieFace};
pub use engine::{Effect, ExecuteError, MatchEngine, TransitionPhase, TransitionPhaseError};
pub use env::MatchEnv;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use rules::{PlaceError, ScoreSheet, score_board, score_enclosure, score_match, score_round};
pub use state::{
    Board, Hand, HandSlot, MatchPhase, MatchState, PerPlayer, PlayerId, PlayerState, Species,
    TurnState, Winner,
};

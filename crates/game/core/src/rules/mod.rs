//! The consolidated rule set: placement legality and scoring.
//!
//! Both modules are pure functions over snapshots. Every caller, including
//! any client-side preview, is expected to delegate here rather than keep
//! its own copy of the rules.
pub mod placement;
pub mod scoring;

pub use placement::{PlaceError, validate};
pub use scoring::{ScoreSheet, score_board, score_enclosure, score_match, score_round};

//! Caller-side orchestration for the drafting-game engine.
//!
//! This crate wires the pure [`park_core`] engine to the concerns its
//! callers own: a match registry, per-match serialization of mutating
//! operations, optimistic concurrency, and structured logging. Consumers
//! embed [`MatchService`] and translate transport requests into its calls.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the façade clients interact with
//! - [`types`] defines the plain data exchanged with clients
//! - [`error`] unifies the failures surfaced at this boundary
//! - `store` keeps the registry internal to the crate
pub mod error;
pub mod service;
pub mod types;

mod store;

pub use error::{Result, RuntimeError};
pub use service::{FixedSeeder, MatchSeeder, MatchService, SystemSeeder};
pub use types::{MatchId, MatchRecord, MatchSnapshot, ScoreSummary};

//! Match service façade.
//!
//! Wraps the pure engine with everything spec'd for its caller: match
//! registration, per-match serialization of mutating calls, an optimistic
//! version check, and structured logging. Each operation locks exactly one
//! match; reads clone the snapshot and never block writers for long.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

use park_core::{
    Action, Effect, EnclosureId, EndTurnAction, MatchEngine, MatchEnv, PcgRng, PerPlayer,
    PlaceAction, PlayerId, RollAction, Species, score_match,
};

use crate::error::{Result, RuntimeError};
use crate::store::MatchStore;
use crate::types::{MatchId, MatchRecord, MatchSnapshot, ScoreSummary};

/// Source of match seeds. Production uses process entropy; tests pin seeds
/// to make whole matches replayable.
#[async_trait]
pub trait MatchSeeder: Send + Sync {
    async fn next_seed(&self) -> u64;
}

/// Seeds from `rand`'s thread RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemSeeder;

#[async_trait]
impl MatchSeeder for SystemSeeder {
    async fn next_seed(&self) -> u64 {
        rand::random()
    }
}

/// Always returns the same seed; every match created through it replays
/// identically.
#[derive(Clone, Copy, Debug)]
pub struct FixedSeeder(pub u64);

#[async_trait]
impl MatchSeeder for FixedSeeder {
    async fn next_seed(&self) -> u64 {
        self.0
    }
}

/// Client-facing service owning the match registry.
pub struct MatchService {
    store: MatchStore,
    seeder: Arc<dyn MatchSeeder>,
    rng: PcgRng,
}

impl MatchService {
    /// Service with production entropy.
    pub fn new() -> Self {
        Self::with_seeder(Arc::new(SystemSeeder))
    }

    /// Service with a caller-supplied seed source.
    pub fn with_seeder(seeder: Arc<dyn MatchSeeder>) -> Self {
        Self {
            store: MatchStore::default(),
            seeder,
            rng: PcgRng,
        }
    }

    /// Registers a new match between two named players.
    #[instrument(skip(self))]
    pub async fn create_match(
        &self,
        player_one: impl Into<String> + std::fmt::Debug,
        player_two: impl Into<String> + std::fmt::Debug,
    ) -> MatchId {
        let seed = self.seeder.next_seed().await;
        // Ids double as seeds: unique per match and sufficient for replay.
        let id = MatchId(seed);
        let record = MatchRecord {
            id,
            players: PerPlayer::new(player_one.into(), player_two.into()),
            created_at: Utc::now(),
            state: park_core::MatchState::new(seed),
        };
        self.store.insert(record).await;
        info!(match_id = %id, "match created");
        id
    }

    /// Rolls the die for `player`.
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn roll(
        &self,
        id: MatchId,
        player: PlayerId,
        expected_nonce: Option<u64>,
    ) -> Result<Vec<Effect>> {
        self.execute(id, Action::Roll(RollAction::new(player)), expected_nonce)
            .await
    }

    /// Places a piece for `player`.
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn place(
        &self,
        id: MatchId,
        player: PlayerId,
        enclosure: EnclosureId,
        species: Species,
        slot: usize,
        expected_nonce: Option<u64>,
    ) -> Result<Vec<Effect>> {
        self.execute(
            id,
            Action::Place(PlaceAction::new(player, enclosure, species, slot)),
            expected_nonce,
        )
        .await
    }

    /// Ends `player`'s turn.
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn end_turn(
        &self,
        id: MatchId,
        player: PlayerId,
        expected_nonce: Option<u64>,
    ) -> Result<Vec<Effect>> {
        self.execute(id, Action::EndTurn(EndTurnAction::new(player)), expected_nonce)
            .await
    }

    /// Read-only snapshot of a match.
    pub async fn snapshot(&self, id: MatchId) -> Result<MatchSnapshot> {
        let entry = self.store.get(id).await?;
        let record = entry.lock().await;
        Ok(MatchSnapshot::from_record(&record))
    }

    /// Current totals and, for finished matches, the winner.
    pub async fn score(&self, id: MatchId) -> Result<ScoreSummary> {
        let entry = self.store.get(id).await?;
        let record = entry.lock().await;
        let sheet = score_match(&record.state);
        Ok(ScoreSummary {
            totals: sheet.totals,
            winner: sheet.winner,
        })
    }

    /// Seat of the named player in a match.
    pub async fn seat_of(&self, id: MatchId, name: &str) -> Result<PlayerId> {
        let entry = self.store.get(id).await?;
        let record = entry.lock().await;
        record
            .seat_of(name)
            .ok_or_else(|| RuntimeError::UnknownSeat(name.to_owned()))
    }

    /// Drops a match from the registry.
    #[instrument(skip(self), fields(match_id = %id))]
    pub async fn remove_match(&self, id: MatchId) -> Result<()> {
        self.store.remove(id).await
    }

    /// Number of registered matches.
    pub async fn match_count(&self) -> usize {
        self.store.len().await
    }

    /// Runs one engine action under the match's mutex.
    ///
    /// The lock is the per-match serialization point: at most one mutating
    /// operation is in flight per match. When the caller passes the nonce it
    /// last observed and another write slipped in between, the call fails
    /// with [`RuntimeError::Conflict`] before touching the engine.
    async fn execute(
        &self,
        id: MatchId,
        action: Action,
        expected_nonce: Option<u64>,
    ) -> Result<Vec<Effect>> {
        let entry = self.store.get(id).await?;
        let mut record = entry.lock().await;

        if let Some(expected) = expected_nonce {
            let actual = record.state.turn.nonce;
            if actual != expected {
                return Err(RuntimeError::Conflict { expected, actual });
            }
        }

        let env = MatchEnv::new(&self.rng);
        let effects = MatchEngine::new(&mut record.state).execute(&env, &action)?;
        debug!(match_id = %id, effects = effects.len(), "action applied");
        Ok(effects)
    }
}

impl Default for MatchService {
    fn default() -> Self {
        Self::new()
    }
}

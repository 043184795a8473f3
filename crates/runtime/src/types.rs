//! Plain data types exchanged with clients of the match service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use park_core::{MatchState, PerPlayer, PlayerId, Winner};

/// Opaque match identifier, random per match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u64);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Everything the service stores per match. Display names are caller data;
/// the engine only knows seats.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub players: PerPlayer<String>,
    pub created_at: DateTime<Utc>,
    pub state: MatchState,
}

impl MatchRecord {
    /// Seat of the player with the given display name, if seated.
    pub fn seat_of(&self, name: &str) -> Option<PlayerId> {
        if self.players.one == name {
            Some(PlayerId::One)
        } else if self.players.two == name {
            Some(PlayerId::Two)
        } else {
            None
        }
    }
}

/// Read-only view of a match handed to clients. The nonce is the optimistic
/// version stamp mutating calls may pass back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub id: MatchId,
    pub players: PerPlayer<String>,
    pub created_at: DateTime<Utc>,
    pub nonce: u64,
    pub state: MatchState,
}

impl MatchSnapshot {
    pub(crate) fn from_record(record: &MatchRecord) -> Self {
        Self {
            id: record.id,
            players: record.players.clone(),
            created_at: record.created_at,
            nonce: record.state.turn.nonce,
            state: record.state.clone(),
        }
    }

    /// JSON form for transport or persistence by the caller.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Score totals plus the winner once the match has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub totals: PerPlayer<u32>,
    pub winner: Option<Winner>,
}

/// Rule constants for the drafting game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Pieces dealt to each player at the start of every round.
    pub const HAND_SIZE: usize = 6;
    /// Number of enclosures on each player's board.
    pub const ENCLOSURES: usize = 7;

    // ===== fixed rule parameters =====
    /// A match is exactly two rounds.
    pub const TOTAL_ROUNDS: u8 = 2;
    /// Players per match.
    pub const PLAYERS: usize = 2;
    /// Faces on the placement die.
    pub const DIE_FACES: u32 = 6;
}

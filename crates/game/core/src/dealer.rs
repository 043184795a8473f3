//! Hand dealing.
//!
//! Each round every player receives a fixed-size hand drawn independently
//! with replacement from the species set. Dealing never fails, and is fully
//! determined by the match seed, the round number, the seat, and the slot
//! index, so a match replays identically from its seed.

use crate::config::GameConfig;
use crate::rng::{RngOracle, compute_seed};
use crate::state::{Hand, PerPlayer, PlayerId, Species};

/// Deals one hand for `player` in `round`.
pub fn deal_hand(rng: &dyn RngOracle, match_seed: u64, round: u8, player: PlayerId) -> Hand {
    let species = (0..GameConfig::HAND_SIZE).map(|slot| {
        let seed = compute_seed(match_seed, round as u64, player.seat_index(), slot as u32);
        let pick = rng.range(seed, 0, (Species::ALL.len() - 1) as u32);
        Species::ALL[pick as usize]
    });
    Hand::from_species(species)
}

/// Deals both hands for a round.
pub fn deal_hands(rng: &dyn RngOracle, match_seed: u64, round: u8) -> PerPlayer<Hand> {
    PerPlayer::new(
        deal_hand(rng, match_seed, round, PlayerId::One),
        deal_hand(rng, match_seed, round, PlayerId::Two),
    )
}

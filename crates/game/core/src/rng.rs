//! Deterministic random source for dice rolls and hand dealing.
//!
//! The engine never owns entropy. Every random event derives a fresh seed
//! from the match seed plus bookkeeping counters, and an [`RngOracle`]
//! turns that seed into a value. Given the same match seed and the same
//! action sequence, a match replays identically.

/// Oracle producing random values from explicit seeds.
///
/// Implementations must be pure: the same seed always yields the same value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Stateless: each call advances a single LCG step from the given seed and
/// permutes the result. Fast, small, and passes the usual statistical
/// batteries, which is all a die roll needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Derive the seed for one random event.
///
/// * `match_seed` - set when the match is created, never changed
/// * `sequence` - action nonce for die rolls, round number for dealing
/// * `seat` - seat index of the player the event belongs to
/// * `context` - distinguishes multiple draws inside one event
///   (hand slot index when dealing, `0` for a die roll)
pub fn compute_seed(match_seed: u64, sequence: u64, seat: u32, context: u32) -> u64 {
    // SplitMix64/FxHash-style mixing constants
    let mut hash = match_seed;

    hash ^= sequence.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (seat as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

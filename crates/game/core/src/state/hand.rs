//! Drafted pieces for one player, one round.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::Species;

/// One dealt piece. The slot survives for the whole round so history and
/// audits can refer to it; playing a slot flips `played`, never removes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandSlot {
    pub species: Species,
    pub played: bool,
}

/// A player's hand for the current round: a fixed-size sequence of slots.
///
/// Empty only before the first deal (match still waiting); once dealt it
/// always holds exactly [`GameConfig::HAND_SIZE`] slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    slots: ArrayVec<HandSlot, { GameConfig::HAND_SIZE }>,
}

impl Hand {
    /// Builds a freshly dealt hand; every slot starts unplayed.
    ///
    /// # Panics
    ///
    /// Panics if given more than [`GameConfig::HAND_SIZE`] pieces. The dealer
    /// is the only producer and always supplies exactly that many.
    pub fn from_species(species: impl IntoIterator<Item = Species>) -> Self {
        let slots = species
            .into_iter()
            .map(|species| HandSlot {
                species,
                played: false,
            })
            .collect();
        Self { slots }
    }

    /// Slot at `index`, if dealt.
    pub fn slot(&self, index: usize) -> Option<&HandSlot> {
        self.slots.get(index)
    }

    /// All slots in deal order.
    pub fn slots(&self) -> &[HandSlot] {
        &self.slots
    }

    /// Number of dealt slots (0 before the first deal, 6 afterwards).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots already placed this round.
    pub fn played_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.played).count()
    }

    /// Slots still available to place.
    pub fn unplayed_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.played).count()
    }

    /// Whether the hand was dealt and every slot has been placed.
    pub fn is_exhausted(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|slot| slot.played)
    }

    /// Marks a slot as played. Returns `false` if the slot does not exist or
    /// was already played; a `true` return is irreversible.
    pub(crate) fn mark_played(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if !slot.played => {
                slot.played = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hand() -> Hand {
        Hand::from_species([
            Species::Trex,
            Species::Raptor,
            Species::Raptor,
            Species::Diplodocus,
            Species::Stegosaurus,
            Species::Spinosaurus,
        ])
    }

    #[test]
    fn fresh_hand_is_fully_unplayed() {
        let hand = sample_hand();
        assert_eq!(hand.len(), GameConfig::HAND_SIZE);
        assert_eq!(hand.unplayed_count(), GameConfig::HAND_SIZE);
        assert_eq!(hand.played_count(), 0);
        assert!(!hand.is_exhausted());
    }

    #[test]
    fn playing_a_slot_conserves_slot_count() {
        let mut hand = sample_hand();
        assert!(hand.mark_played(2));
        assert_eq!(hand.len(), GameConfig::HAND_SIZE);
        assert_eq!(hand.played_count() + hand.unplayed_count(), GameConfig::HAND_SIZE);
    }

    #[test]
    fn a_played_slot_cannot_be_played_again() {
        let mut hand = sample_hand();
        assert!(hand.mark_played(0));
        assert!(!hand.mark_played(0));
        assert!(!hand.mark_played(GameConfig::HAND_SIZE));
    }

    #[test]
    fn hand_exhausts_after_all_slots_played() {
        let mut hand = sample_hand();
        for index in 0..GameConfig::HAND_SIZE {
            assert!(hand.mark_played(index));
        }
        assert!(hand.is_exhausted());
    }

    #[test]
    fn undealt_hand_is_not_exhausted() {
        assert!(!Hand::default().is_exhausted());
    }
}

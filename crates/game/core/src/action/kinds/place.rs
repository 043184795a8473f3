//! Piece placement action.
//!
//! All legality checks are delegated to [`rules::placement::validate`]; this
//! transition only performs the mutation once validation has passed: mark
//! the hand slot played, append to the board, clear the restriction the
//! placement discharged.

use crate::action::ActionTransition;
use crate::catalog::EnclosureId;
use crate::env::MatchEnv;
use crate::rules::{self, PlaceError};
use crate::state::{MatchState, PlayerId, Species};

/// Place one piece from a hand slot into an enclosure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceAction {
    pub player: PlayerId,
    pub enclosure: EnclosureId,
    pub species: Species,
    pub slot: usize,
}

impl PlaceAction {
    pub fn new(player: PlayerId, enclosure: EnclosureId, species: Species, slot: usize) -> Self {
        Self {
            player,
            enclosure,
            species,
            slot,
        }
    }
}

impl ActionTransition for PlaceAction {
    type Error = PlaceError;
    type Outcome = ();

    fn actor(&self) -> PlayerId {
        self.player
    }

    fn pre_validate(&self, state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        rules::validate(state, self.player, self.enclosure, self.species, self.slot)
    }

    fn apply(&self, state: &mut MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        if !state.player_mut(self.player).hand.mark_played(self.slot) {
            // Unreachable after pre_validate; kept as an error, not a panic.
            return Err(PlaceError::PieceNotInHand {
                slot: self.slot,
                species: self.species,
            });
        }
        state
            .player_mut(self.player)
            .board
            .place(self.enclosure, self.species);

        // A restriction binds exactly one placement by its target.
        *state.restrictions.get_mut(self.player) = None;
        state.turn.placed = true;
        Ok(())
    }

    fn post_validate(&self, state: &MatchState, _env: &MatchEnv<'_>) -> Result<(), Self::Error> {
        let player = state.player(self.player);
        debug_assert_eq!(
            player.hand.played_count() + player.hand.unplayed_count(),
            player.hand.len(),
            "hand slots are conserved"
        );
        debug_assert_eq!(
            player.board.total_pieces(),
            player.hand.played_count(),
            "board pieces equal played hand slots within a round"
        );
        debug_assert!(state.restrictions.get(self.player).is_none());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DiceRestriction, DieFace};
    use crate::rng::PcgRng;
    use crate::state::{Hand, MatchPhase};

    fn ready_state() -> MatchState {
        let mut state = MatchState::new(5);
        state.phase = MatchPhase::InProgress;
        state.turn.rolled = Some(DieFace::RockyZone);
        state.players.one.hand = Hand::from_species([
            Species::Trex,
            Species::Raptor,
            Species::Raptor,
            Species::Diplodocus,
            Species::Stegosaurus,
            Species::Spinosaurus,
        ]);
        state.players.two.hand = state.players.one.hand.clone();
        state
    }

    #[test]
    fn placement_moves_the_piece_and_clears_the_restriction() {
        let mut state = ready_state();
        state.restrictions.one = Some(DiceRestriction::OccupiedEnclosure);
        let env = MatchEnv::new(&PcgRng);
        let action = PlaceAction::new(PlayerId::One, EnclosureId::River, Species::Trex, 0);

        action.pre_validate(&state, &env).unwrap();
        action.apply(&mut state, &env).unwrap();
        action.post_validate(&state, &env).unwrap();

        assert_eq!(
            state.players.one.board.occupants(EnclosureId::River),
            &[Species::Trex]
        );
        assert!(state.players.one.hand.slot(0).unwrap().played);
        assert_eq!(state.restrictions.one, None);
        assert!(state.turn.placed);
    }

    #[test]
    fn rejected_placement_mutates_nothing() {
        let mut state = ready_state();
        state.restrictions.one = Some(DiceRestriction::OccupiedEnclosure);
        let env = MatchEnv::new(&PcgRng);
        let before = state.clone();
        let action = PlaceAction::new(
            PlayerId::One,
            EnclosureId::ForestTrio,
            Species::Trex,
            0,
        );

        let first = action.pre_validate(&state, &env);
        let second = action.pre_validate(&state, &env);
        assert_eq!(
            first,
            Err(PlaceError::DiceRestricted {
                enclosure: EnclosureId::ForestTrio,
                restriction: DiceRestriction::OccupiedEnclosure,
            })
        );
        assert_eq!(first, second);
        assert_eq!(state, before);
    }
}

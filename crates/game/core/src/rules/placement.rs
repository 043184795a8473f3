//! Placement legality validator.
//!
//! Pure function of `(state, move)`. Checks run in a fixed order and the
//! first failure wins, so the caller always gets the same reason for the
//! same snapshot. Nothing here mutates; the engine applies the move only
//! after validation succeeds.

use crate::catalog::{EnclosureId, PlacementRule};
use crate::dice::DiceRestriction;
use crate::state::{MatchPhase, MatchState, PlayerId, Species};

/// Reasons a placement is rejected. All are normal return values; a player
/// may retry with a different target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceError {
    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("match is not in progress")]
    NotInProgress,

    #[error("the die must be rolled before placing")]
    RollRequired,

    #[error("a piece was already placed this turn")]
    AlreadyPlaced,

    #[error("hand slot {slot} does not hold an unplayed {species}")]
    PieceNotInHand { slot: usize, species: Species },

    #[error("{enclosure} is full")]
    EnclosureFull { enclosure: EnclosureId },

    #[error("{enclosure} does not satisfy the active dice restriction")]
    DiceRestricted {
        enclosure: EnclosureId,
        restriction: DiceRestriction,
    },

    #[error("{species} conflicts with the pieces already in {enclosure}")]
    SpeciesConflict {
        enclosure: EnclosureId,
        species: Species,
    },
}

/// Validates a candidate placement against the full rule set.
///
/// Check order is part of the contract:
/// turn → phase → roll/placement progress → hand slot → capacity →
/// dice restriction → enclosure species rule.
pub fn validate(
    state: &MatchState,
    player: PlayerId,
    enclosure: EnclosureId,
    species: Species,
    slot: usize,
) -> Result<(), PlaceError> {
    let current = state.current_player();
    if player != current {
        return Err(PlaceError::NotYourTurn { player, current });
    }
    if state.phase != MatchPhase::InProgress {
        return Err(PlaceError::NotInProgress);
    }
    if state.turn.rolled.is_none() {
        return Err(PlaceError::RollRequired);
    }
    if state.turn.placed {
        return Err(PlaceError::AlreadyPlaced);
    }

    match state.player(player).hand.slot(slot) {
        Some(held) if !held.played && held.species == species => {}
        _ => return Err(PlaceError::PieceNotInHand { slot, species }),
    }

    let def = enclosure.definition();
    let board = &state.player(player).board;
    let occupants = board.occupants(enclosure);

    if !def.capacity.admits(occupants.len()) {
        return Err(PlaceError::EnclosureFull { enclosure });
    }

    // The river is exempt from dice restrictions; `allows` encodes that.
    if let Some(restriction) = *state.restrictions.get(player)
        && !restriction.allows(board, enclosure)
    {
        return Err(PlaceError::DiceRestricted {
            enclosure,
            restriction,
        });
    }

    match def.rule {
        PlacementRule::UniformSpecies => {
            if occupants.iter().any(|&present| present != species) {
                return Err(PlaceError::SpeciesConflict { enclosure, species });
            }
        }
        PlacementRule::DistinctSpecies => {
            if occupants.contains(&species) {
                return Err(PlaceError::SpeciesConflict { enclosure, species });
            }
        }
        PlacementRule::MaxCount(cap) => {
            // Redundant with capacity, kept as the named rule scoring keys on.
            if occupants.len() >= cap as usize {
                return Err(PlaceError::EnclosureFull { enclosure });
            }
        }
        PlacementRule::Unrestricted | PlacementRule::PerPieceScore => {}
    }

    Ok(())
}

//! Scoring engine.
//!
//! Pure table-driven scoring over boards. Round scores are computed once at
//! round end and accumulated onto the match; the winner is whoever holds the
//! strictly higher total after the final round.

use strum::IntoEnumIterator;

use crate::catalog::EnclosureId;
use crate::state::{Board, MatchPhase, MatchState, PerPlayer, PlayerId, Species, Winner};

/// Points by occupant count for the uniform-species meadow.
const PROGRESSIVE_MEADOW_TABLE: [u32; 7] = [0, 2, 4, 8, 12, 18, 24];

/// Points by occupant count for the distinct-species food court.
const FOOD_COURT_TABLE: [u32; 7] = [0, 1, 3, 6, 10, 15, 21];

/// Points for a full trio and for holding the crown or a lone resident.
const BONUS_POINTS: u32 = 7;

/// Points per same-species pair in the paired meadow.
const PAIR_POINTS: u32 = 5;

/// Scores one enclosure on `board`. The opponent's board is consulted only
/// where the rules compare occupant counts (king of the jungle).
pub fn score_enclosure(enclosure: EnclosureId, board: &Board, opponent: &Board) -> u32 {
    let occupants = board.occupants(enclosure);
    match enclosure {
        EnclosureId::ProgressiveMeadow => progressive(&PROGRESSIVE_MEADOW_TABLE, occupants.len()),
        EnclosureId::FoodCourt => progressive(&FOOD_COURT_TABLE, occupants.len()),
        EnclosureId::ForestTrio => {
            if occupants.len() == 3 {
                BONUS_POINTS
            } else {
                0
            }
        }
        EnclosureId::KingOfTheJungle => {
            // 0 >= 0 holds, so an empty-on-both-sides crown scores for both.
            if occupants.len() >= opponent.occupants(enclosure).len() {
                BONUS_POINTS
            } else {
                0
            }
        }
        EnclosureId::SolitaryIsland => match occupants {
            [species] if board.species_total(*species) == 1 => BONUS_POINTS,
            _ => 0,
        },
        EnclosureId::PairedMeadow => Species::iter()
            .map(|species| {
                let count = occupants.iter().filter(|&&piece| piece == species).count();
                (count as u32 / 2) * PAIR_POINTS
            })
            .sum(),
        EnclosureId::River => occupants.len() as u32,
    }
}

/// Sum over all enclosures of one board.
pub fn score_board(board: &Board, opponent: &Board) -> u32 {
    EnclosureId::ALL
        .iter()
        .map(|&enclosure| score_enclosure(enclosure, board, opponent))
        .sum()
}

/// Scores the current round's boards for both seats.
pub fn score_round(state: &MatchState) -> PerPlayer<u32> {
    let one = &state.players.one.board;
    let two = &state.players.two.board;
    PerPlayer::new(score_board(one, two), score_board(two, one))
}

/// Match totals plus the winner once the match has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSheet {
    /// Accumulated totals; for an in-progress match the current round's
    /// boards are included as a live preview.
    pub totals: PerPlayer<u32>,
    /// Set only for finished matches.
    pub winner: Option<Winner>,
}

/// Computes the score sheet for a match in any phase.
pub fn score_match(state: &MatchState) -> ScoreSheet {
    let mut totals = PerPlayer::new(state.players.one.score, state.players.two.score);
    if state.phase == MatchPhase::InProgress {
        let live = score_round(state);
        totals.one += live.one;
        totals.two += live.two;
    }
    let winner = if state.phase == MatchPhase::Finished {
        Some(decide_winner(&totals))
    } else {
        None
    };
    ScoreSheet { totals, winner }
}

/// Strictly higher total wins; equal totals tie.
pub(crate) fn decide_winner(totals: &PerPlayer<u32>) -> Winner {
    use std::cmp::Ordering;
    match totals.one.cmp(&totals.two) {
        Ordering::Greater => Winner::Player(PlayerId::One),
        Ordering::Less => Winner::Player(PlayerId::Two),
        Ordering::Equal => Winner::Tie,
    }
}

fn progressive(table: &[u32; 7], count: usize) -> u32 {
    table[count.min(table.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(enclosure: EnclosureId, pieces: &[Species]) -> Board {
        let mut board = Board::default();
        for &species in pieces {
            board.place(enclosure, species);
        }
        board
    }

    #[test]
    fn progressive_meadow_table_values() {
        let empty = Board::default();
        assert_eq!(score_enclosure(EnclosureId::ProgressiveMeadow, &empty, &empty), 0);
        let four = board_with(
            EnclosureId::ProgressiveMeadow,
            &[Species::Trex, Species::Trex, Species::Trex, Species::Trex],
        );
        assert_eq!(score_enclosure(EnclosureId::ProgressiveMeadow, &four, &empty), 12);
        let six = board_with(EnclosureId::ProgressiveMeadow, &[Species::Trex; 6]);
        assert_eq!(score_enclosure(EnclosureId::ProgressiveMeadow, &six, &empty), 24);
    }

    #[test]
    fn food_court_table_values() {
        let empty = Board::default();
        let two = board_with(
            EnclosureId::FoodCourt,
            &[Species::Trex, Species::Raptor],
        );
        assert_eq!(score_enclosure(EnclosureId::FoodCourt, &two, &empty), 3);
        let six = board_with(
            EnclosureId::FoodCourt,
            &[
                Species::Trex,
                Species::Triceratops,
                Species::Diplodocus,
                Species::Stegosaurus,
                Species::Raptor,
                Species::Spinosaurus,
            ],
        );
        assert_eq!(score_enclosure(EnclosureId::FoodCourt, &six, &empty), 21);
    }

    #[test]
    fn trio_scores_only_exactly_three() {
        let empty = Board::default();
        let two = board_with(EnclosureId::ForestTrio, &[Species::Trex, Species::Raptor]);
        assert_eq!(score_enclosure(EnclosureId::ForestTrio, &two, &empty), 0);
        let three = board_with(
            EnclosureId::ForestTrio,
            &[Species::Trex, Species::Raptor, Species::Diplodocus],
        );
        assert_eq!(score_enclosure(EnclosureId::ForestTrio, &three, &empty), 7);
    }

    #[test]
    fn king_compares_against_the_opponent() {
        let mine = board_with(EnclosureId::KingOfTheJungle, &[Species::Trex]);
        let theirs = Board::default();
        assert_eq!(score_enclosure(EnclosureId::KingOfTheJungle, &mine, &theirs), 7);
        assert_eq!(score_enclosure(EnclosureId::KingOfTheJungle, &theirs, &mine), 0);
        // Empty on both sides scores for both.
        let empty = Board::default();
        assert_eq!(score_enclosure(EnclosureId::KingOfTheJungle, &empty, &empty), 7);
    }

    #[test]
    fn solitary_requires_uniqueness_across_the_board() {
        let empty = Board::default();
        let mut lonely = board_with(EnclosureId::SolitaryIsland, &[Species::Spinosaurus]);
        assert_eq!(score_enclosure(EnclosureId::SolitaryIsland, &lonely, &empty), 7);
        // Same species elsewhere on the board voids the bonus.
        lonely.place(EnclosureId::River, Species::Spinosaurus);
        assert_eq!(score_enclosure(EnclosureId::SolitaryIsland, &lonely, &empty), 0);
    }

    #[test]
    fn pairs_score_five_per_couple() {
        let empty = Board::default();
        let board = board_with(
            EnclosureId::PairedMeadow,
            &[
                Species::Trex,
                Species::Trex,
                Species::Trex,
                Species::Raptor,
                Species::Raptor,
                Species::Diplodocus,
            ],
        );
        // One trex pair, one raptor pair; stragglers score nothing.
        assert_eq!(score_enclosure(EnclosureId::PairedMeadow, &board, &empty), 10);
    }

    #[test]
    fn river_scores_one_per_piece() {
        let empty = Board::default();
        let board = board_with(EnclosureId::River, &[Species::Trex; 9]);
        assert_eq!(score_enclosure(EnclosureId::River, &board, &empty), 9);
    }

    #[test]
    fn board_score_sums_enclosures() {
        let empty = Board::default();
        let mut board = Board::default();
        for _ in 0..3 {
            board.place(EnclosureId::ForestTrio, Species::Raptor);
        }
        board.place(EnclosureId::River, Species::Trex);
        board.place(EnclosureId::River, Species::Trex);
        // Trio 7 + river 2 + uncontested king 7.
        assert_eq!(score_board(&board, &empty), 16);
    }

    #[test]
    fn winner_needs_a_strictly_higher_total() {
        assert_eq!(
            decide_winner(&PerPlayer::new(10, 9)),
            Winner::Player(PlayerId::One)
        );
        assert_eq!(
            decide_winner(&PerPlayer::new(3, 12)),
            Winner::Player(PlayerId::Two)
        );
        assert_eq!(decide_winner(&PerPlayer::new(7, 7)), Winner::Tie);
    }

    #[test]
    fn score_match_reports_winner_only_when_finished() {
        let mut state = MatchState::new(1);
        state.players.one.score = 12;
        state.players.two.score = 9;
        state.phase = MatchPhase::Finished;
        let sheet = score_match(&state);
        assert_eq!(sheet.totals, PerPlayer::new(12, 9));
        assert_eq!(sheet.winner, Some(Winner::Player(PlayerId::One)));

        state.phase = MatchPhase::InProgress;
        assert_eq!(score_match(&state).winner, None);
    }
}

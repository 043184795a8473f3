//! Match orchestration and action execution pipeline.
//!
//! The [`MatchEngine`] is the authoritative reducer for [`MatchState`]. It
//! validates the acting seat, drives every action through the same
//! pre-validate → apply → post-validate pipeline, settles round and match
//! completion, and reports what happened as a list of [`Effect`]s for the
//! caller to persist or render.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::Action;
use crate::catalog::EnclosureId;
use crate::config::GameConfig;
use crate::dealer;
use crate::dice::DieFace;
use crate::env::MatchEnv;
use crate::rules::scoring;
use crate::state::{Board, MatchPhase, MatchState, PerPlayer, PlayerId, Species, Winner};

use transition::ActionOutcome;

/// State changes worth reporting to the caller, in occurrence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// The opening roll moved the match from waiting into progress.
    MatchStarted,
    /// Hands were dealt for `round`.
    HandsDealt { round: u8 },
    /// The die was rolled; `constrains` names the seat the restriction
    /// binds, `None` for the unrestricted opening roll.
    DieRolled {
        player: PlayerId,
        face: DieFace,
        constrains: Option<PlayerId>,
    },
    /// A piece moved from hand to board.
    PiecePlaced {
        player: PlayerId,
        enclosure: EnclosureId,
        species: Species,
    },
    /// The turn passed to `next_player`.
    TurnEnded { next_player: PlayerId },
    /// Both hands were exhausted; round scores were accumulated.
    RoundFinished { round: u8, scores: PerPlayer<u32> },
    /// The final round finished; the match is over.
    MatchFinished {
        winner: Winner,
        totals: PerPlayer<u32>,
    },
}

/// Match engine that manages turn order, round advancement, and completion.
///
/// All state mutation flows through [`MatchEngine::execute`]. Rejected
/// actions leave the state exactly as it was; successful ones bump the
/// action nonce callers use as an optimistic version stamp.
pub struct MatchEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> MatchEngine<'a> {
    /// Creates an engine borrowing the given match state.
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    /// Executes an action through the transition pipeline.
    ///
    /// Returns the effects the action produced, in order. A placement that
    /// exhausts both hands settles the round in the same call: scores are
    /// accumulated and either the next round is set up or the match
    /// finishes with a winner.
    pub fn execute(
        &mut self,
        env: &MatchEnv<'_>,
        action: &Action,
    ) -> Result<Vec<Effect>, ExecuteError> {
        self.validate_actor(action)?;

        let outcome = transition::execute_transition(action, self.state, env)?;

        // Increment nonce after successful execution
        self.state.turn.nonce += 1;

        let mut effects = Vec::new();
        match outcome {
            ActionOutcome::Roll(roll) => {
                if roll.started {
                    effects.push(Effect::MatchStarted);
                    effects.push(Effect::HandsDealt {
                        round: self.state.turn.round,
                    });
                }
                effects.push(Effect::DieRolled {
                    player: action.actor(),
                    face: roll.face,
                    constrains: roll.constrains,
                });
            }
            ActionOutcome::Place => {
                if let Action::Place(place) = action {
                    effects.push(Effect::PiecePlaced {
                        player: place.player,
                        enclosure: place.enclosure,
                        species: place.species,
                    });
                }
                if self.state.hands_exhausted() {
                    self.settle_round(env, &mut effects);
                }
            }
            ActionOutcome::EndTurn => {
                effects.push(Effect::TurnEnded {
                    next_player: self.state.turn.current_player,
                });
            }
        }

        Ok(effects)
    }

    /// Rejects any action whose actor is not the seat expected to act.
    fn validate_actor(&self, action: &Action) -> Result<(), ExecuteError> {
        let current = self.state.turn.current_player;
        if action.actor() != current {
            return Err(ExecuteError::ActorNotCurrent {
                actor: action.actor(),
                current,
            });
        }
        Ok(())
    }

    /// Accumulates round scores and either advances to the next round or
    /// finishes the match.
    fn settle_round(&mut self, env: &MatchEnv<'_>, effects: &mut Vec<Effect>) {
        let round = self.state.turn.round;
        let scores = scoring::score_round(self.state);
        self.state.players.one.score += scores.one;
        self.state.players.two.score += scores.two;
        effects.push(Effect::RoundFinished { round, scores });

        if round >= GameConfig::TOTAL_ROUNDS {
            let totals = PerPlayer::new(self.state.players.one.score, self.state.players.two.score);
            let winner = scoring::decide_winner(&totals);
            self.state.phase = MatchPhase::Finished;
            self.state.winner = Some(winner);
            effects.push(Effect::MatchFinished { winner, totals });
        } else {
            let next = round + 1;
            self.state.turn.start_round(next);
            self.state.restrictions = PerPlayer::default();

            let hands = dealer::deal_hands(env.rng(), self.state.match_seed, next);
            self.state.players.one.hand = hands.one;
            self.state.players.two.hand = hands.two;
            self.state.players.one.board = Board::default();
            self.state.players.two.board = Board::default();
            effects.push(Effect::HandsDealt { round: next });
        }
    }
}

mod end_turn;
mod place;
mod roll;

pub use end_turn::{EndTurnAction, EndTurnError};
pub use place::PlaceAction;
pub use roll::{RollAction, RollError, RollOutcome};

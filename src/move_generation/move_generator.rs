use thiserror::Error;

use crate::game_state::checkers_types::Player;
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

/// Rejected attempts to advance a live game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveGenerationError {
    #[error("move {0} is not in the legal move set")]
    IllegalMove(Move),

    #[error("game is already decided: {winner} won")]
    GameOver { winner: Player },
}

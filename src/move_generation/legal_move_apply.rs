//! Move application.
//!
//! `apply_move` is the unchecked path used by search; `try_apply_move` is the
//! one live play goes through and rejects moves that are not in the state's
//! cached legal set.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::topology::row_of;

/// Produce the state after `mv`. The input is left untouched.
///
/// `mv` must come from `game_state.legal_moves`; anything else is a
/// programming error.
pub fn apply_move(game_state: &GameState, mv: &Move) -> GameState {
    let mut board = play_path_on_board(&game_state.board, mv);

    let landing = mv.destination();
    if let Some(piece) = board[landing as usize] {
        if piece.rank == Rank::Regular && row_of(landing) == piece.owner.back_rank() {
            board[landing as usize] = Some(piece.crowned());
        }
    }

    GameState::from_board(board, game_state.turn.opposite(), game_state.rules)
}

/// Validated variant of [`apply_move`] for live play.
pub fn try_apply_move(game_state: &GameState, mv: &Move) -> MoveGenResult<GameState> {
    if let Some(winner) = game_state.winner {
        return Err(MoveGenerationError::GameOver { winner });
    }
    if !game_state.legal_moves.contains(mv) {
        return Err(MoveGenerationError::IllegalMove(mv.clone()));
    }
    Ok(apply_move(game_state, mv))
}

/// Relocate the moving piece to the end of `mv.path` and clear every captured
/// cell. No crowning, no turn change.
pub fn play_path_on_board(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    let origin = mv.origin();
    let piece = next[origin as usize]
        .take()
        .unwrap_or_else(|| panic!("no piece on origin cell {origin} for move {mv}"));
    for &captured in &mv.captures {
        next[captured as usize] = None;
    }
    next[mv.destination() as usize] = Some(piece);
    next
}

/// Winner of a position whose legal moves are already computed.
///
/// A side with no pieces left loses. A side to move with pieces but no legal
/// move also loses. An empty board has no winner.
pub fn detect_winner(game_state: &GameState) -> Option<Player> {
    let white_left = game_state.piece_count(Player::White) > 0;
    let black_left = game_state.piece_count(Player::Black) > 0;

    match (white_left, black_left) {
        (false, false) => None,
        (false, true) => Some(Player::Black),
        (true, false) => Some(Player::White),
        (true, true) if game_state.legal_moves.is_empty() => Some(game_state.turn.opposite()),
        (true, true) => None,
    }
}

//! Capture discovery.
//!
//! Single hops are found by reflecting over an adjacent enemy piece. Chains
//! are grown by a depth-first search that replays the partial chain on a
//! scratch board and branches over every further hop from the landing cell.
//! Only leaves of that search (chains that cannot be extended) are emitted,
//! so a partial chain is never a legal move on its own.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::play_path_on_board;
use crate::moves::topology::{landing_beyond, neighbors_for_piece};

/// One-hop captures available to the piece on `origin`.
///
/// Empty unless `origin` holds a piece of the side to move.
pub fn find_single_jumps(game_state: &GameState, origin: Square) -> Vec<Move> {
    single_jumps_on_board(&game_state.board, game_state.turn, origin)
}

/// Every chain that extends `partial` by exactly one more hop.
pub fn find_continuation_jumps(game_state: &GameState, partial: &Move) -> Vec<Move> {
    continuation_jumps_on_board(&game_state.board, game_state.turn, partial)
}

/// Every maximal capture chain for the side to move, origins in board-scan order.
pub fn find_all_jump_paths(game_state: &GameState) -> Vec<Move> {
    let mut results = Vec::new();
    for (origin, piece) in game_state.occupied() {
        if piece.owner != game_state.turn {
            continue;
        }
        for jump in single_jumps_on_board(&game_state.board, game_state.turn, origin) {
            jump_dfs(&game_state.board, game_state.turn, jump, &mut results);
        }
    }
    results
}

fn jump_dfs(board: &Board, mover: Player, partial: Move, results: &mut Vec<Move>) {
    let continuations = continuation_jumps_on_board(board, mover, &partial);
    if continuations.is_empty() {
        results.push(partial);
        return;
    }
    for next in continuations {
        jump_dfs(board, mover, next, results);
    }
}

fn single_jumps_on_board(board: &Board, mover: Player, origin: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(piece) = board[origin as usize] else {
        return moves;
    };
    if piece.owner != mover {
        return moves;
    }

    for over in neighbors_for_piece(piece, origin) {
        let is_enemy = matches!(board[over as usize], Some(p) if p.owner != mover);
        if !is_enemy {
            continue;
        }
        if let Some(landing) = landing_beyond(origin, over) {
            if board[landing as usize].is_none() {
                moves.push(Move::single_jump(origin, over, landing));
            }
        }
    }
    moves
}

fn continuation_jumps_on_board(board: &Board, mover: Player, partial: &Move) -> Vec<Move> {
    let scratch = play_path_on_board(board, partial);
    single_jumps_on_board(&scratch, mover, partial.destination())
        .into_iter()
        .map(|hop| partial.extended(hop.captures[0], hop.destination()))
        .collect()
}

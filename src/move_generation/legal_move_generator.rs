//! Full legal move generation pipeline.
//!
//! Collects maximal capture chains for every piece of the side to move, then
//! either returns them alone (forced captures with at least one chain
//! available) or appends them after the simple slides. Ordering is stable:
//! origins in board-scan order, neighbors in discovery order.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_moves_jump::find_all_jump_paths;
use crate::move_generation::legal_moves_simple::generate_simple_moves;

pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let jump_paths = find_all_jump_paths(game_state);

    if game_state.rules.forced_captures && !jump_paths.is_empty() {
        return jump_paths;
    }

    let mut legal = Vec::with_capacity(jump_paths.len() + 16);
    generate_simple_moves(game_state, &mut legal);
    legal.extend(jump_paths);
    legal
}

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::moves::topology::valid_neighbors;

/// Append every one-step slide for the side to move, in board-scan order.
pub fn generate_simple_moves(game_state: &GameState, out: &mut Vec<Move>) {
    for (origin, piece) in game_state.occupied() {
        if piece.owner != game_state.turn {
            continue;
        }
        for neighbor in valid_neighbors(game_state, origin) {
            if game_state.is_empty(neighbor) {
                out.push(Move::simple(origin, neighbor));
            }
        }
    }
}

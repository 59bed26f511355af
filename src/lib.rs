//! Crate root module declarations for the Plum Checkers engine.
//!
//! Exposes the board model, move generation, search, engines, the live game
//! session, and utility helpers so binaries, benches, and external front ends
//! can import stable module paths.

pub mod game_state {
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod moves {
    pub mod move_descriptions;
    pub mod topology;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_moves_jump;
    pub mod legal_moves_simple;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod minimax;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_game_state;
}

pub use engines::difficulty::Difficulty;
pub use engines::engine_minimax::{get_ai_move, get_best_move};
pub use game_state::checkers_types::{Move, MoveKind, Piece, Player, Rank, RuleSet, Square};
pub use game_state::game_state::GameState;
pub use move_generation::legal_move_apply::{apply_move, try_apply_move};
pub use move_generation::legal_move_generator::generate_legal_moves;
pub use session::game_session::GameSession;

/// Standard starting position with its initial legal-move set.
#[inline]
pub fn initialize_game() -> GameState {
    GameState::new_game()
}

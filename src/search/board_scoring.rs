//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! so alternate heuristics can be swapped without touching the search code.
//! Scores are always taken from one named player's perspective: positive is
//! good for that player.

use crate::game_state::checkers_rules::{
    ADVANCEMENT_WEIGHT, BOARD_WIDTH, CENTER_COLUMNS, CENTER_COLUMN_BONUS, KING_VALUE,
    REGULAR_VALUE,
};
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::moves::topology::{col_of, row_of};

pub trait BoardScorer: Send + Sync {
    fn score(&self, game_state: &GameState, perspective: Player) -> f64;
}

/// Material only: regulars and kings, nothing positional.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: Piece) -> f64 {
        match piece.rank {
            Rank::Regular => REGULAR_VALUE,
            Rank::King => KING_VALUE,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState, perspective: Player) -> f64 {
        game_state
            .occupied()
            .map(|(_, piece)| signed(piece, perspective, Self::piece_value(piece)))
            .sum()
    }
}

/// Material plus advancement and center-column terms for regular pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Rows a regular piece has travelled from its own home edge.
    #[inline]
    fn advancement(owner: Player, row: u8) -> f64 {
        let rows = match owner {
            Player::White => row,
            Player::Black => BOARD_WIDTH - 1 - row,
        };
        f64::from(rows)
    }

    fn piece_score(cell: Square, piece: Piece) -> f64 {
        let mut value = MaterialScorer::piece_value(piece);
        if piece.rank == Rank::Regular {
            value += Self::advancement(piece.owner, row_of(cell)) * ADVANCEMENT_WEIGHT;
            if CENTER_COLUMNS.contains(&col_of(cell)) {
                value += CENTER_COLUMN_BONUS;
            }
        }
        value
    }
}

impl BoardScorer for HeuristicScorer {
    fn score(&self, game_state: &GameState, perspective: Player) -> f64 {
        let mut score = 0.0;
        for (cell, piece) in game_state.occupied() {
            score += signed(piece, perspective, Self::piece_score(cell, piece));
        }
        score
    }
}

#[inline]
fn signed(piece: Piece, perspective: Player, value: f64) -> f64 {
    if piece.owner == perspective {
        value
    } else {
        -value
    }
}

/// Default evaluation used by the search engine.
#[inline]
pub fn evaluate(game_state: &GameState, player: Player) -> f64 {
    HeuristicScorer.score(game_state, player)
}

//! Board snapshot for a checkers game.
//!
//! `GameState` is the central model for the engine. It stores the 64-cell
//! board, the side to move, the ruleset flags, and the derived data every
//! consumer relies on: the cached legal-move list and the winner. Any
//! constructor of a new state recomputes the derived data before handing the
//! value out, so a `GameState` in the wild is always ready for generation or
//! search.

use crate::game_state::checkers_rules::{
    is_dark_cell, BLACK_START_ROWS, BOARD_WIDTH, CELL_COUNT, WHITE_START_ROWS,
};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::detect_winner;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub rules: RuleSet,

    // --- Derived, recomputed after every turn change ---
    pub legal_moves: Vec<Move>,
    pub winner: Option<Player>,
}

impl GameState {
    /// Standard starting position with forced captures disabled.
    #[inline]
    pub fn new_game() -> Self {
        Self::new_game_with_rules(RuleSet::default())
    }

    pub fn new_game_with_rules(rules: RuleSet) -> Self {
        let mut board: Board = [None; CELL_COUNT];
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                if !is_dark_cell(row, col) {
                    continue;
                }
                let owner = if WHITE_START_ROWS.contains(&row) {
                    Player::White
                } else if BLACK_START_ROWS.contains(&row) {
                    Player::Black
                } else {
                    continue;
                };
                board[(row * BOARD_WIDTH + col) as usize] = Some(Piece::regular(owner));
            }
        }

        Self::from_board(board, Player::White, rules)
    }

    /// Build an arbitrary position. Cells not listed are empty.
    ///
    /// Panics if a cell index is off the board or listed twice.
    pub fn from_pieces(turn: Player, pieces: &[(Square, Piece)], rules: RuleSet) -> Self {
        let mut board: Board = [None; CELL_COUNT];
        for &(cell, piece) in pieces {
            assert!((cell as usize) < CELL_COUNT, "cell {cell} is off the board");
            assert!(board[cell as usize].is_none(), "cell {cell} listed twice");
            board[cell as usize] = Some(piece);
        }
        Self::from_board(board, turn, rules)
    }

    /// Attach derived data (legal moves, winner) to a raw board.
    pub fn from_board(board: Board, turn: Player, rules: RuleSet) -> Self {
        let mut state = Self {
            board,
            turn,
            rules,
            legal_moves: Vec::new(),
            winner: None,
        };
        state.refresh_derived();
        state
    }

    /// Recompute the cached legal-move set and the winner for the current turn.
    pub fn refresh_derived(&mut self) {
        self.legal_moves = generate_legal_moves(self);
        self.winner = detect_winner(self);
    }

    #[inline]
    pub fn piece_at(&self, cell: Square) -> Option<Piece> {
        self.board[cell as usize]
    }

    #[inline]
    pub fn is_empty(&self, cell: Square) -> bool {
        self.board[cell as usize].is_none()
    }

    /// True if `cell` holds a piece that does not belong to the side to move.
    #[inline]
    pub fn is_enemy(&self, cell: Square) -> bool {
        matches!(self.board[cell as usize], Some(p) if p.owner != self.turn)
    }

    /// Occupied cells in board-scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(cell, slot)| slot.map(|piece| (cell as Square, piece)))
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.occupied().filter(|(_, p)| p.owner == player).count()
    }

    #[inline]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}

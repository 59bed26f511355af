//! Canonical checkers rule constants.
//!
//! Grid geometry, starting placement, and the fixed weights used by scoring
//! and difficulty selection live here so every subsystem reads one source.

/// Width (and height) of the square grid.
pub const BOARD_WIDTH: u8 = 8;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = 64;

/// Rows initially populated by `players[0]` (White).
pub const WHITE_START_ROWS: std::ops::RangeInclusive<u8> = 0..=2;

/// Rows initially populated by `players[1]` (Black).
pub const BLACK_START_ROWS: std::ops::RangeInclusive<u8> = 5..=7;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Material weight of a regular piece.
pub const REGULAR_VALUE: f64 = 3.0;

/// Material weight of a king.
pub const KING_VALUE: f64 = 5.0;

/// Bonus per row advanced toward the opponent's back rank (regular pieces only).
pub const ADVANCEMENT_WEIGHT: f64 = 0.1;

/// Bonus for a regular piece standing on one of the two center columns.
pub const CENTER_COLUMN_BONUS: f64 = 0.3;

/// Columns counted as center for [`CENTER_COLUMN_BONUS`].
pub const CENTER_COLUMNS: std::ops::RangeInclusive<u8> = 3..=4;

/// Cell parity of playable (dark) cells: `(row + col) % 2 == DARK_PARITY`.
pub const DARK_PARITY: u8 = 0;

#[inline]
pub const fn is_dark_cell(row: u8, col: u8) -> bool {
    (row + col) % 2 == DARK_PARITY
}

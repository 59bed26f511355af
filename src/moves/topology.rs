//! Grid coordinate helpers.
//!
//! Pure row/column math over the row-major 8x8 cell index used by every
//! other subsystem.

use smallvec::SmallVec;

use crate::game_state::checkers_rules::BOARD_WIDTH;
use crate::game_state::checkers_types::*;

/// Up to four diagonal neighbors, in discovery order.
pub type Neighbors = SmallVec<[Square; 4]>;

#[inline]
pub const fn row_of(cell: Square) -> u8 {
    cell / BOARD_WIDTH
}

#[inline]
pub const fn col_of(cell: Square) -> u8 {
    cell % BOARD_WIDTH
}

/// Inverse of [`row_of`]/[`col_of`]. `None` when either coordinate is off the board.
#[inline]
pub fn cell_of(row: i8, col: i8) -> Option<Square> {
    let width = BOARD_WIDTH as i8;
    if !(0..width).contains(&row) || !(0..width).contains(&col) {
        return None;
    }
    Some((row * width + col) as Square)
}

/// Row deltas a piece may step along: forward only for regulars, both ways for kings.
#[inline]
fn row_steps(piece: Piece) -> SmallVec<[i8; 2]> {
    match piece.rank {
        Rank::King => SmallVec::from_buf([1, -1]),
        Rank::Regular => SmallVec::from_slice(&[piece.owner.forward()]),
    }
}

/// Diagonal cells the piece on `cell` may step onto, ignoring occupancy.
///
/// Panics if `cell` is empty.
pub fn valid_neighbors(state: &GameState, cell: Square) -> Neighbors {
    let piece = state
        .piece_at(cell)
        .unwrap_or_else(|| panic!("no piece on cell {cell}"));
    neighbors_for_piece(piece, cell)
}

/// Same as [`valid_neighbors`] for a piece that need not be on a live state's board.
pub fn neighbors_for_piece(piece: Piece, cell: Square) -> Neighbors {
    let (row, col) = (row_of(cell) as i8, col_of(cell) as i8);

    let mut out = Neighbors::new();
    for dr in row_steps(piece) {
        for dc in [1i8, -1] {
            if let Some(neighbor) = cell_of(row + dr, col + dc) {
                out.push(neighbor);
            }
        }
    }
    out
}

/// Cell reached by continuing from `origin` over `over` by the same diagonal delta.
#[inline]
pub fn landing_beyond(origin: Square, over: Square) -> Option<Square> {
    let dr = row_of(over) as i8 - row_of(origin) as i8;
    let dc = col_of(over) as i8 - col_of(origin) as i8;
    cell_of(row_of(origin) as i8 + dr * 2, col_of(origin) as i8 + dc * 2)
}

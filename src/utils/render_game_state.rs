//! Terminal-oriented text board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! interactive binary. Row 7 is drawn at the top so White advances upward.

use crate::game_state::checkers_rules::{is_dark_cell, BOARD_WIDTH};
use crate::game_state::{checkers_types::*, game_state::GameState};

/// Render the live board of `game_state`.
pub fn render_game_state(game_state: &GameState) -> String {
    render_board(&game_state.board)
}

/// Render any board. Dark empty cells show `.`, light cells stay blank, and
/// each row is prefixed with the index of its first cell.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("     0 1 2 3 4 5 6 7\n");
    for row in (0..BOARD_WIDTH).rev() {
        out.push_str(&format!("{:>3}  ", row * BOARD_WIDTH));
        for col in 0..BOARD_WIDTH {
            let cell = (row * BOARD_WIDTH + col) as usize;
            let ch = match board[cell] {
                Some(piece) => piece_to_char(piece),
                None if is_dark_cell(row, col) => '.',
                None => ' ',
            };
            out.push(ch);
            if col + 1 < BOARD_WIDTH {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

fn piece_to_char(piece: Piece) -> char {
    match (piece.owner, piece.rank) {
        (Player::White, Rank::Regular) => 'w',
        (Player::White, Rank::King) => 'W',
        (Player::Black, Rank::Regular) => 'b',
        (Player::Black, Rank::King) => 'B',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::checkers_types::{Piece, Player, RuleSet};
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_renders_both_camps() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "     0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], " 56    b   b   b   b");
        assert_eq!(lines[4], " 32  .   .   .   .  ");
        assert_eq!(lines[8], "  0  w   w   w   w  ");
    }

    #[test]
    fn kings_render_in_upper_case() {
        let game = GameState::from_pieces(
            Player::White,
            &[
                (0, Piece::king(Player::White)),
                (63, Piece::king(Player::Black)),
            ],
            RuleSet::default(),
        );
        let text = render_game_state(&game);
        assert!(text.contains('W'));
        assert!(text.contains('B'));
        assert!(!text.contains('w'));
    }
}

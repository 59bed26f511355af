/// Core value types shared by the board model, move generation, and search.
///
/// Pieces are a compact `(owner, rank)` pair so the hot paths (generation and
/// scoring run per cell, per ply) never parse or allocate.

pub use crate::game_state::game_state::GameState;
pub use crate::moves::move_descriptions::{Move, MoveKind};

/// Linear cell index (`0..=63`), row-major.
pub type Square = u8;

/// One slot per cell; `None` is an empty cell.
pub type Board = [Option<Piece>; 64];

/// Player identity. `White` is `players[0]` and always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a forward step: White advances toward row 7, Black toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Row on which this player's regular pieces are crowned.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Regular,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn regular(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::Regular,
        }
    }

    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    #[inline]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }
}

/// Ruleset flags fixed at game creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// When any capture exists, non-capturing moves are illegal.
    pub forced_captures: bool,
}

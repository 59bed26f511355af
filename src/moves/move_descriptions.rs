//! Move representation.
//!
//! A move is the full path a piece travels in one turn plus the cells it
//! captured along the way. Paths and captures live inline for the common
//! short cases so generation and search do not allocate per move.

use std::fmt;

use smallvec::SmallVec;

use crate::game_state::checkers_types::Square;

pub type MovePath = SmallVec<[Square; 8]>;
pub type CaptureList = SmallVec<[Square; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Regular,
    Jump,
}

/// One legal turn.
///
/// `path[0]` is the origin and the last element is the final landing cell.
/// For jumps, `captures[i]` is the cell jumped over between `path[i]` and
/// `path[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub path: MovePath,
    pub captures: CaptureList,
    pub kind: MoveKind,
}

impl Move {
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            path: SmallVec::from_slice(&[from, to]),
            captures: CaptureList::new(),
            kind: MoveKind::Regular,
        }
    }

    pub fn single_jump(from: Square, over: Square, to: Square) -> Self {
        Self {
            path: SmallVec::from_slice(&[from, to]),
            captures: SmallVec::from_slice(&[over]),
            kind: MoveKind::Jump,
        }
    }

    /// Extend a jump by one more hop.
    pub fn extended(&self, over: Square, to: Square) -> Self {
        debug_assert_eq!(self.kind, MoveKind::Jump);
        let mut next = self.clone();
        next.path.push(to);
        next.captures.push(over);
        next
    }

    #[inline]
    pub fn origin(&self) -> Square {
        self.path[0]
    }

    #[inline]
    pub fn destination(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        self.kind == MoveKind::Jump
    }

    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }

    /// True if `self` is a jump whose path strictly prefixes `other`'s.
    pub fn is_strict_prefix_of(&self, other: &Move) -> bool {
        self.path.len() < other.path.len() && other.path.starts_with(&self.path)
    }
}

/// `12-21` for slides, `12x30x44` for jump chains.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.kind {
            MoveKind::Regular => "-",
            MoveKind::Jump => "x",
        };
        for (i, cell) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

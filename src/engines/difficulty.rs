//! Difficulty levels and their fixed search depths.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium, hard, or expert)")]
pub struct DifficultyParseError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    #[inline]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Lenient lookup: unknown labels degrade to [`Difficulty::Medium`].
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|err: DifficultyParseError| {
            warn!(%err, "falling back to medium difficulty");
            Difficulty::Medium
        })
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DifficultyParseError(s.to_owned()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, DifficultyParseError};

    #[test]
    fn labels_map_to_fixed_depths() {
        let depths: Vec<u8> = ["easy", "medium", "hard", "expert"]
            .iter()
            .map(|l| Difficulty::from_label(l).depth())
            .collect();
        assert_eq!(depths, vec![2, 4, 6, 8]);
    }

    #[test]
    fn unknown_label_falls_back_to_medium() {
        assert_eq!(Difficulty::from_label("impossible"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label(""), Difficulty::Medium);
    }

    #[test]
    fn strict_parse_reports_unknown_labels() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "grandmaster".parse::<Difficulty>(),
            Err(DifficultyParseError("grandmaster".to_owned()))
        );
    }
}

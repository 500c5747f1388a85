//! Square type and coordinate parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (rank, file).
///
/// Rank 0 is Black's home rank (the top row as printed), rank 7 is White's.
/// The fields are public so off-board squares are representable; use
/// [`Square::is_on_board`] or [`Square::new`] before indexing a board with one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Step by a signed (rank, file) delta, returning `None` off the board.
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0 as isize + dr;
        let file = self.1 as isize + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order, starting at (0,0).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square(idx / 8, idx % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

/// Parses the `(row, column)` convention: `"6 4"`, `"6,4"` or `"(6,4)"`.
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let trimmed = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let rank: usize = parts[0].parse().map_err(|_| invalid())?;
        let file: usize = parts[1].parse().map_err(|_| invalid())?;
        Square::try_from((rank, file))
    }
}

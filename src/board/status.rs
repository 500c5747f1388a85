//! Terminal-state detection: check, checkmate, stalemate and king capture.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The loser had no legal move left
    Checkmate { winner: Color },
    /// Draw
    Stalemate,
    /// The loser's king was taken off the board
    KingCaptured { winner: Color },
}

impl Outcome {
    /// Winning side, `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::KingCaptured { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Checkmate! {winner} wins"),
            Outcome::Stalemate => write!(f, "Stalemate! The game is a draw"),
            Outcome::KingCaptured { winner } => write!(f, "King captured! {winner} wins"),
        }
    }
}

impl Board {
    /// True if some piece of the opponent can legally move onto `color`'s king.
    ///
    /// A board without a king of `color` is reported as not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return false;
        };
        let attacker = color.opponent();
        self.pieces(attacker)
            .any(|(from, _)| self.is_legal(from, king, attacker))
    }

    /// True when `color` has no legal move.
    ///
    /// Identical to [`Board::is_stalemate`]: check status is not consulted, so
    /// callers that need to tell the two apart must also ask
    /// [`Board::is_in_check`].
    pub fn is_checkmate(&self, color: Color) -> bool {
        !self.has_legal_move(color)
    }

    /// True when `color` has no legal move. See [`Board::is_checkmate`].
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.has_legal_move(color)
    }

    pub fn is_king_captured(&self, color: Color) -> bool {
        self.find_king(color).is_none()
    }

    /// Outcome after `mover` has played, if the game is over.
    ///
    /// The opponent is tested for checkmate, then stalemate, then king
    /// capture; the first that holds decides the result.
    pub fn terminal_state(&self, mover: Color) -> Option<Outcome> {
        let opponent = mover.opponent();
        if self.is_checkmate(opponent) {
            Some(Outcome::Checkmate { winner: mover })
        } else if self.is_stalemate(opponent) {
            Some(Outcome::Stalemate)
        } else if self.is_king_captured(opponent) {
            Some(Outcome::KingCaptured { winner: mover })
        } else {
            None
        }
    }
}

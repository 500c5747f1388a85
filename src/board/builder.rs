//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let pieces = Color::BOTH
            .iter()
            .flat_map(|&color| {
                board
                    .pieces(color)
                    .map(move |(sq, piece)| (sq, color, piece))
                    .collect::<Vec<_>>()
            })
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a piece on the board, replacing anything already there.
    ///
    /// Squares off the board are ignored.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        if square.is_on_board() {
            self.pieces.retain(|(sq, _, _)| *sq != square);
            self.pieces.push((square, color, piece));
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, color, piece) in self.pieces {
            board.set_piece(sq, color, piece);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_matches_new() {
        assert_eq!(BoardBuilder::starting_position().build(), Board::new());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Rook)
            .piece(Square(3, 3), Color::Black, Piece::Queen)
            .build();
        assert_eq!(board.piece_at(Square(3, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_clear_and_off_board() {
        let board = BoardBuilder::starting_position()
            .clear(Square(7, 5))
            .clear(Square(7, 6))
            .piece(Square(9, 9), Color::White, Piece::Queen)
            .build();
        assert!(board.is_empty(Square(7, 5)));
        assert!(board.is_empty(Square(7, 6)));
        assert_eq!(board.piece_count(), 30);
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8x8 mailbox board indexed `[rank][file]`.
///
/// Rank 0 holds Black's back rank in the starting position and rank 7 holds
/// White's. Accessors index the array directly: callers must pass squares
/// that are on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// Standard initial position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, file), Color::White, Piece::Pawn);
            board.set_piece(Square(7, file), Color::White, *piece);
        }
        board
    }

    /// Board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// True if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_friendly(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c == color)
    }

    /// True if `sq` holds a piece of the side opposing `color`.
    #[inline]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some((c, _)) if c != color)
    }

    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    /// Empty `sq`, returning whatever stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    /// Character view of a square: uppercase White, lowercase Black, `' '` empty.
    pub fn symbol_at(&self, sq: Square) -> char {
        match self.piece_at(sq) {
            Some((color, piece)) => piece.to_symbol(color),
            None => ' ',
        }
    }

    /// Pieces of `color` with their squares, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

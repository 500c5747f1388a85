use super::super::{Board, Color, Move, Piece, Square};

/// File the king starts on.
pub(crate) const KING_HOME_FILE: usize = 4;
/// File the king lands on when castling kingside.
pub(crate) const KINGSIDE_CASTLE_FILE: usize = 6;

impl Board {
    pub(crate) fn king_move_is_legal(&self, from: Square, to: Square, color: Color) -> bool {
        let (dr, df) = Move::new(from, to).delta();
        if dr.abs().max(df.abs()) == 1 {
            return !self.is_friendly(to, color);
        }
        self.kingside_castle_is_legal(from, to, color)
    }

    /// Kingside castling from (home, 4) to (home, 6).
    ///
    /// Only the rook's presence on (home, 7) and the two empty squares between
    /// are checked. Earlier king or rook moves and attacked squares are not.
    fn kingside_castle_is_legal(&self, from: Square, to: Square, color: Color) -> bool {
        let home = color.home_rank();
        if from != Square(home, KING_HOME_FILE) || to != Square(home, KINGSIDE_CASTLE_FILE) {
            return false;
        }
        self.piece_at(Square(home, 7)) == Some((color, Piece::Rook))
            && self.is_empty(Square(home, 5))
            && self.is_empty(Square(home, 6))
    }
}

use log::debug;

use super::{Board, Color, Move, MoveError, Piece, Square};

impl Board {
    /// Apply a move if it is legal, returning false and leaving the board
    /// untouched otherwise. Never changes whose turn it is.
    pub fn apply_move(&mut self, from: Square, to: Square, mover: Color) -> bool {
        match self.try_apply(from, to, mover) {
            Ok(_) => true,
            Err(err) => {
                debug!("invalid move for {mover}: {err}");
                false
            }
        }
    }

    /// Apply a move, explaining a refusal.
    ///
    /// On success returns the captured piece, if any. A king moving two files
    /// takes its rook along: the rook on file 7 (kingside) or 0 moves next to
    /// the king's destination before the king itself is moved.
    pub fn try_apply(
        &mut self,
        from: Square,
        to: Square,
        mover: Color,
    ) -> Result<Option<(Color, Piece)>, MoveError> {
        self.check_move(from, to, mover)?;

        let Some((color, piece)) = self.remove_piece(from) else {
            return Err(MoveError::EmptySquare { square: from });
        };

        if piece == Piece::King && from.1.abs_diff(to.1) == 2 {
            let (rook_from, rook_to) = if to.1 == 6 { (7, 5) } else { (0, 3) };
            let rook_from = Square(from.0, rook_from);
            let rook_to = Square(from.0, rook_to);
            if let Some((rook_color, rook)) = self.remove_piece(rook_from) {
                debug!("castling: rook {rook_from} -> {rook_to}");
                self.set_piece(rook_to, rook_color, rook);
            }
        }

        let captured = self.remove_piece(to);
        self.set_piece(to, color, piece);
        Ok(captured)
    }

    /// Classify why `from -> to` cannot be played by `mover`, if it cannot.
    pub(crate) fn check_move(&self, from: Square, to: Square, mover: Color) -> Result<(), MoveError> {
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(MoveError::OutOfBounds { square });
            }
        }
        match self.piece_at(from) {
            None => return Err(MoveError::EmptySquare { square: from }),
            Some((color, _)) if color != mover => {
                return Err(MoveError::NotYourPiece { square: from })
            }
            Some(_) => {}
        }
        if self.is_legal(from, to, mover) {
            Ok(())
        } else {
            Err(MoveError::IllegalMove {
                mv: Move::new(from, to),
            })
        }
    }
}

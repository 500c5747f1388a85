use super::super::{Board, Color, Move, Square};

impl Board {
    /// Pawn rule. Direction and starting rank follow `color`: single push onto
    /// an empty square, double push from the starting rank through two empty
    /// squares, or a one-step diagonal capture of an enemy piece.
    pub(crate) fn pawn_move_is_legal(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let (dr, df) = Move::new(from, to).delta();

        if df == 0 {
            if dr == dir {
                return self.is_empty(to);
            }
            if dr == 2 * dir && from.0 == color.pawn_start_rank() {
                return match from.offset(dir, 0) {
                    Some(mid) => self.is_empty(mid) && self.is_empty(to),
                    None => false,
                };
            }
            return false;
        }

        // no en passant: the diagonal step needs a piece to take
        df.abs() == 1 && dr == dir && self.is_enemy(to, color)
    }
}

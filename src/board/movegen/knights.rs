use super::super::{Board, Color, Move, Square};

impl Board {
    pub(crate) fn knight_move_is_legal(&self, from: Square, to: Square, color: Color) -> bool {
        let (dr, df) = Move::new(from, to).delta();
        let jump = matches!((dr.abs(), df.abs()), (2, 1) | (1, 2));
        jump && !self.is_friendly(to, color)
    }
}

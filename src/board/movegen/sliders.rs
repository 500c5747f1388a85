use super::super::{Board, Color, Move, Square};

/// Type of sliding piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

/// Squares strictly between two squares on a shared rank, file or diagonal.
///
/// Yields nothing useful for squares that are not aligned; callers check the
/// shape of the move first.
pub(crate) fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (dr, df) = Move::new(from, to).delta();
    let (step_r, step_f) = (dr.signum(), df.signum());
    let distance = dr.abs().max(df.abs());
    (1..distance).map(move |i| {
        Square(
            (from.0 as isize + step_r * i) as usize,
            (from.1 as isize + step_f * i) as usize,
        )
    })
}

impl Board {
    pub(crate) fn slider_move_is_legal(
        &self,
        from: Square,
        to: Square,
        color: Color,
        slider: SliderType,
    ) -> bool {
        let (dr, df) = Move::new(from, to).delta();
        let diagonal = dr != 0 && dr.abs() == df.abs();
        let straight = (dr == 0) != (df == 0);

        let shape = match slider {
            SliderType::Bishop => diagonal,
            SliderType::Rook => straight,
            SliderType::Queen => diagonal || straight,
        };

        shape && self.path_is_clear(from, to) && !self.is_friendly(to, color)
    }

    /// True if every square strictly between `from` and `to` is empty.
    pub(crate) fn path_is_clear(&self, from: Square, to: Square) -> bool {
        between(from, to).all(|sq| self.is_empty(sq))
    }
}

use super::{Board, Color, Square};

impl Board {
    /// Static material count: White material minus Black material.
    pub fn material_balance(&self) -> i32 {
        Square::all()
            .filter_map(|sq| self.piece_at(sq))
            .map(|(color, piece)| color.sign() * piece.value())
            .sum()
    }

    /// Material balance from `color`'s point of view.
    pub fn material_for(&self, color: Color) -> i32 {
        color.sign() * self.material_balance()
    }
}

//! FEN piece-placement import and export.
//!
//! The first FEN rank is Black's home rank, which is rank 0 of [`Board`], so
//! placement rows map onto board ranks in order.

use super::{Board, Color, FenError, Piece, Square};

impl Board {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read; side to move,
    /// castling and the clocks are ignored.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidRankCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank, files: file });
            }
            if file < 8 {
                return Err(FenError::TooFewFiles { rank, files: file });
            }
        }
        Ok(board)
    }

    /// Serialize the board as a FEN piece-placement field.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(72);
        for rank in 0..8 {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_symbol(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank < 7 {
                fen.push('/');
            }
        }
        fen
    }
}

/// Parse the optional side-to-move field (`w` or `b`, White when absent).
pub(crate) fn parse_side_to_move(fen: &str) -> Result<Color, FenError> {
    match fen.split_whitespace().nth(1) {
        None | Some("w") => Ok(Color::White),
        Some("b") => Ok(Color::Black),
        Some(other) => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}

use std::env;

use chess_core::board::{Board, Color, Square};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <fen-placement> [w|b] [rank,file]");
        return;
    }

    let board = match Board::from_fen(&args[1]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let color = if args.get(2).map(String::as_str) == Some("b") {
        Color::Black
    } else {
        Color::White
    };

    let legal_moves = match args.get(3).map(|s| s.parse::<Square>()) {
        Some(Ok(square)) => board.legal_moves_from(square, color),
        Some(Err(err)) => {
            eprintln!("{err}");
            return;
        }
        None => board.legal_moves(color),
    };
    println!("side: {color}");
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", board.is_in_check(color));
    println!("checkmate: {}", board.is_checkmate(color));
    println!("stalemate: {}", board.is_stalemate(color));
    println!("king_captured: {}", board.is_king_captured(color));
    for mv in &legal_moves {
        println!("{mv}");
    }
}

//! Policy-against-policy games.

use log::{info, warn};

use super::config::SelfPlayConfig;
use super::controller::Game;
use super::selector::{MaterialSelector, MoveSelector, RandomSelector};
use crate::board::{Color, MoveError, Outcome};

/// Summary of a finished self-play run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayReport {
    /// `None` when the ply cap was reached first
    pub outcome: Option<Outcome>,
    pub plies: usize,
    pub final_fen: String,
}

/// Play `white` against `black` from `game`'s position until an outcome or
/// `max_plies` moves.
pub fn play_out(
    mut game: Game,
    white: &mut dyn MoveSelector,
    black: &mut dyn MoveSelector,
    max_plies: usize,
) -> Result<SelfPlayReport, MoveError> {
    while !game.is_over() && game.ply() < max_plies {
        let selector: &mut dyn MoveSelector = match game.side_to_move() {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let mover = game.side_to_move();
        let ply = game.ply();
        game.play_selected(selector)?;
        if game.ply() > ply {
            if let Some(mv) = game.last_move() {
                info!("{:>3}. {mover} {mv}", game.ply());
            }
        }
    }
    if !game.is_over() {
        warn!("no result after {max_plies} plies");
    }
    Ok(SelfPlayReport {
        outcome: game.outcome(),
        plies: game.ply(),
        final_fen: game.board().to_fen(),
    })
}

/// Random White against the material policy as Black, from the initial
/// position.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<SelfPlayReport, MoveError> {
    let mut white = RandomSelector::new(&config.selector_config(0));
    let mut black = MaterialSelector::new(&config.selector_config(1));
    play_out(Game::new(), &mut white, &mut black, config.max_plies)
}

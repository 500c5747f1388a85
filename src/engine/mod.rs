//! Game driving on top of the board rules.
//!
//! [`Game`] owns the board and the turn, applies moves and decides when the
//! game is over. Move choice is delegated to a [`MoveSelector`] policy.

mod config;
mod controller;
mod selector;
mod selfplay;

pub use config::{ConfigError, SelectorConfig, SelfPlayConfig, DEFAULT_MAX_PLIES};
pub use controller::Game;
pub use selector::{MaterialSelector, MoveSelector, RandomSelector};
pub use selfplay::{play_out, run_self_play, SelfPlayReport};

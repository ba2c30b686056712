mod bitgrid;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod placement;
mod player;
mod player_ai;
mod player_cli;
pub mod render;
mod ship;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, parse_level};
pub use placement::*;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;

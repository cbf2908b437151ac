//! Core engine: a reshaping board under gravity, clockwise rotation with
//! re-settling, five-in-a-row detection, and the turn coordinator.

mod board;
pub mod gravity;
mod history;
mod player;
pub mod rotation;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use history::{Move, MoveLog};
pub use player::Player;
pub use rotation::Rotation;
pub use state::{
    FallbackReason, Game, GameOutcome, GameRules, Phase, TurnReport, DEFAULT_ROTATION_INTERVAL,
};
pub use win::{has_five_in_row, WIN_LENGTH};

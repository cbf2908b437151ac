//! Board presentation: a plain-text renderer shared with the model prompts,
//! and a terminal UI for playing against a move provider.

mod app;
pub mod board_widget;
mod game_view;
mod text;

pub use app::App;
pub use text::{board_to_string, NullRenderer, Renderer, TextRenderer};

//! # Rotating Connect Five
//!
//! Connect Five on a board that turns 90° clockwise every few moves. After
//! each turn the pieces fall again, so the board's shape and contents both
//! change. Moves come from a human, a random fallback, or language models.
//!
//! ## Modules
//!
//! - [`game`] — Core engine: board, gravity, rotation, win detection, turn coordinator
//! - [`ai`] — Move providers: random, human, OpenAI and Anthropic chat models
//! - [`arena`] — Headless match loop between two providers
//! - [`ui`] — Text renderer and terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;

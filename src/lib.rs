//! # Connect Four
//!
//! Two-player Connect Four on the classic 6x7 board, playable from a plain
//! console or a Ratatui terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board rules, symbols, match controller
//! - [`ui`] — Console and terminal UI frontends
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

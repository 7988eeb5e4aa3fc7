//! Core Connect Four logic: the board and its rules, player symbols, and the
//! match controller that drives turns through a frontend.

mod board;
pub mod controller;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use controller::{
    ColumnChoice, Frontend, InputSource, MatchController, Notice, Notifier, Presenter, Prompt,
    TurnResult,
};
pub use player::Symbol;
pub use state::{MatchOutcome, MatchState};

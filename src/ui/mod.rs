//! Frontends for the match controller: a line-based console and a
//! full-screen terminal UI.

pub mod board_widget;
pub mod console;
pub mod tui;

pub use console::ConsoleFrontend;
pub use tui::TuiFrontend;

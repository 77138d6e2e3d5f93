//! Terminal front-end for Brix tic-tac-toe.
//!
//! Menus for board size and mode, a keyboard-driven board, light and dark
//! themes, and a delayed reply from the scripted opponent. Game rules live
//! in [`brix_tictactoe`]; this crate only turns key presses into engine
//! calls and draws the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;
mod theme;
mod timer;
pub mod ui;

pub use app::{App, AppCommand, Screen};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, OpponentConfig};
pub use input::move_cursor;
pub use logging::init as init_logging;
pub use terminal::TerminalGuard;
pub use theme::{Palette, Theme};
pub use timer::OpponentTimer;

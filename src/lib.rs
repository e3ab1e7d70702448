//! Noughts - tic-tac-toe against the computer.
//!
//! The game logic lives in [`noughts_engine`]; this crate adds what a
//! runnable program needs around it.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Logging**: tracing to a file while the TUI runs, stderr otherwise
//! - **TUI**: terminal front-end that schedules the computer's replies
//! - **Simulate**: headless games for exercising the opponent
//!
//! # Example
//!
//! ```
//! use noughts::simulate;
//!
//! let tally = simulate::run_seeded(10, Some(1));
//! assert_eq!(tally.total(), 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod simulate;
pub mod tui;

pub use config::{AppConfig, ConfigError};

// Crate-level exports - engine types
pub use noughts_engine::{
    Board, Cell, ComputerTurn, Game, GameSession, GameStatus, IgnoreReason, Move, MoveReport,
    MoveSelector, Player, Position, RandomSource, ScriptedRandom, SeededRandom, Snapshot,
    StatusView,
};

//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the state machine and the move selector share one definition
//! of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, find_winner, winning_line};

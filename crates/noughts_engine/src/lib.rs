//! Tic-tac-toe engine for a human playing against the computer.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over the 8 lines
//! - **Selector**: greedy one-ply computer opponent with injectable randomness
//! - **Game**: state machine that ignores out-of-turn or illegal moves
//! - **Session**: game plus opponent, the surface a front-end talks to
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameSession, ScriptedRandom, StatusView};
//!
//! let mut session = GameSession::new(ScriptedRandom::new(vec![0]));
//! let turn = session.handle_cell_select(0).expect("computer to move");
//! assert_eq!(session.status_view(), StatusView::ComputerThinking);
//!
//! // The caller decides when the computer plays.
//! session.apply_scheduled(turn);
//! assert_eq!(session.status_view(), StatusView::HumanTurn);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod selector;
mod session;
mod status;
mod types;

pub use action::{IgnoreReason, Move, MoveReport};
pub use game::{Game, GameStatus};
pub use position::Position;
pub use selector::{
    Choice, MoveSelector, RandomSource, Rule, ScriptedRandom, SeededRandom, completing_move,
};
pub use session::{ComputerTurn, GameSession, Snapshot};
pub use status::StatusView;
pub use types::{Board, Cell, Player};

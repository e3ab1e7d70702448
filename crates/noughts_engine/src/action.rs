//! First-class move events.
//!
//! Moves are domain events: the game records them in its history and reports
//! them back to the caller. A move that cannot be applied is not an error;
//! the game reports why it was ignored and leaves its state untouched.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{player} -> {position}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

/// Why a requested move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The index does not name a cell (0-8).
    #[display("index {} is off the board", _0)]
    OutOfRange(usize),
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// It is the other player's turn.
    #[display("it is not {}'s turn", _0)]
    WrongTurn(Player),
    /// The game has already been won or drawn.
    #[display("the game is already over")]
    GameOver,
    /// A scheduled computer move was issued before the last reset.
    #[display("the scheduled move belongs to an earlier game")]
    Stale,
}

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveReport {
    /// The move was placed on the board.
    #[display("applied {}", _0)]
    Applied(Move),
    /// The move was a no-op.
    #[display("ignored: {}", _0)]
    Ignored(IgnoreReason),
}

impl MoveReport {
    /// True if the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveReport::Applied(_))
    }

    /// The applied move, if any.
    pub fn applied(&self) -> Option<Move> {
        match self {
            MoveReport::Applied(mv) => Some(*mv),
            MoveReport::Ignored(_) => None,
        }
    }
}

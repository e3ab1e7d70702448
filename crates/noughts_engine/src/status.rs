//! Status messages derived from the game state.

use super::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// The distinct situations a front-end has to describe.
///
/// Always derived from a [`GameStatus`]; never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum StatusView {
    /// Waiting for the human.
    #[display("Your move (X)")]
    HumanTurn,
    /// A computer move is due.
    #[display("Computer is thinking...")]
    ComputerThinking,
    /// The human completed a line.
    #[display("You win!")]
    HumanWon,
    /// The computer completed a line.
    #[display("Computer wins!")]
    ComputerWon,
    /// Full board, no line.
    #[display("Draw!")]
    Draw,
}

impl From<GameStatus> for StatusView {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress {
                to_move: Player::Human,
            } => StatusView::HumanTurn,
            GameStatus::InProgress {
                to_move: Player::Computer,
            } => StatusView::ComputerThinking,
            GameStatus::Won {
                winner: Player::Human,
                ..
            } => StatusView::HumanWon,
            GameStatus::Won {
                winner: Player::Computer,
                ..
            } => StatusView::ComputerWon,
            GameStatus::Draw => StatusView::Draw,
        }
    }
}

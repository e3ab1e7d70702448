//! History consistency: the move list and the board describe the same game.

use super::super::{Cell, Game};
use super::Invariant;

/// Invariant: every recorded move is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let filled = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        filled == game.history().len()
            && game
                .history()
                .iter()
                .all(|mv| game.board().get(mv.position) == Cell::Occupied(mv.player))
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}

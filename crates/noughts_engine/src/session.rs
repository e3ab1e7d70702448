//! The embeddable game session.
//!
//! A [`GameSession`] pairs a [`Game`] with the computer's [`MoveSelector`]
//! and is the whole surface a front-end needs: read the board and status,
//! forward cell selections, redeem computer turns, reset.
//!
//! The session owns no timers. When a human move hands the turn to the
//! computer, [`handle_cell_select`](GameSession::handle_cell_select) returns a
//! [`ComputerTurn`] ticket; the caller redeems it with
//! [`apply_scheduled`](GameSession::apply_scheduled) whenever it likes. A
//! ticket issued before a [`reset`](GameSession::reset) is stale and is
//! ignored.

use super::action::{IgnoreReason, MoveReport};
use super::selector::{MoveSelector, RandomSource, SeededRandom};
use super::{Board, Cell, Game, GameStatus, Player, Position, StatusView};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ticket for a computer move owed in a particular game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTurn {
    epoch: u64,
}

impl ComputerTurn {
    /// The game generation this ticket belongs to.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Read-only view of a session for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub cells: [Cell; 9],
    /// Outcome and turn.
    pub status: GameStatus,
    /// Which message to show.
    pub view: StatusView,
    /// The message text.
    pub message: String,
    /// Cells to highlight after a win.
    pub winning_line: Option<[Position; 3]>,
}

/// A human-vs-computer game with its computer opponent.
#[derive(Debug, Clone)]
pub struct GameSession<R = SeededRandom> {
    game: Game,
    selector: MoveSelector<R>,
}

impl GameSession<SeededRandom> {
    /// Session whose tie-breaks come from `seed`, or from entropy if `None`.
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(SeededRandom::from_optional_seed(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Creates a session drawing tie-breaks from `random`.
    pub fn new(random: R) -> Self {
        Self {
            game: Game::new(),
            selector: MoveSelector::new(random),
        }
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Copy of the current board.
    pub fn board(&self) -> Board {
        *self.game.board()
    }

    /// Current outcome and turn.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Which status message applies.
    pub fn status_view(&self) -> StatusView {
        self.game.status().into()
    }

    /// The ticket for the computer move currently owed, if any.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        (self.game.status().to_move() == Some(Player::Computer)).then_some(ComputerTurn {
            epoch: self.game.epoch(),
        })
    }

    /// Handles the human selecting cell `index`.
    ///
    /// Returns a ticket when the move was accepted and the computer is now to
    /// move. Rejected selections change nothing and return `None`.
    #[instrument(skip(self))]
    pub fn handle_cell_select(&mut self, index: usize) -> Option<ComputerTurn> {
        if self.game.apply_human_move(index).is_applied() {
            self.pending_computer_turn()
        } else {
            None
        }
    }

    /// Plays the computer move owed by `turn`.
    ///
    /// Ignored if the session was reset after the ticket was issued, or if
    /// the computer is no longer to move.
    #[instrument(skip(self))]
    pub fn apply_scheduled(&mut self, turn: ComputerTurn) -> MoveReport {
        if turn.epoch != self.game.epoch() {
            debug!(current = self.game.epoch(), "Stale computer turn dropped");
            return MoveReport::Ignored(IgnoreReason::Stale);
        }
        self.game.apply_computer_move(&mut self.selector)
    }

    /// Starts a new game. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let status = self.game.status();
        let view = StatusView::from(status);
        Snapshot {
            cells: *self.game.board().cells(),
            status,
            view,
            message: view.to_string(),
            winning_line: status.winning_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedRandom;

    fn session() -> GameSession<ScriptedRandom> {
        GameSession::new(ScriptedRandom::new(vec![0]))
    }

    #[test]
    fn test_select_issues_ticket() {
        let mut session = session();
        let turn = session.handle_cell_select(0).expect("computer owes a move");
        assert_eq!(session.status_view(), StatusView::ComputerThinking);
        assert!(session.apply_scheduled(turn).is_applied());
        assert_eq!(session.status_view(), StatusView::HumanTurn);
    }

    #[test]
    fn test_rejected_select_issues_nothing() {
        let mut session = session();
        assert_eq!(session.handle_cell_select(42), None);
        let turn = session.handle_cell_select(0).unwrap();
        assert_eq!(session.handle_cell_select(1), None);
        assert_eq!(session.pending_computer_turn(), Some(turn));
    }

    #[test]
    fn test_ticket_redeems_once() {
        let mut session = session();
        let turn = session.handle_cell_select(0).unwrap();
        assert!(session.apply_scheduled(turn).is_applied());
        assert_eq!(
            session.apply_scheduled(turn),
            MoveReport::Ignored(IgnoreReason::WrongTurn(Player::Computer))
        );
    }

    #[test]
    fn test_reset_makes_ticket_stale() {
        let mut session = session();
        let turn = session.handle_cell_select(0).unwrap();
        session.reset();
        assert_eq!(session.apply_scheduled(turn), MoveReport::Ignored(IgnoreReason::Stale));
        assert_eq!(session.board(), Board::new());
        assert_eq!(session.status(), GameStatus::INITIAL);
    }

    #[test]
    fn test_stale_ticket_cannot_play_into_new_game() {
        let mut session = session();
        let old = session.handle_cell_select(0).unwrap();
        session.reset();
        let current = session.handle_cell_select(8).unwrap();
        assert_ne!(old, current);

        assert_eq!(session.apply_scheduled(old), MoveReport::Ignored(IgnoreReason::Stale));
        assert_eq!(session.game().history().len(), 1);
        assert!(session.apply_scheduled(current).is_applied());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = session();
        session.handle_cell_select(4);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.message, "Computer is thinking...");
        assert_eq!(snapshot.winning_line, None);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["view"], "ComputerThinking");
        assert_eq!(json["cells"][4], serde_json::json!({ "Occupied": "Human" }));
        assert_eq!(json["cells"][0], "Empty");
    }
}

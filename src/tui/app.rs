//! Application state and logic.

use super::input::Action;
use noughts_engine::{ComputerTurn, GameSession, Position, RandomSource, SeededRandom, Snapshot};
use tracing::{debug, info};

/// What the event loop should do after handling an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond a redraw.
    None,
    /// Schedule the computer's reply.
    Schedule(ComputerTurn),
    /// Drop any scheduled reply.
    CancelPending,
    /// Leave the loop.
    Quit,
}

/// Main application state.
pub struct App<R = SeededRandom> {
    session: GameSession<R>,
    cursor: Position,
}

impl<R: RandomSource> App<R> {
    /// Creates a new application around `session`.
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            session,
            cursor: Position::Center,
        }
    }

    /// The cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// View of the game for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Handles a key action.
    pub fn handle(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => Effect::Quit,
            Action::Reset => {
                info!("Player reset the game");
                self.session.reset();
                Effect::CancelPending
            }
            Action::Cursor(position) => {
                self.cursor = position;
                Effect::None
            }
            Action::SelectCursor => self.select(self.cursor),
            Action::Select(position) => {
                self.cursor = position;
                self.select(position)
            }
            Action::None => Effect::None,
        }
    }

    fn select(&mut self, position: Position) -> Effect {
        debug!(%position, "Cell selected");
        match self.session.handle_cell_select(position.to_index()) {
            Some(turn) => Effect::Schedule(turn),
            None => Effect::None,
        }
    }

    /// Plays a delivered computer turn.
    pub fn computer_turn(&mut self, turn: ComputerTurn) {
        let report = self.session.apply_scheduled(turn);
        debug!(%report, "Computer turn delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::{Cell, Player, ScriptedRandom, StatusView};

    fn app() -> App<ScriptedRandom> {
        App::new(GameSession::new(ScriptedRandom::new(vec![0])))
    }

    #[test]
    fn test_select_schedules_reply() {
        let mut app = app();
        let Effect::Schedule(turn) = app.handle(Action::Select(Position::TopLeft)) else {
            panic!("expected a scheduled reply");
        };
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.snapshot().view, StatusView::ComputerThinking);

        app.computer_turn(turn);
        assert_eq!(app.snapshot().cells[4], Cell::Occupied(Player::Computer));
        assert_eq!(app.snapshot().view, StatusView::HumanTurn);
    }

    #[test]
    fn test_clicks_ignored_while_computer_thinks() {
        let mut app = app();
        app.handle(Action::Select(Position::TopLeft));
        assert_eq!(app.handle(Action::Select(Position::BottomRight)), Effect::None);
        assert_eq!(app.snapshot().cells[8], Cell::Empty);
    }

    #[test]
    fn test_reset_discards_delivered_stale_turn() {
        let mut app = app();
        let Effect::Schedule(turn) = app.handle(Action::SelectCursor) else {
            panic!("expected a scheduled reply");
        };
        assert_eq!(app.handle(Action::Reset), Effect::CancelPending);
        app.computer_turn(turn);
        assert!(app.snapshot().cells.iter().all(|c| *c == Cell::Empty));
        assert_eq!(app.snapshot().view, StatusView::HumanTurn);
    }
}

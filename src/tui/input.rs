//! Keyboard handling.

use crossterm::event::KeyCode;
use noughts_engine::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Start a new game.
    Reset,
    /// Move the cursor to a position.
    Cursor(Position),
    /// Play at the cursor.
    SelectCursor,
    /// Play at a numbered cell (keys 1-9).
    Select(Position),
    /// Key has no meaning here.
    None,
}

/// Maps a key to an action, given the current cursor.
pub fn action(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectCursor,
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map_or(Action::None, Action::Select),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

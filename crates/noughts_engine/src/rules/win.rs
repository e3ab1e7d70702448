//! Win detection.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The 8 winning lines in check order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the occupant of the first line whose three cells match.
///
/// Lines are checked in [`LINES`] order; empty lines never count.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let cell = board.get(*a);
        if cell != Cell::Empty && cell == board.get(*b) && cell == board.get(*c) {
            cell.occupant()
        } else {
            None
        }
    })
}

/// Returns the first line fully held by `player`, in [`LINES`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
        .copied()
}

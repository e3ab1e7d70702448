//! Tests for win and draw detection over every possible board.

use noughts::{Board, Cell, Player, Position};
use noughts_engine::rules::{LINES, find_winner, is_draw, is_full, winning_line};

/// All 3^9 cell assignments, reachable or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Player::Human),
                _ => Cell::Occupied(Player::Computer),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

fn uniform(board: &Board, line: &[Position; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|pos| board.get(pos));
    (a == b && b == c).then(|| a.occupant()).flatten()
}

#[test]
fn test_winner_iff_some_line_is_uniform() {
    for board in all_boards() {
        let first_uniform = LINES.iter().find_map(|line| uniform(&board, line));
        assert_eq!(find_winner(&board), first_uniform, "board:\n{}", board.display());
    }
}

#[test]
fn test_winning_line_belongs_to_winner() {
    for board in all_boards() {
        if let Some(winner) = find_winner(&board) {
            let line = winning_line(&board, winner).expect("winner has a line");
            assert!(line.iter().all(|pos| board.get(*pos) == Cell::Occupied(winner)));
            assert_eq!(LINES.iter().find(|l| uniform(&board, l).is_some()), Some(&line));
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    for board in all_boards().filter(is_full) {
        assert_eq!(is_draw(&board), find_winner(&board).is_none());
    }
}

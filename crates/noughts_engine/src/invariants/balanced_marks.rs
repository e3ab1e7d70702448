//! Balanced marks: the human never trails and never leads by more than one.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: human marks equal computer marks, or exceed them by one.
///
/// The human always moves first, so any other count means a move was lost
/// or duplicated.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let human = game.board().count(Player::Human);
        let computer = game.board().count(Player::Computer);
        human == computer || human == computer + 1
    }

    fn description() -> &'static str {
        "Human marks equal computer marks or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(BalancedMarksInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_human_lead_of_one_holds() {
        let mut game = Game::new();
        game.apply_human_move(0);
        assert!(BalancedMarksInvariant::holds(&game));
    }

    #[test]
    fn test_computer_lead_violates() {
        let mut game = Game::new();
        game.board.set(Position::Center, Cell::Occupied(Player::Computer));
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}

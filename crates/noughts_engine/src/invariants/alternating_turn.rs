//! Alternating turns: Human, Computer, Human, ...

use super::super::{Game, GameStatus, Player};
use super::Invariant;

/// Invariant: history alternates starting with the human, and the player to
/// move is the one the history says is next.
pub struct AlternatingTurnInvariant;

fn expected_mover(ply: usize) -> Player {
    if ply % 2 == 0 {
        Player::Human
    } else {
        Player::Computer
    }
}

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(ply, mv)| mv.player == expected_mover(ply));

        let next_matches = match game.status() {
            GameStatus::InProgress { to_move } => to_move == expected_mover(history.len()),
            GameStatus::Won { winner, .. } => history.last().map(|mv| mv.player) == Some(winner),
            GameStatus::Draw => true,
        };

        alternates && next_matches
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the human"
    }
}

//! Headless matches between a random-move human and the computer.

use noughts_engine::{GameSession, GameStatus, Player, Position, RandomSource, SeededRandom};
use tracing::{debug, info, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display(
    "{} games: human {} / computer {} / draw {}",
    human_wins + computer_wins + draws,
    human_wins,
    computer_wins,
    draws
)]
pub struct Tally {
    /// Games the random human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Games counted so far.
    pub fn total(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won {
                winner: Player::Human,
                ..
            } => self.human_wins += 1,
            GameStatus::Won {
                winner: Player::Computer,
                ..
            } => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress { .. } => {}
        }
    }
}

/// Plays `games` full games and counts the outcomes.
///
/// `human` picks uniformly among empty cells; `computer` feeds the
/// opponent's tie-breaks. Computer turns are redeemed immediately.
#[instrument(skip(human, computer))]
pub fn run<H, C>(games: u32, mut human: H, computer: C) -> Tally
where
    H: RandomSource,
    C: RandomSource,
{
    let mut session = GameSession::new(computer);
    let mut tally = Tally::default();

    for game in 0..games {
        session.reset();
        while !session.status().is_over() {
            let open = Position::valid_moves(&session.board());
            let pick = open[human.pick(open.len())];
            if let Some(turn) = session.handle_cell_select(pick.to_index()) {
                session.apply_scheduled(turn);
            }
        }
        debug!(game, status = ?session.status(), "Game finished");
        tally.record(session.status());
    }

    info!(%tally, "Simulation complete");
    tally
}

/// Runs a simulation seeded from `seed` (or entropy).
pub fn run_seeded(games: u32, seed: Option<u64>) -> Tally {
    let human = SeededRandom::from_optional_seed(seed);
    let computer = SeededRandom::from_optional_seed(seed.map(|s| s.wrapping_add(1)));
    run(games, human, computer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_game() {
        let tally = run_seeded(50, Some(11));
        assert_eq!(tally.total(), 50);
    }

    #[test]
    fn test_tally_display() {
        let tally = Tally {
            human_wins: 1,
            computer_wins: 3,
            draws: 6,
        };
        assert_eq!(tally.to_string(), "10 games: human 1 / computer 3 / draw 6");
    }

    #[test]
    fn test_same_seed_same_tally() {
        assert_eq!(run_seeded(30, Some(5)), run_seeded(30, Some(5)));
    }
}

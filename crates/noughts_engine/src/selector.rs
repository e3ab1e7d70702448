//! Computer move selection.
//!
//! A greedy one-ply heuristic: take an immediate win, otherwise block the
//! human's immediate win, otherwise prefer the center, then a random corner,
//! then a random side. It looks no further ahead than the next move, so a
//! human who sets up a fork can still beat it.

use super::rules::LINES;
use super::{Board, Cell, Player, Position};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Random sources
// ─────────────────────────────────────────────────────────────

/// Source of the random tie-breaks among corners and sides.
pub trait RandomSource {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform picks from a [`SmallRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Reproducible source: the same seed yields the same picks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self {
            rng: SmallRng::from_rng(&mut seed_rng),
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence of picks, cycling when exhausted.
///
/// Each scripted value is reduced modulo the number of candidates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source that returns `picks` in order.
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        value % len
    }
}

// ─────────────────────────────────────────────────────────────
//  Selector
// ─────────────────────────────────────────────────────────────

/// Which priority rule produced a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    /// Completes a computer line.
    #[display("win")]
    Win,
    /// Stops a human line.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Random empty corner.
    #[display("corner")]
    Corner,
    /// Random empty side.
    #[display("side")]
    Side,
}

/// A selected position and the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Where the computer will play.
    pub position: Position,
    /// Why.
    pub rule: Rule,
}

/// Picks the computer's next position.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = SeededRandom> {
    random: R,
}

impl<R: RandomSource> MoveSelector<R> {
    /// Creates a selector drawing tie-breaks from `random`.
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Returns the computer's move, or `None` if the board is full.
    pub fn choose_move(&mut self, board: &Board) -> Option<Position> {
        self.choose(board).map(|choice| choice.position)
    }

    /// Like [`choose_move`](Self::choose_move), also reporting the rule used.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board) -> Option<Choice> {
        let choice = if let Some(position) = completing_move(board, Player::Computer) {
            Choice { position, rule: Rule::Win }
        } else if let Some(position) = completing_move(board, Player::Human) {
            Choice { position, rule: Rule::Block }
        } else if board.is_empty(Position::Center) {
            Choice {
                position: Position::Center,
                rule: Rule::Center,
            }
        } else if let Some(position) = self.pick_empty(board, &Position::CORNERS) {
            Choice { position, rule: Rule::Corner }
        } else {
            let position = self.pick_empty(board, &Position::SIDES)?;
            Choice { position, rule: Rule::Side }
        };

        debug!(position = %choice.position, rule = %choice.rule, "Computer chose move");
        Some(choice)
    }

    fn pick_empty(&mut self, board: &Board, candidates: &[Position]) -> Option<Position> {
        let open: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.random.pick(open.len())])
    }
}

/// First empty position (in index order) where `player` would complete a line.
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    let mark = Cell::Occupied(player);
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .find(|pos| {
            let next = board.with(*pos, player);
            LINES
                .iter()
                .filter(|line| line.contains(pos))
                .any(|line| line.iter().all(|p| next.get(*p) == mark))
        })
}

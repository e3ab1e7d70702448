//! The game state machine.
//!
//! ```text
//! InProgress(Human) --human move--> InProgress(Computer) | Won(Human, line) | Draw
//! InProgress(Computer) --computer move--> InProgress(Human) | Won(Computer, line) | Draw
//! any --reset--> InProgress(Human)
//! ```
//!
//! Requests that do not fit the current state are ignored: the board, the
//! turn and the history stay exactly as they were.

use super::action::{IgnoreReason, Move, MoveReport};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{find_winner, is_full, winning_line};
use super::selector::{MoveSelector, RandomSource};
use super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player whose move is next.
        to_move: Player,
    },
    /// A player completed a line.
    Won {
        /// The winner.
        winner: Player,
        /// The completed line, in [`LINES`](crate::rules::LINES) order.
        line: [Position; 3],
    },
    /// Board full with no line.
    Draw,
}

impl GameStatus {
    /// Status at the start of every game.
    pub const INITIAL: GameStatus = GameStatus::InProgress {
        to_move: Player::Human,
    };

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The player to move, if the game is still running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress { to_move } => Some(*to_move),
            _ => None,
        }
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// A human-vs-computer game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
    epoch: u64,
}

impl Game {
    /// Creates a new game: empty board, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::INITIAL,
            history: Vec::new(),
            epoch: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of resets since this game was created.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Places a human mark at `index` (0-8).
    ///
    /// Ignored when the index is off the board, the cell is taken, the game
    /// is over, or the computer is to move.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_human_move(&mut self, index: usize) -> MoveReport {
        let report = match Position::from_index(index) {
            None => MoveReport::Ignored(IgnoreReason::OutOfRange(index)),
            Some(position) => self.place(Move::new(Player::Human, position)),
        };
        if let MoveReport::Ignored(reason) = report {
            debug!(%reason, "Human move ignored");
        }
        report
    }

    /// Lets the computer move, using `selector` to pick the cell.
    ///
    /// Ignored unless the game is in progress with the computer to move.
    ///
    /// # Panics
    ///
    /// If the selector returns nothing or an occupied cell while the game is
    /// in progress. An in-progress board always has an empty cell, so this
    /// means the selector is broken.
    #[instrument(skip(self, selector), fields(status = ?self.status))]
    pub fn apply_computer_move<R: RandomSource>(
        &mut self,
        selector: &mut MoveSelector<R>,
    ) -> MoveReport {
        if let Err(reason) = self.check_turn(Player::Computer) {
            debug!(%reason, "Computer move ignored");
            return MoveReport::Ignored(reason);
        }

        let position = selector
            .choose_move(&self.board)
            .expect("in-progress board always has an empty cell");
        let report = self.place(Move::new(Player::Computer, position));
        assert!(
            report.is_applied(),
            "selector chose an unplayable cell: {report}"
        );
        report
    }

    /// Starts over: empty board, human to move, history cleared.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::INITIAL;
        self.history.clear();
        self.epoch = self.epoch.wrapping_add(1);
        debug!(epoch = self.epoch, "Game reset");
    }

    fn check_turn(&self, player: Player) -> Result<(), IgnoreReason> {
        match self.status {
            GameStatus::InProgress { to_move } if to_move == player => Ok(()),
            GameStatus::InProgress { .. } => Err(IgnoreReason::WrongTurn(player)),
            GameStatus::Won { .. } | GameStatus::Draw => Err(IgnoreReason::GameOver),
        }
    }

    /// Applies a move and evaluates the result.
    fn place(&mut self, mv: Move) -> MoveReport {
        if let Err(reason) = self.check_turn(mv.player) {
            return MoveReport::Ignored(reason);
        }
        if !self.board.is_empty(mv.position) {
            return MoveReport::Ignored(IgnoreReason::Occupied(mv.position));
        }

        self.board.set(mv.position, Cell::Occupied(mv.player));
        self.history.push(mv);
        self.status = self.evaluate(mv.player);

        debug!(%mv, status = ?self.status, "Move applied");
        match self.status {
            GameStatus::Won { winner, line } => info!(%winner, ?line, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress { .. } => {}
        }

        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            panic!("game invariants violated after {mv}: {violations:?}");
        }

        MoveReport::Applied(mv)
    }

    /// Status after `mover` has just played.
    fn evaluate(&self, mover: Player) -> GameStatus {
        if let Some(winner) = find_winner(&self.board) {
            // Only the mover can have completed a line on this turn.
            let line = winning_line(&self.board, winner)
                .expect("find_winner and winning_line share the line table");
            GameStatus::Won { winner, line }
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                to_move: mover.opponent(),
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

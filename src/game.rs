//! Game session management and outcome tallies

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, GameOutcome, Side};

/// A move in the order it was played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub side: Side,
}

/// One game from start to terminal outcome
///
/// The outcome is classified from the board on every query rather than kept
/// alongside it, so the two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Side,
    history: Vec<Move>,
}

impl Game {
    /// Create a new game with X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Side::X,
            history: Vec::new(),
        }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side making the next move
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Moves played so far, in order
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Classify the current position
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Play the next move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once the game has a terminal outcome, and the
    /// board's own error for an occupied or out-of-range position. The game
    /// is unchanged on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: usize) -> crate::Result<GameOutcome> {
        if self.outcome().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let side = self.to_move;
        self.board.apply_move(position, side)?;
        self.history.push(Move { position, side });
        self.to_move = side.opponent();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            debug!(%outcome, moves = self.history.len(), "game finished");
        }
        Ok(outcome)
    }

    /// Start over: empty board, X to move, history cleared
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Side::X;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Running tally of terminal outcomes across games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game; ongoing outcomes are ignored
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Side::X) => self.x_wins += 1,
            GameOutcome::Win(Side::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }

    /// Total games counted
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X {}  O {}  draws {}", self.x_wins, self.o_wins, self.draws)
    }
}

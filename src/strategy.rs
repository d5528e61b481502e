//! Move selection strategies and match driving

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    board::{Board, GameOutcome, Side},
    game::Game,
    lines, search,
};

/// A way of choosing the next move for a side
pub trait Strategy {
    /// Choose a position for `side` on the given board.
    ///
    /// # Errors
    ///
    /// Returns `NoLegalMoves` when the board has no empty cell.
    fn choose_move(&mut self, board: &Board, side: Side) -> Result<usize>;

    /// Name used in reports
    fn name(&self) -> &str;
}

/// Exhaustive-search strategy; plays perfectly and never loses
pub struct Perfect;

impl Strategy for Perfect {
    fn choose_move(&mut self, board: &Board, side: Side) -> Result<usize> {
        let mut scratch = *board;
        search::best_move(&mut scratch, side)
    }

    fn name(&self) -> &str {
        "perfect"
    }
}

/// Uniform random choice over legal moves (baseline)
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Random {
    fn choose_move(&mut self, board: &Board, _side: Side) -> Result<usize> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(crate::Error::NoLegalMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Completes its own winning line, blocks the opponent's, otherwise random
///
/// A stronger baseline than [`Random`]: it never misses a one-move win or
/// an immediate loss, but it cannot see forks.
pub struct Blocker {
    rng: StdRng,
}

impl Blocker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Blocker {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Blocker {
    fn choose_move(&mut self, board: &Board, side: Side) -> Result<usize> {
        if let Some(&position) = lines::winning_moves(board.cells(), side).first() {
            return Ok(position);
        }
        if let Some(&position) = lines::winning_moves(board.cells(), side.opponent()).first() {
            return Ok(position);
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(crate::Error::NoLegalMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "blocker"
    }
}

/// Play one game between two strategies, X moving first.
///
/// # Errors
///
/// Propagates any strategy or board failure; with well-behaved strategies a
/// game always reaches a terminal outcome within nine moves.
pub fn play_match(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<GameOutcome> {
    let mut game = Game::new();

    loop {
        let outcome = game.outcome();
        if outcome.is_terminal() {
            return Ok(outcome);
        }

        let position = match game.to_move() {
            Side::X => x.choose_move(game.board(), Side::X)?,
            Side::O => o.choose_move(game.board(), Side::O)?,
        };
        game.play(position)?;
    }
}

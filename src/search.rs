//! Exhaustive minimax search
//!
//! The search applies candidate moves to the board in place, recurses, and
//! undoes them before returning, so a single board serves the whole tree.

use tracing::{debug, instrument};

use crate::{
    Error, Result,
    board::{Board, GameOutcome, Side},
};

/// Score of a win reached with no intervening plies
const WIN_SCORE: i32 = 10;

/// Minimax value of the position for `side`.
///
/// `depth` counts plies already played below the searched move; terminal
/// positions score `WIN_SCORE - depth` for a win by `side`, `depth -
/// WIN_SCORE` for a win by the opponent and `0` for a draw, so faster wins
/// and slower losses rank higher. `maximizing` says whether `side` makes the
/// move at this ply. The board is returned to its entry state.
pub fn minimax(board: &mut Board, side: Side, depth: i32, maximizing: bool) -> i32 {
    match board.outcome() {
        GameOutcome::Win(winner) if winner == side => return WIN_SCORE - depth,
        GameOutcome::Win(_) => return depth - WIN_SCORE,
        GameOutcome::Draw => return 0,
        GameOutcome::Ongoing => {}
    }

    let mover = if maximizing { side } else { side.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for position in board.legal_moves() {
        board
            .apply_move(position, mover)
            .expect("legal move application should not fail");
        let value = minimax(board, side, depth + 1, !maximizing);
        board.undo_move(position);

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Minimax value of every legal move for `side`, ascending by position.
///
/// Terminal positions have no legal follow-up, so the result is empty there.
pub fn move_values(board: &mut Board, side: Side) -> Vec<(usize, i32)> {
    if board.outcome().is_terminal() {
        return Vec::new();
    }

    let mut values = Vec::new();
    for position in board.legal_moves() {
        board
            .apply_move(position, side)
            .expect("legal move application should not fail");
        let value = minimax(board, side, 0, false);
        board.undo_move(position);
        values.push((position, value));
    }
    values
}

/// Best position for `side`, exhaustively searched.
///
/// Ties break to the first occurrence in ascending position order, so equal
/// candidates always resolve to the lowest position.
///
/// # Errors
///
/// Returns `NoLegalMoves` when the board has no empty cell.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, side: Side) -> Result<usize> {
    let mut best_position = None;
    let mut best_value = i32::MIN;

    for (position, value) in move_values(board, side) {
        if value > best_value {
            best_value = value;
            best_position = Some(position);
        }
    }

    match best_position {
        Some(position) => {
            debug!(position, value = best_value, "selected move");
            Ok(position)
        }
        None => Err(Error::NoLegalMoves),
    }
}

/// Terminal tallies from the engine's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcomes {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl SweepOutcomes {
    /// Total games counted
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    /// Fold another tally into this one
    pub fn merge(&mut self, other: SweepOutcomes) {
        self.wins += other.wins;
        self.draws += other.draws;
        self.losses += other.losses;
    }
}

/// Play out every line from this position with `engine` answering optimally.
///
/// The opponent branches over all of its legal moves while `engine` always
/// plays [`best_move`]; `to_move` is the side moving next. Returns the
/// terminal tallies over all explored lines, with the board returned to its
/// entry state.
///
/// # Errors
///
/// Returns an error only if the engine fails to produce a move for an
/// ongoing position, which indicates a board state bug.
pub fn sweep(board: &mut Board, engine: Side, to_move: Side) -> Result<SweepOutcomes> {
    match board.outcome() {
        GameOutcome::Win(winner) if winner == engine => {
            return Ok(SweepOutcomes {
                wins: 1,
                ..SweepOutcomes::default()
            });
        }
        GameOutcome::Win(_) => {
            return Ok(SweepOutcomes {
                losses: 1,
                ..SweepOutcomes::default()
            });
        }
        GameOutcome::Draw => {
            return Ok(SweepOutcomes {
                draws: 1,
                ..SweepOutcomes::default()
            });
        }
        GameOutcome::Ongoing => {}
    }

    let mut totals = SweepOutcomes::default();

    if to_move == engine {
        let position = best_move(board, engine)?;
        board.apply_move(position, engine)?;
        let tail = sweep(board, engine, to_move.opponent())?;
        board.undo_move(position);
        totals.merge(tail);
    } else {
        for position in board.legal_moves() {
            board.apply_move(position, to_move)?;
            let tail = sweep(board, engine, to_move.opponent())?;
            board.undo_move(position);
            totals.merge(tail);
        }
    }

    Ok(totals)
}

//! Winning line table and line scans

use crate::board::{Cell, Side};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Side owning a completed line, scanning the table in order.
///
/// In any position reachable by alternating play at most one side has a
/// completed line, so the first match is the only match.
pub fn winner(cells: &[Cell; 9]) -> Option<Side> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.side();
        }
    }
    None
}

/// Check if a side has three in a line
pub fn has_won(cells: &[Cell; 9], side: Side) -> bool {
    let target = side.cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Empty positions that would complete a line for the side, ascending.
pub fn winning_moves(cells: &[Cell; 9], side: Side) -> Vec<usize> {
    let mut moves = Vec::new();
    for pos in 0..9 {
        if cells[pos] == Cell::Empty {
            let mut probe = *cells;
            probe[pos] = side.cell();
            if has_won(&probe, side) {
                moves.push(pos);
            }
        }
    }
    moves
}

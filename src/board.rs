//! Board state representation and move application

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Side occupying the cell, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::X => Some(Side::X),
            Cell::O => Some(Side::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Convert side to the cell it plays
    pub fn cell(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::X => "X",
            Side::O => "O",
        })
    }
}

impl FromStr for Side {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Side::X),
            "O" | "o" => Ok(Side::O),
            other => Err(crate::Error::InvalidSide {
                side: other.to_string(),
            }),
        }
    }
}

/// Classification of a position
///
/// Always derived from the board on demand; nothing in the crate stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Ongoing,
    Win(Side),
    Draw,
}

impl GameOutcome {
    /// Check if the game is over (win or draw)
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => f.write_str("ongoing"),
            GameOutcome::Win(side) => write!(f, "{side} wins"),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// The 3x3 grid in row-major order: rows 0-2, 3-5, 6-8
///
/// This type implements `Copy` for efficiency since it's only 9 bytes, so
/// search code can take cheap scratch copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell at position (0-8)
    pub fn get(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, position: usize) -> bool {
        self.cells[position] == Cell::Empty
    }

    /// Raw cells for line scans
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the pieces a side has on the board
    pub fn count(&self, side: Side) -> usize {
        let target = side.cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Place `side` at `position`, mutating the board in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range or already occupied.
    /// The board is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::{Board, GameOutcome, Side};
    ///
    /// let mut board = Board::new();
    /// board.apply_move(4, Side::X)?;
    /// assert_eq!(board.outcome(), GameOutcome::Ongoing);
    /// # Ok::<(), oxo::Error>(())
    /// ```
    pub fn apply_move(&mut self, position: usize, side: Side) -> crate::Result<()> {
        if position >= 9 {
            return Err(crate::Error::OutOfRange { position });
        }
        if self.cells[position] != Cell::Empty {
            return Err(crate::Error::OccupiedCell { position });
        }
        self.cells[position] = side.cell();
        Ok(())
    }

    /// Clear `position`, reversing a paired [`apply_move`](Self::apply_move).
    ///
    /// Callers own the pairing discipline: undo exactly the positions they
    /// applied, most recent first. Release builds do not re-check it.
    pub fn undo_move(&mut self, position: usize) {
        debug_assert!(position < 9, "undo position {position} out of range");
        debug_assert!(
            self.cells[position] != Cell::Empty,
            "undo of empty position {position}"
        );
        self.cells[position] = Cell::Empty;
    }

    /// Empty positions in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Side> {
        lines::winner(&self.cells)
    }

    /// Check if a side has three in a line
    pub fn has_won(&self, side: Side) -> bool {
        lines::has_won(&self.cells, side)
    }

    /// Classify the position: a completed line wins, a full board with no
    /// line is a draw, anything else is still in play.
    pub fn outcome(&self) -> GameOutcome {
        if let Some(side) = self.winner() {
            GameOutcome::Win(side)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }

    /// Side to move under X-opens rules, inferred from piece counts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPieceCounts` when the counts fit no reachable game.
    pub fn to_move(&self) -> crate::Result<Side> {
        let x_count = self.count(Side::X);
        let o_count = self.count(Side::O);
        if x_count == o_count {
            Ok(Side::X)
        } else if x_count == o_count + 1 {
            Ok(Side::O)
        } else {
            Err(crate::Error::InvalidPieceCounts { x_count, o_count })
        }
    }

    /// Compact single-line representation, 9 cell characters
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse 9 cell characters ('X', 'O', '.'; whitespace is filtered out).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.get(i), Cell::Empty);
        }
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.outcome(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_apply_move_sets_cell() {
        let mut board = Board::new();
        board.apply_move(4, Side::X).unwrap();
        assert_eq!(board.get(4), Cell::X);

        board.apply_move(0, Side::O).unwrap();
        assert_eq!(board.get(0), Cell::O);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply_move(4, Side::X).unwrap();

        let err = board.apply_move(4, Side::O).unwrap_err();
        assert!(matches!(err, Error::OccupiedCell { position: 4 }));
        // board unchanged
        assert_eq!(board.get(4), Cell::X);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut board = Board::new();
        let err = board.apply_move(9, Side::X).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { position: 9 }));
    }

    #[test]
    fn test_apply_then_undo_restores_board() {
        // Exercise every index against an empty board and a mid-game board.
        let boards = [Board::new(), "X.O.X...O".parse::<Board>().unwrap()];
        for before in boards {
            for position in before.legal_moves() {
                for side in [Side::X, Side::O] {
                    let mut board = before;
                    board.apply_move(position, side).unwrap();
                    board.undo_move(position);
                    assert_eq!(board, before, "undo at {position} did not restore");
                }
            }
        }
    }

    #[test]
    fn test_legal_moves_ascending_and_excludes_occupied() {
        let board: Board = "XX.O..O..".parse().unwrap();
        let legal = board.legal_moves();

        assert_eq!(legal, vec![2, 4, 5, 7, 8]);
        for occupied in [0, 1, 3, 6] {
            assert!(!legal.contains(&occupied));
        }
        assert!(legal.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_outcome_ongoing_with_threats_on_board() {
        // X threatens the top row, O threatens the left column; nobody has won.
        let board: Board = "XX.O..O..".parse().unwrap();
        assert_eq!(board.outcome(), GameOutcome::Ongoing);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_outcome_win_row() {
        let mut board = Board::new();
        board.apply_move(0, Side::X).unwrap();
        board.apply_move(3, Side::O).unwrap();
        board.apply_move(1, Side::X).unwrap();
        board.apply_move(4, Side::O).unwrap();
        board.apply_move(2, Side::X).unwrap();

        assert_eq!(board.outcome(), GameOutcome::Win(Side::X));
        assert!(board.outcome().is_terminal());
    }

    #[test]
    fn test_outcome_win_column() {
        let mut board = Board::new();
        board.apply_move(0, Side::X).unwrap();
        board.apply_move(1, Side::O).unwrap();
        board.apply_move(2, Side::X).unwrap();
        board.apply_move(4, Side::O).unwrap();
        board.apply_move(5, Side::X).unwrap();
        board.apply_move(7, Side::O).unwrap();

        assert_eq!(board.outcome(), GameOutcome::Win(Side::O));
    }

    #[test]
    fn test_outcome_win_diagonal() {
        let board: Board = "X.O.XO..X".parse().unwrap();
        assert_eq!(board.outcome(), GameOutcome::Win(Side::X));
    }

    #[test]
    fn test_outcome_draw() {
        // XOX / XOO / OXX, no line for either side
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_outcome_win_on_full_board_is_a_win() {
        // Full board where X completes the left column with the last move
        let board: Board = "XXOXOOXOX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), GameOutcome::Win(Side::X));
    }

    #[test]
    fn test_two_lines_same_side() {
        // X holds the top row and the anti-diagonal at once
        let board: Board = "XXXOXOXOO".parse().unwrap();
        assert_eq!(board.winner(), Some(Side::X));
        assert_eq!(board.outcome(), GameOutcome::Win(Side::X));
    }

    #[test]
    fn test_to_move_inference() {
        assert_eq!(Board::new().to_move().unwrap(), Side::X);

        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.to_move().unwrap(), Side::O);

        let board: Board = "X.O......".parse().unwrap();
        assert_eq!(board.to_move().unwrap(), Side::X);

        let board: Board = "XX.......".parse().unwrap();
        let err = board.to_move().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            }
        ));
    }

    #[test]
    fn test_count() {
        let board: Board = "XOXXO....".parse().unwrap();
        assert_eq!(board.count(Side::X), 3);
        assert_eq!(board.count(Side::O), 2);
    }

    #[test]
    fn test_from_str() {
        let board: Board = "XOX......".parse().unwrap();
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.get(2), Cell::X);
        assert_eq!(board.get(3), Cell::Empty);

        // whitespace is filtered, so a pretty 3-row literal parses too
        let pretty: Board = "XOX\n...\n.O.".parse().unwrap();
        assert_eq!(pretty.get(7), Cell::O);

        assert!("XO".parse::<Board>().is_err());
        assert!("XOZ......".parse::<Board>().is_err());
        assert!("XOX......X".parse::<Board>().is_err());
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("x".parse::<Side>().unwrap(), Side::X);
        assert_eq!("O".parse::<Side>().unwrap(), Side::O);
        assert!("b".parse::<Side>().is_err());
    }

    #[test]
    fn test_display_and_encode_round_trip() {
        let board: Board = "XOX.O.X..".parse().unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");

        assert_eq!(board.encode(), "XOX.O.X..");
        assert_eq!(board.encode().parse::<Board>().unwrap(), board);
    }
}

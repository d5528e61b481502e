//! Perfect-play tic-tac-toe engine
//!
//! This crate provides:
//! - Complete board and rules implementation with validation
//! - Exhaustive minimax search with depth-sensitive scoring
//! - Game sessions with score tallies across games
//! - Baseline strategies and a match driver for verification
//!
//! # Examples
//!
//! ```
//! use oxo::{Board, Side, search};
//!
//! // X has taken the center; the engine answers for O.
//! let mut board: Board = "....X....".parse()?;
//! let reply = search::best_move(&mut board, Side::O)?;
//! assert!([0, 2, 6, 8].contains(&reply));
//! # Ok::<(), oxo::Error>(())
//! ```

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod search;
pub mod strategy;

pub use board::{Board, Cell, GameOutcome, Side};
pub use error::{Error, Result};
pub use game::{Game, Move, ScoreTally};

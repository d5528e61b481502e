//! Common test utilities for the oxo test suite.

use oxo::Board;

/// Parse a board fixture, panicking on malformed input.
pub fn board(s: &str) -> Board {
    s.parse().expect("test fixture should parse")
}

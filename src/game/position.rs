//! Validated board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the board, guaranteed to lie inside the 3x3 grid.
///
/// Raw player coordinates arrive as signed integers from the console;
/// [`Position::new`] is the only way to turn them into a position, so
/// every `Position` held elsewhere in the crate is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from raw coordinates.
    ///
    /// Returns `None` if either coordinate falls outside `[0, 2]`.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if (0..=2).contains(&row) && (0..=2).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// In-range constructor for the fixed line tables.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Index into the row-major square array (0-8).
    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

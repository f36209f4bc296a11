//! Cursor state management
//!
//! Coordinates are signed and deliberately unclamped: escape sequences and
//! plain writes move the cursor freely while a chunk is being fed, and
//! [`Cursor::fix_bounds`] normalizes the position once the chunk is done.

use serde::{Deserialize, Serialize};

/// Cursor position (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub row: i64,
    pub col: i64,
}

impl Cursor {
    /// Create a new cursor at the home position
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear row-major index into a grid `cols` wide
    pub fn index(&self, cols: usize) -> i64 {
        self.row
            .saturating_mul(cols as i64)
            .saturating_add(self.col)
    }

    /// Set the absolute position from 1-based row/column arguments
    pub fn move_to(&mut self, row: i64, col: i64) {
        self.row = row.saturating_sub(1);
        self.col = col.saturating_sub(1);
    }

    pub fn move_up(&mut self, n: i64) {
        self.row = self.row.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: i64) {
        self.row = self.row.saturating_add(n);
    }

    pub fn move_right(&mut self, n: i64) {
        self.col = self.col.saturating_add(n);
    }

    pub fn move_left(&mut self, n: i64) {
        self.col = self.col.saturating_sub(n);
    }

    /// Carriage return - move to column 0
    pub fn carriage_return(&mut self) {
        self.col = 0;
    }

    /// Backspace - no lower bound
    pub fn backspace(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    /// Line feed - column is left alone
    pub fn linefeed(&mut self) {
        self.row = self.row.saturating_add(1);
    }

    /// Fold column overflow into following rows, then pin the row to the
    /// bottom of the screen.
    ///
    /// A negative column is left as is.
    pub fn fix_bounds(&mut self, rows: usize, cols: usize) {
        let rows = rows as i64;
        let cols = cols as i64;

        if cols > 0 && self.col >= cols {
            // Same result as subtracting `cols` one row at a time
            self.row = self.row.saturating_add(self.col / cols);
            self.col %= cols;
        }

        if self.row >= rows {
            self.row = rows - 1;
        }
    }
}

//! Terminal Grid
//!
//! A fixed-size, row-major array of cells addressed either by (row, col)
//! or by flat index `row * cols + col`.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Style};

/// The terminal grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to a cell
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row.checked_mul(self.cols)? + col)
    }

    /// Get a cell by flat index
    pub fn cell_at(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clamp a half-open index range to the grid. Inverted ranges come back
    /// empty.
    fn clamp(&self, from: i64, to: i64) -> Range<usize> {
        let len = self.cells.len() as i64;
        let start = from.clamp(0, len) as usize;
        let end = to.clamp(0, len) as usize;
        start..end.max(start)
    }

    fn clamp_unsigned(&self, from: usize, to: usize) -> Range<usize> {
        let end = to.min(self.cells.len());
        from.min(end)..end
    }

    /// Glyphs of the half-open index range `[from, to)`
    pub fn read_text(&self, from: usize, to: usize) -> String {
        let range = self.clamp_unsigned(from, to);
        self.cells[range].iter().map(|c| c.glyph).collect()
    }

    /// Cells of the half-open index range `[from, to)`
    pub fn read_cells(&self, from: usize, to: usize) -> Vec<Cell> {
        let range = self.clamp_unsigned(from, to);
        self.cells[range].to_vec()
    }

    /// Get the text of one row, trailing blanks included
    pub fn row_text(&self, row: usize) -> String {
        let start = row.saturating_mul(self.cols);
        self.read_text(start, start.saturating_add(self.cols))
    }

    pub fn row_cells(&self, row: usize) -> Vec<Cell> {
        let start = row.saturating_mul(self.cols);
        self.read_cells(start, start.saturating_add(self.cols))
    }

    /// Every row joined with newlines
    pub fn text(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reset every cell in `[from, to)`; out-of-grid parts are ignored.
    /// Returns the number of cells reset.
    pub fn reset_range(&mut self, from: i64, to: i64) -> usize {
        let range = self.clamp(from, to);
        let count = range.len();
        for cell in &mut self.cells[range] {
            cell.reset();
        }
        count
    }

    /// Write a glyph at a flat index. Returns false, leaving the grid
    /// untouched, when the index is outside the grid.
    pub fn put(&mut self, idx: i64, glyph: char, style: Style) -> bool {
        let Ok(idx) = usize::try_from(idx) else {
            return false;
        };
        match self.cells.get_mut(idx) {
            Some(cell) => {
                cell.set(glyph, style);
                true
            }
            None => false,
        }
    }
}

//! Deterministic snapshot generation
//!
//! Snapshots capture the grid and cursor in a serializable format for
//! testing and for handing screen state to other processes. Given the same
//! byte stream, the terminal must produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Style};
use super::cursor::Cursor;
use super::grid::Grid;

/// A complete snapshot of the terminal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Screen dimensions
    pub rows: usize,
    pub cols: usize,
    /// Cursor position
    pub cursor: Cursor,
    /// Row text, trailing blanks included
    pub lines: Vec<String>,
    /// Visible grid content (row-major)
    pub grid: Vec<Vec<CellSnapshot>>,
}

/// Snapshot of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub glyph: char,
    pub fg: u8,
    pub bg: u8,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        CellSnapshot {
            glyph: cell.glyph,
            fg: cell.style.fg,
            bg: cell.style.bg,
            bold: cell.style.bold,
            reverse: cell.style.reverse,
        }
    }
}

impl From<CellSnapshot> for Cell {
    fn from(snapshot: CellSnapshot) -> Self {
        Cell::with_style(
            snapshot.glyph,
            Style {
                fg: snapshot.fg,
                bg: snapshot.bg,
                bold: snapshot.bold,
                reverse: snapshot.reverse,
            },
        )
    }
}

impl Snapshot {
    /// Capture the given grid and cursor
    pub fn capture(grid: &Grid, cursor: &Cursor) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();

        let grid_cells: Vec<Vec<CellSnapshot>> = (0..rows)
            .map(|row| grid.row_cells(row).iter().map(CellSnapshot::from).collect())
            .collect();
        let lines: Vec<String> = (0..rows).map(|row| grid.row_text(row)).collect();

        Snapshot {
            rows,
            cols,
            cursor: *cursor,
            lines,
            grid: grid_cells,
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Screen text with trailing blanks and trailing empty lines removed
    pub fn to_text(&self) -> String {
        let mut result = String::new();

        for line in &self.lines {
            result.push_str(line.trim_end_matches(' '));
            result.push('\n');
        }

        while result.ends_with("\n\n") {
            result.pop();
        }

        result
    }

    /// Compare grid contents, ignoring the cursor
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.grid == other.grid
    }
}

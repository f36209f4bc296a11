//! Terminal Cell
//!
//! Represents a single position in the terminal grid: a glyph and the
//! rendition it was written with.

use serde::{Deserialize, Serialize};

/// Graphic rendition of a cell or of the pen.
///
/// Colors are kept as raw SGR codes (`30..=37` foreground, `40..=47`
/// background) because callers scrape them back out as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    /// Foreground SGR color code
    pub fg: u8,
    /// Background SGR color code
    pub bg: u8,
    pub bold: bool,
    pub reverse: bool,
}

impl Style {
    /// White on black, no attributes
    pub const DEFAULT: Style = Style {
        fg: 37,
        bg: 40,
        bold: false,
        reverse: false,
    };

    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    /// Apply a single SGR parameter. Unsupported codes are ignored.
    pub fn apply_sgr(&mut self, code: i64) {
        match code {
            0 => self.reset(),
            1 => self.bold = true,
            7 => self.reverse = true,
            30..=37 => self.fg = code as u8,
            40..=47 => self.bg = code as u8,
            _ => {}
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character in this cell
    pub glyph: char,
    /// Rendition the glyph was written with
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            style: Style::DEFAULT,
        }
    }
}

impl Cell {
    /// Create a new cell with a glyph and style
    pub fn with_style(glyph: char, style: Style) -> Self {
        Self { glyph, style }
    }

    /// Check if this cell is a blank in the default style
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Return the cell to a default-styled space
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the glyph and take on the given rendition.
    ///
    /// The style is copied in, so later changes to the pen never reach
    /// cells that were already written.
    pub fn set(&mut self, glyph: char, style: Style) {
        self.glyph = glyph;
        self.style = style;
    }
}

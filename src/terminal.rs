//! Terminal Executor
//!
//! Ties together the tokenizer and the screen model. [`Terminal::feed`]
//! consumes a chunk of program output, applying escape sequences and
//! plain characters to the grid, and corrects the cursor once the whole
//! chunk has been consumed.

use crate::config::Config;
use crate::core::{Cell, Cursor, Grid, Snapshot, Style};
use crate::error::{Error, Result};
use crate::parser::{CsiCommand, ParseMode, Token, Tokenizer, ESC};

/// An in-memory terminal screen fed with raw program output
#[derive(Debug, Clone)]
pub struct Terminal {
    grid: Grid,
    cursor: Cursor,
    /// Style applied to newly written characters
    pen: Style,
    tokenizer: Tokenizer,
}

impl Terminal {
    /// Create a strict terminal with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_mode(rows, cols, ParseMode::Strict)
    }

    /// Create a terminal that skips escape bytes it does not recognize
    pub fn lenient(rows: usize, cols: usize) -> Self {
        Self::with_mode(rows, cols, ParseMode::Lenient)
    }

    pub fn with_mode(rows: usize, cols: usize, mode: ParseMode) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            cursor: Cursor::new(),
            pen: Style::DEFAULT,
            tokenizer: Tokenizer::new(mode),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_mode(config.rows, config.cols, config.mode)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn mode(&self) -> ParseMode {
        self.tokenizer.mode()
    }

    pub fn is_strict(&self) -> bool {
        self.mode() == ParseMode::Strict
    }

    /// Get a reference to the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current cursor position as (row, col)
    pub fn cursor(&self) -> (i64, i64) {
        (self.cursor.row, self.cursor.col)
    }

    /// Current pen style
    pub fn pen(&self) -> Style {
        self.pen
    }

    /// Glyphs of the flat index range `[from, to)`
    pub fn read_text(&self, from: usize, to: usize) -> String {
        self.grid.read_text(from, to)
    }

    /// Cells of the flat index range `[from, to)`
    pub fn read_cells(&self, from: usize, to: usize) -> Vec<Cell> {
        self.grid.read_cells(from, to)
    }

    pub fn row_text(&self, row: usize) -> String {
        self.grid.row_text(row)
    }

    pub fn row_cells(&self, row: usize) -> Vec<Cell> {
        self.grid.row_cells(row)
    }

    /// The whole screen, one line per row
    pub fn screen_text(&self) -> String {
        self.grid.text()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.grid, &self.cursor)
    }

    /// Feed a chunk of program output into the terminal.
    ///
    /// The chunk is consumed completely. The cursor may leave the screen
    /// while the chunk is processed and is pulled back in once at the end.
    /// On error the state is left as it was at the failing sequence and
    /// the cursor is not corrected.
    pub fn feed(&mut self, input: &[u8]) -> Result<()> {
        let mut rest = input;

        while let Some(&byte) = rest.first() {
            if byte == ESC {
                let (token, consumed) = self.tokenizer.next_token(rest)?;
                rest = &rest[consumed..];
                match token {
                    Token::Csi(csi) => self.execute_csi(&csi)?,
                    Token::Swallowed => tracing::trace!("swallowed escape sequence"),
                    Token::Dropped => {}
                }
                continue;
            }

            match byte {
                b'\r' => self.cursor.carriage_return(),
                0x08 => self.cursor.backspace(),
                b'\n' => self.cursor.linefeed(),
                // NUL, SI
                0x00 | 0x0F => {}
                _ => self.print_char(char::from(byte)),
            }
            rest = &rest[1..];
        }

        self.cursor.fix_bounds(self.grid.rows(), self.grid.cols());
        tracing::trace!(
            bytes = input.len(),
            row = self.cursor.row,
            col = self.cursor.col,
            "fed chunk"
        );
        Ok(())
    }

    /// Write a character at the cursor with the current pen and advance
    fn print_char(&mut self, c: char) {
        let idx = self.cursor.index(self.grid.cols());
        if !self.grid.put(idx, c, self.pen) {
            tracing::warn!(
                row = self.cursor.row,
                col = self.cursor.col,
                glyph = ?c,
                "dropping write outside the grid"
            );
        }
        self.cursor.move_right(1);
    }

    /// Execute a CSI sequence
    fn execute_csi(&mut self, csi: &CsiCommand) -> Result<()> {
        tracing::debug!(
            final_byte = %csi.final_char(),
            params = ?csi.params,
            "CSI"
        );

        match csi.final_byte {
            b'H' => {
                // CUP - Cursor Position (1-based)
                self.cursor.move_to(csi.param_or(0, 1), csi.param_or(1, 1));
            }
            b'm' | b'M' => {
                // SGR - Select Graphic Rendition
                for &code in &csi.params {
                    self.pen.apply_sgr(code);
                }
            }
            b'J' => {
                // ED - Erase in Display
                let (from, to) = self.erase_in_display_range(csi)?;
                self.grid.reset_range(from, to);
            }
            b'K' => {
                // EL - Erase in Line
                let (from, to) = self.erase_in_line_range(csi)?;
                self.grid.reset_range(from, to);
            }
            b'A' => self.cursor.move_up(csi.param_or(0, 1)),
            b'B' => self.cursor.move_down(csi.param_or(0, 1)),
            b'C' => self.cursor.move_right(csi.param_or(0, 1)),
            b'D' => self.cursor.move_left(csi.param_or(0, 1)),
            // DECSTBM, RM: accepted without effect
            b'r' | b'l' => {}
            _ => {
                return Err(Error::UnknownCommand {
                    final_byte: csi.final_char(),
                    params: csi.params.clone(),
                })
            }
        }
        Ok(())
    }

    /// Flat index range cleared by `ESC [ n J`.
    ///
    /// Mode 0 stops `cols - col - 1` cells into the screen rather than at
    /// the end of it, which leaves it empty anywhere past the first row.
    /// Programs scraped with this terminal redraw after it, so the extent
    /// is kept as is.
    fn erase_in_display_range(&self, csi: &CsiCommand) -> Result<(i64, i64)> {
        let cols = self.grid.cols() as i64;
        let idx = self.cursor.index(self.grid.cols());

        match csi.param_or(0, 0) {
            0 => Ok((idx, cols.saturating_sub(self.cursor.col).saturating_sub(1))),
            1 => Ok((0, idx)),
            2 => Ok((0, self.grid.len() as i64)),
            _ => Err(Error::Escape {
                command: 'J',
                params: csi.params.clone(),
            }),
        }
    }

    /// Flat index range cleared by `ESC [ n K`
    fn erase_in_line_range(&self, csi: &CsiCommand) -> Result<(i64, i64)> {
        let cols = self.grid.cols() as i64;
        let idx = self.cursor.index(self.grid.cols());
        let line_offset = idx.checked_rem_euclid(cols).unwrap_or(0);

        match csi.param_or(0, 0) {
            0 => Ok((
                idx,
                idx.saturating_add(cols)
                    .saturating_sub(self.cursor.col)
                    .saturating_sub(1),
            )),
            1 => Ok((line_offset, idx)),
            2 => Ok((line_offset, line_offset + cols)),
            _ => Err(Error::Escape {
                command: 'K',
                params: csi.params.clone(),
            }),
        }
    }
}

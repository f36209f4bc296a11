//! ansiterm - an in-memory ANSI terminal screen
//!
//! Feeds raw output of a character-mode program through a small VT100
//! subset and keeps the resulting grid of styled cells, so that callers
//! can scrape what the program would have shown on a real display.
//!
//! - `core`: Cells, styles, grid, cursor and snapshots
//! - `parser`: Escape sequence tokenizer
//! - `terminal`: Feed loop and command evaluation
//! - `config`: Screen size and parse mode settings
//!
//! ```
//! use ansiterm::Terminal;
//!
//! let mut term = Terminal::new(24, 80);
//! term.feed(b"\x1b[1;31mHP:\x1b[0m 12(12)").unwrap();
//! assert_eq!(term.read_text(0, 10), "HP: 12(12)");
//! assert!(term.read_cells(0, 1)[0].style.bold);
//! assert_eq!(term.cursor(), (0, 10));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod terminal;

pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use terminal::Terminal;

//! Terminal Core Module
//!
//! Platform-independent screen state. This module contains:
//! - Cell and style representation
//! - The fixed-size cell grid
//! - Cursor state and end-of-feed boundary correction
//! - Deterministic snapshot generation
//!
//! The core is deterministic: the same sequence of bytes fed to a
//! terminal always produces the same state.

mod cell;
mod cursor;
mod grid;
mod snapshot;

pub use cell::{Cell, Style};
pub use cursor::Cursor;
pub use grid::Grid;
pub use snapshot::{CellSnapshot, Snapshot};

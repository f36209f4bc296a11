//! Tokens produced by the escape sequence tokenizer
//!
//! These represent the result of recognizing one escape construct at the
//! head of the input.

use serde::{Deserialize, Serialize};

/// A parsed CSI sequence: `ESC [ params final`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsiCommand {
    /// Numeric parameters, with per-command defaults filled in when the
    /// sequence had none
    pub params: Vec<i64>,
    /// Final byte (an ASCII letter) that selects the command
    pub final_byte: u8,
}

impl CsiCommand {
    pub fn new(final_byte: u8, params: Vec<i64>) -> Self {
        Self { params, final_byte }
    }

    /// Get parameter at index
    pub fn param(&self, idx: usize) -> Option<i64> {
        self.params.get(idx).copied()
    }

    /// Get parameter at index, or `default` when it is absent
    pub fn param_or(&self, idx: usize, default: i64) -> i64 {
        self.param(idx).unwrap_or(default)
    }

    pub fn final_char(&self) -> char {
        char::from(self.final_byte)
    }
}

/// What the tokenizer made of the bytes it consumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A CSI command to hand to the evaluator
    Csi(CsiCommand),
    /// A recognized sequence with no effect on the screen (`ESC M`,
    /// `ESC [ ? n h`, charset selection)
    Swallowed,
    /// An unrecognized escape byte skipped in lenient mode
    Dropped,
}

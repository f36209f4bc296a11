//! Terminal escape sequence parser
//!
//! A stateless tokenizer that recognizes one escape construct at a time at
//! the head of a byte buffer.

mod actions;
mod tokenizer;

pub use actions::{CsiCommand, Token};
pub use tokenizer::{ParseMode, Tokenizer, ESC};

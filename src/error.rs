//! Error types for feeding bytes into the terminal

use thiserror::Error;

/// Longest input prefix kept in a parse error
const CONTEXT_LEN: usize = 20;

/// Terminal error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An escape introducer that starts none of the recognized sequences
    #[error("Invalid escape sequence: {context}")]
    Parse {
        /// Escaped prefix of the offending input
        context: String,
    },

    /// A well-formed CSI sequence with no defined transition
    #[error("Unknown escape code: final={final_byte:?} params={params:?}")]
    UnknownCommand { final_byte: char, params: Vec<i64> },

    /// An erase command with an argument outside 0..=2
    #[error("Unknown argument for {command} parameter: {params:?}")]
    Escape { command: char, params: Vec<i64> },
}

impl Error {
    pub(crate) fn parse(input: &[u8]) -> Self {
        let end = input.len().min(CONTEXT_LEN);
        Error::Parse {
            context: input[..end].escape_ascii().to_string(),
        }
    }
}

/// Result type for terminal operations
pub type Result<T> = std::result::Result<T, Error>;

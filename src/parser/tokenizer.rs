//! Escape Sequence Tokenizer
//!
//! Recognizes a single escape construct at the head of a byte buffer and
//! reports how many bytes it covered. Only a small subset of VT sequences
//! is understood:
//!
//! - `ESC M` (ignored)
//! - `ESC [ ? Pn h` (private mode set, ignored)
//! - `ESC ( B` and `ESC ) 0` (charset selection, ignored)
//! - `ESC [ Pn ; ... ; Pn F` where `F` is an ASCII letter
//!
//! The tokenizer is stateless: a sequence split across two buffers is not
//! recognized.

use serde::{Deserialize, Serialize};

use super::actions::{CsiCommand, Token};
use crate::error::{Error, Result};

/// Escape introducer
pub const ESC: u8 = 0x1B;

/// How the tokenizer treats an escape it does not recognize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Fail with a parse error
    #[default]
    Strict,
    /// Drop the escape byte and carry on
    Lenient,
}

/// The escape sequence tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    mode: ParseMode,
}

impl Tokenizer {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Recognize one escape construct at the start of `input`, which must
    /// begin with [`ESC`].
    ///
    /// Returns the token and the number of bytes it covers. Bytes past that
    /// count are left for the caller.
    pub fn next_token(&self, input: &[u8]) -> Result<(Token, usize)> {
        match input {
            [ESC, b'M', ..] => return Ok((Token::Swallowed, 2)),
            [ESC, b'(', b'B', ..] | [ESC, b')', b'0', ..] => return Ok((Token::Swallowed, 3)),
            _ => {}
        }

        if let Some(len) = private_mode_set(input) {
            return Ok((Token::Swallowed, len));
        }

        if let Some((csi, len)) = csi(input) {
            return Ok((Token::Csi(csi), len));
        }

        match self.mode {
            ParseMode::Strict => Err(Error::parse(input)),
            ParseMode::Lenient => {
                tracing::warn!(
                    input = %input[..input.len().min(8)].escape_ascii(),
                    "dropping unrecognized escape byte"
                );
                Ok((Token::Dropped, 1))
            }
        }
    }
}

/// `ESC [ ? <digits> h`
fn private_mode_set(input: &[u8]) -> Option<usize> {
    let body = input.strip_prefix(b"\x1b[?")?;
    let digits = body.iter().take_while(|b| b.is_ascii_digit()).count();
    (body.get(digits) == Some(&b'h')).then_some(3 + digits + 1)
}

/// `ESC [ <params> <letter>`
fn csi(input: &[u8]) -> Option<(CsiCommand, usize)> {
    let body = input.strip_prefix(b"\x1b[")?;
    let params_len = body
        .iter()
        .take_while(|&&b| b.is_ascii_digit() || b == b';')
        .count();

    let final_byte = *body.get(params_len)?;
    if !final_byte.is_ascii_alphabetic() {
        return None;
    }

    let params = parse_params(&body[..params_len], final_byte)?;
    Some((CsiCommand::new(final_byte, params), 2 + params_len + 1))
}

fn parse_params(raw: &[u8], final_byte: u8) -> Option<Vec<i64>> {
    if raw.is_empty() {
        return Some(default_params(final_byte));
    }
    raw.split(|&b| b == b';').map(parse_number).collect()
}

/// Parameters assumed when a CSI sequence carries none
fn default_params(final_byte: u8) -> Vec<i64> {
    match final_byte {
        b'A' | b'B' | b'C' | b'D' | b'E' | b'F' | b'S' | b'T' | b'f' => vec![1],
        b'H' => vec![1, 1],
        _ => vec![0],
    }
}

/// Parse a run of ASCII digits, saturating on overflow. An empty run is not
/// a number.
fn parse_number(digits: &[u8]) -> Option<i64> {
    if digits.is_empty() {
        return None;
    }
    Some(digits.iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    }))
}

//! Parse error types.
//!
//! Every failure carries the byte offset where it was detected, so callers
//! can point at the offending position in the input. The first error aborts
//! the parse; there is no partial-tree recovery.

use thiserror::Error;

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A character not valid at this position.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// String literal missing its closing quote before end of input.
    #[error("unterminated string")]
    UnterminatedString,
    /// Unknown escape sequence, malformed `\u` hex digits, or an unpaired
    /// surrogate.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// Number lexeme violating the grammar, or one that converts to a
    /// non-finite float.
    #[error("invalid number")]
    InvalidNumber,
    /// The parser expected one token kind and found another.
    #[error("unexpected token")]
    UnexpectedToken,
    /// Non-whitespace content after the top-level value.
    #[error("trailing content after value")]
    TrailingContent,
    /// Nesting exceeded the configured depth limit.
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,
    /// Input contained no value at all.
    #[error("empty input")]
    EmptyInput,
}

/// A structured parse failure: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
}

impl ParseError {
    /// Construct an error of the given kind at the given byte offset.
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The failure classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

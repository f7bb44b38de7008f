//! The single error kind shared by the tokenizer and the parser.

use thiserror::Error;

/// A parse-time failure, carrying a message and the source position where
/// it was detected.
///
/// There is deliberately one error kind for the whole frontend: scanning
/// and parsing failures alike surface as `ParseError`. Internal sentinels
/// (end-of-input while inside a string, a regexp, or a block comment) never
/// escape as themselves — they are wrapped into a descriptive `ParseError`
/// at the point they are detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (line: {line}, col: {col}, pos: {pos})")]
pub struct ParseError {
    pub message: String,
    pub line: u32,
    pub col: u32,
    pub pos: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: u32, col: u32, pos: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            pos,
        }
    }
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

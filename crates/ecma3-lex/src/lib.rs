//! The tokenizer: a demand-driven scanner producing a stream of tokens
//! carrying source positions and comment trivia.
//!
//! The tokenizer and the parser in `ecma3-par` are tightly coupled at the
//! `/` character: whether it starts a regular expression or a division
//! depends on parser-visible context. That coupling is exposed here as
//! the `regex_allowed` flag plus `Tokenizer::reinterpret_as_regex`.

mod comment;
mod cursor;
#[cfg(test)]
mod edge_cases;
mod identifier;
mod number;
mod operator;
#[cfg(test)]
mod proptest_invariants;
mod regexp;
mod scanner;
mod string;
pub mod token;
pub mod unicode;

pub use scanner::{Tokenizer, WarningSink};
pub use token::{classify_identifier, IdentClass, Token, TokenType, TokenValue};

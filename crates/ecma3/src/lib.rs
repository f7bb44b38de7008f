//! Thin facade over [`ecma3_lex`] and [`ecma3_par`]: the two entry
//! points downstream consumers actually need, `tokenize` and `parse`.
//!
//! Nothing here does any work of its own; it exists so a consumer can
//! depend on one crate instead of wiring the tokenizer and parser
//! crates together by hand.

pub use ecma3_lex::{Token, TokenType, TokenValue, Tokenizer, WarningSink};
pub use ecma3_par::{Node, NodeKind, Parser};
pub use ecma3_util::{ParseError, ParseResult, Position, Symbol};

/// Tokenizes `text`, yielding one `Result` per token up to and
/// including a final `TokenType::Eof`. Iteration stops after either the
/// `Eof` token or the first scan error.
pub fn tokenize(text: &str) -> TokenStream {
    TokenStream { tokenizer: Tokenizer::new(text), done: false }
}

/// Parses `text` into its `toplevel` node.
///
/// `exigent_mode` selects strict grammar-conformance checks (ASI
/// tolerance off, label/assignment-target validation on) over the
/// lenient defaults used by best-effort tooling. `embed_tokens`
/// attaches a source span to every node, at the cost of tracking one
/// extra position pair per node.
pub fn parse(text: &str, exigent_mode: bool, embed_tokens: bool) -> ParseResult<Node> {
    Parser::new(text, exigent_mode, embed_tokens)?.parse()
}

/// An iterator over a source text's tokens, built on top of the
/// demand-driven [`Tokenizer`].
pub struct TokenStream {
    tokenizer: Tokenizer,
    done: bool,
}

impl Iterator for TokenStream {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(tok) => {
                if tok.ty == TokenType::Eof {
                    self.done = true;
                }
                Some(Ok(tok))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

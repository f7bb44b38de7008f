//! Identifier and keyword scanning.

use ecma3_util::{ParseResult, Position};

use crate::scanner::Tokenizer;
use crate::token::{classify_identifier, IdentClass, Token, TokenType, TokenValue, ATOM_KEYWORDS_TABLE, KEYWORDS, OPERATOR_KEYWORDS_TABLE};
use crate::unicode::is_ident_continue;

impl Tokenizer {
    /// Scans an identifier-shaped lexeme and classifies it into a `name`,
    /// `keyword`, `operator`, or `atom` token per the fixed keyword table.
    pub(crate) fn scan_identifier(&mut self, start: Position) -> ParseResult<Token> {
        let buf_start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(buf_start).to_string();

        let token = match classify_identifier(&text) {
            IdentClass::OperatorKeyword => {
                let word = static_match(OPERATOR_KEYWORDS_TABLE, &text);
                self.finish_token(TokenType::Operator, TokenValue::Lexeme(word), start)
            }
            IdentClass::AtomKeyword => {
                let word = static_match(ATOM_KEYWORDS_TABLE, &text);
                self.finish_token(TokenType::Atom, TokenValue::Lexeme(word), start)
            }
            IdentClass::Keyword => {
                let word = static_match(KEYWORDS, &text);
                self.finish_token(TokenType::Keyword, TokenValue::Lexeme(word), start)
            }
            IdentClass::Name => {
                let symbol = self.interner.intern(&text);
                self.finish_token(TokenType::Name, TokenValue::Name(symbol), start)
            }
        };
        Ok(token)
    }
}

fn static_match(table: &[&'static str], text: &str) -> &'static str {
    table
        .iter()
        .find(|candidate| **candidate == text)
        .copied()
        .expect("classify_identifier and its table disagree")
}

//! Operator scanning: greedy longest-match over the fixed operator table.

use ecma3_util::Position;

use crate::scanner::Tokenizer;
use crate::token::{Token, TokenType, TokenValue, OPERATORS};

impl Tokenizer {
    /// Matches the longest operator lexeme starting at the cursor. The
    /// operator table is ordered longest-first, so the first match found
    /// is the greedy one (e.g. `>` extends to `>>`, `>>>`, `>>>=`).
    pub(crate) fn scan_operator(&mut self, start: Position) -> Token {
        let remaining = self.cursor.remaining();
        let matched = OPERATORS
            .iter()
            .find(|op| remaining.starts_with(*op))
            .copied()
            .expect("dispatch only calls scan_operator on a known operator start char");
        self.cursor.advance_n(matched.chars().count());
        self.finish_token(TokenType::Operator, TokenValue::Lexeme(matched), start)
    }
}

//! Comment trivia scanning.
//!
//! Comments never reach the parser as real tokens; they are captured here
//! and attached to the following token's `comments_before` by the caller
//! in `scanner::Tokenizer::collect_trivia`.

use ecma3_util::{ParseResult, Position};

use crate::scanner::Tokenizer;
use crate::token::{Token, TokenType, TokenValue};

impl Tokenizer {
    /// `//` to end of line.
    pub(crate) fn scan_line_comment(&mut self) -> ParseResult<Token> {
        let start = self.current_position();
        self.cursor.advance_n(2);
        let buf_start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(buf_start).to_string();
        self.check_cc_on(&text);
        Ok(self.make_trivia(TokenType::Comment1, TokenValue::Comment(text), start))
    }

    /// `/* ... */`, reporting "Unterminated multiline comment" on EOF.
    /// Counts embedded newlines to advance `line` and sets `newline_before`
    /// when any are found.
    pub(crate) fn scan_block_comment(&mut self) -> ParseResult<Token> {
        let start = self.current_position();
        self.cursor.advance_n(2);
        let buf_start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_at(start, "Unterminated multiline comment"));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                let text = self.cursor.slice_from(buf_start).to_string();
                self.cursor.advance_n(2);
                self.check_cc_on(&text);
                if text.contains('\n') {
                    self.mark_newline_before();
                }
                return Ok(self.make_trivia(TokenType::Comment2, TokenValue::Comment(text), start));
            }
            self.cursor.advance();
        }
    }

    /// Warns (via the injectable sink) on `@cc_on` conditional comments,
    /// case-insensitively, without failing the scan.
    fn check_cc_on(&mut self, text: &str) {
        if text.trim_start().to_ascii_lowercase().starts_with("@cc_on") {
            (self.warn)(text);
        }
    }
}

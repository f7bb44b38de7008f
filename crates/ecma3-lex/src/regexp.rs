//! Regular-expression literal scanning.
//!
//! Only entered when `regex_allowed` is true or the parser forces
//! reinterpretation via `reinterpret_as_regex`. The body runs until an
//! unescaped `/` outside a `[...]` character class; `\` escapes one
//! following character; the identifier-continue run after the closing `/`
//! is captured as flags.

use ecma3_util::{ParseResult, Position};

use crate::scanner::Tokenizer;
use crate::token::{Token, TokenType, TokenValue};
use crate::unicode::is_ident_continue;

impl Tokenizer {
    pub(crate) fn scan_regexp(&mut self, start: Position) -> ParseResult<Token> {
        self.scan_regexp_body(start)
    }

    /// Used by `reinterpret_as_regex`, which has already restored the
    /// cursor and needs to stamp the rebuilt token with the original
    /// `nlb` instead of whatever `collect_trivia` would compute now.
    pub(crate) fn scan_regexp_raw(&mut self, start: Position, nlb: bool) -> ParseResult<Token> {
        let token = self.scan_regexp_body(start)?;
        Ok(Token { nlb, ..token })
    }

    fn scan_regexp_body(&mut self, start: Position) -> ParseResult<Token> {
        self.cursor.advance();

        let mut body = String::new();
        let mut in_class = false;
        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(self.error_at(start, "Unterminated regular expression literal"));
            }
            let c = self.cursor.current_char();
            if c == '\\' {
                body.push(c);
                self.cursor.advance();
                if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                    return Err(self.error_at(start, "Unterminated regular expression literal"));
                }
                body.push(self.cursor.current_char());
                self.cursor.advance();
                continue;
            }
            if c == '[' {
                in_class = true;
            } else if c == ']' {
                in_class = false;
            } else if c == '/' && !in_class {
                self.cursor.advance();
                break;
            }
            body.push(c);
            self.cursor.advance();
        }

        let flags_start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let flags = self.cursor.slice_from(flags_start).to_string();

        Ok(self.finish_token(TokenType::Regexp, TokenValue::Regexp(body, flags), start))
    }
}

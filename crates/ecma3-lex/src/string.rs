//! String literal scanning.

use ecma3_util::{ParseResult, Position};

use crate::scanner::Tokenizer;
use crate::token::{Token, TokenType, TokenValue};
use crate::unicode::{parse_hex_byte, parse_hex_codepoint};

impl Tokenizer {
    /// Scans a string delimited by `"` or `'`. Escapes: `\n \r \t \b \v \f
    /// \0`, `\xHH`, `\uHHHH`, and `\<any>` (literal character). Unterminated
    /// strings are reported at the opening quote's position.
    pub(crate) fn scan_string(&mut self, start: Position) -> ParseResult<Token> {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(self.error_at(start, "Unterminated string literal"));
            }
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                break;
            }
            if c == '\\' {
                self.cursor.advance();
                content.push(self.scan_escape(start)?);
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        Ok(self.finish_token(TokenType::Str, TokenValue::Str(content), start))
    }

    /// Parses one escape sequence after the backslash has been consumed.
    pub(crate) fn scan_escape(&mut self, string_start: Position) -> ParseResult<char> {
        if self.cursor.is_at_end() {
            return Err(self.error_at(string_start, "Unterminated string literal"));
        }
        let c = self.cursor.current_char();
        self.cursor.advance();
        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'b' => Ok('\u{0008}'),
            'v' => Ok('\u{000B}'),
            'f' => Ok('\u{000C}'),
            '0' => Ok('\0'),
            'x' => {
                let hex: String = (0..2).map(|i| self.cursor.peek_char(i)).collect();
                let byte = parse_hex_byte(&hex).ok_or_else(|| {
                    self.error(format!("Invalid hex escape sequence '\\x{}'", hex))
                })?;
                self.cursor.advance_n(2);
                Ok(byte as char)
            }
            'u' => {
                let hex: String = (0..4).map(|i| self.cursor.peek_char(i)).collect();
                let codepoint = parse_hex_codepoint(&hex).ok_or_else(|| {
                    self.error(format!("Invalid unicode escape sequence '\\u{}'", hex))
                })?;
                self.cursor.advance_n(4);
                char::from_u32(codepoint)
                    .ok_or_else(|| self.error(format!("Invalid unicode escape sequence '\\u{}'", hex)))
            }
            other => Ok(other),
        }
    }
}

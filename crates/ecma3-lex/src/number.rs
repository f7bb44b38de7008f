//! Number literal scanning: hex, octal, and decimal forms.

use ecma3_util::{ParseResult, Position};

use crate::scanner::Tokenizer;
use crate::token::{Token, TokenType, TokenValue};
use crate::unicode::is_ident_continue;

impl Tokenizer {
    /// Greedily consumes the number's lexeme, then validates it against
    /// the three recognized shapes (hex, octal, decimal). Any other shape
    /// is "Invalid syntax".
    pub(crate) fn scan_number(&mut self, start: Position) -> ParseResult<Token> {
        let buf_start = self.cursor.position();
        self.consume_number_lexeme(buf_start);
        let text = self.cursor.slice_from(buf_start).to_string();

        if let Some(value) = parse_hex(&text) {
            return Ok(self.finish_token(TokenType::Num, TokenValue::Num(value), start));
        }
        if let Some(value) = parse_octal(&text) {
            return Ok(self.finish_token(TokenType::Num, TokenValue::Num(value), start));
        }
        if let Some(value) = parse_decimal(&text) {
            return Ok(self.finish_token(TokenType::Num, TokenValue::Num(value), start));
        }

        Err(self.error_at(start, format!("Invalid syntax: bad number literal '{}'", text)))
    }

    fn consume_number_lexeme(&mut self, buf_start: usize) {
        if self.cursor.current_char() == '.' {
            self.cursor.advance();
        }
        loop {
            let c = self.cursor.current_char();
            if c == '+' || c == '-' {
                let prev = self.cursor.slice_from(buf_start).chars().last();
                if matches!(prev, Some('e') | Some('E')) {
                    self.cursor.advance();
                    continue;
                }
                break;
            }
            if c == '.' || is_ident_continue(c) {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }
}

fn parse_hex(text: &str) -> Option<f64> {
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok().map(|v| v as f64)
}

fn parse_octal(text: &str) -> Option<f64> {
    let digits = text.strip_prefix('0')?;
    if digits.is_empty() || !digits.chars().all(|c| matches!(c, '0'..='7')) {
        return None;
    }
    u64::from_str_radix(digits, 8).ok().map(|v| v as f64)
}

fn parse_decimal(text: &str) -> Option<f64> {
    let mut chars = text.chars().peekable();
    let mut saw_digit = false;

    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        chars.next();
        saw_digit = true;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }
    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut saw_exponent_digit = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            saw_exponent_digit = true;
        }
        if !saw_exponent_digit {
            return None;
        }
    }
    if chars.next().is_some() {
        return None;
    }
    text.parse::<f64>().ok()
}

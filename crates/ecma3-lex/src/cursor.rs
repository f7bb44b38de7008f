//! Character cursor over normalized source text.
//!
//! Handles UTF-8 correctly and tracks 0-based line/column/absolute-offset
//! position, matching spec-level position conventions rather than an
//! editor's 1-based one. The cursor owns its normalized buffer so a
//! [`crate::scanner::Tokenizer`] can be handed around without a borrowed
//! lifetime tying it to the caller's input.

/// Collapses `\r\n`, `\r`, U+2028, and U+2029 to `\n`, and strips a leading
/// BOM (U+FEFF).
pub fn normalize(source: &str) -> String {
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\u{2028}' | '\u{2029}' => out.push('\n'),
            c => out.push(c),
        }
    }
    out
}

pub struct Cursor {
    source: String,
    position: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Self {
            source: normalize(source),
            position: 0,
            line: 0,
            column: 0,
        }
    }

    /// Current character, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Advances past the current character, updating line/column.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            return;
        }
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.position]
    }

    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}

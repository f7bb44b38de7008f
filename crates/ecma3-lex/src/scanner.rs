//! The scanner state record: [`Tokenizer`] and its `next_token`/
//! `reinterpret_as_regex` entry points.

use ecma3_util::{Interner, ParseError, ParseResult, Position, Symbol};

use crate::cursor::{Cursor, CursorSnapshot};
use crate::token::{Token, TokenType, TokenValue};
use crate::unicode::is_ident_start;

/// Injectable callback for non-fatal warnings (currently just `@cc_on`
/// comments). Defaults to a no-op.
pub type WarningSink = Box<dyn FnMut(&str)>;

/// Demand-driven scanner over a single source text.
///
/// Owns its normalized source, its own identifier interner (so two
/// tokenizers never share mutable state), and the `regex_allowed` /
/// `newline_before` flags the parser depends on to disambiguate `/` and
/// to apply automatic semicolon insertion.
pub struct Tokenizer {
    pub(crate) cursor: Cursor,
    pub(crate) interner: Interner,
    regex_allowed: bool,
    newline_before: bool,
    pending_comments: Vec<Token>,
    last_token_snapshot: Option<CursorSnapshot>,
    last_nlb: bool,
    warn: WarningSink,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        Self::with_warning_sink(source, Box::new(|_| {}))
    }

    pub fn with_warning_sink(source: &str, warn: WarningSink) -> Self {
        Self {
            cursor: Cursor::new(source),
            interner: Interner::new(),
            regex_allowed: true,
            newline_before: false,
            pending_comments: Vec::new(),
            last_token_snapshot: None,
            last_nlb: false,
            warn,
        }
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn resolve(&self, sym: Symbol) -> &str {
        self.interner.resolve(sym)
    }

    pub(crate) fn current_position(&self) -> Position {
        Position::new(self.cursor.line(), self.cursor.column(), self.cursor.position())
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        let pos = self.current_position();
        ParseError::new(message, pos.line, pos.col, pos.pos)
    }

    pub(crate) fn error_at(&self, pos: Position, message: impl Into<String>) -> ParseError {
        ParseError::new(message, pos.line, pos.col, pos.pos)
    }

    fn take_newline_before(&mut self) -> bool {
        std::mem::replace(&mut self.newline_before, false)
    }

    pub(crate) fn mark_newline_before(&mut self) {
        self.newline_before = true;
    }

    /// Builds a trivia (comment) token. Trivia never carries its own
    /// `comments_before` and never feeds `regex_allowed`.
    pub(crate) fn make_trivia(&self, ty: TokenType, value: TokenValue, start: Position) -> Token {
        Token::new(ty, value, start, false)
    }

    pub(crate) fn finish_token(&mut self, ty: TokenType, value: TokenValue, start: Position) -> Token {
        let mut token = Token::new(ty, value, start, self.take_newline_before());
        token.comments_before = std::mem::take(&mut self.pending_comments);
        self.update_regex_allowed(&token);
        token
    }

    /// Returns the next token, or an `eof` token at end of input.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        self.collect_trivia()?;

        let start = self.current_position();
        self.last_token_snapshot = Some(self.cursor.snapshot());
        self.last_nlb = self.newline_before;

        if self.cursor.is_at_end() {
            return Ok(self.finish_token(TokenType::Eof, TokenValue::None, start));
        }

        let c = self.cursor.current_char();

        if c == '"' || c == '\'' {
            return self.scan_string(start);
        }
        if c.is_ascii_digit() {
            return self.scan_number(start);
        }
        if c == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            return self.scan_number(start);
        }
        if c == '.' {
            self.cursor.advance();
            return Ok(self.finish_token(TokenType::Punc, TokenValue::Lexeme("."), start));
        }
        if is_ident_start(c) {
            return self.scan_identifier(start);
        }
        if crate::token::PUNCTUATION.contains(&c) {
            self.cursor.advance();
            let lexeme = punc_lexeme(c);
            return Ok(self.finish_token(TokenType::Punc, TokenValue::Lexeme(lexeme), start));
        }
        if c == '/' {
            if self.regex_allowed {
                return self.scan_regexp(start);
            }
            return Ok(self.scan_operator(start));
        }
        if crate::token::OPERATOR_START_CHARS.contains(&c) {
            return Ok(self.scan_operator(start));
        }

        self.cursor.advance();
        Err(self.error_at(start, format!("Unexpected character '{}'", c)))
    }

    /// Rolls the cursor back to the start of the last-emitted token and
    /// rescans it as a regular expression literal, regardless of
    /// `regex_allowed`. The parser calls this when it discovers late that
    /// a `/` it already consumed as division actually starts a regex.
    pub fn reinterpret_as_regex(&mut self) -> ParseResult<Token> {
        let snapshot = self
            .last_token_snapshot
            .expect("reinterpret_as_regex called with no prior token");
        self.cursor.restore(snapshot);
        let start = self.current_position();
        let nlb = self.last_nlb;
        let token = self.scan_regexp_raw(start, nlb)?;
        Ok(token)
    }

    /// Skips whitespace and comments, accumulating comment trivia and the
    /// sticky `newline_before` flag.
    fn collect_trivia(&mut self) -> ParseResult<()> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }
            match self.cursor.current_char() {
                '\n' => {
                    self.newline_before = true;
                    self.cursor.advance();
                }
                ' ' | '\t' | '\r' | '\u{FEFF}' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_char(1) == '/' => {
                    let comment = self.scan_line_comment()?;
                    self.pending_comments.push(comment);
                }
                '/' if self.cursor.peek_char(1) == '*' => {
                    let comment = self.scan_block_comment()?;
                    self.pending_comments.push(comment);
                }
                _ => return Ok(()),
            }
        }
    }

    /// `regex_allowed` after-emit rule: true iff the just-emitted token is
    /// an operator that isn't a postfix `++`/`--`, a keyword that
    /// legitimately precedes an expression, or one of `[ { } ( , . ; :`.
    fn update_regex_allowed(&mut self, token: &Token) {
        self.regex_allowed = match token.ty {
            TokenType::Operator => !matches!(token.value, TokenValue::Lexeme("++") | TokenValue::Lexeme("--")),
            TokenType::Keyword => match &token.value {
                TokenValue::Lexeme(word) => crate::token::EXPRESSION_KEYWORDS.contains(word),
                _ => false,
            },
            TokenType::Punc => matches!(
                token.value,
                TokenValue::Lexeme("[")
                    | TokenValue::Lexeme("{")
                    | TokenValue::Lexeme("}")
                    | TokenValue::Lexeme("(")
                    | TokenValue::Lexeme(",")
                    | TokenValue::Lexeme(".")
                    | TokenValue::Lexeme(";")
                    | TokenValue::Lexeme(":")
            ),
            _ => false,
        };
    }
}

fn punc_lexeme(c: char) -> &'static str {
    match c {
        '[' => "[",
        ']' => "]",
        '{' => "{",
        '}' => "}",
        '(' => "(",
        ')' => ")",
        ',' => ",",
        ';' => ";",
        ':' => ":",
        _ => unreachable!("not a punctuation character"),
    }
}

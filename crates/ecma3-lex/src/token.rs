//! Token shape and the fixed keyword/operator/punctuation tables.

use ecma3_util::{Position, Symbol};

/// The closed set of token type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenType {
    Num,
    Str,
    Regexp,
    Name,
    Keyword,
    Atom,
    Operator,
    Punc,
    Comment1,
    Comment2,
    Eof,
}

/// A token's payload; its shape depends on `TokenType`.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    None,
    Num(f64),
    Str(String),
    Regexp(String, String),
    Name(Symbol),
    Lexeme(&'static str),
    Comment(String),
}

/// A single token: type tag, payload, start position, newline-before flag,
/// and any comment trivia collected since the previous non-comment token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub ty: TokenType,
    pub value: TokenValue,
    pub start: Position,
    pub nlb: bool,
    pub comments_before: Vec<Token>,
}

impl Token {
    pub fn new(ty: TokenType, value: TokenValue, start: Position, nlb: bool) -> Self {
        Self {
            ty,
            value,
            start,
            nlb,
            comments_before: Vec::new(),
        }
    }

    pub fn eof(start: Position, nlb: bool) -> Self {
        Self::new(TokenType::Eof, TokenValue::None, start, nlb)
    }

    /// Textual lexeme for operator/keyword/atom/punc tokens, used by the
    /// `regex_allowed` rule and by assignability checks. Panics if called
    /// on a token whose value isn't a `Lexeme`.
    pub fn lexeme(&self) -> &str {
        match &self.value {
            TokenValue::Lexeme(s) => s,
            _ => panic!("lexeme() called on a token without a fixed lexeme"),
        }
    }
}

/// Full ECMAScript 3 keyword set.
pub const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "const", "continue", "default", "delete", "do", "else",
    "finally", "for", "function", "if", "in", "instanceof", "new", "return", "switch",
    "throw", "try", "typeof", "var", "void", "while", "with",
];

/// Keywords reclassified as `operator` tokens so the parser can treat them
/// uniformly with symbolic operators.
pub(crate) const OPERATOR_KEYWORDS_TABLE: &[&str] =
    &["in", "instanceof", "typeof", "new", "void", "delete"];

/// Keywords reclassified as `atom` tokens.
pub(crate) const ATOM_KEYWORDS_TABLE: &[&str] = &["false", "null", "true", "undefined"];

/// What an identifier-shaped lexeme turns out to be once classified
/// against the keyword table.
pub enum IdentClass {
    OperatorKeyword,
    AtomKeyword,
    Keyword,
    Name,
}

/// Classifies an already-scanned identifier-shaped lexeme.
///
/// `{in, instanceof, typeof, new, void, delete}` become operators,
/// `{false, null, true, undefined}` become atoms, the rest of the keyword
/// set stays `keyword`, and anything else is a plain `name`. Reserved
/// future words (`class`, `enum`, ...) are not reserved here.
pub fn classify_identifier(text: &str) -> IdentClass {
    if OPERATOR_KEYWORDS_TABLE.contains(&text) {
        IdentClass::OperatorKeyword
    } else if ATOM_KEYWORDS_TABLE.contains(&text) {
        IdentClass::AtomKeyword
    } else if KEYWORDS.contains(&text) {
        IdentClass::Keyword
    } else {
        IdentClass::Name
    }
}

/// Operator lexemes the scanner matches greedily, longest first. `/` and
/// `/=` are included here too: by the time the scanner falls through to
/// generic operator matching at a `/`, comment and regex-literal starts
/// have already been ruled out.
pub const OPERATORS: &[&str] = &[
    ">>>=",
    "===", "!==", ">>>", "<<=", ">>=",
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<", ">>",
    "+", "-", "*", "/", "&", "%", "=", "<", ">", "!", "?", "|", "~", "^",
];

/// First characters that can start an operator lexeme.
pub const OPERATOR_START_CHARS: &[char] =
    &['+', '-', '*', '&', '%', '=', '<', '>', '!', '?', '|', '~', '^'];

/// Single-character punctuation: never combines with a following character.
/// `.` is handled separately by the scanner because a leading `.` followed
/// by a digit starts a number instead.
pub const PUNCTUATION: &[char] = &['[', ']', '{', '}', '(', ')', ',', ';', ':'];

/// Keywords that legitimately precede an expression, used by the
/// `regex_allowed` after-emit rule.
pub const EXPRESSION_KEYWORDS: &[&str] = &["return", "new", "delete", "throw", "else", "case"];

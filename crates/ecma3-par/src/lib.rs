//! A predictive recursive-descent parser with one-token lookahead,
//! producing the tagged-tuple AST described in [`ast`].
//!
//! The parser pulls tokens from an [`ecma3_lex::Tokenizer`] on demand
//! rather than pre-tokenizing into a vector: the tokenizer's `/`
//! disambiguation depends on parser-visible context (see
//! [`Parser::reinterpret_current_as_regex`]), so the two must stay
//! coupled through a live pull, not a finished token stream.

pub mod ast;
mod assignable;
#[cfg(test)]
mod edge_cases;
mod expr;
mod function;
mod stmt;

use ecma3_lex::{Token, TokenType, TokenValue, Tokenizer, WarningSink};
use ecma3_util::{ParseError, ParseResult, Position, Symbol};

pub use ast::{AccessorKind, AssignOp, Node, NodeKind, NodeSpan, ObjectProp, PropertyKey, SwitchCase, VarDecl};

/// Statement tags a label is allowed to wrap in `exigent_mode`.
pub(crate) const STATEMENTS_WITH_LABELS: &[&str] = &["for", "do", "while", "switch"];

/// Parser state: current/previous/peeked tokens, the live tokenizer,
/// and the nesting counters and label stack the grammar depends on.
pub struct Parser {
    tokenizer: Tokenizer,
    current: Token,
    previous: Token,
    peeked: Option<Token>,
    in_function: u32,
    in_loop: u32,
    labels: Vec<Symbol>,
    exigent_mode: bool,
    embed_tokens: bool,
}

impl Parser {
    fn new_with_tokenizer(mut tokenizer: Tokenizer, exigent_mode: bool, embed_tokens: bool) -> ParseResult<Self> {
        let current = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            previous: current.clone(),
            current,
            peeked: None,
            in_function: 0,
            in_loop: 0,
            labels: Vec::new(),
            exigent_mode,
            embed_tokens,
        })
    }

    pub fn new(text: &str, exigent_mode: bool, embed_tokens: bool) -> ParseResult<Self> {
        Self::new_with_tokenizer(Tokenizer::new(text), exigent_mode, embed_tokens)
    }

    pub fn with_warning_sink(text: &str, exigent_mode: bool, embed_tokens: bool, warn: WarningSink) -> ParseResult<Self> {
        Self::new_with_tokenizer(Tokenizer::with_warning_sink(text, warn), exigent_mode, embed_tokens)
    }

    /// Parses a complete source text, returning the `toplevel` node.
    pub fn parse(&mut self) -> ParseResult<Node> {
        let start = self.current.start;
        let mut body = Vec::new();
        while self.current.ty != TokenType::Eof {
            body.push(self.parse_statement()?);
        }
        Ok(self.finish_node(NodeKind::Toplevel(body), start))
    }

    pub fn resolve(&self, sym: Symbol) -> &str {
        self.tokenizer.resolve(sym)
    }

    // -- token plumbing -----------------------------------------------

    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.previous
    }

    pub(crate) fn bump(&mut self) -> ParseResult<Token> {
        let next = match self.peeked.take() {
            Some(tok) => tok,
            None => self.tokenizer.next_token()?,
        };
        self.previous = std::mem::replace(&mut self.current, next);
        Ok(self.previous.clone())
    }

    pub(crate) fn peek(&mut self) -> ParseResult<&Token> {
        if self.peeked.is_none() {
            self.peeked = Some(self.tokenizer.next_token()?);
        }
        Ok(self.peeked.as_ref().expect("just filled"))
    }

    /// Rolls the just-emitted `/`/`/=` token back and rescans it as a
    /// regex literal. Only valid when nothing has been peeked past it.
    pub(crate) fn reinterpret_current_as_regex(&mut self) -> ParseResult<()> {
        debug_assert!(self.peeked.is_none(), "cannot reinterpret past a peeked token");
        self.current = self.tokenizer.reinterpret_as_regex()?;
        Ok(())
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.current.ty == TokenType::Eof
    }

    pub(crate) fn exigent_mode(&self) -> bool {
        self.exigent_mode
    }

    pub(crate) fn in_loop(&self) -> bool {
        self.in_loop > 0
    }

    pub(crate) fn has_label(&self, sym: Symbol) -> bool {
        self.labels.contains(&sym)
    }

    pub(crate) fn in_function(&self) -> bool {
        self.in_function > 0
    }

    pub(crate) fn enter_loop(&mut self) {
        self.in_loop += 1;
    }

    pub(crate) fn exit_loop(&mut self) {
        self.in_loop -= 1;
    }

    pub(crate) fn push_label(&mut self, sym: Symbol) {
        self.labels.push(sym);
    }

    pub(crate) fn pop_label(&mut self) {
        self.labels.pop();
    }

    /// Empties the label stack, returning what it held. Used around a
    /// nested function body so its `break`/`continue label` references
    /// cannot resolve to a label from the enclosing scope.
    pub(crate) fn take_labels(&mut self) -> Vec<Symbol> {
        std::mem::take(&mut self.labels)
    }

    pub(crate) fn restore_labels(&mut self, labels: Vec<Symbol>) {
        self.labels = labels;
    }

    /// Resets the loop-depth counter to zero, returning its prior value.
    pub(crate) fn take_loop_depth(&mut self) -> u32 {
        std::mem::take(&mut self.in_loop)
    }

    pub(crate) fn restore_loop_depth(&mut self, depth: u32) {
        self.in_loop = depth;
    }

    pub(crate) fn enter_function(&mut self) {
        self.in_function += 1;
    }

    pub(crate) fn exit_function(&mut self) {
        self.in_function -= 1;
    }

    pub(crate) fn is_punc(&self, lexeme: &str) -> bool {
        self.current.ty == TokenType::Punc && matches!(&self.current.value, TokenValue::Lexeme(l) if *l == lexeme)
    }

    pub(crate) fn is_operator(&self, lexeme: &str) -> bool {
        self.current.ty == TokenType::Operator && matches!(&self.current.value, TokenValue::Lexeme(l) if *l == lexeme)
    }

    pub(crate) fn is_keyword(&self, word: &str) -> bool {
        self.current.ty == TokenType::Keyword && matches!(&self.current.value, TokenValue::Lexeme(l) if *l == word)
    }

    pub(crate) fn is_atom(&self, word: &str) -> bool {
        self.current.ty == TokenType::Atom && matches!(&self.current.value, TokenValue::Lexeme(l) if *l == word)
    }

    pub(crate) fn current_lexeme(&self) -> Option<&'static str> {
        match self.current.value {
            TokenValue::Lexeme(l) => Some(l),
            _ => None,
        }
    }

    pub(crate) fn expect_punc(&mut self, lexeme: &str) -> ParseResult<()> {
        if self.is_punc(lexeme) {
            self.bump()?;
            Ok(())
        } else {
            Err(self.unexpected_token(&format!("expected punctuation '{}'", lexeme)))
        }
    }

    pub(crate) fn expect_operator(&mut self, lexeme: &str) -> ParseResult<()> {
        if self.is_operator(lexeme) {
            self.bump()?;
            Ok(())
        } else {
            Err(self.unexpected_token(&format!("expected operator '{}'", lexeme)))
        }
    }

    pub(crate) fn expect_keyword(&mut self, word: &str) -> ParseResult<()> {
        if self.is_keyword(word) {
            self.bump()?;
            Ok(())
        } else {
            Err(self.unexpected_token(&format!("expected keyword '{}'", word)))
        }
    }

    pub(crate) fn expect_name(&mut self) -> ParseResult<Symbol> {
        match self.current.value {
            TokenValue::Name(sym) => {
                self.bump()?;
                Ok(sym)
            }
            _ => Err(self.unexpected_token("expected identifier")),
        }
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        let pos = self.current.start;
        ParseError::new(message, pos.line, pos.col, pos.pos)
    }

    pub(crate) fn error_at(&self, pos: Position, message: impl Into<String>) -> ParseError {
        ParseError::new(message, pos.line, pos.col, pos.pos)
    }

    pub(crate) fn unexpected_token(&self, context: &str) -> ParseError {
        self.error(format!("Unexpected token {:?}: {} (value {:?})", self.current.ty, context, self.current.value))
    }

    pub(crate) fn finish_node(&self, kind: NodeKind, start: Position) -> Node {
        let span = if self.embed_tokens { Some((start, self.current.start)) } else { None };
        Node::new(kind, span)
    }

    // -- statement-level shared helpers --------------------------------

    /// Automatic semicolon insertion: in lenient mode, a missing `;` is
    /// tolerated before `nlb`, `eof`, or a closing `}`.
    pub(crate) fn consume_semicolon(&mut self) -> ParseResult<()> {
        if self.is_punc(";") {
            self.bump()?;
            return Ok(());
        }
        if !self.exigent_mode && (self.current.nlb || self.is_eof() || self.is_punc("}")) {
            return Ok(());
        }
        Err(self.unexpected_token("expected ';'"))
    }
}

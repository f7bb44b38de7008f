//! Function declarations and expressions: parameter lists and bodies.
//!
//! A function body resets the loop/label tracking the parser carries
//! for its enclosing scope — a `break`/`continue`/label from inside one
//! function can never reach out into another — while leaving
//! `in_function` incremented so `return` is legal throughout.

use ecma3_util::{ParseResult, Symbol};

use crate::ast::{Node, NodeKind};
use crate::Parser;

impl Parser {
    /// `function` has already been matched as the current token's
    /// keyword by the caller for declarations; for expressions the
    /// caller has not yet consumed it. Either way this consumes the
    /// `function` keyword itself.
    ///
    /// `is_declaration` selects between `Defun` (name required) and
    /// `Function` (name optional, for named function expressions).
    pub(crate) fn parse_function(&mut self, is_declaration: bool) -> ParseResult<NodeKind> {
        self.expect_keyword("function")?;
        let name = if is_declaration {
            Some(self.expect_name()?)
        } else if self.current().ty == ecma3_lex::TokenType::Name {
            Some(self.expect_name()?)
        } else {
            None
        };
        let params = self.parse_params()?;
        let body = self.parse_function_body()?;
        Ok(if is_declaration {
            NodeKind::Defun { name: name.expect("declarations require a name"), params, body }
        } else {
            NodeKind::Function { name, params, body }
        })
    }

    /// `(a, b, c)`, a bare comma-separated list of identifiers — ES3 has
    /// no default values, rest parameters, or destructuring.
    pub(crate) fn parse_params(&mut self) -> ParseResult<Vec<Symbol>> {
        self.expect_punc("(")?;
        let mut params = Vec::new();
        let mut first = true;
        while !self.is_punc(")") {
            if first {
                first = false;
            } else {
                self.expect_punc(",")?;
            }
            params.push(self.expect_name()?);
        }
        self.bump()?;
        Ok(params)
    }

    /// `{ statement* }`. Saves and restores the loop-depth and label
    /// stack around the body so a label or loop from an enclosing
    /// function cannot be targeted by a bare `break`/`continue` inside
    /// this one; `in_function` is incremented for the duration so a
    /// `return` anywhere in the body is legal.
    pub(crate) fn parse_function_body(&mut self) -> ParseResult<Vec<Node>> {
        self.expect_punc("{")?;
        let saved_labels = self.take_labels();
        let saved_loop = self.take_loop_depth();
        self.enter_function();
        let mut body = Vec::new();
        while !self.is_punc("}") {
            body.push(self.parse_statement()?);
        }
        self.bump()?;
        self.exit_function();
        self.restore_loop_depth(saved_loop);
        self.restore_labels(saved_labels);
        Ok(body)
    }
}

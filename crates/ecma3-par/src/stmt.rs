//! Statement grammar: dispatch by leading token, ASI-aware termination,
//! and the handful of statement forms (`for`/`for-in`, `switch`,
//! `try`/`catch`/`finally`, labels) with non-trivial shapes.

use ecma3_lex::TokenType;
use ecma3_util::ParseResult;

use crate::ast::{Node, NodeKind, SwitchCase, VarDecl};
use crate::Parser;

impl Parser {
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node> {
        let start = self.current().start;
        if self.is_punc("{") {
            return self.parse_block();
        }
        if self.is_punc(";") {
            self.bump()?;
            return Ok(self.finish_node(NodeKind::Block(Vec::new()), start));
        }
        if self.current().ty == TokenType::Keyword {
            return self.parse_keyword_statement(start);
        }
        if self.current().ty == TokenType::Name {
            if let Some(label) = self.try_parse_label(start)? {
                return Ok(label);
            }
        }
        self.parse_expression_statement(start)
    }

    fn parse_block(&mut self) -> ParseResult<Node> {
        let start = self.current().start;
        self.expect_punc("{")?;
        let mut body = Vec::new();
        while !self.is_punc("}") {
            body.push(self.parse_statement()?);
        }
        self.bump()?;
        Ok(self.finish_node(NodeKind::Block(body), start))
    }

    /// A `name` immediately followed by `:` and not part of a larger
    /// expression is a label, not an expression statement. Peeks ahead
    /// without committing so ordinary expressions starting with an
    /// identifier (`foo();`) fall through unaffected.
    fn try_parse_label(&mut self, start: ecma3_util::Position) -> ParseResult<Option<Node>> {
        if !self.peek_is_colon()? {
            return Ok(None);
        }
        let name = self.expect_name()?;
        self.expect_punc(":")?;
        self.push_label(name);
        let body = self.parse_statement()?;
        self.pop_label();
        if self.exigent_mode() && !self.labeled_statement_is_allowed(&body.kind) {
            return Err(self.error_at(start, "Label must precede a loop or switch statement"));
        }
        Ok(Some(self.finish_node(NodeKind::Label(name, Box::new(body)), start)))
    }

    fn peek_is_colon(&mut self) -> ParseResult<bool> {
        let next = self.peek()?;
        Ok(next.ty == TokenType::Punc && matches!(&next.value, ecma3_lex::TokenValue::Lexeme(l) if *l == ":"))
    }

    fn labeled_statement_is_allowed(&self, kind: &NodeKind) -> bool {
        kind.is_loop_like() || matches!(kind, NodeKind::Label(..) | NodeKind::Block(..))
    }

    fn parse_keyword_statement(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        match self.current_lexeme().expect("keyword tokens always carry a lexeme") {
            "var" => self.parse_var_statement(start, false),
            "const" => self.parse_var_statement(start, true),
            "if" => self.parse_if(start),
            "while" => self.parse_while(start),
            "do" => self.parse_do_while(start),
            "for" => self.parse_for(start),
            "with" => self.parse_with(start),
            "switch" => self.parse_switch(start),
            "break" => self.parse_break_continue(start, true),
            "continue" => self.parse_break_continue(start, false),
            "return" => self.parse_return(start),
            "throw" => self.parse_throw(start),
            "try" => self.parse_try(start),
            "debugger" => {
                self.bump()?;
                self.consume_semicolon()?;
                Ok(self.finish_node(NodeKind::Debugger, start))
            }
            "function" => {
                let kind = self.parse_function(true)?;
                Ok(self.finish_node(kind, start))
            }
            _ => Err(self.unexpected_token("keyword cannot start a statement")),
        }
    }

    fn parse_var_decl_single(&mut self, no_in: bool) -> ParseResult<VarDecl> {
        let name = self.expect_name()?;
        let init = if self.is_operator("=") {
            self.bump()?;
            Some(self.parse_assignment(no_in)?)
        } else {
            None
        };
        Ok(VarDecl { name, init })
    }

    fn parse_var_decls(&mut self, no_in: bool) -> ParseResult<Vec<VarDecl>> {
        let mut decls = vec![self.parse_var_decl_single(no_in)?];
        while self.is_punc(",") {
            self.bump()?;
            decls.push(self.parse_var_decl_single(no_in)?);
        }
        Ok(decls)
    }

    fn parse_var_statement(&mut self, start: ecma3_util::Position, is_const: bool) -> ParseResult<Node> {
        self.bump()?;
        let decls = self.parse_var_decls(false)?;
        self.consume_semicolon()?;
        let kind = if is_const { NodeKind::Const(decls) } else { NodeKind::Var(decls) };
        Ok(self.finish_node(kind, start))
    }

    fn parse_if(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        self.expect_punc("(")?;
        let cond = self.parse_expression(true, false)?;
        self.expect_punc(")")?;
        let then = self.parse_statement()?;
        let otherwise = if self.is_keyword("else") {
            self.bump()?;
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(self.finish_node(NodeKind::If { cond: Box::new(cond), then: Box::new(then), otherwise }, start))
    }

    fn parse_while(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        self.expect_punc("(")?;
        let cond = self.parse_expression(true, false)?;
        self.expect_punc(")")?;
        self.enter_loop();
        let body = self.parse_statement();
        self.exit_loop();
        let body = body?;
        Ok(self.finish_node(NodeKind::While { cond: Box::new(cond), body: Box::new(body) }, start))
    }

    fn parse_do_while(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        self.enter_loop();
        let body = self.parse_statement();
        self.exit_loop();
        let body = body?;
        self.expect_keyword("while")?;
        self.expect_punc("(")?;
        let cond = self.parse_expression(true, false)?;
        self.expect_punc(")")?;
        // `do ... while (cond)` is the one statement form whose trailing
        // `;` is optional even without a preceding newline.
        if self.is_punc(";") {
            self.bump()?;
        }
        Ok(self.finish_node(NodeKind::Do { cond: Box::new(cond), body: Box::new(body) }, start))
    }

    fn parse_with(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        self.expect_punc("(")?;
        let object = self.parse_expression(true, false)?;
        self.expect_punc(")")?;
        let body = self.parse_statement()?;
        Ok(self.finish_node(NodeKind::With { object: Box::new(object), body: Box::new(body) }, start))
    }

    fn parse_for(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        self.expect_punc("(")?;

        if self.is_punc(";") {
            self.bump()?;
            return self.finish_for(start, None);
        }

        if self.is_keyword("var") || self.is_keyword("const") {
            return self.parse_for_with_declaration(start);
        }

        let first = self.parse_assignment(true)?;
        if self.is_operator("in") {
            if !self.is_assignable(&first.kind) {
                return Err(self.error_at(start, "Invalid left-hand side in for-in"));
            }
            self.bump()?;
            let object = self.parse_expression(true, false)?;
            self.expect_punc(")")?;
            self.enter_loop();
            let body = self.parse_statement();
            self.exit_loop();
            let body = body?;
            let lhs = first.clone();
            return Ok(self.finish_node(
                NodeKind::ForIn { init: Box::new(first), lhs: Box::new(lhs), object: Box::new(object), body: Box::new(body) },
                start,
            ));
        }

        let mut init_expr = first;
        while self.is_punc(",") {
            self.bump()?;
            let right = self.parse_assignment(true)?;
            init_expr = self.finish_node(NodeKind::Seq(Box::new(init_expr), Box::new(right)), start);
        }
        self.expect_punc(";")?;
        let init_stat = self.finish_node(NodeKind::Stat(Box::new(init_expr)), start);
        self.finish_for(start, Some(init_stat))
    }

    fn parse_for_with_declaration(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        let is_const = self.is_keyword("const");
        self.bump()?;
        // Parse the first declarator — initializer included — in `no_in`
        // mode before testing for `in`, so `for (var x = 0 in obj)` is
        // recognized as for-in rather than misparsed as a plain `for`
        // whose init clause trips over the unconsumed `in`.
        let first_decl = self.parse_var_decl_single(true)?;
        let first_name = first_decl.name;

        if self.is_operator("in") {
            self.bump()?;
            let object = self.parse_expression(true, false)?;
            self.expect_punc(")")?;
            self.enter_loop();
            let body = self.parse_statement();
            self.exit_loop();
            let body = body?;
            let decl_kind = if is_const { NodeKind::Const(vec![first_decl]) } else { NodeKind::Var(vec![first_decl]) };
            let init_node = self.finish_node(decl_kind, start);
            let lhs = self.finish_node(NodeKind::Name(first_name), start);
            return Ok(self.finish_node(
                NodeKind::ForIn { init: Box::new(init_node), lhs: Box::new(lhs), object: Box::new(object), body: Box::new(body) },
                start,
            ));
        }

        let mut decls = vec![first_decl];
        while self.is_punc(",") {
            self.bump()?;
            decls.push(self.parse_var_decl_single(true)?);
        }
        self.expect_punc(";")?;
        let decl_kind = if is_const { NodeKind::Const(decls) } else { NodeKind::Var(decls) };
        let init_node = self.finish_node(decl_kind, start);
        self.finish_for(start, Some(init_node))
    }

    fn finish_for(&mut self, start: ecma3_util::Position, init: Option<Node>) -> ParseResult<Node> {
        let test = if self.is_punc(";") { None } else { Some(self.parse_expression(true, false)?) };
        self.expect_punc(";")?;
        let step = if self.is_punc(")") { None } else { Some(self.parse_expression(true, false)?) };
        self.expect_punc(")")?;
        self.enter_loop();
        let body = self.parse_statement();
        self.exit_loop();
        let body = body?;
        Ok(self.finish_node(
            NodeKind::For { init: init.map(Box::new), test: test.map(Box::new), step: step.map(Box::new), body: Box::new(body) },
            start,
        ))
    }

    fn parse_switch(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        self.expect_punc("(")?;
        let discriminant = self.parse_expression(true, false)?;
        self.expect_punc(")")?;
        self.expect_punc("{")?;
        self.enter_loop();
        let cases = self.parse_switch_cases();
        self.exit_loop();
        let cases = cases?;
        self.expect_punc("}")?;
        Ok(self.finish_node(NodeKind::Switch { discriminant: Box::new(discriminant), cases }, start))
    }

    fn parse_switch_cases(&mut self) -> ParseResult<Vec<SwitchCase>> {
        let mut cases = Vec::new();
        let mut seen_default = false;
        while !self.is_punc("}") {
            let test = if self.is_keyword("case") {
                self.bump()?;
                let expr = self.parse_expression(true, false)?;
                Some(expr)
            } else if self.is_keyword("default") {
                if seen_default {
                    return Err(self.error("multiple 'default' clauses in one switch"));
                }
                seen_default = true;
                self.bump()?;
                None
            } else {
                return Err(self.unexpected_token("expected 'case' or 'default'"));
            };
            self.expect_punc(":")?;
            let mut body = Vec::new();
            while !self.is_punc("}") && !self.is_keyword("case") && !self.is_keyword("default") {
                body.push(self.parse_statement()?);
            }
            cases.push(SwitchCase { test, body });
        }
        Ok(cases)
    }

    /// Shared by `break` and `continue`: an optional label, forbidden
    /// across a line break (ASI would otherwise swallow an unrelated
    /// following identifier as the label).
    fn parse_break_continue(&mut self, start: ecma3_util::Position, is_break: bool) -> ParseResult<Node> {
        self.bump()?;
        let label = if !self.current().nlb && self.current().ty == TokenType::Name {
            let name = self.expect_name()?;
            if !self.has_label(name) {
                return Err(self.error_at(start, "Undefined label"));
            }
            Some(name)
        } else {
            None
        };
        self.consume_semicolon()?;
        if label.is_none() && is_break && !self.in_loop() {
            return Err(self.error_at(start, "'break' outside of a loop or switch"));
        }
        if label.is_none() && !is_break && !self.in_loop() {
            return Err(self.error_at(start, "'continue' outside of a loop"));
        }
        let kind = if is_break { NodeKind::Break(label) } else { NodeKind::Continue(label) };
        Ok(self.finish_node(kind, start))
    }

    fn parse_return(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        if !self.in_function() {
            return Err(self.error_at(start, "'return' outside of a function"));
        }
        let value = if self.current().nlb || self.is_punc(";") || self.is_punc("}") || self.is_eof() {
            None
        } else {
            Some(Box::new(self.parse_expression(true, false)?))
        };
        self.consume_semicolon()?;
        Ok(self.finish_node(NodeKind::Return(value), start))
    }

    fn parse_throw(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        if self.current().nlb {
            return Err(self.error_at(start, "Illegal newline after 'throw'"));
        }
        let value = self.parse_expression(true, false)?;
        self.consume_semicolon()?;
        Ok(self.finish_node(NodeKind::Throw(Box::new(value)), start))
    }

    fn parse_try(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        self.bump()?;
        let block = self.parse_block()?;
        let catch = if self.is_keyword("catch") {
            self.bump()?;
            self.expect_punc("(")?;
            let name = self.expect_name()?;
            self.expect_punc(")")?;
            let body = self.parse_block()?;
            Some((name, Box::new(body)))
        } else {
            None
        };
        let finally = if self.is_keyword("finally") {
            self.bump()?;
            Some(Box::new(self.parse_block()?))
        } else {
            None
        };
        if catch.is_none() && finally.is_none() {
            return Err(self.error_at(start, "Missing catch or finally after try"));
        }
        Ok(self.finish_node(NodeKind::Try { block: Box::new(block), catch, finally }, start))
    }

    /// A bare expression, reinterpreting a leading `/`/`/=` as a regex
    /// literal start: at the beginning of a statement a division
    /// operator is never valid, so the tokenizer's default guess (which
    /// only sees context up to the previous token) can be wrong here.
    fn parse_expression_statement(&mut self, start: ecma3_util::Position) -> ParseResult<Node> {
        if self.current().ty == TokenType::Operator && self.is_operator("/") {
            self.reinterpret_current_as_regex()?;
        }
        let expr = self.parse_expression(true, false)?;
        self.consume_semicolon()?;
        Ok(self.finish_node(NodeKind::Stat(Box::new(expr)), start))
    }
}

//! Expression parsing: assignment, conditional, binary precedence
//! climbing, unary prefix/postfix, atoms, and subscript chains, per
//! spec.md §4.2's expression grammar.
//!
//! Binding powers mirror the teacher's own `expr::bp` module shape
//! (`faxc-par/src/expr.rs`), relabeled to the fixed 10-level ES3 table
//! instead of Fax's 9-level one.

use ecma3_lex::{TokenType, TokenValue};
use ecma3_util::ParseResult;

use crate::ast::{AccessorKind, AssignOp, Node, NodeKind, ObjectProp, PropertyKey};
use crate::Parser;

/// Binding power levels, lowest to highest. Two operators at the same
/// level are left-associative; parsing climbs to `level + 1` on the
/// right-hand recursive call to enforce that.
pub(crate) mod bp {
    pub const OR: u8 = 1;
    pub const AND: u8 = 2;
    pub const BIT_OR: u8 = 3;
    pub const BIT_XOR: u8 = 4;
    pub const BIT_AND: u8 = 5;
    pub const EQUALITY: u8 = 6;
    pub const RELATIONAL: u8 = 7;
    pub const SHIFT: u8 = 8;
    pub const ADDITIVE: u8 = 9;
    pub const MULTIPLICATIVE: u8 = 10;
}

/// Prefix operators that wrap a single operand parsed by recursing into
/// `parse_unary` itself. `new` is deliberately absent: its callee/args
/// shape is parsed separately in [`Parser::parse_new`].
const UNARY_PREFIX_OPS: &[&str] = &["typeof", "void", "delete", "++", "--", "!", "~", "-", "+"];

impl Parser {
    /// `expression(commas, no_in)`: parses one assignment expression,
    /// optionally folding further comma-separated assignments into a
    /// left-associative `seq` chain.
    pub(crate) fn parse_expression(&mut self, commas: bool, no_in: bool) -> ParseResult<Node> {
        let start = self.current().start;
        let mut expr = self.parse_assignment(no_in)?;
        if commas {
            while self.is_punc(",") {
                self.bump()?;
                let right = self.parse_assignment(no_in)?;
                expr = self.finish_node(NodeKind::Seq(Box::new(expr), Box::new(right)), start);
            }
        }
        Ok(expr)
    }

    /// Right-associative assignment. The left-hand side must satisfy
    /// [`Parser::is_assignable`] before the operator is consumed.
    pub(crate) fn parse_assignment(&mut self, no_in: bool) -> ParseResult<Node> {
        let start = self.current().start;
        let left = self.parse_conditional(no_in)?;
        if let Some(op) = self.current_assign_op() {
            if !self.is_assignable(&left.kind) {
                return Err(self.error_at(start, "Invalid assignment target"));
            }
            self.bump()?;
            let right = self.parse_assignment(no_in)?;
            return Ok(self.finish_node(NodeKind::Assign(op, Box::new(left), Box::new(right)), start));
        }
        Ok(left)
    }

    fn current_assign_op(&self) -> Option<AssignOp> {
        if self.current().ty != TokenType::Operator {
            return None;
        }
        Some(match self.current_lexeme()? {
            "=" => AssignOp::Set,
            "+=" => AssignOp::Compound("+"),
            "-=" => AssignOp::Compound("-"),
            "*=" => AssignOp::Compound("*"),
            "/=" => AssignOp::Compound("/"),
            "%=" => AssignOp::Compound("%"),
            "&=" => AssignOp::Compound("&"),
            "|=" => AssignOp::Compound("|"),
            "^=" => AssignOp::Compound("^"),
            "<<=" => AssignOp::Compound("<<"),
            ">>=" => AssignOp::Compound(">>"),
            ">>>=" => AssignOp::Compound(">>>"),
            _ => return None,
        })
    }

    /// Right-associative `? :`. The branches themselves always allow
    /// `in` (only the head of a `for(...)` demotes it); only the
    /// trailing `else` branch of the conditional threads `no_in` through,
    /// matching the grammar's own `no_in` scoping.
    fn parse_conditional(&mut self, no_in: bool) -> ParseResult<Node> {
        let start = self.current().start;
        let test = self.parse_binary(no_in, bp::OR)?;
        if self.is_operator("?") {
            self.bump()?;
            let then = self.parse_assignment(false)?;
            self.expect_punc(":")?;
            let otherwise = self.parse_assignment(no_in)?;
            return Ok(self.finish_node(
                NodeKind::Conditional { test: Box::new(test), then: Box::new(then), otherwise: Box::new(otherwise) },
                start,
            ));
        }
        Ok(test)
    }

    /// Precedence climbing over the fixed binary operator table.
    fn parse_binary(&mut self, no_in: bool, min_bp: u8) -> ParseResult<Node> {
        let start = self.current().start;
        let mut left = self.parse_unary(no_in)?;
        while let Some((op, level)) = self.current_binary_op(no_in) {
            if level < min_bp {
                break;
            }
            self.bump()?;
            let right = self.parse_binary(no_in, level + 1)?;
            left = self.finish_node(NodeKind::Binary(op, Box::new(left), Box::new(right)), start);
        }
        Ok(left)
    }

    fn current_binary_op(&self, no_in: bool) -> Option<(&'static str, u8)> {
        if self.current().ty != TokenType::Operator {
            return None;
        }
        let op = self.current_lexeme()?;
        let level = binary_precedence(op, no_in)?;
        Some((op, level))
    }

    /// Unary prefix operators recurse into themselves; `++`/`--` require
    /// an assignable operand. `new` is dispatched separately by
    /// [`Parser::parse_atom`].
    fn parse_unary(&mut self, no_in: bool) -> ParseResult<Node> {
        let start = self.current().start;
        if self.current().ty == TokenType::Operator {
            if let Some(op) = self.current_lexeme() {
                if UNARY_PREFIX_OPS.contains(&op) {
                    self.bump()?;
                    let operand = self.parse_unary(no_in)?;
                    if matches!(op, "++" | "--") && !self.is_assignable(&operand.kind) {
                        return Err(self.error_at(start, "Invalid use of '++'/'--'"));
                    }
                    return Ok(self.finish_node(NodeKind::UnaryPrefix(op, Box::new(operand)), start));
                }
            }
        }
        self.parse_postfix(no_in)
    }

    /// Postfix `++`/`--`, forbidden across a line break (the usual
    /// restricted-production rule that keeps ASI from swallowing the
    /// operator into the next statement).
    fn parse_postfix(&mut self, no_in: bool) -> ParseResult<Node> {
        let start = self.current().start;
        let expr = self.parse_subscripts(no_in, true)?;
        if !self.current().nlb && self.current().ty == TokenType::Operator {
            if let Some(op @ ("++" | "--")) = self.current_lexeme() {
                if !self.is_assignable(&expr.kind) {
                    return Err(self.error_at(start, "Invalid use of '++'/'--'"));
                }
                self.bump()?;
                return Ok(self.finish_node(NodeKind::UnaryPostfix(op, Box::new(expr)), start));
            }
        }
        Ok(expr)
    }

    /// The left-associative subscript chain: `.name`, `[expr]`, and
    /// `(args)` calls (only when `allow_calls`), applied left-to-right
    /// atop a single atom.
    fn parse_subscripts(&mut self, no_in: bool, allow_calls: bool) -> ParseResult<Node> {
        let start = self.current().start;
        let mut expr = self.parse_atom(no_in)?;
        loop {
            if self.is_punc(".") {
                self.bump()?;
                let name = self.expect_name()?;
                expr = self.finish_node(NodeKind::Dot(Box::new(expr), name), start);
            } else if self.is_punc("[") {
                self.bump()?;
                let index = self.parse_expression(true, false)?;
                self.expect_punc("]")?;
                expr = self.finish_node(NodeKind::Sub(Box::new(expr), Box::new(index)), start);
            } else if allow_calls && self.is_punc("(") {
                let args = self.parse_call_args()?;
                expr = self.finish_node(NodeKind::Call(Box::new(expr), args), start);
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// `new Callee(args)`, optionally chained (`new new Foo`) and
    /// optionally parenthesis-free (`new Foo`, args then empty). The
    /// callee is parsed as a member-expression chain with calls
    /// disallowed, so the first `(...)` encountered belongs to `new`
    /// itself rather than to a call on the callee.
    fn parse_new(&mut self, no_in: bool) -> ParseResult<Node> {
        let start = self.current().start;
        self.bump()?;
        let callee = if self.is_operator("new") {
            self.parse_new(no_in)?
        } else {
            self.parse_subscripts(no_in, false)?
        };
        let args = if self.is_punc("(") { self.parse_call_args()? } else { Vec::new() };
        Ok(self.finish_node(NodeKind::New(Box::new(callee), args), start))
    }

    fn parse_call_args(&mut self) -> ParseResult<Vec<Node>> {
        self.expect_punc("(")?;
        self.parse_expr_list(")", false, false)
    }

    /// Comma-separated expression list shared by call arguments and array
    /// literals. `allow_trailing_comma` tolerates (and discards) a comma
    /// immediately before `closing`; `allow_empty` turns a bare comma
    /// into an elided `undefined` element instead of an error. Assumes
    /// the opening delimiter has already been consumed; consumes
    /// `closing` itself.
    fn parse_expr_list(&mut self, closing: &str, allow_trailing_comma: bool, allow_empty: bool) -> ParseResult<Vec<Node>> {
        let mut items = Vec::new();
        let mut first = true;
        while !self.is_punc(closing) {
            if first {
                first = false;
            } else {
                self.expect_punc(",")?;
            }
            if allow_trailing_comma && self.is_punc(closing) {
                break;
            }
            if allow_empty && self.is_punc(",") {
                items.push(self.finish_node(NodeKind::Atom("undefined"), self.current().start));
                continue;
            }
            items.push(self.parse_assignment(false)?);
        }
        self.bump()?;
        Ok(items)
    }

    fn parse_array(&mut self) -> ParseResult<Node> {
        let start = self.current().start;
        self.expect_punc("[")?;
        let allow_trailing = !self.exigent_mode();
        let elements = self.parse_expr_list("]", allow_trailing, true)?;
        Ok(self.finish_node(NodeKind::Array(elements), start))
    }

    fn parse_object(&mut self) -> ParseResult<Node> {
        let start = self.current().start;
        self.expect_punc("{")?;
        let mut props = Vec::new();
        let mut first = true;
        while !self.is_punc("}") {
            if first {
                first = false;
            } else {
                self.expect_punc(",")?;
            }
            if !self.exigent_mode() && self.is_punc("}") {
                break;
            }
            props.push(self.parse_object_property()?);
        }
        self.bump()?;
        Ok(self.finish_node(NodeKind::Object(props), start))
    }

    /// A `key: value` entry, or a `get`/`set` accessor shorthand: an
    /// identifier `get`/`set` not immediately followed by `:` introduces
    /// an accessor whose body is a parameter-less (getter) or one-param
    /// (setter) function with no `function` keyword of its own.
    fn parse_object_property(&mut self) -> ParseResult<ObjectProp> {
        let start = self.current().start;
        let key = self.parse_property_key()?;
        if let PropertyKey::Name(sym) = key {
            let text = self.resolve(sym).to_string();
            let kind = match text.as_str() {
                "get" => Some(AccessorKind::Get),
                "set" => Some(AccessorKind::Set),
                _ => None,
            };
            if let Some(kind) = kind {
                if !self.is_punc(":") {
                    let actual_key = self.parse_property_key()?;
                    let params = self.parse_params()?;
                    let body = self.parse_function_body()?;
                    let function = self.finish_node(NodeKind::Function { name: None, params, body }, start);
                    return Ok(ObjectProp::Accessor { key: actual_key, kind, function });
                }
            }
        }
        self.expect_punc(":")?;
        let value = self.parse_assignment(false)?;
        Ok(ObjectProp::KeyValue { key, value })
    }

    fn parse_property_key(&mut self) -> ParseResult<PropertyKey> {
        match self.current().value.clone() {
            TokenValue::Name(sym) => {
                self.bump()?;
                Ok(PropertyKey::Name(sym))
            }
            TokenValue::Str(s) => {
                self.bump()?;
                Ok(PropertyKey::Str(s))
            }
            TokenValue::Num(n) => {
                self.bump()?;
                Ok(PropertyKey::Num(n))
            }
            _ => Err(self.unexpected_token("expected a property key")),
        }
    }

    /// Literals, identifiers, `(expr)`, array/object literals, `new`,
    /// and function expressions.
    fn parse_atom(&mut self, no_in: bool) -> ParseResult<Node> {
        let start = self.current().start;
        match self.current().ty {
            TokenType::Num => {
                let value = match self.current().value {
                    TokenValue::Num(v) => v,
                    _ => unreachable!("Num token always carries a TokenValue::Num"),
                };
                self.bump()?;
                Ok(self.finish_node(NodeKind::Num(value), start))
            }
            TokenType::Str => {
                let value = match &self.current().value {
                    TokenValue::Str(s) => s.clone(),
                    _ => unreachable!("Str token always carries a TokenValue::Str"),
                };
                self.bump()?;
                Ok(self.finish_node(NodeKind::Str(value), start))
            }
            TokenType::Regexp => {
                let (pattern, flags) = match &self.current().value {
                    TokenValue::Regexp(p, f) => (p.clone(), f.clone()),
                    _ => unreachable!("Regexp token always carries a TokenValue::Regexp"),
                };
                self.bump()?;
                Ok(self.finish_node(NodeKind::Regexp(pattern, flags), start))
            }
            TokenType::Name => {
                let sym = match self.current().value {
                    TokenValue::Name(s) => s,
                    _ => unreachable!("Name token always carries a TokenValue::Name"),
                };
                self.bump()?;
                Ok(self.finish_node(NodeKind::Name(sym), start))
            }
            TokenType::Atom => {
                let word = self.current_lexeme().expect("atom token carries a fixed lexeme");
                self.bump()?;
                Ok(self.finish_node(NodeKind::Atom(word), start))
            }
            TokenType::Keyword if self.is_keyword("function") => {
                let kind = self.parse_function(false)?;
                Ok(self.finish_node(kind, start))
            }
            TokenType::Operator if self.is_operator("new") => self.parse_new(no_in),
            TokenType::Punc if self.is_punc("(") => {
                self.bump()?;
                let expr = self.parse_expression(true, false)?;
                self.expect_punc(")")?;
                Ok(expr)
            }
            TokenType::Punc if self.is_punc("[") => self.parse_array(),
            TokenType::Punc if self.is_punc("{") => self.parse_object(),
            _ => Err(self.unexpected_token("expected an expression")),
        }
    }
}

fn binary_precedence(op: &str, no_in: bool) -> Option<u8> {
    Some(match op {
        "||" => bp::OR,
        "&&" => bp::AND,
        "|" => bp::BIT_OR,
        "^" => bp::BIT_XOR,
        "&" => bp::BIT_AND,
        "==" | "===" | "!=" | "!==" => bp::EQUALITY,
        "<" | ">" | "<=" | ">=" | "instanceof" => bp::RELATIONAL,
        "in" if !no_in => bp::RELATIONAL,
        ">>" | "<<" | ">>>" => bp::SHIFT,
        "+" | "-" => bp::ADDITIVE,
        "*" | "/" | "%" => bp::MULTIPLICATIVE,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    fn parse_expr(source: &str) -> Node {
        let mut parser = Parser::new(source, false, false).unwrap();
        parser.parse_expression(true, false).unwrap()
    }

    #[test]
    fn division_has_lower_precedence_than_nothing_else_matters_here() {
        let node = parse_expr("a / b / c");
        match node.kind {
            NodeKind::Binary("/", _, _) => {}
            other => panic!("expected top-level division, got {other:?}"),
        }
    }

    #[test]
    fn addition_binds_looser_than_multiplication() {
        let node = parse_expr("1 + 2 * 3");
        match node.kind {
            NodeKind::Binary("+", _, right) => {
                assert!(matches!(right.kind, NodeKind::Binary("*", _, _)));
            }
            other => panic!("expected top-level addition, got {other:?}"),
        }
    }

    #[test]
    fn binary_operators_are_left_associative() {
        let node = parse_expr("a - b - c");
        match node.kind {
            NodeKind::Binary("-", left, _) => {
                assert!(matches!(left.kind, NodeKind::Binary("-", _, _)));
            }
            other => panic!("expected left-leaning subtraction, got {other:?}"),
        }
    }

    #[test]
    fn conditional_is_right_associative() {
        let node = parse_expr("a ? b : c ? d : e");
        match node.kind {
            NodeKind::Conditional { otherwise, .. } => {
                assert!(matches!(otherwise.kind, NodeKind::Conditional { .. }));
            }
            other => panic!("expected conditional, got {other:?}"),
        }
    }

    #[test]
    fn new_without_parens_has_no_args() {
        let node = parse_expr("new Foo");
        match node.kind {
            NodeKind::New(_, args) => assert!(args.is_empty()),
            other => panic!("expected new, got {other:?}"),
        }
    }

    #[test]
    fn new_with_member_chain_stops_at_first_call() {
        let node = parse_expr("new Foo.Bar().baz()");
        match node.kind {
            NodeKind::Call(callee, _) => match callee.kind {
                NodeKind::Dot(obj, _) => assert!(matches!(obj.kind, NodeKind::New(..))),
                other => panic!("expected dot, got {other:?}"),
            },
            other => panic!("expected outer call, got {other:?}"),
        }
    }

    #[test]
    fn array_literal_with_holes() {
        let node = parse_expr("[,,1]");
        match node.kind {
            NodeKind::Array(elements) => {
                assert_eq!(elements.len(), 3);
                assert!(matches!(elements[0].kind, NodeKind::Atom("undefined")));
                assert!(matches!(elements[1].kind, NodeKind::Atom("undefined")));
                assert!(matches!(elements[2].kind, NodeKind::Num(1.0)));
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn trailing_comma_in_array_is_tolerated_in_lenient_mode() {
        let node = parse_expr("[1, 2,]");
        match node.kind {
            NodeKind::Array(elements) => assert_eq!(elements.len(), 2),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn trailing_comma_in_array_rejected_in_exigent_mode() {
        let mut parser = Parser::new("[1, 2,]", true, false).unwrap();
        assert!(parser.parse_expression(true, false).is_err());
    }

    #[test]
    fn object_literal_with_get_set_accessors() {
        let mut parser = Parser::new("({ get x() { return 1; }, set x(v) {} })", false, false).unwrap();
        let node = parser.parse_expression(true, false).unwrap();
        match node.kind {
            NodeKind::Object(props) => {
                assert_eq!(props.len(), 2);
                assert!(matches!(props[0], ObjectProp::Accessor { kind: AccessorKind::Get, .. }));
                assert!(matches!(props[1], ObjectProp::Accessor { kind: AccessorKind::Set, .. }));
            }
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn assignment_to_literal_is_rejected_in_exigent_mode() {
        let mut parser = Parser::new("1 = 2", true, false).unwrap();
        assert!(parser.parse_expression(true, false).is_err());
    }

    #[test]
    fn in_operator_demoted_under_no_in() {
        let mut parser = Parser::new("x in y", false, false).unwrap();
        let node = parser.parse_expression(true, true).unwrap();
        assert!(matches!(node.kind, NodeKind::Name(_)));
    }

    #[test]
    fn regex_after_dot_test_call() {
        let node = parse_expr("/foo/gi.test(s)");
        assert!(matches!(node.kind, NodeKind::Call(..)));
    }
}

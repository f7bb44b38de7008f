//! Scenario-level parser tests: the positive and negative cases that
//! exercise full statement/expression interaction rather than a single
//! grammar production in isolation.

use crate::ast::{AssignOp, NodeKind};
use crate::Parser;

fn parse_ok(source: &str) -> crate::ast::Node {
    Parser::new(source, true, false).unwrap().parse().unwrap()
}

fn toplevel_first(node: &crate::ast::Node) -> &NodeKind {
    match &node.kind {
        NodeKind::Toplevel(body) => &body[0].kind,
        other => panic!("expected toplevel, got {other:?}"),
    }
}

#[test]
fn var_declaration_with_numeric_initializer() {
    let node = parse_ok("var x = 1;");
    match toplevel_first(&node) {
        NodeKind::Var(decls) => {
            assert_eq!(decls.len(), 1);
            assert!(matches!(decls[0].init.as_ref().unwrap().kind, NodeKind::Num(n) if n == 1.0));
        }
        other => panic!("expected var, got {other:?}"),
    }
}

#[test]
fn function_declaration_with_binary_return() {
    let node = parse_ok("function f(a,b){ return a+b; }");
    match toplevel_first(&node) {
        NodeKind::Defun { name: _, params, body } => {
            assert_eq!(params.len(), 2);
            assert_eq!(body.len(), 1);
            match &body[0].kind {
                NodeKind::Return(Some(value)) => assert!(matches!(value.kind, NodeKind::Binary("+", _, _))),
                other => panic!("expected return, got {other:?}"),
            }
        }
        other => panic!("expected defun, got {other:?}"),
    }
}

#[test]
fn classic_for_loop_body_is_an_indexed_assignment() {
    let node = parse_ok("for (var i=0; i<10; i++) a[i]=i;");
    match toplevel_first(&node) {
        NodeKind::For { body, .. } => match &body.kind {
            NodeKind::Stat(expr) => match &expr.kind {
                NodeKind::Assign(AssignOp::Set, lhs, rhs) => {
                    assert!(matches!(lhs.kind, NodeKind::Sub(..)));
                    assert!(matches!(rhs.kind, NodeKind::Name(_)));
                }
                other => panic!("expected assignment, got {other:?}"),
            },
            other => panic!("expected stat, got {other:?}"),
        },
        other => panic!("expected for, got {other:?}"),
    }
}

#[test]
fn conditional_expression_statement() {
    let node = parse_ok("x ? y : z");
    match toplevel_first(&node) {
        NodeKind::Stat(expr) => assert!(matches!(expr.kind, NodeKind::Conditional { .. })),
        other => panic!("expected stat, got {other:?}"),
    }
}

#[test]
fn try_catch_finally_full_shape() {
    let node = parse_ok("try { f(); } catch(e) { g(e); } finally { h(); }");
    match toplevel_first(&node) {
        NodeKind::Try { block, catch, finally } => {
            assert!(matches!(block.kind, NodeKind::Block(_)));
            assert!(catch.is_some());
            assert!(finally.is_some());
        }
        other => panic!("expected try, got {other:?}"),
    }
}

#[test]
fn regex_method_call_after_assignment() {
    let node = parse_ok("a = /foo/gi.test(s)");
    match toplevel_first(&node) {
        NodeKind::Stat(expr) => match &expr.kind {
            NodeKind::Assign(AssignOp::Set, _, rhs) => match &rhs.kind {
                NodeKind::Call(callee, args) => {
                    assert_eq!(args.len(), 1);
                    match &callee.kind {
                        NodeKind::Dot(object, _) => {
                            assert!(matches!(object.kind, NodeKind::Regexp(ref p, ref f) if p == "foo" && f == "gi"));
                        }
                        other => panic!("expected dot, got {other:?}"),
                    }
                }
                other => panic!("expected call, got {other:?}"),
            },
            other => panic!("expected assignment, got {other:?}"),
        },
        other => panic!("expected stat, got {other:?}"),
    }
}

#[test]
fn division_chain_is_not_mistaken_for_regex() {
    let node = parse_ok("a / b / c");
    match toplevel_first(&node) {
        NodeKind::Stat(expr) => assert!(matches!(expr.kind, NodeKind::Binary("/", ..))),
        other => panic!("expected stat, got {other:?}"),
    }
}

#[test]
fn leading_regex_literal_calls_test() {
    let node = parse_ok("/a/.test(x);");
    match toplevel_first(&node) {
        NodeKind::Stat(expr) => assert!(matches!(expr.kind, NodeKind::Call(..))),
        other => panic!("expected stat, got {other:?}"),
    }
}

#[test]
fn empty_source_yields_empty_toplevel() {
    let node = parse_ok("");
    assert!(matches!(node.kind, NodeKind::Toplevel(body) if body.is_empty()));
}

#[test]
fn lone_semicolon_yields_empty_block() {
    let node = parse_ok(";");
    match toplevel_first(&node) {
        NodeKind::Block(stmts) => assert!(stmts.is_empty()),
        other => panic!("expected block, got {other:?}"),
    }
}

#[test]
fn return_at_top_level_is_rejected() {
    assert!(Parser::new("return 1;", true, false).unwrap().parse().is_err());
}

#[test]
fn break_to_unknown_label_is_rejected() {
    let src = "while (true) { break foo; }";
    assert!(Parser::new(src, true, false).unwrap().parse().is_err());
}

#[test]
fn assignment_to_a_literal_is_rejected() {
    assert!(Parser::new("1 = 2;", true, false).unwrap().parse().is_err());
}

#[test]
fn unterminated_string_is_rejected() {
    assert!(Parser::new("\"abc", true, false).is_err());
}

#[test]
fn unterminated_regexp_is_rejected() {
    // A leading `/` is in regex-allowed position at the start of a
    // program, so this never falls back to being read as division.
    assert!(Parser::new("/abc", true, false).is_err());
}

#[test]
fn lenient_mode_tolerates_missing_semicolon_before_eof() {
    let node = Parser::new("var x = 1", false, false).unwrap().parse().unwrap();
    assert!(matches!(node.kind, NodeKind::Toplevel(_)));
}

#[test]
fn exigent_mode_rejects_missing_semicolon_before_eof() {
    assert!(Parser::new("var x = 1", true, false).unwrap().parse().is_err());
}

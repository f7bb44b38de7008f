//! LHS-assignability validation.
//!
//! The teacher used this dispatch shape (`faxc-par/src/pattern.rs`) to
//! classify destructuring patterns; ES3 has no destructuring, so the same
//! per-tag classification is repurposed here to answer a different
//! question: can this expression legally sit on the left of `=`, `+=`,
//! prefix/postfix `++`/`--`?

use crate::ast::NodeKind;
use crate::Parser;

impl Parser {
    /// In lenient mode every expression is treated as potentially
    /// assignable, so downstream tools can still walk a transformed
    /// (already-rewritten) input without the parser second-guessing it.
    /// In exigent mode only the shapes the grammar actually allows as an
    /// LHS are accepted: `dot`, `sub`, `new`, `call`, and `name` other
    /// than `this`.
    pub(crate) fn is_assignable(&self, kind: &NodeKind) -> bool {
        if !self.exigent_mode() {
            return true;
        }
        match kind {
            NodeKind::Dot(..) | NodeKind::Sub(..) | NodeKind::New(..) | NodeKind::Call(..) => true,
            NodeKind::Name(sym) => self.resolve(*sym) != "this",
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;

    #[test]
    fn lenient_mode_accepts_everything() {
        let parser = Parser::new("x", false, false).unwrap();
        assert!(parser.is_assignable(&NodeKind::Num(1.0)));
    }

    #[test]
    fn exigent_mode_rejects_literals() {
        let parser = Parser::new("x", true, false).unwrap();
        assert!(!parser.is_assignable(&NodeKind::Num(1.0)));
        assert!(!parser.is_assignable(&NodeKind::Str("x".into())));
    }

    #[test]
    fn exigent_mode_accepts_member_access() {
        let parser = Parser::new("x", true, false).unwrap();
        let dot = NodeKind::Dot(Box::new(Node::untagged(NodeKind::Debugger)), sym(&parser, "x"));
        assert!(parser.is_assignable(&dot));
    }

    #[test]
    fn exigent_mode_rejects_this() {
        let parser = Parser::new("this", true, false).unwrap();
        let sym = sym(&parser, "this");
        assert!(!parser.is_assignable(&NodeKind::Name(sym)));
    }

    fn sym(parser: &Parser, _text: &str) -> ecma3_util::Symbol {
        match &parser.current().value {
            ecma3_lex::TokenValue::Name(sym) => *sym,
            _ => panic!("expected a name token to be current"),
        }
    }
}

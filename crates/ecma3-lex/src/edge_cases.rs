//! Edge case tests for the tokenizer.

#[cfg(test)]
mod tests {
    use crate::token::{TokenType, TokenValue};
    use crate::Tokenizer;

    fn lex_all(source: &str) -> Vec<crate::Token> {
        let mut tokenizer = Tokenizer::new(source);
        let mut tokens = Vec::new();
        loop {
            let tok = tokenizer.next_token().expect("no scan error");
            if tok.ty == TokenType::Eof {
                break;
            }
            tokens.push(tok);
        }
        tokens
    }

    #[test]
    fn edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].ty, TokenType::Name);
    }

    #[test]
    fn edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1;", name));
        assert_eq!(t[1].ty, TokenType::Name);
    }

    #[test]
    fn edge_keywords_not_idents() {
        let t = lex_all("function var if");
        assert_eq!(t[0].ty, TokenType::Keyword);
        assert_eq!(t[1].ty, TokenType::Keyword);
    }

    #[test]
    fn edge_hex_bounds() {
        let t = lex_all("0x0 0xFF");
        assert_eq!(t[0].value, TokenValue::Num(0.0));
        assert_eq!(t[1].value, TokenValue::Num(255.0));
    }

    #[test]
    fn edge_octal() {
        let t = lex_all("00 077");
        assert_eq!(t[1].value, TokenValue::Num(63.0));
    }

    #[test]
    fn edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].value, TokenValue::Str(String::new()));
    }

    #[test]
    fn edge_all_operators() {
        let t = lex_all("+ - * % == != < > <= >= && || !");
        assert!(t.iter().any(|tok| tok.value == TokenValue::Lexeme("+")));
        assert!(t.iter().any(|tok| tok.value == TokenValue::Lexeme("==")));
    }

    #[test]
    fn edge_all_punc() {
        let t = lex_all("( ) { } [ ] , ; :");
        assert!(t.iter().any(|tok| tok.value == TokenValue::Lexeme("(")));
        assert!(t.iter().any(|tok| tok.value == TokenValue::Lexeme(":")));
    }

    #[test]
    fn edge_nested_parens() {
        let t = lex_all("((()))");
        let opens = t.iter().filter(|tok| tok.value == TokenValue::Lexeme("(")).count();
        assert_eq!(opens, 3);
    }

    #[test]
    fn edge_case_sensitivity() {
        let t = lex_all("Var var");
        assert_eq!(t[0].ty, TokenType::Name);
        assert_eq!(t[1].ty, TokenType::Keyword);
    }

    #[test]
    fn edge_atoms() {
        let t = lex_all("true false null undefined");
        assert!(t.iter().all(|tok| tok.ty == TokenType::Atom));
    }

    #[test]
    fn edge_reclassified_operator_keywords() {
        let t = lex_all("typeof x instanceof Array");
        assert_eq!(t[0].ty, TokenType::Operator);
        assert_eq!(t[2].ty, TokenType::Operator);
    }

    #[test]
    fn edge_dollar_and_underscore_identifiers() {
        let t = lex_all("$ _ $foo _bar");
        assert!(t.iter().all(|tok| tok.ty == TokenType::Name));
    }

    #[test]
    fn edge_scientific_notation() {
        let t = lex_all("1e10 1.5e-3");
        assert!(t.iter().all(|tok| matches!(tok.value, TokenValue::Num(_))));
    }

    #[test]
    fn edge_all_keywords_tokenize() {
        let t = lex_all("function if else while for break continue return switch case");
        assert!(t.iter().all(|tok| tok.ty == TokenType::Keyword || tok.ty == TokenType::Operator));
    }

    #[test]
    fn edge_invalid_number_is_error() {
        let mut tokenizer = Tokenizer::new("0x");
        assert!(tokenizer.next_token().is_err());
    }

    #[test]
    fn edge_unterminated_string_is_error() {
        let mut tokenizer = Tokenizer::new("\"unterminated");
        assert!(tokenizer.next_token().is_err());
    }

    #[test]
    fn edge_unexpected_char_is_error() {
        let mut tokenizer = Tokenizer::new("#");
        assert!(tokenizer.next_token().is_err());
    }

    #[test]
    fn edge_consecutive_plus_is_two_tokens() {
        let t = lex_all("+++x");
        assert!(t.len() >= 2);
    }

    #[test]
    fn edge_whitespace_variations() {
        let t = lex_all("var\tx\n=\n1");
        assert_eq!(t[0].ty, TokenType::Keyword);
        assert_eq!(t[3].value, TokenValue::Num(1.0));
    }

    #[test]
    fn edge_leading_zero_decimal_vs_octal() {
        let t = lex_all("0 007");
        assert_eq!(t[0].value, TokenValue::Num(0.0));
        assert_eq!(t[1].value, TokenValue::Num(7.0));
    }
}

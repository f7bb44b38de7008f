//! Property-based tests for scanner invariants.

#[cfg(test)]
mod tests {
    use crate::token::TokenType;
    use crate::Tokenizer;
    use proptest::prelude::*;

    fn tokens(source: &str) -> Vec<crate::Token> {
        let mut tokenizer = Tokenizer::new(source);
        let mut out = Vec::new();
        loop {
            match tokenizer.next_token() {
                Ok(tok) => {
                    let is_eof = tok.ty == TokenType::Eof;
                    out.push(tok);
                    if is_eof {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        out
    }

    proptest! {
        #[test]
        fn identifier_positions_are_monotonic(input in "[a-zA-Z_$][a-zA-Z0-9_$]{0,40}( [a-zA-Z_$][a-zA-Z0-9_$]{0,40}){0,10}") {
            let toks = tokens(&input);
            let mut last = 0usize;
            for tok in &toks {
                prop_assert!(tok.start.pos >= last);
                last = tok.start.pos;
            }
        }

        #[test]
        fn arbitrary_decimal_strings_scan_as_one_number(digits in "[0-9]{1,15}") {
            let toks = tokens(&digits);
            prop_assert_eq!(toks.len(), 2); // number + eof
            prop_assert_eq!(toks[0].ty, TokenType::Num);
        }

        #[test]
        fn arbitrary_hex_strings_scan_as_one_number(digits in "[0-9a-fA-F]{1,12}") {
            let input = format!("0x{}", digits);
            let toks = tokens(&input);
            prop_assert_eq!(toks.len(), 2);
            prop_assert_eq!(toks[0].ty, TokenType::Num);
        }

        #[test]
        fn arbitrary_string_bodies_scan_as_one_string(body in "[a-zA-Z0-9 ]{0,60}") {
            let input = format!("\"{}\"", body);
            let toks = tokens(&input);
            prop_assert_eq!(toks.len(), 2);
            prop_assert_eq!(toks[0].ty, TokenType::Str);
        }

        #[test]
        fn whitespace_runs_do_not_produce_tokens(spaces in 0usize..80) {
            let source = format!("{}var{}", " ".repeat(spaces), " ".repeat(spaces));
            let toks = tokens(&source);
            prop_assert_eq!(toks.len(), 2); // keyword + eof
            prop_assert_eq!(toks[0].ty, TokenType::Keyword);
        }

        #[test]
        fn nlb_is_true_only_when_a_newline_precedes_the_token(newlines in 0usize..5) {
            let source = format!("a{}b", "\n".repeat(newlines));
            let toks = tokens(&source);
            prop_assert_eq!(toks[1].nlb, newlines > 0);
        }
    }
}

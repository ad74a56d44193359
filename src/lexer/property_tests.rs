//! Property-based tests for the lexer.
//!
//! 1. Arbitrary input never panics, it either lexes or reports an error.
//! 2. A successful scan ends in exactly one EOF token.
//! 3. Token positions match rows and columns counted by hand.

use proptest::prelude::*;

use crate::source::source::SourceUnit;

use super::{lexer::tokenize, tokens::TokenKind};

const SEPARATORS: &[&str] = &[" ", "  ", "\t", "\n", "\r\n", " \n\t"];

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9]{0,8}",
        "[1-9][0-9]{0,5}",
        "[0-9]{1,3}\\.[0-9]{0,3}",
        "\"[a-z ]{0,8}\"",
        prop::sample::select(vec![";", "(", ")", "{", "}", "==", "&&", "||", "+", "<"])
            .prop_map(str::to_string),
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop::sample::select(SEPARATORS).prop_map(str::to_string)
}

proptest! {
    #[test]
    fn lexer_never_panics(input in "\\PC{0,300}") {
        let mut source = SourceUnit::new(input, "prop.mc");
        let _ = tokenize(&mut source);
    }

    #[test]
    fn eof_is_last_and_unique(input in "[a-z0-9 ;(){}+\\n]{0,200}") {
        let mut source = SourceUnit::new(input, "prop.mc");
        if let Ok(tokens) = tokenize(&mut source) {
            prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
            let eofs = tokens.iter().filter(|token| token.kind == TokenKind::EOF).count();
            prop_assert_eq!(eofs, 1);
        }
    }

    #[test]
    fn positions_match_hand_counted_rows(parts in prop::collection::vec((word(), separator()), 1..30)) {
        let mut text = String::new();
        let mut expected = Vec::new();
        let (mut row, mut column) = (1u32, 1u32);

        for (word, separator) in &parts {
            expected.push((word.clone(), row, column));
            text.push_str(word);
            column += word.len() as u32;

            for character in separator.chars() {
                text.push(character);
                if character == '\n' {
                    row += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }
        }

        let mut source = SourceUnit::new(text, "prop.mc");
        let tokens = tokenize(&mut source).unwrap();

        prop_assert_eq!(tokens.len(), expected.len() + 1);
        for (token, (literal, row, column)) in tokens.iter().zip(&expected) {
            prop_assert_eq!(&token.literal, literal);
            prop_assert_eq!(token.position.row, *row);
            prop_assert_eq!(token.position.column, *column);
        }

        let eof = &tokens[expected.len()];
        prop_assert_eq!(eof.position.row, row);
        prop_assert_eq!(eof.position.column, column);
    }
}

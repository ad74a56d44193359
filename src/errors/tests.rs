//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(row: u32, column: u32) -> Position {
    Position::new(Rc::new("test.mc".to_string()), row, column)
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_category(), ErrorCategory::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "identifier".to_string(),
            token: "=".to_string(),
        },
        position(3, 7),
    );

    assert_eq!(error.get_position().row, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_display_is_prefixed_with_position() {
    let error = Error::new(
        ErrorImpl::TypeMismatch {
            expected: "int".to_string(),
            received: "bool".to_string(),
        },
        position(2, 9),
    );

    assert_eq!(error.to_string(), "test.mc: 2,9: type missmatch 'int' vs 'bool'");
    assert_eq!(error.get_message(), "type missmatch 'int' vs 'bool'");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "';'".to_string(),
            token: "}".to_string(),
        },
        position(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_category(), ErrorCategory::Syntactic);
    assert_eq!(error.get_message(), "expected ';', got: }");
    assert_eq!(error.get_tip().to_string(), "did you miss a semicolon?");
}

#[test]
fn test_nesting_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, position(1, 9));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_category(), ErrorCategory::Syntactic);
    assert_eq!(error.get_message(), "nesting deeper than 128 levels");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_semantic_errors_are_categorised() {
    let errors = [
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        ErrorImpl::IdentifierRedefined {
            identifier: "x".to_string(),
        },
        ErrorImpl::MissingReturn {
            function: "main".to_string(),
        },
        ErrorImpl::ArgumentCount {
            function: "add".to_string(),
            expected: 2,
            received: 3,
        },
    ];

    for internal_error in errors {
        let error = Error::new(internal_error, position(1, 1));
        assert_eq!(error.get_category(), ErrorCategory::Semantic);
    }
}

#[test]
fn test_invalid_offset_error() {
    let error = Error::new(
        ErrorImpl::InvalidOffset { offset: 12 },
        Position::null(Rc::new("test.mc".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidOffset");
    assert_eq!(error.get_category(), ErrorCategory::Position);
    assert_eq!(
        error.to_string(),
        "test.mc: 0,0: invalid offset 12: offset not within file"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MissingReturn {
            function: "main".to_string(),
        },
        position(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`main`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

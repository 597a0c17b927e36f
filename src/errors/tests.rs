//! Unit tests for error formatting.
//!
//! The parser exposes its diagnostics as plain strings, so the rendered
//! message of every variant is part of the contract.

use crate::errors::errors::ParseError;
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Identifier,
        found: TokenKind::Assignment,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be Identifier, got Assignment instead"
    );
}

#[test]
fn test_no_prefix_parse_function_message() {
    let error = ParseError::NoPrefixParseFunction {
        kind: TokenKind::Plus,
    };

    assert_eq!(error.to_string(), "no prefix parse function for Plus found");
}

#[test]
fn test_illegal_kind_is_named_in_message() {
    let error = ParseError::NoPrefixParseFunction {
        kind: TokenKind::Illegal,
    };

    assert_eq!(
        error.to_string(),
        "no prefix parse function for Illegal found"
    );
}

#[test]
fn test_integer_parse_error_message() {
    let error = ParseError::IntegerParseError {
        literal: "99999999999999999999".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

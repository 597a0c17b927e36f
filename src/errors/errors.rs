use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// The closed set of diagnostics the parser can record.
///
/// These are additive: each one is rendered to a string onto the parser's
/// error list and parsing continues, so a single pass can surface several.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFunction { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
}

//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its token plumbing.
//! The parser drains the lexer through a two-token lookahead buffer
//! (current and peek) and accumulates diagnostics as strings instead of
//! aborting on the first failure.
//!
//! Statement and expression parsing live in `stmt` and `expr`. Both
//! dispatch with a match over `TokenKind` and share this state through
//! small accessor methods.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Owns the lexer it drains plus the two lookahead slots. Errors are
/// collected as human-readable strings in encounter order; parsing always
/// runs to the end of input.
pub struct Parser {
    /// Token source, pulled one token at a time
    lexer: Lexer,
    /// Diagnostics recorded so far
    errors: Vec<String>,
    /// The token under consideration
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to pull tokens from, taken by value
    ///
    /// # Returns
    ///
    /// A new Parser with both lookahead slots already populated from the
    /// first two lexer calls.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            errors: vec![],
            current_token,
            peek_token,
        }
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Runs to end of input unconditionally, however many errors have
    /// accumulated. Statements that failed to parse are skipped, never
    /// inserted; their diagnostics are on the error list.
    ///
    /// # Returns
    ///
    /// The root Program node. Callers must consult [`Parser::errors`]
    /// before trusting the tree.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::EOF) {
            if let Some(statement) = parse_stmt(self) {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// Returns the diagnostics recorded so far, in encounter order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the current token without advancing.
    pub(crate) fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the peek token.
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the lookahead: peek becomes current and the lexer supplies a
    /// fresh peek.
    pub(crate) fn advance(&mut self) {
        self.current_token = mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Expects the peek token to be of the given kind.
    ///
    /// # Arguments
    ///
    /// * `expected` - The required TokenKind
    ///
    /// # Returns
    ///
    /// True after advancing onto the matching token. On a mismatch, records
    /// [`ParseError::UnexpectedToken`] and returns false without advancing,
    /// leaving the cursor where the caller can decide how to recover.
    pub(crate) fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_is(expected) {
            self.advance();
            true
        } else {
            self.push_error(ParseError::UnexpectedToken {
                expected,
                found: self.peek_token.kind,
            });
            false
        }
    }

    /// Binding power of the current token's kind.
    pub(crate) fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current_token.kind)
    }

    /// Binding power of the peek token's kind.
    pub(crate) fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek_token.kind)
    }

    /// Renders the error onto the diagnostic list.
    pub(crate) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error.to_string());
    }
}

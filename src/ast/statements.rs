use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expression, expressions::Identifier};

/// Let Statement
/// Binds a value to a name, e.g. `let x = 5;`.
///
/// The value slot is `None` when expression parsing failed in that position;
/// the error is already on the parser's list and the statement still renders
/// (with an empty value) rather than panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// Return Statement
/// Returns a value from the enclosing function, e.g. `return 5;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

impl ReturnStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// Expression Statement
/// A bare expression in statement position, e.g. `x + 10;`.
///
/// Renders as the expression alone with no trailing semicolon, so a program
/// reconstructs as the concatenation of its expression forms.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(expression) = &self.expression {
            write!(f, "{}", expression)?;
        }
        Ok(())
    }
}

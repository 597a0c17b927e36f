use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::ast::Expression;

/// Identifier Expression
/// Represents a name in the source, e.g. `foobar`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal Expression
/// Represents an integer literal, rendering as its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Prefix Expression
/// A unary operator applied to an operand, e.g. `!ok` or `-5`.
///
/// Renders fully parenthesized as `(<operator><operand>)`; an absent operand
/// renders as empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl PrefixExpression {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.operator)?;
        if let Some(right) = &self.right {
            write!(f, "{}", right)?;
        }
        write!(f, ")")
    }
}

/// Infix Expression
/// A binary operator between two operands, e.g. `5 + 5`.
///
/// Renders fully parenthesized as `(<left> <operator> <right>)`, which makes
/// precedence and associativity observable from the rendered text alone.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl InfixExpression {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} ", self.left, self.operator)?;
        if let Some(right) = &self.right {
            write!(f, "{}", right)?;
        }
        write!(f, ")")
    }
}

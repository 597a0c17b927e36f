use std::fmt::Display;

use super::{
    expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Program
///
/// Root of the AST: the ordered sequence of statements parsed from one
/// source unit. An empty program is valid and renders as empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Program {
        Program {
            statements: Vec::new(),
        }
    }

    /// Literal of the token that began the first statement, or `""` for an
    /// empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Statement Kinds
///
/// Closed set of statement nodes. Each variant carries its node struct.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// Literal of the token that began the statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(statement) => statement.token_literal(),
            Statement::Return(statement) => statement.token_literal(),
            Statement::Expression(statement) => statement.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(statement) => statement.fmt(f),
            Statement::Return(statement) => statement.fmt(f),
            Statement::Expression(statement) => statement.fmt(f),
        }
    }
}

/// Expression Kinds
///
/// Closed set of expression nodes. Each variant carries its node struct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Expression {
    /// Literal of the token that began the expression.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expression) => expression.token_literal(),
            Expression::IntegerLiteral(expression) => expression.token_literal(),
            Expression::Prefix(expression) => expression.token_literal(),
            Expression::Infix(expression) => expression.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expression) => expression.fmt(f),
            Expression::IntegerLiteral(expression) => expression.fmt(f),
            Expression::Prefix(expression) => expression.fmt(f),
            Expression::Infix(expression) => expression.fmt(f),
        }
    }
}

use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub(crate) fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse a prefix for the current token.
    let mut left = parse_prefix(parser)?;

    // Climb while the peek token binds tighter than the caller's power and
    // the statement is not ending.
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        left = match parser.peek_kind() {
            TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Slash
            | TokenKind::Star
            | TokenKind::Equals
            | TokenKind::NotEquals
            | TokenKind::Less
            | TokenKind::Greater => {
                parser.advance();
                parse_infix_expr(parser, left)
            }
            // Not an infix operator; the left expression is complete.
            _ => return Some(left),
        };
    }

    Some(left)
}

fn parse_prefix(parser: &mut Parser) -> Option<Expression> {
    match parser.current_kind() {
        TokenKind::Identifier => Some(parse_identifier_expr(parser)),
        TokenKind::Int => parse_integer_literal_expr(parser),
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr(parser)),
        kind => {
            parser.push_error(ParseError::NoPrefixParseFunction { kind });
            None
        }
    }
}

fn parse_identifier_expr(parser: &Parser) -> Expression {
    let token = parser.current_token().clone();
    let value = token.literal.clone();

    Expression::Identifier(Identifier { token, value })
}

fn parse_integer_literal_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse() {
        Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(ParseError::IntegerParseError {
                literal: token.literal,
            });
            None
        }
    }
}

fn parse_prefix_expr(parser: &mut Parser) -> Expression {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Unary).map(Box::new);

    Expression::Prefix(PrefixExpression {
        token,
        operator,
        right,
    })
}

// The right operand binds at the operator's own power, so chains of equal
// power associate left.
fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Expression {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();
    let bp = parser.current_binding_power();

    parser.advance();
    let right = parse_expr(parser, bp).map(Box::new);

    Expression::Infix(InfixExpression {
        token,
        left: Box::new(left),
        operator,
        right,
    })
}

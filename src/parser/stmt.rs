use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Dispatches the current token to a statement builder. Returns `None` when
/// the builder abandoned the statement; the error is already recorded.
pub(crate) fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    match parser.current_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => Some(parse_return_stmt(parser)),
        _ => Some(parse_expr_stmt(parser)),
    }
}

fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Let(LetStatement { token, name, value }))
}

fn parse_return_stmt(parser: &mut Parser) -> Statement {
    let token = parser.current_token().clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Statement::Return(ReturnStatement { token, value })
}

// The trailing semicolon stays optional here so bare expressions work as
// one-line input.
fn parse_expr_stmt(parser: &mut Parser) -> Statement {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Statement::Expression(ExpressionStatement { token, expression })
}

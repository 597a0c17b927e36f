//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Single- and two-byte operators
//! - Whitespace handling and illegal bytes
//! - End-of-input behavior

use super::{
    lexer::Lexer,
    tokens::{lookup_identifier, Token, TokenKind},
};

/// Drains the lexer into a vector, including the terminating EOF token.
fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[test]
fn test_next_token_symbols() {
    let tokens = tokenize("=+(){},;");

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::CloseParen);
    assert_eq!(tokens[4].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[5].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[6].kind, TokenKind::Comma);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_next_token_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
  return true;
} else {
  return false;
}

10 == 10;
10 != 9;
";

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let mut lexer = Lexer::new(source);
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token {} has wrong kind", i);
        assert_eq!(token.literal, *literal, "token {} has wrong literal", i);
    }
}

#[test]
fn test_two_byte_operators() {
    let tokens = tokenize("== != = !");

    assert_eq!(tokens[0], Token::new(TokenKind::Equals, "=="));
    assert_eq!(tokens[1], Token::new(TokenKind::NotEquals, "!="));
    assert_eq!(tokens[2], Token::new(TokenKind::Assignment, "="));
    assert_eq!(tokens[3], Token::new(TokenKind::Not, "!"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_not_equals_is_one_token() {
    let tokens = tokenize("!=");

    assert_eq!(tokens.len(), 2); // !=, EOF
    assert_eq!(tokens[0], Token::new(TokenKind::NotEquals, "!="));
}

#[test]
fn test_lone_assignment_is_one_token() {
    let tokens = tokenize("=");

    assert_eq!(tokens.len(), 2); // =, EOF
    assert_eq!(tokens[0], Token::new(TokenKind::Assignment, "="));
}

#[test]
fn test_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("foobar"), TokenKind::Identifier);
    // Matching is case sensitive and exact.
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("returns"), TokenKind::Identifier);
    assert_eq!(lookup_identifier(""), TokenKind::Identifier);
}

#[test]
fn test_identifiers() {
    let tokens = tokenize("foo bar _underscore CamelCase");

    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "foo"));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "bar"));
    assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "_underscore"));
    assert_eq!(tokens[3], Token::new(TokenKind::Identifier, "CamelCase"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_digits_terminate_identifiers() {
    // Identifier runs are letters and underscores only, so a digit starts
    // a new integer token.
    let tokens = tokenize("baz_123");

    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "baz_"));
    assert_eq!(tokens[1], Token::new(TokenKind::Int, "123"));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_integers() {
    let tokens = tokenize("5 10 838383 0");

    assert_eq!(tokens[0], Token::new(TokenKind::Int, "5"));
    assert_eq!(tokens[1], Token::new(TokenKind::Int, "10"));
    assert_eq!(tokens[2], Token::new(TokenKind::Int, "838383"));
    assert_eq!(tokens[3], Token::new(TokenKind::Int, "0"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_bytes() {
    let tokens = tokenize("@ #5");

    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "@"));
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "#"));
    assert_eq!(tokens[2], Token::new(TokenKind::Int, "5"));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_whitespace_handling() {
    let tokens = tokenize("  let \t x \r\n =\n 42  ");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x"));
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3], Token::new(TokenKind::Int, "42"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("");
    let token = lexer.next_token();

    assert_eq!(token.kind, TokenKind::EOF);
    assert_eq!(token.literal, "");
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x;");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);

    // Every call past the end keeps yielding EOF.
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_token_display() {
    assert_eq!(
        Token::new(TokenKind::Identifier, "foobar").to_string(),
        "Identifier (foobar)"
    );
    assert_eq!(Token::new(TokenKind::Int, "5").to_string(), "Int (5)");
    assert_eq!(Token::new(TokenKind::Illegal, "@").to_string(), "Illegal (@)");
    assert_eq!(Token::new(TokenKind::Plus, "+").to_string(), "Plus ()");
    assert_eq!(Token::new(TokenKind::EOF, "").to_string(), "EOF ()");
}

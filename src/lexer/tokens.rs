use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Classifies an identifier's text against the reserved words, falling back
/// to [`TokenKind::Identifier`] for anything not in the table.
pub fn lookup_identifier(identifier: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(identifier)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Int,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Plus,
    Dash,
    Slash,
    Star,

    Less,
    Greater,

    Comma,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// Builds a single-byte token, converting the byte to its one-character
    /// literal the way the scanner sees it.
    pub fn from_byte(kind: TokenKind, byte: u8) -> Self {
        Token {
            kind,
            literal: (byte as char).to_string(),
        }
    }

    fn carries_literal(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier | TokenKind::Int | TokenKind::Illegal
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_literal() {
            write!(f, "{} ({})", self.kind, self.literal)
        } else {
            write!(f, "{} ()", self.kind)
        }
    }
}

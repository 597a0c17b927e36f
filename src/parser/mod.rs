//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with binding powers for operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, bare expressions)
//! - Expression parsing (prefix operators, binary operators, literals)
//! - Error accumulation without aborting the pass
//!
//! Prefix and infix positions are dispatched with a match over the closed
//! `TokenKind` set; precedence comes from the `BindingPower` ladder in
//! `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

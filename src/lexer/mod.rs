//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization, one token per call
//! - Recognition of keywords, identifiers, integers, and operators
//! - Two-byte operator lookahead (`==`, `!=`)
//! - Whitespace skipping and illegal-byte reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

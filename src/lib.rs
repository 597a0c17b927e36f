#![allow(clippy::module_inception)]

//! Front end for a small expression-oriented language.
//!
//! The pipeline is a pull-based `lexer`, a Pratt `parser` that accumulates
//! errors instead of stopping, and an `ast` whose nodes reconstruct their
//! source text through `Display`. The `repl` module wires the pieces to a
//! line-oriented loop.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod repl;

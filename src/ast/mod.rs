//! AST (Abstract Syntax Tree) module.
//!
//! Contains all definitions related to the AST structure:
//!
//! - ast: `Program` root and the statement/expression enums
//! - expressions: expression node structs
//! - statements: statement node structs
//!
//! Every node keeps the token that began it and implements `Display` with a
//! deterministic, fully parenthesized rendering used by the tests.

pub mod ast;
pub mod expressions;
pub mod statements;

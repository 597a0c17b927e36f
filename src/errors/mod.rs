//! Error types for the front end.
//!
//! This module defines the diagnostics the parser can record. It includes:
//!
//! - The `ParseError` variants for structural violations
//! - Display formatting naming the expected and actual token kinds
//!
//! There is no fatal error path: the parser stringifies these onto its
//! error list and keeps going.

pub mod errors;

#[cfg(test)]
mod tests;

//! Lexical analysis.
//!
//! Turns a [`SourceUnit`](crate::source::source::SourceUnit) into tokens.
//! Whitespace is skipped, comments are kept as tokens and every token carries
//! the position of its first character. Scanning stops at the first
//! malformed token.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod property_tests;

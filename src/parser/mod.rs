//! Parser module for building the Abstract Syntax Tree.
//!
//! A single-pass recursive descent parser with one token of lookahead pulled
//! straight from the lexer. Comments are discarded as they arrive. There is
//! no recovery: the first token that does not fit the grammar aborts the
//! parse with an `expected X, got: Y` error.
//!
//! Statements starting with `if`, `while` and `return` and every expression
//! form are dispatched through lookup tables registered in [`lookups`].
//! Binary expressions take a full expression on their right-hand side, so all
//! operators share one precedence level and associate to the right. The
//! operand chain is read in a loop and folded from the right, while blocks
//! and nested primaries are bounded by [`parser::MAX_NESTING_DEPTH`].

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

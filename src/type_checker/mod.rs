//! Type checking and semantic analysis module.
//!
//! Walks a parsed [`Program`](crate::ast::ast::Program) once, in declaration
//! order, against a chain of lexical environments:
//!
//! - Verifying the types of initializers, assignments, conditions and returns
//! - Resolving variable and function references through enclosing scopes
//! - Checking call arity and argument types, loosely for built-ins
//! - Requiring every function body to end in a `return`
//!
//! `if`, `else` and `while` bodies each get their own environment, while a
//! function's parameters and the top level of its body share one. The first
//! violation aborts the check.

pub mod type_checker;
pub mod types;

#[cfg(test)]
mod tests;

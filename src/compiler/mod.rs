//! Code generation module for the compiler.
//!
//! This module contains the C code generator that turns a type checked
//! [`Program`](crate::ast::ast::Program) into C source text. It handles:
//!
//! - Prototypes for every function ahead of the implementations
//! - Statements and expressions, written compactly
//! - Zero values for variables declared without an initializer
//! - Global initializers copied as written, with a warning when they are not
//!   C constant expressions
//! - The `minic.h` runtime the generated code includes

pub mod compiler;
pub mod expr;
pub mod stdlib;
pub mod stmt;

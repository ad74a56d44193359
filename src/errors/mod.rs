//! Error types and error handling for the compiler.
//!
//! Every phase (position lookup, lexing, parsing and type checking) fails
//! with the same [`errors::Error`]: an [`errors::ErrorImpl`] describing what
//! went wrong plus the [`crate::Position`] it went wrong at. Errors are never
//! collected; the first one aborts the phase that raised it.

pub mod errors;

#[cfg(test)]
mod tests;

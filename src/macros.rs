//! Utility macros for the compiler.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates an `Err(Error)` from an `ErrorImpl` variant and a position

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $position:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            position: $position,
        }
    };
}

/// Creates an `Err` holding an [`Error`](crate::errors::errors::Error).
///
/// # Example
///
/// ```ignore
/// return MK_ERROR!(VariableNotDeclared { variable: name.clone() }, position);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($variant:ident { $($field:ident $(: $value:expr)?),* $(,)? }, $position:expr) => {
        Err($crate::errors::errors::Error::new(
            $crate::errors::errors::ErrorImpl::$variant { $($field $(: $value)?),* },
            $position,
        ))
    };
}

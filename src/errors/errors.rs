use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The message without the position prefix.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::InvalidOffset { .. } => ErrorCategory::Position,
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::InvalidInteger { .. }
            | ErrorImpl::UnterminatedString { .. } => ErrorCategory::Lexical,
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::NestingTooDeep { .. } => {
                ErrorCategory::Syntactic
            }
            _ => ErrorCategory::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidOffset { .. } => "InvalidOffset",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidInteger { .. } => "InvalidInteger",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::IdentifierRedefined { .. } => "IdentifierRedefined",
            ErrorImpl::VoidVariable { .. } => "VoidVariable",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::MissingReturn { .. } => "MissingReturn",
            ErrorImpl::ArgumentCount { .. } => "ArgumentCount",
            ErrorImpl::BooleanOperands { .. } => "BooleanOperands",
            ErrorImpl::IncompatibleOperands { .. } => "IncompatibleOperands",
            ErrorImpl::FunctionNotFound { .. } => "FunctionNotFound",
            ErrorImpl::NotAFunction { .. } => "NotAFunction",
            ErrorImpl::FunctionAsValue { .. } => "FunctionAsValue",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } if expected == "';'" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::InvalidInteger { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, drop the leading zero",
                token
            )),
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "Strings must be closed with `\"` on the line they start",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Move part of the expression into a variable or a function",
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::IdentifierRedefined { identifier } => ErrorTip::Suggestion(format!(
                "`{}` is already declared in this scope",
                identifier
            )),
            ErrorImpl::UnknownType { .. } => ErrorTip::Suggestion(String::from(
                "Valid types are `bool`, `double`, `int`, `string` and `void`",
            )),
            ErrorImpl::MissingReturn { function } => ErrorTip::Suggestion(format!(
                "Add a `return` as the last statement of `{}`",
                function
            )),
            ErrorImpl::ArgumentCount {
                function,
                expected,
                ..
            } => ErrorTip::Suggestion(format!(
                "`{}` takes {} arguments",
                function, expected
            )),
            _ => ErrorTip::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Position,
    Lexical,
    Syntactic,
    Semantic,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid offset {offset}: offset not within file")]
    InvalidOffset { offset: usize },
    #[error("unexpected token '{token}'")]
    UnrecognisedToken { token: String },
    #[error("integer may not start with zero: {token}")]
    InvalidInteger { token: String },
    #[error("unterminated string: {token}")]
    UnterminatedString { token: String },
    #[error("expected {expected}, got: {token}")]
    UnexpectedToken { expected: String, token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("type missmatch '{expected}' vs '{received}'")]
    TypeMismatch { expected: String, received: String },
    #[error("undeclared variable in assignment '{variable}'")]
    VariableNotDeclared { variable: String },
    #[error("identifier redefined '{identifier}'")]
    IdentifierRedefined { identifier: String },
    #[error("variable '{variable}' can't be of type void")]
    VoidVariable { variable: String },
    #[error("unknown type '{type_}'")]
    UnknownType { type_: String },
    #[error("function block must end with a return statement")]
    MissingReturn { function: String },
    #[error("'{function}' expected {expected} arguments, got {received}")]
    ArgumentCount {
        function: String,
        expected: usize,
        received: usize,
    },
    #[error("arithmetic operators not compatible with boolean operands")]
    BooleanOperands { operator: String },
    #[error("arithmetic operators not compatible with operands of type '{type_}' ('{operator}')")]
    IncompatibleOperands { operator: String, type_: String },
    #[error("function '{function}' not found")]
    FunctionNotFound { function: String },
    #[error("'{function}' is not function")]
    NotAFunction { function: String },
    #[error("function '{function}' can't be used as a value")]
    FunctionAsValue { function: String },
}

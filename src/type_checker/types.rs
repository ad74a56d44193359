use std::fmt::Display;

use crate::{ast::ast::Keyword, errors::errors::Error, MK_ERROR};

/// The primitive types, named by their keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Bool,
    Double,
    Int,
    String,
    Void,
}

impl BasicType {
    pub fn from_keyword(keyword: &Keyword) -> Result<Self, Error> {
        match keyword.literal.as_str() {
            "bool" => Ok(BasicType::Bool),
            "double" => Ok(BasicType::Double),
            "int" => Ok(BasicType::Int),
            "string" => Ok(BasicType::String),
            "void" => Ok(BasicType::Void),
            other => MK_ERROR!(
                UnknownType {
                    type_: other.to_string()
                },
                keyword.position.clone()
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BasicType::Bool => "bool",
            BasicType::Double => "double",
            BasicType::Int => "int",
            BasicType::String => "string",
            BasicType::Void => "void",
        }
    }
}

impl Display for BasicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Signature of a declared or built-in function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    pub return_type: BasicType,
    pub parameters: Vec<BasicType>,
    /// Built-ins only check as many arguments as they declare parameters.
    pub built_in: bool,
}

impl FunctionType {
    pub fn new(return_type: BasicType, parameters: Vec<BasicType>) -> Self {
        FunctionType {
            return_type,
            parameters,
            built_in: false,
        }
    }

    pub fn built_in(return_type: BasicType, parameters: Vec<BasicType>) -> Self {
        FunctionType {
            return_type,
            parameters,
            built_in: true,
        }
    }
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(BasicType::name)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.return_type, parameters)
    }
}

/// What a name in scope stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Basic(BasicType),
    Function(FunctionType),
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Basic(basic) => write!(f, "{}", basic),
            Type::Function(function) => write!(f, "{}", function),
        }
    }
}

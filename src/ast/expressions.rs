use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Position};

use super::ast::{Identifier, Node, NodeRef};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Parenthesized(ParenthesizedExpression),
    Call(CallExpression),
}

impl Node for Expression {
    fn get_position(&self) -> &Position {
        match self {
            Expression::Literal(literal) => literal.get_position(),
            Expression::Identifier(identifier) => identifier.get_position(),
            Expression::Binary(binary) => binary.get_position(),
            Expression::Unary(unary) => unary.get_position(),
            Expression::Parenthesized(inner) => inner.get_position(),
            Expression::Call(call) => call.get_position(),
        }
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        match self {
            Expression::Literal(literal) => literal.walk(visitor),
            Expression::Identifier(identifier) => identifier.walk(visitor),
            Expression::Binary(binary) => binary.walk(visitor),
            Expression::Unary(unary) => unary.walk(visitor),
            Expression::Parenthesized(inner) => inner.walk(visitor),
            Expression::Call(call) => call.walk(visitor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Boolean,
    Integer,
    Double,
    String,
}

/// Literal Expression
///
/// `literal` is the exact source text; string literals keep their quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub literal: String,
    pub position: Position,
}

impl Node for Literal {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Literal(self));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    And,
    Or,
    Equal,
    LessThan,
    GreaterThan,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Percent => Some(BinaryOperator::Modulo),
            TokenKind::And => Some(BinaryOperator::And),
            TokenKind::Or => Some(BinaryOperator::Or),
            TokenKind::Equality => Some(BinaryOperator::Equal),
            TokenKind::LessThan => Some(BinaryOperator::LessThan),
            TokenKind::GreaterThan => Some(BinaryOperator::GreaterThan),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Equal => "==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
        }
    }

    /// Comparison and logical operators, the ones that always yield `bool`.
    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            BinaryOperator::And
                | BinaryOperator::Or
                | BinaryOperator::Equal
                | BinaryOperator::LessThan
                | BinaryOperator::GreaterThan
        )
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate, // -
    Not,    // !
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "!",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
///
/// The right-hand side is always a full expression, so `1 - 2 - 3` holds
/// `1` on the left and `2 - 3` on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub position: Position,
}

impl Node for BinaryExpression {
    fn get_position(&self) -> &Position {
        &self.position
    }
    /// Follows the right-nested chain in a loop rather than recursing into
    /// every `rhs`.
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        let mut current = self;
        loop {
            visitor(NodeRef::Binary(current));
            current.lhs.walk(visitor);

            match &*current.rhs {
                Expression::Binary(next) => current = next,
                rhs => return rhs.walk(visitor),
            }
        }
    }
}

impl BinaryExpression {
    /// Swaps the right-hand side for an empty literal and returns it.
    fn take_rhs(&mut self) -> Expression {
        let leaf = Expression::Literal(Literal {
            kind: LiteralKind::Integer,
            literal: String::new(),
            position: self.position.clone(),
        });
        std::mem::replace(&mut *self.rhs, leaf)
    }
}

impl Drop for BinaryExpression {
    // Unlinks the chain one link at a time, so dropping stays iterative
    fn drop(&mut self) {
        let mut rhs = self.take_rhs();
        while let Expression::Binary(mut next) = rhs {
            rhs = next.take_rhs();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub position: Position,
}

impl Node for UnaryExpression {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Unary(self));
        self.operand.walk(visitor);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpression {
    pub inner: Box<Expression>,
    pub position: Position,
}

impl Node for ParenthesizedExpression {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Parenthesized(self));
        self.inner.walk(visitor);
    }
}

/// Call Expression
///
/// Used both as an expression and as a statement of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expression>,
    pub position: Position,
}

impl Node for CallExpression {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Call(self));
        self.callee.walk(visitor);
        for argument in &self.arguments {
            argument.walk(visitor);
        }
    }
}

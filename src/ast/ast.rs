use crate::Position;

use super::{
    expressions::{
        BinaryExpression, CallExpression, Expression, Literal, ParenthesizedExpression,
        UnaryExpression,
    },
    statements::{AssignmentStatement, IfStatement, ReturnStatement, Statement, WhileStatement},
};

/// Node Trait
///
/// Implemented by every node of the tree, including the enums that only
/// wrap one node kind (`Declaration`, `Statement`, `Expression`).
pub trait Node {
    /// The position of the node's leftmost or defining token.
    fn get_position(&self) -> &Position;
    /// Calls `visitor` on this node, then on every child in declared order.
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>));
}

/// A borrowed view of any node, handed to `walk` visitors.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    FunctionDeclaration(&'a FunctionDeclaration),
    VariableDeclaration(&'a VariableDeclaration),
    Keyword(&'a Keyword),
    Identifier(&'a Identifier),
    Parameter(&'a Parameter),
    ParameterList(&'a ParameterList),
    Block(&'a Block),
    Assignment(&'a AssignmentStatement),
    If(&'a IfStatement),
    Return(&'a ReturnStatement),
    While(&'a WhileStatement),
    Call(&'a CallExpression),
    Literal(&'a Literal),
    Binary(&'a BinaryExpression),
    Unary(&'a UnaryExpression),
    Parenthesized(&'a ParenthesizedExpression),
}

impl NodeRef<'_> {
    pub fn get_position(&self) -> &Position {
        match self {
            NodeRef::Program(node) => node.get_position(),
            NodeRef::FunctionDeclaration(node) => node.get_position(),
            NodeRef::VariableDeclaration(node) => node.get_position(),
            NodeRef::Keyword(node) => node.get_position(),
            NodeRef::Identifier(node) => node.get_position(),
            NodeRef::Parameter(node) => node.get_position(),
            NodeRef::ParameterList(node) => node.get_position(),
            NodeRef::Block(node) => node.get_position(),
            NodeRef::Assignment(node) => node.get_position(),
            NodeRef::If(node) => node.get_position(),
            NodeRef::Return(node) => node.get_position(),
            NodeRef::While(node) => node.get_position(),
            NodeRef::Call(node) => node.get_position(),
            NodeRef::Literal(node) => node.get_position(),
            NodeRef::Binary(node) => node.get_position(),
            NodeRef::Unary(node) => node.get_position(),
            NodeRef::Parenthesized(node) => node.get_position(),
        }
    }
}

/// Root of the tree: every top level declaration in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
    pub position: Position,
}

impl Program {
    pub fn new(position: Position) -> Self {
        Program {
            declarations: Vec::new(),
            position,
        }
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }
}

impl Node for Program {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Program(self));
        for declaration in &self.declarations {
            declaration.walk(visitor);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
}

impl Node for Declaration {
    fn get_position(&self) -> &Position {
        match self {
            Declaration::Function(function) => function.get_position(),
            Declaration::Variable(variable) => variable.get_position(),
        }
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        match self {
            Declaration::Function(function) => function.walk(visitor),
            Declaration::Variable(variable) => variable.walk(visitor),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub return_type: Keyword,
    pub name: Identifier,
    pub parameters: ParameterList,
    pub body: Block,
    pub position: Position,
}

impl Node for FunctionDeclaration {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::FunctionDeclaration(self));
        self.return_type.walk(visitor);
        self.name.walk(visitor);
        self.parameters.walk(visitor);
        self.body.walk(visitor);
    }
}

/// `int a;` or `int a = 1;`, both at top level and inside blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub var_type: Keyword,
    pub name: Identifier,
    pub initializer: Option<Expression>,
    pub position: Position,
}

impl Node for VariableDeclaration {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::VariableDeclaration(self));
        self.var_type.walk(visitor);
        self.name.walk(visitor);
        if let Some(initializer) = &self.initializer {
            initializer.walk(visitor);
        }
    }
}

/// A type keyword such as `int` in a declaration or parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub literal: String,
    pub position: Position,
}

impl Node for Keyword {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Keyword(self));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub literal: String,
    pub position: Position,
}

impl Node for Identifier {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Identifier(self));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub param_type: Keyword,
    pub name: Identifier,
    pub position: Position,
}

impl Node for Parameter {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Parameter(self));
        self.param_type.walk(visitor);
        self.name.walk(visitor);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterList {
    pub parameters: Vec<Parameter>,
    pub position: Position,
}

impl ParameterList {
    pub fn new(position: Position) -> Self {
        ParameterList {
            parameters: Vec::new(),
            position,
        }
    }

    pub fn push(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }
}

impl Node for ParameterList {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::ParameterList(self));
        for parameter in &self.parameters {
            parameter.walk(visitor);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub position: Position,
}

impl Block {
    pub fn new(position: Position) -> Self {
        Block {
            statements: Vec::new(),
            position,
        }
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn last(&self) -> Option<&Statement> {
        self.statements.last()
    }
}

impl Node for Block {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Block(self));
        for statement in &self.statements {
            statement.walk(visitor);
        }
    }
}

use crate::Position;

use super::{
    ast::{Block, Identifier, Node, NodeRef, VariableDeclaration},
    expressions::{CallExpression, Expression},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(AssignmentStatement),
    If(IfStatement),
    Return(ReturnStatement),
    While(WhileStatement),
    Call(CallExpression),
    VariableDeclaration(VariableDeclaration),
}

impl Node for Statement {
    fn get_position(&self) -> &Position {
        match self {
            Statement::Assignment(statement) => statement.get_position(),
            Statement::If(statement) => statement.get_position(),
            Statement::Return(statement) => statement.get_position(),
            Statement::While(statement) => statement.get_position(),
            Statement::Call(call) => call.get_position(),
            Statement::VariableDeclaration(declaration) => declaration.get_position(),
        }
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        match self {
            Statement::Assignment(statement) => statement.walk(visitor),
            Statement::If(statement) => statement.walk(visitor),
            Statement::Return(statement) => statement.walk(visitor),
            Statement::While(statement) => statement.walk(visitor),
            Statement::Call(call) => call.walk(visitor),
            Statement::VariableDeclaration(declaration) => declaration.walk(visitor),
        }
    }
}

/// `target = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub target: Identifier,
    pub value: Expression,
    pub position: Position,
}

impl Node for AssignmentStatement {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Assignment(self));
        self.target.walk(visitor);
        self.value.walk(visitor);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub position: Position,
}

impl Node for IfStatement {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::If(self));
        self.condition.walk(visitor);
        self.then_block.walk(visitor);
        if let Some(else_block) = &self.else_block {
            else_block.walk(visitor);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub position: Position,
}

impl Node for ReturnStatement {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::Return(self));
        if let Some(value) = &self.value {
            value.walk(visitor);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Block,
    pub position: Position,
}

impl Node for WhileStatement {
    fn get_position(&self) -> &Position {
        &self.position
    }
    fn walk<'a>(&'a self, visitor: &mut dyn FnMut(NodeRef<'a>)) {
        visitor(NodeRef::While(self));
        self.condition.walk(visitor);
        self.body.walk(visitor);
    }
}

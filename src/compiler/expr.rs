use std::fmt;

use crate::ast::{
    ast::{Node, NodeRef},
    expressions::{BinaryExpression, CallExpression, Expression},
};

use super::compiler::Compiler;

/// Generates C for an expression.
///
/// Binary expressions are right-nested in the tree, so a binary or unary
/// right-hand side is parenthesized to keep C from regrouping it.
pub fn gen_expression(compiler: &mut Compiler<'_>, expression: &Expression) -> fmt::Result {
    match expression {
        Expression::Literal(literal) => compiler.write(&literal.literal),
        Expression::Identifier(identifier) => compiler.write(&identifier.literal),
        Expression::Binary(binary) => gen_binary(compiler, binary),
        Expression::Unary(unary) => {
            compiler.write(unary.operator.symbol())?;
            gen_nested(compiler, &unary.operand)
        }
        Expression::Parenthesized(parenthesized) => {
            compiler.write("(")?;
            gen_expression(compiler, &parenthesized.inner)?;
            compiler.write(")")
        }
        Expression::Call(call) => gen_call(compiler, call),
    }
}

/// Writes a right-nested chain in one pass, closing its parentheses at the end.
fn gen_binary(compiler: &mut Compiler<'_>, binary: &BinaryExpression) -> fmt::Result {
    let mut open = 0;
    let mut current = binary;
    loop {
        gen_expression(compiler, &current.lhs)?;
        compiler.write(current.operator.symbol())?;

        match &*current.rhs {
            Expression::Binary(next) => {
                compiler.write("(")?;
                open += 1;
                current = next;
            }
            rhs => {
                gen_nested(compiler, rhs)?;
                break;
            }
        }
    }

    compiler.write(&")".repeat(open))
}

fn gen_nested(compiler: &mut Compiler<'_>, expression: &Expression) -> fmt::Result {
    match expression {
        Expression::Binary(_) | Expression::Unary(_) => {
            compiler.write("(")?;
            gen_expression(compiler, expression)?;
            compiler.write(")")
        }
        _ => gen_expression(compiler, expression),
    }
}

pub fn gen_call(compiler: &mut Compiler<'_>, call: &CallExpression) -> fmt::Result {
    compiler.write(&call.callee.literal)?;
    compiler.write("(")?;
    for (index, argument) in call.arguments.iter().enumerate() {
        if index > 0 {
            compiler.write(",")?;
        }
        gen_expression(compiler, argument)?;
    }
    compiler.write(")")
}

/// Whether C accepts the expression as a file scope initializer, i.e. it
/// reads no variables and calls no functions.
pub fn is_constant(expression: &Expression) -> bool {
    let mut constant = true;
    expression.walk(&mut |node| {
        if matches!(node, NodeRef::Identifier(_) | NodeRef::Call(_)) {
            constant = false;
        }
    });
    constant
}

use std::fmt;

use crate::ast::{
    ast::{Block, VariableDeclaration},
    statements::Statement,
};

use super::{
    compiler::Compiler,
    expr::{gen_call, gen_expression},
};

/// Blocks are written on one line: `{stmt;stmt;}`.
pub fn gen_block(compiler: &mut Compiler<'_>, block: &Block) -> fmt::Result {
    compiler.write("{")?;
    for statement in block.iter() {
        gen_statement(compiler, statement)?;
    }
    compiler.write("}")
}

pub fn gen_statement(compiler: &mut Compiler<'_>, statement: &Statement) -> fmt::Result {
    match statement {
        Statement::Assignment(assignment) => {
            compiler.write(&assignment.target.literal)?;
            compiler.write("=")?;
            gen_expression(compiler, &assignment.value)?;
        }
        Statement::If(if_stmt) => {
            compiler.write("if(")?;
            gen_expression(compiler, &if_stmt.condition)?;
            compiler.write(")")?;
            gen_block(compiler, &if_stmt.then_block)?;

            if let Some(else_block) = &if_stmt.else_block {
                compiler.write("else")?;
                gen_block(compiler, else_block)?;
            }
        }
        Statement::While(while_stmt) => {
            compiler.write("while(")?;
            gen_expression(compiler, &while_stmt.condition)?;
            compiler.write(")")?;
            gen_block(compiler, &while_stmt.body)?;
        }
        Statement::Return(return_stmt) => {
            compiler.write("return ")?;
            if let Some(value) = &return_stmt.value {
                gen_expression(compiler, value)?;
            }
        }
        Statement::Call(call) => gen_call(compiler, call)?,
        Statement::VariableDeclaration(declaration) => gen_variable_decl(compiler, declaration)?,
    }

    compiler.write(";")
}

/// `type name = value` without the terminator. Missing initializers become
/// the zero value of the type.
pub fn gen_variable_decl(
    compiler: &mut Compiler<'_>,
    declaration: &VariableDeclaration,
) -> fmt::Result {
    compiler.gen_declarator(&declaration.var_type, &declaration.name)?;
    compiler.write(" = ")?;

    match &declaration.initializer {
        Some(initializer) => gen_expression(compiler, initializer),
        None => compiler.write(zero_value(&declaration.var_type.literal)),
    }
}

pub fn zero_value(type_name: &str) -> &'static str {
    match type_name {
        "bool" => "false",
        "double" => "0.0",
        "string" => "\"\"",
        _ => "0",
    }
}

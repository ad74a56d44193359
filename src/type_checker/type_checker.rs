use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{
            Block, Declaration, FunctionDeclaration, Identifier, Node, Program,
            VariableDeclaration,
        },
        expressions::{
            BinaryExpression, BinaryOperator, CallExpression, Expression, LiteralKind,
            UnaryExpression, UnaryOperator,
        },
        statements::Statement,
    },
    errors::errors::Error,
    Position, MK_ERROR,
};

use super::types::{BasicType, FunctionType, Type};

/// One lexical scope: the names declared directly in it and the scope it
/// was opened in.
#[derive(Debug)]
pub struct Environment {
    pub variable_lookup: HashMap<String, Type>,
    pub parent: Option<usize>,
}

impl Environment {
    pub fn new(parent: Option<usize>) -> Self {
        Environment {
            variable_lookup: HashMap::new(),
            parent,
        }
    }

    /// Inserts a name, failing if this scope already holds it.
    ///
    /// Names in enclosing scopes may be shadowed.
    pub fn declare(&mut self, name: &Identifier, declared_type: Type) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&name.literal) {
            return MK_ERROR!(
                IdentifierRedefined {
                    identifier: name.literal.clone()
                },
                name.position.clone()
            );
        }

        self.variable_lookup.insert(name.literal.clone(), declared_type);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.variable_lookup.get(name)
    }
}

/// Scope-based semantic analysis over a finished [`Program`].
///
/// Environments live in an arena and point at their parent by index. The
/// root environment holds the built-ins and every top level declaration, and
/// outlives a single `check`, so checking the same program twice with one
/// `TypeChecker` fails on the first redefined global.
#[derive(Debug)]
pub struct TypeChecker {
    environments: Vec<Environment>,
    current: usize,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    pub fn new() -> Self {
        let mut root = Environment::new(None);

        // Built in functions
        root.variable_lookup.insert(
            String::from("print"),
            Type::Function(FunctionType::built_in(
                BasicType::Void,
                vec![BasicType::String],
            )),
        );

        TypeChecker {
            environments: vec![root],
            current: 0,
        }
    }

    pub fn check(&mut self, program: &Program) -> Result<(), Error> {
        for declaration in &program.declarations {
            type_check_declaration(self, declaration)?;
        }

        debug!(
            declarations = program.declarations.len(),
            "type checked program"
        );
        Ok(())
    }

    pub fn get_current_environment(&mut self) -> &mut Environment {
        &mut self.environments[self.current]
    }

    /// Number of environments currently open, the root included.
    pub fn depth(&self) -> usize {
        self.environments.len()
    }

    /// Resolves a name through the current environment and its ancestors.
    pub fn fetch_type(&self, name: &str) -> Option<&Type> {
        let mut index = Some(self.current);
        while let Some(current) = index {
            let environment = &self.environments[current];
            if let Some(found) = environment.get(name) {
                return Some(found);
            }
            index = environment.parent;
        }
        None
    }

    /// Runs `check` inside a fresh child environment that is dropped again
    /// afterwards, whether or not `check` failed.
    pub fn with_environment<T>(
        &mut self,
        check: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.environments.push(Environment::new(Some(self.current)));
        self.current = self.environments.len() - 1;

        let result = check(self);

        if let Some(environment) = self.environments.pop() {
            self.current = environment.parent.unwrap_or(0);
        }
        result
    }
}

fn expect_type(expected: BasicType, received: BasicType, position: &Position) -> Result<(), Error> {
    if expected != received {
        return MK_ERROR!(
            TypeMismatch {
                expected: expected.to_string(),
                received: received.to_string()
            },
            position.clone()
        );
    }
    Ok(())
}

pub fn type_check_declaration(
    type_checker: &mut TypeChecker,
    declaration: &Declaration,
) -> Result<(), Error> {
    match declaration {
        Declaration::Function(function) => type_check_fn_decl(type_checker, function),
        Declaration::Variable(variable) => type_check_var_decl(type_checker, variable),
    }
}

pub fn type_check_var_decl(
    type_checker: &mut TypeChecker,
    declaration: &VariableDeclaration,
) -> Result<(), Error> {
    let declared_type = BasicType::from_keyword(&declaration.var_type)?;

    if declared_type == BasicType::Void {
        return MK_ERROR!(
            VoidVariable {
                variable: declaration.name.literal.clone()
            },
            declaration.var_type.position.clone()
        );
    }

    if let Some(initializer) = &declaration.initializer {
        let initializer_type = type_check_expr(type_checker, initializer)?;
        expect_type(declared_type, initializer_type, initializer.get_position())?;
    }

    // Inserted last so the initializer cannot see the variable itself
    type_checker
        .get_current_environment()
        .declare(&declaration.name, Type::Basic(declared_type))?;

    trace!(variable = %declaration.name.literal, var_type = %declared_type, "declared variable");
    Ok(())
}

pub fn type_check_fn_decl(
    type_checker: &mut TypeChecker,
    declaration: &FunctionDeclaration,
) -> Result<(), Error> {
    let return_type = BasicType::from_keyword(&declaration.return_type)?;

    let mut parameters = Vec::with_capacity(declaration.parameters.len());
    for parameter in declaration.parameters.iter() {
        let parameter_type = BasicType::from_keyword(&parameter.param_type)?;
        if parameter_type == BasicType::Void {
            return MK_ERROR!(
                VoidVariable {
                    variable: parameter.name.literal.clone()
                },
                parameter.param_type.position.clone()
            );
        }
        parameters.push(parameter_type);
    }

    let function_type = FunctionType::new(return_type, parameters);
    trace!(function = %declaration.name.literal, signature = %function_type, "declared function");

    // Declared before the body so it can call itself
    type_checker
        .get_current_environment()
        .declare(&declaration.name, Type::Function(function_type.clone()))?;

    type_checker.with_environment(|type_checker| {
        for (parameter, parameter_type) in declaration
            .parameters
            .iter()
            .zip(function_type.parameters.iter())
        {
            type_checker
                .get_current_environment()
                .declare(&parameter.name, Type::Basic(*parameter_type))?;
        }

        type_check_statements(type_checker, &declaration.body, return_type)
    })?;

    match declaration.body.last() {
        Some(Statement::Return(_)) => Ok(()),
        _ => MK_ERROR!(
            MissingReturn {
                function: declaration.name.literal.clone()
            },
            declaration.position.clone()
        ),
    }
}

/// Checks the statements of a block in the current environment.
pub fn type_check_statements(
    type_checker: &mut TypeChecker,
    block: &Block,
    return_type: BasicType,
) -> Result<(), Error> {
    for statement in block.iter() {
        type_check_stmt(type_checker, statement, return_type)?;
    }
    Ok(())
}

/// Checks a nested block (`if`, `else` and `while` bodies) in its own environment.
pub fn type_check_block(
    type_checker: &mut TypeChecker,
    block: &Block,
    return_type: BasicType,
) -> Result<(), Error> {
    type_checker.with_environment(|type_checker| {
        type_check_statements(type_checker, block, return_type)
    })
}

pub fn type_check_stmt(
    type_checker: &mut TypeChecker,
    statement: &Statement,
    return_type: BasicType,
) -> Result<(), Error> {
    match statement {
        Statement::Assignment(assignment) => {
            let target_type = type_check_identifier(type_checker, &assignment.target)?;
            let value_type = type_check_expr(type_checker, &assignment.value)?;
            expect_type(target_type, value_type, assignment.value.get_position())
        }
        Statement::If(if_stmt) => {
            let condition_type = type_check_expr(type_checker, &if_stmt.condition)?;
            expect_type(
                BasicType::Bool,
                condition_type,
                if_stmt.condition.get_position(),
            )?;

            type_check_block(type_checker, &if_stmt.then_block, return_type)?;
            if let Some(else_block) = &if_stmt.else_block {
                type_check_block(type_checker, else_block, return_type)?;
            }
            Ok(())
        }
        Statement::While(while_stmt) => {
            let condition_type = type_check_expr(type_checker, &while_stmt.condition)?;
            expect_type(
                BasicType::Bool,
                condition_type,
                while_stmt.condition.get_position(),
            )?;

            type_check_block(type_checker, &while_stmt.body, return_type)
        }
        Statement::Return(return_stmt) => match &return_stmt.value {
            Some(value) => {
                let value_type = type_check_expr(type_checker, value)?;
                expect_type(return_type, value_type, value.get_position())
            }
            None => expect_type(return_type, BasicType::Void, &return_stmt.position),
        },
        Statement::Call(call) => type_check_call(type_checker, call).map(|_| ()),
        Statement::VariableDeclaration(declaration) => {
            type_check_var_decl(type_checker, declaration)
        }
    }
}

/// The type of a name used as a value. Functions are not values.
fn type_check_identifier(
    type_checker: &TypeChecker,
    identifier: &Identifier,
) -> Result<BasicType, Error> {
    match type_checker.fetch_type(&identifier.literal) {
        Some(Type::Basic(basic)) => Ok(*basic),
        Some(Type::Function(_)) => MK_ERROR!(
            FunctionAsValue {
                function: identifier.literal.clone()
            },
            identifier.position.clone()
        ),
        None => MK_ERROR!(
            VariableNotDeclared {
                variable: identifier.literal.clone()
            },
            identifier.position.clone()
        ),
    }
}

pub fn type_check_expr(
    type_checker: &mut TypeChecker,
    expression: &Expression,
) -> Result<BasicType, Error> {
    match expression {
        Expression::Literal(literal) => Ok(match literal.kind {
            LiteralKind::Boolean => BasicType::Bool,
            LiteralKind::Integer => BasicType::Int,
            LiteralKind::Double => BasicType::Double,
            LiteralKind::String => BasicType::String,
        }),
        Expression::Identifier(identifier) => type_check_identifier(type_checker, identifier),
        Expression::Parenthesized(parenthesized) => {
            type_check_expr(type_checker, &parenthesized.inner)
        }
        Expression::Unary(unary) => type_check_unary(type_checker, unary),
        Expression::Binary(binary) => type_check_binary(type_checker, binary),
        Expression::Call(call) => type_check_call(type_checker, call),
    }
}

fn type_check_unary(
    type_checker: &mut TypeChecker,
    unary: &UnaryExpression,
) -> Result<BasicType, Error> {
    let operand_type = type_check_expr(type_checker, &unary.operand)?;

    match unary.operator {
        UnaryOperator::Not => {
            expect_type(BasicType::Bool, operand_type, unary.operand.get_position())?;
            Ok(BasicType::Bool)
        }
        UnaryOperator::Negate => Ok(operand_type),
    }
}

fn type_check_binary(
    type_checker: &mut TypeChecker,
    binary: &BinaryExpression,
) -> Result<BasicType, Error> {
    // Left operands in source order, walking down the right-nested chain
    let mut links = vec![];
    let mut current = binary;
    let last = loop {
        links.push((current, type_check_expr(type_checker, &current.lhs)?));
        match &*current.rhs {
            Expression::Binary(next) => current = next,
            rhs => break rhs,
        }
    };

    let mut rhs_type = type_check_expr(type_checker, last)?;
    for (link, lhs_type) in links.into_iter().rev() {
        rhs_type = type_check_operator(link, lhs_type, rhs_type)?;
    }
    Ok(rhs_type)
}

fn type_check_operator(
    binary: &BinaryExpression,
    lhs_type: BasicType,
    rhs_type: BasicType,
) -> Result<BasicType, Error> {
    expect_type(lhs_type, rhs_type, binary.rhs.get_position())?;

    match binary.operator {
        BinaryOperator::Add if lhs_type == BasicType::Bool => MK_ERROR!(
            BooleanOperands {
                operator: binary.operator.to_string()
            },
            binary.position.clone()
        ),
        BinaryOperator::Subtract
        | BinaryOperator::Multiply
        | BinaryOperator::Divide
        | BinaryOperator::Modulo
            if matches!(lhs_type, BasicType::Bool | BasicType::String) =>
        {
            MK_ERROR!(
                IncompatibleOperands {
                    operator: binary.operator.to_string(),
                    type_: lhs_type.to_string()
                },
                binary.position.clone()
            )
        }
        operator if operator.is_boolean() => Ok(BasicType::Bool),
        _ => Ok(lhs_type),
    }
}

pub fn type_check_call(
    type_checker: &mut TypeChecker,
    call: &CallExpression,
) -> Result<BasicType, Error> {
    let function_type = match type_checker.fetch_type(&call.callee.literal) {
        Some(Type::Function(function_type)) => function_type.clone(),
        Some(Type::Basic(_)) => {
            return MK_ERROR!(
                NotAFunction {
                    function: call.callee.literal.clone()
                },
                call.callee.position.clone()
            )
        }
        None => {
            return MK_ERROR!(
                FunctionNotFound {
                    function: call.callee.literal.clone()
                },
                call.callee.position.clone()
            )
        }
    };

    // Built-ins take extra trailing arguments, never fewer than declared
    let count_matches = if function_type.built_in {
        call.arguments.len() >= function_type.parameters.len()
    } else {
        call.arguments.len() == function_type.parameters.len()
    };

    if !count_matches {
        return MK_ERROR!(
            ArgumentCount {
                function: call.callee.literal.clone(),
                expected: function_type.parameters.len(),
                received: call.arguments.len()
            },
            call.position.clone()
        );
    }

    let mut argument_types = Vec::with_capacity(call.arguments.len());
    for argument in &call.arguments {
        argument_types.push(type_check_expr(type_checker, argument)?);
    }

    // Trailing built-in arguments have no declared type to match
    for ((argument, argument_type), parameter_type) in call
        .arguments
        .iter()
        .zip(argument_types)
        .zip(function_type.parameters.iter())
    {
        expect_type(*parameter_type, argument_type, argument.get_position())?;
    }

    Ok(function_type.return_type)
}

use tracing::trace;

use crate::{
    ast::{
        ast::{
            Block, Declaration, FunctionDeclaration, Identifier, Keyword, Parameter,
            ParameterList, VariableDeclaration,
        },
        expressions::CallExpression,
        statements::{
            AssignmentStatement, IfStatement, ReturnStatement, Statement, WhileStatement,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_call_arguments, parse_expr},
    parser::Parser,
};

/// `Keyword Identifier` followed by either a function or a variable tail.
pub fn parse_declaration(parser: &mut Parser<'_>) -> Result<Declaration, Error> {
    let type_keyword = parse_keyword(parser)?;
    let name = parse_identifier(parser)?;

    if parser.current_token_kind() == TokenKind::LeftParen {
        let parameters = parse_parameter_list(parser)?;
        let body = parse_block(parser)?;

        trace!(function = %name.literal, parameters = parameters.len(), "parsed function");
        return Ok(Declaration::Function(FunctionDeclaration {
            position: type_keyword.position.clone(),
            return_type: type_keyword,
            name,
            parameters,
            body,
        }));
    }

    let declaration = parse_variable_tail(parser, type_keyword, name)?;
    trace!(variable = %declaration.name.literal, "parsed global variable");
    Ok(Declaration::Variable(declaration))
}

/// `( "=" Expression )? ";"`
pub fn parse_variable_tail(
    parser: &mut Parser<'_>,
    var_type: Keyword,
    name: Identifier,
) -> Result<VariableDeclaration, Error> {
    let initializer = if parser.current_token_kind() == TokenKind::Equal {
        parser.advance()?;
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::SemiColon, "';'")?;

    Ok(VariableDeclaration {
        position: var_type.position.clone(),
        var_type,
        name,
        initializer,
    })
}

pub fn parse_keyword(parser: &mut Parser<'_>) -> Result<Keyword, Error> {
    let token = parser.expect(TokenKind::Keyword, "type keyword")?;
    Ok(Keyword {
        literal: token.literal,
        position: token.position,
    })
}

pub fn parse_identifier(parser: &mut Parser<'_>) -> Result<Identifier, Error> {
    let token = parser.expect(TokenKind::Identifier, "identifier")?;
    Ok(Identifier {
        literal: token.literal,
        position: token.position,
    })
}

pub fn parse_parameter_list(parser: &mut Parser<'_>) -> Result<ParameterList, Error> {
    let open = parser.expect(TokenKind::LeftParen, "'('")?;
    let mut parameters = ParameterList::new(open.position);

    if parser.current_token_kind() != TokenKind::RightParen {
        loop {
            let param_type = parse_keyword(parser)?;
            let name = parse_identifier(parser)?;
            parameters.push(Parameter {
                position: param_type.position.clone(),
                param_type,
                name,
            });

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::RightParen, "')'")?;
    Ok(parameters)
}

pub fn parse_block(parser: &mut Parser<'_>) -> Result<Block, Error> {
    parser.nested(|parser| {
        let open = parser.expect(TokenKind::LeftBrace, "'{'")?;
        let mut block = Block::new(open.position);

        while parser.has_tokens() && parser.current_token_kind() != TokenKind::RightBrace {
            block.push(parse_stmt(parser)?);
        }

        parser.expect(TokenKind::RightBrace, "'}'")?;
        Ok(block)
    })
}

pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Statement, Error> {
    match parser.current_token_kind() {
        TokenKind::Keyword => {
            let handler = parser
                .get_stmt_lookup()
                .get(parser.current_token().literal.as_str())
                .copied();

            match handler {
                Some(handler) => handler(parser),
                None => {
                    let var_type = parse_keyword(parser)?;
                    let name = parse_identifier(parser)?;
                    let declaration = parse_variable_tail(parser, var_type, name)?;
                    Ok(Statement::VariableDeclaration(declaration))
                }
            }
        }
        TokenKind::Identifier => {
            let name = parse_identifier(parser)?;

            match parser.current_token_kind() {
                TokenKind::Equal => parse_assignment_stmt(parser, name),
                TokenKind::LeftParen => {
                    let arguments = parse_call_arguments(parser)?;
                    parser.expect(TokenKind::SemiColon, "';'")?;

                    Ok(Statement::Call(CallExpression {
                        position: name.position.clone(),
                        callee: name,
                        arguments,
                    }))
                }
                _ => parser.unexpected("'=' or '('"),
            }
        }
        _ => parser.unexpected("statement"),
    }
}

fn parse_assignment_stmt(parser: &mut Parser<'_>, target: Identifier) -> Result<Statement, Error> {
    parser.expect(TokenKind::Equal, "'='")?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::SemiColon, "';'")?;

    Ok(Statement::Assignment(AssignmentStatement {
        position: target.position.clone(),
        target,
        value,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser<'_>) -> Result<Statement, Error> {
    let start = parser.advance()?.position;

    let condition = parse_expr(parser)?;
    let then_block = parse_block(parser)?;

    let else_block = if parser.current_token().is_keyword("else") {
        parser.advance()?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::SemiColon, "';'")?;

    Ok(Statement::If(IfStatement {
        condition,
        then_block,
        else_block,
        position: start,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser<'_>) -> Result<Statement, Error> {
    let start = parser.advance()?.position;

    let condition = parse_expr(parser)?;
    let body = parse_block(parser)?;

    parser.expect(TokenKind::SemiColon, "';'")?;

    Ok(Statement::While(WhileStatement {
        condition,
        body,
        position: start,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Result<Statement, Error> {
    let start = parser.advance()?.position;

    let value = if parser.current_token_kind() == TokenKind::SemiColon {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.expect(TokenKind::SemiColon, "';'")?;

    Ok(Statement::Return(ReturnStatement {
        value,
        position: start,
    }))
}

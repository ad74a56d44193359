use std::collections::HashMap;

use crate::{
    ast::{
        expressions::{BinaryOperator, Expression},
        statements::Statement,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser<'_>) -> Result<BinaryOperator, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Binary operators, all on one level
    parser.led(TokenKind::Plus, parse_binary_operator);
    parser.led(TokenKind::Minus, parse_binary_operator);
    parser.led(TokenKind::Star, parse_binary_operator);
    parser.led(TokenKind::Slash, parse_binary_operator);
    parser.led(TokenKind::Percent, parse_binary_operator);
    parser.led(TokenKind::And, parse_binary_operator);
    parser.led(TokenKind::Or, parse_binary_operator);
    parser.led(TokenKind::Equality, parse_binary_operator);
    parser.led(TokenKind::LessThan, parse_binary_operator);
    parser.led(TokenKind::GreaterThan, parse_binary_operator);

    // Literals and symbols
    parser.nud(TokenKind::Boolean, parse_literal_expr);
    parser.nud(TokenKind::Integer, parse_literal_expr);
    parser.nud(TokenKind::Double, parse_literal_expr);
    parser.nud(TokenKind::String, parse_literal_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::Exclamation, parse_prefix_expr);
    parser.nud(TokenKind::LeftParen, parse_grouping_expr);

    // Statements
    parser.stmt("if", parse_if_stmt);
    parser.stmt("while", parse_while_stmt);
    parser.stmt("return", parse_return_stmt);
}

// Lookup tables inside parser struct
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;

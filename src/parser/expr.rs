use crate::{
    ast::{
        ast::{Identifier, Node},
        expressions::{
            BinaryExpression, BinaryOperator, CallExpression, Expression, Literal, LiteralKind,
            ParenthesizedExpression, UnaryExpression, UnaryOperator,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `Primary ( Operator Primary )*`, folded from the right so `1 - 2 - 3`
/// becomes `1 - (2 - 3)`.
pub fn parse_expr(parser: &mut Parser<'_>) -> Result<Expression, Error> {
    let mut links = vec![];
    let mut last = parse_primary_expr(parser)?;

    while parser.current_token().is_operator() {
        let led = parser
            .get_led_lookup()
            .get(&parser.current_token_kind())
            .copied();

        let operator = match led {
            Some(led) => led(parser)?,
            None => return parser.unexpected("operator"),
        };
        let operand = parse_primary_expr(parser)?;
        links.push((std::mem::replace(&mut last, operand), operator));
    }

    Ok(links
        .into_iter()
        .rev()
        .fold(last, |rhs, (lhs, operator)| {
            Expression::Binary(BinaryExpression {
                position: lhs.get_position().clone(),
                operator,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })
        }))
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<Expression, Error> {
    let nud = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match nud {
        Some(nud) => parser.nested(nud),
        None => parser.unexpected("expression"),
    }
}

pub fn parse_literal_expr(parser: &mut Parser<'_>) -> Result<Expression, Error> {
    let kind = match parser.current_token_kind() {
        TokenKind::Boolean => LiteralKind::Boolean,
        TokenKind::Integer => LiteralKind::Integer,
        TokenKind::Double => LiteralKind::Double,
        TokenKind::String => LiteralKind::String,
        _ => return parser.unexpected("literal"),
    };

    let token = parser.advance()?;
    Ok(Expression::Literal(Literal {
        kind,
        literal: token.literal,
        position: token.position,
    }))
}

/// A variable reference, or a call when followed by `(`.
pub fn parse_identifier_expr(parser: &mut Parser<'_>) -> Result<Expression, Error> {
    let token = parser.expect(TokenKind::Identifier, "identifier")?;
    let identifier = Identifier {
        literal: token.literal,
        position: token.position,
    };

    if parser.current_token_kind() != TokenKind::LeftParen {
        return Ok(Expression::Identifier(identifier));
    }

    let arguments = parse_call_arguments(parser)?;
    Ok(Expression::Call(CallExpression {
        position: identifier.position.clone(),
        callee: identifier,
        arguments,
    }))
}

/// `"(" ( Expression ( "," Expression )* )? ")"`
pub fn parse_call_arguments(parser: &mut Parser<'_>) -> Result<Vec<Expression>, Error> {
    parser.expect(TokenKind::LeftParen, "'('")?;

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::RightParen {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::RightParen, "')'")?;
    Ok(arguments)
}

/// `-` and `!` apply to the primary that follows, not to a whole expression.
pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> Result<Expression, Error> {
    let operator_token = parser.advance()?;
    let operator = match operator_token.kind {
        TokenKind::Minus => UnaryOperator::Negate,
        _ => UnaryOperator::Not,
    };

    let operand = parse_primary_expr(parser)?;

    Ok(Expression::Unary(UnaryExpression {
        operator,
        operand: Box::new(operand),
        position: operator_token.position,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expression, Error> {
    let open = parser.advance()?;
    let inner = parse_expr(parser)?;
    parser.expect(TokenKind::RightParen, "')'")?;

    Ok(Expression::Parenthesized(ParenthesizedExpression {
        inner: Box::new(inner),
        position: open.position,
    }))
}

pub fn parse_binary_operator(parser: &mut Parser<'_>) -> Result<BinaryOperator, Error> {
    match BinaryOperator::from_token_kind(parser.current_token_kind()) {
        Some(operator) => {
            parser.advance()?;
            Ok(operator)
        }
        None => parser.unexpected("operator"),
    }
}

//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser keeps lookup tables for:
//! - Statement handlers, keyed by keyword
//! - NUD (null denotation) handlers for primary expressions
//! - LED (left denotation) handlers for binary operators

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    source::source::SourceUnit,
    Position, MK_ERROR,
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, StmtHandler,
        StmtLookup,
    },
    stmt::parse_declaration,
};

/// Deepest nesting of blocks, parentheses, prefix operators and call
/// arguments the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// The parser owns the lexer and holds exactly one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// The lookahead token, never a comment
    current: Token,
    /// Lookup table for statement handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (binary) expression handlers
    led_lookup: LEDLookup,
    /// Current nesting level, see [`Parser::nested`]
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser and reads the first lookahead token.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, Error> {
        let current = Self::next_significant(&mut lexer)?;

        Ok(Parser {
            lexer,
            current,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            depth: 0,
        })
    }

    fn next_significant(lexer: &mut Lexer<'a>) -> Result<Token, Error> {
        loop {
            let token = lexer.next_token()?;
            if token.kind != TokenKind::Comment {
                return Ok(token);
            }
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// At the end of input the lookahead stays on the EOF token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = Self::next_significant(&mut self.lexer)?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// `expected` describes the token for the error message, e.g. `"';'"`.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return self.unexpected(expected);
        }

        self.advance()
    }

    /// Fails at the current token with `expected {expected}, got: {token}`.
    pub fn unexpected<T>(&self, expected: &str) -> Result<T, Error> {
        MK_ERROR!(
            UnexpectedToken {
                expected: expected.to_string(),
                token: self.current.to_string(),
            },
            self.current.position.clone()
        )
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return MK_ERROR!(
                NestingTooDeep {
                    limit: MAX_NESTING_DEPTH
                },
                self.current.position.clone()
            );
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Checks if there is anything but EOF left.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Position of the first character of the source unit.
    pub fn start_position(&self) -> Result<Position, Error> {
        self.lexer.source().locate(0)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a binary operator handler for a token.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a primary expression handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses a whole source unit into a [`Program`].
///
/// This is the main entry point for parsing. It creates the lexer and the
/// parser, registers the lookup tables and parses declarations until EOF.
pub fn parse(source: &mut SourceUnit) -> Result<Program, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    create_token_lookups(&mut parser);

    let mut program = Program::new(parser.start_position()?);

    while parser.has_tokens() {
        program.push(parse_declaration(&mut parser)?);
    }

    debug!(declarations = program.declarations.len(), "parsed program");
    Ok(program)
}

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::Error, source::source::SourceUnit, Position, MK_ERROR, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOL_LOOKUP};

const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
    static ref STRING_PATTERN: Regex = Regex::new("^\"[^\"\\n]*\"").unwrap();
    static ref COMMENT_PATTERN: Regex = Regex::new("^//[^\\n]*").unwrap();
}

/// Pulls tokens out of a source unit one at a time.
///
/// The lexer records every line start it crosses into the source unit, which
/// is what lets it hand out a resolved [`Position`] with each token.
pub struct Lexer<'a> {
    source: &'a mut SourceUnit,
    /// Start of the token currently being built.
    offset: usize,
    reading_offset: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a mut SourceUnit) -> Self {
        Lexer {
            source,
            offset: 0,
            reading_offset: 0,
            finished: false,
        }
    }

    pub fn source(&self) -> &SourceUnit {
        self.source
    }

    pub fn at_eof(&self) -> bool {
        self.reading_offset >= self.source.len()
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();
        self.accept();

        let position = self.source.locate(self.offset)?;

        let current = match self.current_char() {
            Some(current) => current,
            None => return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), position)),
        };

        let token = if current.is_ascii_alphabetic() {
            self.scan_identifier(position)
        } else if current.is_ascii_digit() {
            self.scan_numeric(position)
        } else if current == '"' {
            self.scan_string(position)
        } else if current == '/' && self.peek() == Some('/') {
            self.scan_comment(position)
        } else {
            self.scan_symbol(current, position)
        }?;

        trace!(kind = %token.kind, literal = %token.literal, "scanned token");
        Ok(token)
    }

    fn accept(&mut self) {
        self.offset = self.reading_offset;
    }

    fn advance_n(&mut self, n: usize) {
        self.reading_offset = (self.reading_offset + n).min(self.source.len());
    }

    fn remainder(&self) -> &str {
        &self.source.text()[self.reading_offset..]
    }

    fn current_char(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    /// Consumes the text matched by an anchored pattern at the read offset.
    fn scan_pattern(&mut self, pattern: &Regex) -> Option<String> {
        let matched = pattern.find(self.remainder())?.as_str().to_string();
        self.advance_n(matched.len());
        Some(matched)
    }

    fn skip_whitespace(&mut self) {
        while let Some(current) = self.current_char() {
            if !WHITESPACE.contains(&current) {
                break;
            }

            self.advance_n(1);
            if current == '\n' {
                self.source.push_line(self.reading_offset);
            }
        }
    }

    fn scan_identifier(&mut self, position: Position) -> Result<Token, Error> {
        let literal = match self.scan_pattern(&IDENTIFIER_PATTERN) {
            Some(literal) => literal,
            None => return self.unrecognised(position),
        };

        let kind = if RESERVED_LOOKUP.contains(literal.as_str()) {
            TokenKind::Keyword
        } else if literal == "true" || literal == "false" {
            TokenKind::Boolean
        } else {
            TokenKind::Identifier
        };

        Ok(MK_TOKEN!(kind, literal, position))
    }

    fn scan_numeric(&mut self, position: Position) -> Result<Token, Error> {
        let literal = match self.scan_pattern(&NUMBER_PATTERN) {
            Some(literal) => literal,
            None => return self.unrecognised(position),
        };

        if literal.contains('.') {
            return Ok(MK_TOKEN!(TokenKind::Double, literal, position));
        }

        if literal.len() > 1 && literal.starts_with('0') {
            return MK_ERROR!(InvalidInteger { token: literal }, position);
        }

        Ok(MK_TOKEN!(TokenKind::Integer, literal, position))
    }

    fn scan_string(&mut self, position: Position) -> Result<Token, Error> {
        match self.scan_pattern(&STRING_PATTERN) {
            Some(literal) => Ok(MK_TOKEN!(TokenKind::String, literal, position)),
            None => {
                let token = self
                    .remainder()
                    .split('\n')
                    .next()
                    .unwrap_or_default()
                    .trim_end_matches('\r')
                    .to_string();
                MK_ERROR!(UnterminatedString { token }, position)
            }
        }
    }

    fn scan_comment(&mut self, position: Position) -> Result<Token, Error> {
        match self.scan_pattern(&COMMENT_PATTERN) {
            Some(literal) => Ok(MK_TOKEN!(TokenKind::Comment, literal, position)),
            None => self.unrecognised(position),
        }
    }

    fn scan_symbol(&mut self, current: char, position: Position) -> Result<Token, Error> {
        if let Some(next) = self.peek() {
            let pair: String = [current, next].iter().collect();
            if let Some(kind) = SYMBOL_LOOKUP.get(pair.as_str()) {
                self.advance_n(pair.len());
                return Ok(MK_TOKEN!(*kind, pair, position));
            }
        }

        let literal = current.to_string();
        match SYMBOL_LOOKUP.get(literal.as_str()) {
            Some(kind) => {
                self.advance_n(literal.len());
                Ok(MK_TOKEN!(*kind, literal, position))
            }
            None => MK_ERROR!(UnrecognisedToken { token: literal }, position),
        }
    }

    fn unrecognised(&self, position: Position) -> Result<Token, Error> {
        let token = self.current_char().map(String::from).unwrap_or_default();
        MK_ERROR!(UnrecognisedToken { token }, position)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    /// Yields every token up to and including a single EOF token, or up to
    /// the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        match &token {
            Ok(token) if token.kind != TokenKind::EOF => {}
            _ => self.finished = true,
        }

        Some(token)
    }
}

/// Scans a whole source unit, comments included, ending in one EOF token.
pub fn tokenize(source: &mut SourceUnit) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source).collect::<Result<Vec<Token>, Error>>()?;
    debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}

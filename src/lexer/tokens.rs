use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("void");
        set.insert("bool");
        set.insert("int");
        set.insert("double");
        set.insert("string");
        set.insert("while");
        set.insert("if");
        set.insert("else");
        set.insert("return");
        set
    };
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(";", TokenKind::SemiColon);
        map.insert("=", TokenKind::Equal);
        map.insert("(", TokenKind::LeftParen);
        map.insert(")", TokenKind::RightParen);
        map.insert("{", TokenKind::LeftBrace);
        map.insert("}", TokenKind::RightBrace);
        map.insert(",", TokenKind::Comma);
        map.insert(".", TokenKind::Dot);
        map.insert("/", TokenKind::Slash);
        map.insert("!", TokenKind::Exclamation);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Star);
        map.insert("%", TokenKind::Percent);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("==", TokenKind::Equality);
        map.insert("<", TokenKind::LessThan);
        map.insert(">", TokenKind::GreaterThan);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Keyword,
    Boolean,
    Integer,
    Double,
    String,
    Comment,

    SemiColon,
    Equal, // =
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,

    Exclamation, // !
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    And,      // &&
    Or,       // ||
    Equality, // ==
    LessThan,
    GreaterThan,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token, quotes included for strings.
    pub literal: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            _ => write!(f, "{}", self.literal),
        }
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether a binary expression continues at this token.
    pub fn is_operator(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Equality,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
        ])
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.literal == keyword
    }
}

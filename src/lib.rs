#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    parser::parser::parse,
    source::source::SourceUnit,
    type_checker::type_checker::TypeChecker,
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod source;
pub mod type_checker;

extern crate regex;

/// A human readable location inside a source unit.
///
/// Rows and columns are 1-based. A position with row 0 is the "unknown"
/// position used by errors that have no place in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub name: Rc<String>,
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub fn new(name: Rc<String>, row: u32, column: u32) -> Self {
        Position { name, row, column }
    }

    pub fn null(name: Rc<String>) -> Self {
        Position {
            name,
            row: 0,
            column: 0,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {},{}", self.name, self.row, self.column)
    }
}

/// Runs the whole front end over one source unit: parse, then type check.
///
/// The returned program is type-consistent and ready for a generator.
pub fn check_source(source: &mut SourceUnit) -> Result<Program, Error> {
    let program = parse(source)?;
    TypeChecker::new().check(&program)?;
    Ok(program)
}

pub fn render_error(error: &Error, source: &SourceUnit) -> String {
    /*
        Error: TypeMismatch: type missmatch 'int' vs 'bool'
        -> main.mc: 2,9
          |
        2 | int a = true;
          | --------^
    */

    let position = error.get_position();
    let mut rendered = format!("Error: {}: {}\n", error.get_error_name(), error.get_message());

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        rendered.push_str(&format!("Tip: {}\n", tip));
    }
    rendered.push_str(&format!("-> {}\n", position));

    let line_text = match source.line(position.row) {
        Some(line_text) => line_text,
        None => return rendered,
    };

    let line_string = position.row.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

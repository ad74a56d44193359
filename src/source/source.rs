use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// One in-memory source text plus the line starts discovered so far.
///
/// `lines` always begins with the sentinel `0`. The lexer appends the offset
/// just past every `\n` it skips, so lookups for anything already scanned
/// are always answerable.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    text: String,
    name: Rc<String>,
    lines: Vec<usize>,
}

impl SourceUnit {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        SourceUnit {
            text: text.into(),
            name: Rc::new(name.into()),
            lines: vec![0],
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn name(&self) -> &Rc<String> {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Records the start of a new line.
    ///
    /// Offsets at or before the last known line start are already recorded;
    /// a lexer recreated over the same unit replays them, so they are ignored.
    pub fn push_line(&mut self, offset: usize) {
        if offset > *self.lines.last().unwrap_or(&0) {
            self.lines.push(offset);
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Maps a byte offset to a row and column.
    ///
    /// The offset one past the last byte is valid, it is where the EOF token
    /// sits. Anything further fails.
    pub fn locate(&self, offset: usize) -> Result<Position, Error> {
        if offset > self.text.len() {
            return Err(Error::new(
                ErrorImpl::InvalidOffset { offset },
                Position::null(Rc::clone(&self.name)),
            ));
        }

        // Number of line starts <= offset; the sentinel guarantees at least one.
        let row = self.lines.partition_point(|&start| start <= offset);
        let line_start = self.lines[row - 1];

        Ok(Position::new(
            Rc::clone(&self.name),
            row as u32,
            (offset - line_start + 1) as u32,
        ))
    }

    /// Returns the text of a 1-based row without its line terminator.
    pub fn line(&self, row: u32) -> Option<&str> {
        if row == 0 {
            return None;
        }

        self.text
            .split('\n')
            .nth(row as usize - 1)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

//! Source units and position tracking.
//!
//! A [`source::SourceUnit`] owns the text being compiled and the line index
//! the lexer builds while scanning it. [`source::SourceUnit::locate`] turns
//! byte offsets into the `name: row,column` positions every token, node and
//! error carries.

pub mod source;

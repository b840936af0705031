#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod symbols;
pub mod values;

extern crate regex;

/// A 1-based line/column location inside a source file.
///
/// `Position::null()` (line 0) marks a diagnostic that has no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Line {}, Col {}]", self.line, self.column)
    }
}

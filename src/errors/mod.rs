//! Diagnostics reported by the lexer and the symbol table.
//!
//! A [`Diagnostic`](errors::Diagnostic) is a plain value: a classified kind,
//! an optional message (usually the offending lexeme) and a source position.
//! Position `0:0` marks errors that are not tied to a location, such as a
//! file that could not be opened.

pub mod errors;

#[cfg(test)]
mod tests;

//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-class dispatch through an ordered table of anchored patterns
//! - Symbols, numbers, operators, delimiters and control characters
//! - Token position tracking (1-based line and column) for error reporting
//! - `#` line comments and whitespace handling
//!
//! Lexing stops at the first error; tokens emitted before it are kept.

pub mod lexer;
pub mod tokens;

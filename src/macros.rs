//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token at a line/column
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler for single-character tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The captured lexeme
/// * `$line` - 1-based line number
/// * `$column` - 1-based column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42", 1, 5);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr, $column:expr) => {
        $crate::lexer::tokens::Token::new(
            $kind,
            $text,
            $crate::Position {
                line: $line,
                column: $column,
            },
        )
    };
}

/// Creates a handler for a pattern that always matches exactly one character.
///
/// The generated handler emits a token of the given kind for the matched
/// character and advances the cursor past it.
///
/// # Example
///
/// ```ignore
/// Pattern {
///     regex: Regex::new("^[;,:]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Delimiter),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer,
         matched: &str|
         -> $crate::errors::errors::CourierResult<()> {
            lexer.push($kind, matched)?;
            lexer.advance_n(matched.len());
            Ok(())
        }
    };
}

use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Result of a single fallible lexer or symbol table step.
pub type CourierResult<T> = Result<T, Diagnostic>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    position: Position,
}

impl Diagnostic {
    pub fn success() -> Self {
        Diagnostic {
            kind: DiagnosticKind::Success,
            message: String::new(),
            position: Position::null(),
        }
    }

    pub fn new(kind: DiagnosticKind) -> Self {
        Diagnostic {
            kind,
            message: String::new(),
            position: Position::null(),
        }
    }

    /// Attaches the offending text, e.g. the malformed lexeme.
    ///
    /// A success diagnostic never carries a message, so this is a no-op on one.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if !self.is_success() {
            self.message = message.into();
        }
        self
    }

    /// Positions the diagnostic. No-op on a success diagnostic.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        if !self.is_success() {
            self.position = Position { line, column };
        }
        self
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn is_success(&self) -> bool {
        self.kind == DiagnosticKind::Success
    }

    /// Resets the diagnostic back to success.
    pub fn clear(&mut self) {
        *self = Diagnostic::success();
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind {
            DiagnosticKind::Success => "Success",
            DiagnosticKind::FileOpenError => "FileOpenError",
            DiagnosticKind::UnrecognizedSymbol => "UnrecognizedSymbol",
            DiagnosticKind::InvalidNumericLiteral => "InvalidNumericLiteral",
            DiagnosticKind::AllocationFailure => "AllocationFailure",
            DiagnosticKind::DuplicateVariable => "DuplicateVariable",
        }
    }

    /// Renders the diagnostic as a single human readable line.
    ///
    /// ```text
    /// Error: [Line 3, Col 5]: Invalid numeric literal: '4a'
    /// ```
    pub fn report(&self) -> String {
        if self.is_success() {
            return self.kind.to_string();
        }

        let mut report = String::from("Error:");
        if !self.position.is_null() {
            report.push_str(&format!(" {}:", self.position));
        }
        report.push_str(&format!(" {}", self.kind));
        if !self.message.is_empty() {
            report.push_str(&format!(": '{}'", self.message));
        }

        report
    }
}

impl Default for Diagnostic {
    fn default() -> Self {
        Diagnostic::success()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report())
    }
}

impl std::error::Error for Diagnostic {}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    #[error("Success")]
    Success,
    #[error("Unable to open file")]
    FileOpenError,
    #[error("Unrecognized symbol")]
    UnrecognizedSymbol,
    #[error("Invalid numeric literal")]
    InvalidNumericLiteral,
    #[error("Memory allocation error")]
    AllocationFailure,
    #[error("Redeclaration of existing variable")]
    DuplicateVariable,
}

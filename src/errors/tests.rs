//! Unit tests for diagnostics.
//!
//! This module contains tests for diagnostic construction and reporting.

use pretty_assertions::assert_eq;

use crate::errors::errors::{Diagnostic, DiagnosticKind};

#[test]
fn test_success() {
    let diagnostic = Diagnostic::success();

    assert!(diagnostic.is_success());
    assert_eq!(diagnostic.message(), "");
    assert!(diagnostic.get_position().is_null());
    assert_eq!(diagnostic, Diagnostic::default());
    assert_eq!(diagnostic.report(), "Success");
}

#[test]
fn test_success_ignores_message_and_position() {
    let diagnostic = Diagnostic::new(DiagnosticKind::Success)
        .with_message("x")
        .at(3, 4);

    assert_eq!(diagnostic, Diagnostic::success());
    assert_eq!(diagnostic.message(), "");
    assert!(diagnostic.get_position().is_null());
    assert_eq!(diagnostic.report(), "Success");
}

#[test]
fn test_error_creation() {
    let diagnostic = Diagnostic::new(DiagnosticKind::UnrecognizedSymbol)
        .with_message("@")
        .at(10, 4);

    assert!(!diagnostic.is_success());
    assert_eq!(diagnostic.kind(), DiagnosticKind::UnrecognizedSymbol);
    assert_eq!(diagnostic.get_error_name(), "UnrecognizedSymbol");
    assert_eq!(diagnostic.line(), 10);
    assert_eq!(diagnostic.column(), 4);
}

#[test]
fn test_report_positional() {
    let diagnostic = Diagnostic::new(DiagnosticKind::InvalidNumericLiteral)
        .with_message("4a")
        .at(1, 5);

    assert_eq!(
        diagnostic.report(),
        "Error: [Line 1, Col 5]: Invalid numeric literal: '4a'"
    );
}

#[test]
fn test_report_without_position() {
    let diagnostic = Diagnostic::new(DiagnosticKind::DuplicateVariable).with_message("x");

    assert_eq!(
        diagnostic.report(),
        "Error: Redeclaration of existing variable: 'x'"
    );
}

#[test]
fn test_report_without_message() {
    let diagnostic = Diagnostic::new(DiagnosticKind::AllocationFailure).at(2, 7);

    assert_eq!(diagnostic.report(), "Error: [Line 2, Col 7]: Memory allocation error");
}

#[test]
fn test_report_file_open() {
    assert_eq!(
        Diagnostic::new(DiagnosticKind::FileOpenError).report(),
        "Error: Unable to open file"
    );
}

#[test]
fn test_display_matches_report() {
    let diagnostic = Diagnostic::new(DiagnosticKind::UnrecognizedSymbol)
        .with_message("$")
        .at(3, 1);

    assert_eq!(diagnostic.to_string(), diagnostic.report());
}

#[test]
fn test_kind_messages() {
    assert_eq!(DiagnosticKind::Success.to_string(), "Success");
    assert_eq!(DiagnosticKind::FileOpenError.to_string(), "Unable to open file");
    assert_eq!(DiagnosticKind::UnrecognizedSymbol.to_string(), "Unrecognized symbol");
    assert_eq!(
        DiagnosticKind::InvalidNumericLiteral.to_string(),
        "Invalid numeric literal"
    );
    assert_eq!(
        DiagnosticKind::AllocationFailure.to_string(),
        "Memory allocation error"
    );
    assert_eq!(
        DiagnosticKind::DuplicateVariable.to_string(),
        "Redeclaration of existing variable"
    );
}

#[test]
fn test_clear() {
    let mut diagnostic = Diagnostic::new(DiagnosticKind::InvalidNumericLiteral)
        .with_message("9z")
        .at(1, 1);

    diagnostic.clear();
    assert!(diagnostic.is_success());
    assert_eq!(diagnostic, Diagnostic::success());
}

#[test]
fn test_equality() {
    let a = Diagnostic::new(DiagnosticKind::UnrecognizedSymbol).with_message("@").at(1, 2);
    let b = Diagnostic::new(DiagnosticKind::UnrecognizedSymbol).with_message("@").at(1, 2);
    let c = Diagnostic::new(DiagnosticKind::UnrecognizedSymbol).with_message("@").at(1, 3);

    assert_eq!(a, b);
    assert!(a != c);
}

#[test]
fn test_is_std_error() {
    fn boxed(diagnostic: Diagnostic) -> Box<dyn std::error::Error> {
        Box::new(diagnostic)
    }

    let error = boxed(Diagnostic::new(DiagnosticKind::FileOpenError));
    assert_eq!(error.to_string(), "Error: Unable to open file");
}

//! Common test utilities
//!
//! Shared helpers for the integration suites.
//!
//! # Parsing Helpers
//! - [`parse_cleanly`] - Parse source and return the statement, panicking on errors
//! - [`parse_failure`] - Parse source expecting rejection
//! - [`tokenize_cleanly`] - Tokenize source and return tokens, panicking on errors
//!
//! # Diagnostic Helpers
//! - [`format_diagnostics`] - Format diagnostics for display in assertions
//! - [`assert_has_error_containing`] - Assert that a diagnostic message contains text

#![allow(dead_code)]

use cql_parser::{Diag, ParseError, ParsedStatement, Token, parse, tokenize};

/// Format diagnostics for display in assertion messages.
pub fn format_diagnostics(diags: &[Diag]) -> String {
    diags
        .iter()
        .map(|diag| format!("{diag:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse source and return the statement.
///
/// # Panics
/// Panics if parsing produces any diagnostics.
pub fn parse_cleanly(source: &str) -> ParsedStatement {
    match parse(source) {
        Ok(parsed) => parsed,
        Err(error) => panic!(
            "unexpected diagnostics for `{source}`:\n{}",
            format_diagnostics(error.diagnostics())
        ),
    }
}

/// Parse source that must be rejected.
///
/// # Panics
/// Panics if the source parses cleanly.
pub fn parse_failure(source: &str) -> ParseError {
    match parse(source) {
        Ok(parsed) => panic!("expected `{source}` to be rejected, got {parsed:?}"),
        Err(error) => error,
    }
}

/// Assert that some retained diagnostic mentions `text`.
///
/// # Panics
/// Panics if no diagnostic message contains `text`.
pub fn assert_has_error_containing(error: &ParseError, text: &str) {
    assert!(
        error.diagnostics().iter().any(|d| d.message.contains(text)),
        "expected error containing '{text}', but found:\n{}",
        format_diagnostics(error.diagnostics())
    );
}

/// Tokenize source and return tokens, EOF included.
///
/// # Panics
/// Panics if tokenization produces any diagnostics.
pub fn tokenize_cleanly(source: &str) -> Vec<Token> {
    let result = tokenize(source);
    assert!(
        result.diagnostics.is_empty(),
        "unexpected lexer diagnostics for `{source}`:\n{}",
        format_diagnostics(&result.diagnostics)
    );
    result.tokens
}

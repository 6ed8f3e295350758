//! CQL parser with rich diagnostics.
//!
//! This library turns one CQL statement into a typed AST. Problems are
//! collected rather than thrown, so a single call reports every error the
//! parser could find; the most recent one is the representative message.
//! Diagnostics render through miette.
//!
//! # Example
//!
//! ```
//! use cql_parser::{Statement, parse};
//!
//! let parsed = parse("UPDATE ks.users SET visits = visits + 1 WHERE id = ?").unwrap();
//! assert!(matches!(parsed.statement, Statement::Update(_)));
//! assert_eq!(parsed.bound_terms, 1);
//!
//! let error = parse("SELECT COUNT(2) FROM users").unwrap_err();
//! assert_eq!(error.message(), "Only COUNT(1) is supported, got COUNT(2)");
//! ```

pub mod ast;
pub mod config;
pub mod diag;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{ParsedStatement, Span, Statement};
pub use config::ParseOptions;
pub use diag::{Diag, DiagLabel, DiagSeverity, Diagnostics, LabelRole, SourceFile};
pub use error::ParseError;
pub use lexer::token::{Token, TokenKind};
pub use lexer::{Lexer, LexerResult, tokenize};
pub use parser::{ParseOutcome, Parser};

/// Parses one statement with default options.
pub fn parse(source: &str) -> Result<ParsedStatement, ParseError> {
    parse_with(source, &ParseOptions::default())
}

/// Parses one statement.
///
/// The statement is returned only when lexing and parsing reported nothing.
/// Otherwise every retained diagnostic is handed back in the error.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<ParsedStatement, ParseError> {
    tracing::debug!(len = source.len(), "parsing statement");

    let outcome = parse_outcome(source);
    match outcome.statement {
        Some(parsed) if outcome.diagnostics.is_empty() => {
            tracing::debug!(
                kind = parsed.statement.kind(),
                bound_terms = parsed.bound_terms,
                "statement accepted"
            );
            Ok(parsed)
        }
        _ => {
            tracing::debug!(
                diagnostics = outcome.diagnostics.len(),
                aborted = outcome.aborted,
                "statement rejected"
            );
            let source_file = match &options.source_name {
                Some(name) => SourceFile::with_name(source, name.as_str()),
                None => SourceFile::new(source),
            };
            Err(ParseError::new(
                outcome.diagnostics.into_vec(),
                source_file,
                outcome.aborted,
                options,
            ))
        }
    }
}

/// Lexes and parses without applying the accept/reject policy.
///
/// Useful for tooling that wants the best-effort statement alongside its
/// diagnostics.
pub fn parse_outcome(source: &str) -> ParseOutcome {
    let lexed = tokenize(source);
    tracing::trace!(tokens = lexed.tokens.len(), "lexed statement");
    Parser::new(lexed.tokens)
        .with_lexer_diagnostics(lexed.diagnostics)
        .parse()
}

//! Diagnostic reporting and synchronization.

use crate::ast::Span;
use crate::diag::{Diag, codes};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser};

/// Keywords that begin a clause; relation and assignment lists resync here.
pub(crate) const CLAUSE_BOUNDARY_TOKENS: &[TokenKind] = &[
    TokenKind::From,
    TokenKind::Where,
    TokenKind::Set,
    TokenKind::Using,
    TokenKind::Order,
    TokenKind::Limit,
    TokenKind::Allow,
    TokenKind::With,
    TokenKind::Apply,
    TokenKind::Semicolon,
];

impl Parser {
    /// Skips tokens until one of `sync_points` or EOF.
    pub(crate) fn recover_to(&mut self, sync_points: &[TokenKind]) {
        while !self.is_eof() && !self.at_any(sync_points) {
            self.advance();
        }
    }

    /// Skips to the next clause keyword, a list separator or EOF.
    pub(crate) fn synchronize_in_list(&mut self, separator: &TokenKind) {
        while !self.is_eof() && !self.at(separator) && !self.at_any(CLAUSE_BOUNDARY_TOKENS) {
            self.advance();
        }
    }

    /// Records "expected X" at the current token.
    pub(crate) fn expected_token(&mut self, expected: &str, context: &str) {
        let token = self.peek();
        let found = token.kind.to_string();
        let message = if context.is_empty() {
            format!("expected {expected}, found {found}")
        } else {
            format!("expected {expected} {context}, found {found}")
        };
        let diag = Diag::error(message)
            .with_primary_label(token.span.clone(), format!("unexpected {found}"))
            .with_code(codes::EXPECTED_TOKEN);
        self.diagnostics.report(diag);
    }

    /// Records "unexpected token" at the current token.
    pub(crate) fn unexpected_token(&mut self, context: &str) {
        let token = self.peek();
        let diag = Diag::error(format!("unexpected {} {context}", token.kind))
            .with_primary_label(token.span.clone(), "unexpected token")
            .with_code(codes::UNEXPECTED_TOKEN);
        self.diagnostics.report(diag);
    }

    /// Records a generic syntax error.
    pub(crate) fn error(&mut self, span: Span, message: impl Into<String>) {
        let diag = Diag::error(message)
            .with_primary_label(span, "")
            .with_code(codes::SYNTAX);
        self.diagnostics.report(diag);
    }

    /// Records a violated grammar constraint. Parsing carries on.
    pub(crate) fn constraint_error(&mut self, span: Span, message: impl Into<String>) {
        let diag = Diag::error(message)
            .with_primary_label(span, "")
            .with_code(codes::CONSTRAINT);
        self.diagnostics.report(diag);
    }

    /// Records an invalid property entry.
    pub(crate) fn property_error(&mut self, span: Span, message: impl Into<String>) {
        let diag = Diag::error(message)
            .with_primary_label(span, "")
            .with_code(codes::PROPERTY);
        self.diagnostics.report(diag);
    }

    /// Records the hard validation failure and returns the halt that ends the parse.
    pub(crate) fn fatal(&mut self, diag: Diag) -> Halt {
        self.diagnostics.report(diag);
        Halt::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::Token;

    fn make_token(kind: TokenKind, start: usize, end: usize) -> Token {
        Token::new(kind, start..end, "")
    }

    #[test]
    fn recover_to_stops_at_sync_point() {
        let tokens = vec![
            make_token(TokenKind::Identifier("x".into()), 0, 1),
            make_token(TokenKind::Identifier("y".into()), 1, 2),
            make_token(TokenKind::RParen, 2, 3),
            make_token(TokenKind::Eof, 3, 3),
        ];
        let mut parser = Parser::new(tokens);
        parser.recover_to(&[TokenKind::RParen]);
        assert_eq!(parser.peek_kind(), &TokenKind::RParen);
    }

    #[test]
    fn synchronize_in_list_stops_at_separator_or_clause() {
        let tokens = vec![
            make_token(TokenKind::Identifier("x".into()), 0, 1),
            make_token(TokenKind::And, 1, 4),
            make_token(TokenKind::Identifier("y".into()), 4, 5),
            make_token(TokenKind::Limit, 5, 10),
        ];
        let mut parser = Parser::new(tokens);
        parser.synchronize_in_list(&TokenKind::And);
        assert_eq!(parser.peek_kind(), &TokenKind::And);
        parser.advance();
        parser.synchronize_in_list(&TokenKind::And);
        assert_eq!(parser.peek_kind(), &TokenKind::Limit);
    }

    #[test]
    fn synchronize_stops_at_eof() {
        let tokens = vec![make_token(TokenKind::Identifier("x".into()), 0, 1)];
        let mut parser = Parser::new(tokens);
        parser.recover_to(&[TokenKind::RParen]);
        assert!(parser.is_eof());
    }

    #[test]
    fn diagnostics_carry_codes() {
        let tokens = vec![make_token(TokenKind::RBrace, 0, 1)];
        let mut parser = Parser::new(tokens);

        parser.expected_token("identifier", "in column list");
        parser.unexpected_token("after statement");
        parser.error(0..1, "syntax");
        parser.constraint_error(0..1, "constraint");
        parser.property_error(0..1, "property");
        let halt = parser.fatal(Diag::error("fatal").with_code(codes::MISSING_MINUS));

        assert_eq!(halt, Halt::Fatal);
        let codes: Vec<_> = parser
            .diagnostics
            .iter()
            .map(|d| d.code.clone().unwrap_or_default())
            .collect();
        assert_eq!(codes, vec!["P002", "P003", "P001", "P010", "P011", "P020"]);
        assert_eq!(
            parser.diagnostics.iter().next().map(|d| d.message.as_str()),
            Some("expected identifier in column list, found }")
        );
    }
}

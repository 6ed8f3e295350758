//! Top-level statement dispatch.

use crate::ast::{ParsedStatement, Statement, TruncateStatement, UseStatement};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser, RuleResult, merge_spans};

impl Parser {
    /// `';'* statement ';'* EOF`
    ///
    /// `bound_terms` is read from the bind-marker counter once the whole
    /// statement, batches included, has been parsed.
    pub(crate) fn parse_query(&mut self) -> RuleResult<ParsedStatement> {
        while self.eat(&TokenKind::Semicolon) {}

        if self.is_eof() {
            self.expected_token("statement", "");
            return Err(Halt::Recorded);
        }

        let start = self.peek().span.clone();
        tracing::trace!(leading = %self.peek_kind(), "dispatching statement");
        let statement = self.parse_statement()?;
        let span = merge_spans(&start, &self.stream.previous_span());

        while self.eat(&TokenKind::Semicolon) {}
        if !self.is_eof() {
            self.unexpected_token("after statement");
        }

        Ok(ParsedStatement {
            statement,
            bound_terms: self.bind_markers.count(),
            span,
        })
    }

    /// Routes on the leading keyword.
    fn parse_statement(&mut self) -> RuleResult<Statement> {
        match self.peek_kind() {
            TokenKind::Select => self.parse_select(),
            TokenKind::Insert => self.parse_insert().map(Statement::Insert),
            TokenKind::Update => self.parse_update().map(Statement::Update),
            TokenKind::Delete => self.parse_delete().map(Statement::Delete),
            TokenKind::Begin => self.parse_batch().map(Statement::Batch),
            TokenKind::Use => {
                self.advance();
                let keyspace = self.parse_keyspace_name()?;
                Ok(Statement::Use(UseStatement { keyspace }))
            }
            TokenKind::Truncate => {
                self.advance();
                let table = self.parse_cf_name()?;
                Ok(Statement::Truncate(TruncateStatement { table }))
            }
            TokenKind::Create => self.parse_create(),
            TokenKind::Drop => self.parse_drop(),
            TokenKind::Alter => self.parse_alter(),
            TokenKind::Grant => self.parse_grant(),
            TokenKind::Revoke => self.parse_revoke(),
            TokenKind::List => self.parse_list_grants(),
            _ => {
                self.expected_token("statement", "");
                Err(Halt::Recorded)
            }
        }
    }
}

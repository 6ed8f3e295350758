//! Token cursor shared by every grammar rule.
//!
//! All lookahead is a pure read of the token vector; only `advance` and
//! `set_position` move the cursor, so a rule can peek any distance before
//! committing to a branch.

use crate::ast::Span;
use crate::lexer::token::{Token, TokenKind};

/// Owned token sequence with a cursor. Always ends with an EOF token.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Creates a stream, appending an EOF token when the input lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, end..end, ""));
        }
        Self { tokens, pos: 0 }
    }

    fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }

    /// The token under the cursor. Past the end this is the EOF token.
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.last_index())]
    }

    /// The token `n` positions ahead of the cursor, clamped to EOF.
    pub fn peek_nth(&self, n: usize) -> &Token {
        let index = self.pos.saturating_add(n).min(self.last_index());
        &self.tokens[index]
    }

    /// Moves past the current token and returns it. Stays put at EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.last_index() {
            self.pos += 1;
        }
        token
    }

    pub fn check(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    /// Checks the kind `n` tokens ahead without moving.
    pub fn check_nth(&self, n: usize, kind: &TokenKind) -> bool {
        &self.peek_nth(n).kind == kind
    }

    /// Consumes the current token when it has the given kind.
    pub fn consume(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn is_eof(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back (or forward) to a saved position.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.last_index());
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(index) => self.tokens[index].span.clone(),
            None => self.current().span.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Merges two spans into one covering both.
pub fn merge_spans(start: &Span, end: &Span) -> Span {
    start.start..end.end.max(start.start)
}

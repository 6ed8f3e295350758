//! Token navigation and consumption primitives.

use crate::lexer::token::{Token, TokenKind};
use crate::parser::{Halt, MAX_NESTING_DEPTH, Parser, RuleResult};

impl Parser {
    /// The current token, never consumed. At the end this is EOF.
    pub(crate) fn peek(&self) -> &Token {
        self.stream.current()
    }

    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.stream.current().kind
    }

    /// Looks `n` tokens ahead without consuming.
    pub(crate) fn peek_nth(&self, n: usize) -> &Token {
        self.stream.peek_nth(n)
    }

    pub(crate) fn advance(&mut self) -> Token {
        self.stream.advance()
    }

    pub(crate) fn at(&self, kind: &TokenKind) -> bool {
        self.stream.check(kind)
    }

    pub(crate) fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(self.peek_kind())
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.stream.is_eof()
    }

    /// Consumes the current token if it matches. Records nothing.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        self.stream.consume(kind)
    }

    /// Consumes a token of the given kind or records an expected-token error.
    pub(crate) fn expect(&mut self, kind: &TokenKind, context: &str) -> RuleResult<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            self.expected_token(&kind.to_string(), context);
            Err(Halt::Recorded)
        }
    }

    /// Consumes an integer literal and returns its text.
    pub(crate) fn expect_integer(&mut self, context: &str) -> RuleResult<Token> {
        if matches!(self.peek_kind(), TokenKind::IntegerLiteral(_)) {
            Ok(self.advance())
        } else {
            self.expected_token("integer", context);
            Err(Halt::Recorded)
        }
    }

    /// Runs a recursive rule one nesting level deeper.
    ///
    /// Past [`MAX_NESTING_DEPTH`] the rule is not entered and a syntax error
    /// is recorded at the current token.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> RuleResult<T>,
    ) -> RuleResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            let span = self.peek().span.clone();
            self.error(span, "collection nesting too deep");
            return Err(Halt::Recorded);
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

//! Identifiers, table names, constants, bind markers and collection literals.

use crate::ast::{BindMarker, CfName, CollectionLiteral, ColumnIdentifier, Term, Value};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::{Halt, Parser, RuleResult};

/// Converts a constant token into a term. Bind markers are not constants.
pub(crate) fn constant_from_token(token: &Token) -> Option<Term> {
    let term = match &token.kind {
        TokenKind::StringLiteral(s) => Term::String(s.clone()),
        TokenKind::IntegerLiteral(n) => Term::Integer(n.clone()),
        TokenKind::FloatLiteral(n) => Term::Float(n.clone()),
        TokenKind::UuidLiteral(u) => Term::Uuid(u.clone()),
        TokenKind::HexLiteral(h) => Term::Hex(h.clone()),
        TokenKind::True => Term::Boolean(true),
        TokenKind::False => Term::Boolean(false),
        _ => return None,
    };
    Some(term)
}

/// Builds a column identifier from an identifier-like token.
fn identifier_from_token(token: &Token) -> Option<ColumnIdentifier> {
    match &token.kind {
        TokenKind::Identifier(name) => Some(ColumnIdentifier::unquoted(name)),
        TokenKind::QuotedName(name) => Some(ColumnIdentifier::quoted(name)),
        kind if kind.is_unreserved_keyword() => Some(ColumnIdentifier::unquoted(&token.text)),
        _ => None,
    }
}

impl Parser {
    /// True when the current token can be read as a column identifier.
    pub(crate) fn at_identifier(&self) -> bool {
        self.peek_kind().is_identifier_like()
    }

    /// `cident`: identifier, quoted name or unreserved keyword.
    pub(crate) fn parse_identifier(&mut self, context: &str) -> RuleResult<ColumnIdentifier> {
        match identifier_from_token(self.peek()) {
            Some(id) => {
                self.advance();
                Ok(id)
            }
            None => {
                self.expected_token("identifier", context);
                Err(Halt::Recorded)
            }
        }
    }

    /// One or more comma-separated identifiers.
    pub(crate) fn parse_identifier_list(
        &mut self,
        context: &str,
    ) -> RuleResult<Vec<ColumnIdentifier>> {
        let mut ids = vec![self.parse_identifier(context)?];
        while self.eat(&TokenKind::Comma) {
            ids.push(self.parse_identifier(context)?);
        }
        Ok(ids)
    }

    /// Keyspace names fold case the same way table names do.
    pub(crate) fn parse_keyspace_name(&mut self) -> RuleResult<ColumnIdentifier> {
        self.parse_identifier("for keyspace name")
    }

    /// `(keyspace '.')? table`
    pub(crate) fn parse_cf_name(&mut self) -> RuleResult<CfName> {
        let first = self.parse_identifier("for table name")?;
        if self.eat(&TokenKind::Dot) {
            let table = self.parse_identifier("for table name")?;
            Ok(CfName::new(Some(first), table))
        } else {
            Ok(CfName::new(None, first))
        }
    }

    /// A username: identifier or string literal, case kept as written.
    pub(crate) fn parse_username(&mut self, context: &str) -> RuleResult<smol_str::SmolStr> {
        match self.peek_kind().clone() {
            TokenKind::Identifier(name) | TokenKind::StringLiteral(name) => {
                self.advance();
                Ok(name)
            }
            _ => {
                self.expected_token("username", context);
                Err(Halt::Recorded)
            }
        }
    }

    /// Claims the next bind-marker ordinal for the `?` under the cursor.
    fn bind_marker(&mut self) -> Term {
        self.advance();
        Term::BindMarker(BindMarker {
            ordinal: self.bind_markers.next_ordinal(),
        })
    }

    /// `constant | QMARK`, the scalar subset of a term.
    pub(crate) fn parse_scalar_term(&mut self, context: &str) -> RuleResult<Term> {
        if self.at(&TokenKind::QMark) {
            return Ok(self.bind_marker());
        }
        match constant_from_token(self.peek()) {
            Some(term) => {
                self.advance();
                Ok(term)
            }
            None => {
                self.expected_token("constant or bind marker", context);
                Err(Halt::Recorded)
            }
        }
    }

    /// `INTEGER | QMARK`, used by USING clauses.
    pub(crate) fn parse_int_value(&mut self, context: &str) -> RuleResult<Term> {
        match self.peek_kind() {
            TokenKind::QMark => Ok(self.bind_marker()),
            TokenKind::IntegerLiteral(n) => {
                let term = Term::Integer(n.clone());
                self.advance();
                Ok(term)
            }
            _ => {
                self.expected_token("integer or bind marker", context);
                Err(Halt::Recorded)
            }
        }
    }

    /// `constant | collection_literal | QMARK`
    pub(crate) fn parse_term(&mut self, context: &str) -> RuleResult<Value> {
        match self.peek_kind() {
            TokenKind::LBracket => self.nested(Self::parse_list_literal).map(Value::Collection),
            TokenKind::LBrace => self.nested(Self::parse_braced_literal).map(Value::Collection),
            _ => self.parse_scalar_term(context).map(Value::Term),
        }
    }

    /// One or more comma-separated terms.
    pub(crate) fn parse_term_list(&mut self, context: &str) -> RuleResult<Vec<Value>> {
        let mut values = vec![self.parse_term(context)?];
        while self.eat(&TokenKind::Comma) {
            values.push(self.parse_term(context)?);
        }
        Ok(values)
    }

    /// `'[' (term (',' term)*)? ']'`
    pub(crate) fn parse_list_literal(&mut self) -> RuleResult<CollectionLiteral> {
        self.expect(&TokenKind::LBracket, "to open list literal")?;
        if self.eat(&TokenKind::RBracket) {
            return Ok(CollectionLiteral::List(Vec::new()));
        }
        let items = self.parse_term_list("in list literal")?;
        self.expect(&TokenKind::RBracket, "to close list literal")?;
        Ok(CollectionLiteral::List(items))
    }

    /// `'{' '}'`, a set literal or a map literal.
    ///
    /// The first element decides: a `:` after it makes the literal a map.
    /// `{}` stays undecided.
    pub(crate) fn parse_braced_literal(&mut self) -> RuleResult<CollectionLiteral> {
        self.expect(&TokenKind::LBrace, "to open collection literal")?;
        if self.eat(&TokenKind::RBrace) {
            return Ok(CollectionLiteral::EmptyBraces);
        }

        let first = self.parse_term("in collection literal")?;
        if self.eat(&TokenKind::Colon) {
            let value = self.parse_term("as map value")?;
            let mut entries = vec![(first, value)];
            while self.eat(&TokenKind::Comma) {
                let key = self.parse_term("as map key")?;
                self.expect(&TokenKind::Colon, "after map key")?;
                let value = self.parse_term("as map value")?;
                entries.push((key, value));
            }
            self.expect(&TokenKind::RBrace, "to close map literal")?;
            return Ok(CollectionLiteral::Map(entries));
        }

        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            items.push(self.parse_term("in set literal")?);
        }
        self.expect(&TokenKind::RBrace, "to close set literal")?;
        Ok(CollectionLiteral::Set(items))
    }

    /// `'{' (term ':' term (',' term ':' term)*)? '}'`, map syntax only.
    pub(crate) fn parse_map_literal(&mut self) -> RuleResult<Vec<(Value, Value)>> {
        self.expect(&TokenKind::LBrace, "to open map literal")?;
        let mut entries = Vec::new();
        if self.eat(&TokenKind::RBrace) {
            return Ok(entries);
        }
        loop {
            let key = self.parse_term("as map key")?;
            self.expect(&TokenKind::Colon, "after map key")?;
            let value = self.parse_term("as map value")?;
            entries.push((key, value));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RBrace, "to close map literal")?;
        Ok(entries)
    }
}

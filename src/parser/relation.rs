//! WHERE-clause grammar.

use crate::ast::{Relation, RelationOperator, TokenValue};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser, RuleResult, merge_spans};

impl Parser {
    /// `relation (AND relation)*`
    ///
    /// A relation that fails to parse is skipped up to the next `AND` or
    /// clause keyword so later relations are still checked.
    pub(crate) fn parse_where_clause(&mut self) -> RuleResult<Vec<Relation>> {
        let mut relations = Vec::new();
        let mut failed = false;
        loop {
            match self.parse_relation() {
                Ok(Some(relation)) => relations.push(relation),
                Ok(None) => {}
                Err(Halt::Fatal) => return Err(Halt::Fatal),
                Err(Halt::Recorded) => {
                    failed = true;
                    self.synchronize_in_list(&TokenKind::And);
                }
            }
            if !self.eat(&TokenKind::And) {
                break;
            }
        }
        if failed && relations.is_empty() {
            return Err(Halt::Recorded);
        }
        Ok(relations)
    }

    /// `'=' | '<' | '<=' | '>' | '>='`
    fn parse_relation_operator(&mut self) -> RuleResult<RelationOperator> {
        let operator = match self.peek_kind() {
            TokenKind::Eq => RelationOperator::Eq,
            TokenKind::Lt => RelationOperator::Lt,
            TokenKind::LtEq => RelationOperator::Lte,
            TokenKind::Gt => RelationOperator::Gt,
            TokenKind::GtEq => RelationOperator::Gte,
            _ => {
                self.expected_token("comparison operator", "in relation");
                return Err(Halt::Recorded);
            }
        };
        self.advance();
        Ok(operator)
    }

    /// One relation. `Ok(None)` means a constraint was violated and reported;
    /// the relation is dropped but the clause is otherwise fine.
    fn parse_relation(&mut self) -> RuleResult<Option<Relation>> {
        if self.at(&TokenKind::Token) {
            return self.parse_token_relation();
        }

        let column = self.parse_identifier("in relation")?;
        if self.eat(&TokenKind::In) {
            self.expect(&TokenKind::LParen, "after IN")?;
            let values = self.parse_term_list("in IN list")?;
            self.expect(&TokenKind::RParen, "to close IN list")?;
            return Ok(Some(Relation::In { column, values }));
        }

        let operator = self.parse_relation_operator()?;
        let value = self.parse_term("in relation")?;
        Ok(Some(Relation::Simple {
            column,
            operator,
            value,
        }))
    }

    /// `TOKEN '(' cols ')' op (TOKEN '(' terms ')' | term)`
    fn parse_token_relation(&mut self) -> RuleResult<Option<Relation>> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen, "after TOKEN")?;
        let columns = self.parse_identifier_list("in TOKEN column list")?;
        self.expect(&TokenKind::RParen, "to close TOKEN column list")?;
        let operator = self.parse_relation_operator()?;

        let value = if self.eat(&TokenKind::Token) {
            self.expect(&TokenKind::LParen, "after TOKEN")?;
            let terms = self.parse_term_list("in TOKEN arguments")?;
            self.expect(&TokenKind::RParen, "to close TOKEN arguments")?;
            if terms.len() != columns.len() {
                let span = merge_spans(&start, &self.stream.previous_span());
                self.constraint_error(
                    span,
                    "The number of arguments to the token() function don't match",
                );
                return Ok(None);
            }
            TokenValue::Call(terms)
        } else {
            TokenValue::Term(self.parse_term("in TOKEN relation")?)
        };

        Ok(Some(Relation::Token {
            columns,
            operator,
            value,
        }))
    }
}

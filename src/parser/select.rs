//! SELECT grammar.

use crate::ast::{
    ColumnOrderings, DEFAULT_SELECT_LIMIT, SelectStatement, Selector, SortOrder, Statement,
};
use crate::lexer::token::TokenKind;
use crate::parser::{Parser, RuleResult};

impl Parser {
    /// ```text
    /// SELECT (selectClause | COUNT '(' ('*' | INTEGER) ')')
    /// FROM cf
    /// (WHERE relations)?
    /// (ORDER BY col (ASC|DESC)? (',' col (ASC|DESC)?)*)?
    /// (LIMIT INTEGER)?
    /// (ALLOW FILTERING)?
    /// ```
    pub(crate) fn parse_select(&mut self) -> RuleResult<Statement> {
        self.expect(&TokenKind::Select, "")?;

        let (selectors, is_count) = self.parse_select_clause()?;

        self.expect(&TokenKind::From, "after selection")?;
        let table = self.parse_cf_name()?;

        let relations = if self.eat(&TokenKind::Where) {
            self.parse_where_clause()?
        } else {
            Vec::new()
        };

        let mut orderings = ColumnOrderings::new();
        if self.eat(&TokenKind::Order) {
            self.expect(&TokenKind::By, "after ORDER")?;
            loop {
                let column = self.parse_identifier("in ORDER BY")?;
                orderings.insert(column, self.parse_sort_order());
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        let mut limit = DEFAULT_SELECT_LIMIT;
        if self.eat(&TokenKind::Limit) {
            let token = self.expect_integer("after LIMIT")?;
            match token.text.parse::<i32>() {
                Ok(value) => limit = value,
                Err(_) => self.error(token.span, format!("Invalid LIMIT value: {}", token.text)),
            }
        }

        let allow_filtering = if self.eat(&TokenKind::Allow) {
            self.expect(&TokenKind::Filtering, "after ALLOW")?;
            true
        } else {
            false
        };

        Ok(Statement::Select(SelectStatement {
            table,
            selectors,
            is_count,
            relations,
            orderings,
            limit,
            allow_filtering,
        }))
    }

    /// `(ASC | DESC)?`, ascending when absent.
    pub(crate) fn parse_sort_order(&mut self) -> SortOrder {
        if self.eat(&TokenKind::Desc) {
            SortOrder::Desc
        } else {
            self.eat(&TokenKind::Asc);
            SortOrder::Asc
        }
    }

    /// Projection: `*`, a selector list or `COUNT(*)`/`COUNT(1)`.
    ///
    /// `COUNT`, `WRITETIME` and `TTL` are also valid column names; they are
    /// only functions when followed by `(`.
    fn parse_select_clause(&mut self) -> RuleResult<(Vec<Selector>, bool)> {
        if self.at(&TokenKind::Count) && self.stream.check_nth(1, &TokenKind::LParen) {
            self.advance();
            self.advance();
            self.parse_count_argument()?;
            self.expect(&TokenKind::RParen, "to close COUNT")?;
            return Ok((Vec::new(), true));
        }

        if self.eat(&TokenKind::Star) {
            return Ok((Vec::new(), false));
        }

        let mut selectors = vec![self.parse_selector()?];
        while self.eat(&TokenKind::Comma) {
            selectors.push(self.parse_selector()?);
        }
        Ok((selectors, false))
    }

    /// `'*' | INTEGER`. Anything but `1` is reported and read as `*`.
    fn parse_count_argument(&mut self) -> RuleResult<()> {
        if self.eat(&TokenKind::Star) {
            return Ok(());
        }
        let token = self.expect_integer("or * in COUNT")?;
        if token.text != "1" {
            self.constraint_error(
                token.span,
                format!("Only COUNT(1) is supported, got COUNT({})", token.text),
            );
        }
        Ok(())
    }

    /// `cident | WRITETIME '(' cident ')' | TTL '(' cident ')'`
    fn parse_selector(&mut self) -> RuleResult<Selector> {
        let function = match self.peek_kind() {
            TokenKind::Writetime | TokenKind::Ttl
                if self.stream.check_nth(1, &TokenKind::LParen) =>
            {
                Some(self.peek_kind().clone())
            }
            _ => None,
        };

        let Some(function) = function else {
            return Ok(Selector::Column(self.parse_identifier("in selection")?));
        };

        self.advance();
        self.advance();
        let column = self.parse_identifier("as function argument")?;
        self.expect(&TokenKind::RParen, "to close function call")?;
        Ok(match function {
            TokenKind::Writetime => Selector::WriteTime(column),
            _ => Selector::Ttl(column),
        })
    }
}

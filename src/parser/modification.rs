//! INSERT, UPDATE, DELETE and BATCH grammar.

use crate::ast::{
    Attributes, BatchStatement, BatchType, CollectionKind, ColumnIdentifier, DeleteStatement,
    DeleteTarget, InsertStatement, ModificationStatement, Operation, Span, Term, UpdateStatement,
    Value,
};
use crate::diag::{Diag, codes};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser, RuleResult};

const BATCH_STATEMENT_STARTS: &[TokenKind] =
    &[TokenKind::Insert, TokenKind::Update, TokenKind::Delete];

/// True when an integer literal's value is zero or negative.
fn is_non_positive(text: &str) -> bool {
    text.starts_with('-') || text.bytes().all(|b| b == b'0')
}

/// Counter deltas are integers or bind markers. Collections are checked by kind.
fn is_delta_operand(value: &Value) -> bool {
    match value {
        Value::Term(term) => matches!(term, Term::Integer(_) | Term::BindMarker(_)),
        Value::Collection(_) => true,
    }
}

/// Picks the operation for `col = col <sign> value` from the operand's syntax.
fn delta_operation(add: bool, value: Value) -> Option<Operation> {
    let operation = match value {
        Value::Term(term) if add => Operation::CounterIncrement(term),
        Value::Term(term) => Operation::CounterDecrement(term),
        Value::Collection(literal) => match (literal.kind(), add) {
            (CollectionKind::List, true) => Operation::ListAppend(literal.into()),
            (CollectionKind::List, false) => Operation::ListDiscard(literal.into()),
            (CollectionKind::Set, true) => Operation::SetAdd(literal.into()),
            (CollectionKind::Set, false) => Operation::SetDiscard(literal.into()),
            (CollectionKind::Map, true) => Operation::MapPutAll(literal.into()),
            (CollectionKind::Map, false) => return None,
        },
    };
    Some(operation)
}

impl Parser {
    fn at_using_objective(&self, n: usize) -> bool {
        matches!(
            self.peek_nth(n).kind,
            TokenKind::Ttl | TokenKind::Timestamp
        )
    }

    /// `USING objective ((AND)? objective)*` after `USING` was consumed.
    ///
    /// Objectives are `TTL intValue` and `TIMESTAMP intValue`, in any order.
    fn parse_using_objectives(&mut self, attributes: &mut Attributes) -> RuleResult<()> {
        loop {
            match self.peek_kind() {
                TokenKind::Ttl => {
                    self.advance();
                    attributes.time_to_live = Some(self.parse_int_value("after TTL")?);
                }
                TokenKind::Timestamp => {
                    self.advance();
                    attributes.timestamp = Some(self.parse_int_value("after TIMESTAMP")?);
                }
                _ => {
                    self.expected_token("TTL or TIMESTAMP", "in USING clause");
                    return Err(Halt::Recorded);
                }
            }

            if self.at(&TokenKind::And) && self.at_using_objective(1) {
                self.advance();
            } else if !self.at_using_objective(0) {
                return Ok(());
            }
        }
    }

    /// Optional `USING ...` clause.
    fn parse_optional_using(&mut self) -> RuleResult<Attributes> {
        let mut attributes = Attributes::default();
        if self.eat(&TokenKind::Using) {
            self.parse_using_objectives(&mut attributes)?;
        }
        Ok(attributes)
    }

    /// ```text
    /// INSERT INTO cf '(' cident (',' cident)+ ')'
    /// VALUES '(' term (',' term)+ ')'
    /// (USING ...)?
    /// ```
    pub(crate) fn parse_insert(&mut self) -> RuleResult<InsertStatement> {
        self.expect(&TokenKind::Insert, "")?;
        self.expect(&TokenKind::Into, "after INSERT")?;
        let table = self.parse_cf_name()?;

        self.expect(&TokenKind::LParen, "to open column list")?;
        let mut columns = vec![self.parse_identifier("in column list")?];
        self.expect(&TokenKind::Comma, "in column list")?;
        columns.extend(self.parse_identifier_list("in column list")?);
        self.expect(&TokenKind::RParen, "to close column list")?;

        self.expect(&TokenKind::Values, "after column list")?;
        self.expect(&TokenKind::LParen, "to open value list")?;
        let mut values = vec![self.parse_term("in value list")?];
        self.expect(&TokenKind::Comma, "in value list")?;
        values.extend(self.parse_term_list("in value list")?);
        self.expect(&TokenKind::RParen, "to close value list")?;

        let attributes = self.parse_optional_using()?;

        Ok(InsertStatement {
            table,
            columns,
            values,
            attributes,
        })
    }

    /// ```text
    /// UPDATE cf (USING ...)? SET columnOperation (',' columnOperation)*
    /// WHERE relations
    /// ```
    pub(crate) fn parse_update(&mut self) -> RuleResult<UpdateStatement> {
        self.expect(&TokenKind::Update, "")?;
        let table = self.parse_cf_name()?;
        let attributes = self.parse_optional_using()?;
        self.expect(&TokenKind::Set, "in UPDATE")?;

        let mut operations = Vec::new();
        let mut failed = false;
        loop {
            match self.parse_column_operation() {
                Ok(operation) => operations.push(operation),
                Err(Halt::Fatal) => return Err(Halt::Fatal),
                Err(Halt::Recorded) => {
                    failed = true;
                    self.synchronize_in_list(&TokenKind::Comma);
                }
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        if failed && operations.is_empty() {
            return Err(Halt::Recorded);
        }

        self.expect(&TokenKind::Where, "in UPDATE")?;
        let relations = self.parse_where_clause()?;

        Ok(UpdateStatement {
            table,
            attributes,
            operations,
            relations,
        })
    }

    /// One assignment of an UPDATE's SET clause.
    ///
    /// ```text
    /// key '=' term ('+' key)?
    /// key '=' key ('+' | '-') term
    /// key '=' key (INTEGER | QMARK)
    /// key '[' term ']' '=' term
    /// ```
    fn parse_column_operation(&mut self) -> RuleResult<(ColumnIdentifier, Operation)> {
        let key = self.parse_identifier("in SET clause")?;

        if self.eat(&TokenKind::LBracket) {
            let index = self.parse_term("as collection element key")?;
            self.expect(&TokenKind::RBracket, "to close element key")?;
            self.expect(&TokenKind::Eq, "in assignment")?;
            let value = self.parse_term("in assignment")?;
            let operation = if index.is_integer_literal() {
                Operation::ListSetIndex { index, value }
            } else {
                Operation::MapPut { key: index, value }
            };
            return Ok((key, operation));
        }

        self.expect(&TokenKind::Eq, "in assignment")?;

        if !self.at_identifier() {
            let value = self.parse_term("in assignment")?;
            if !self.eat(&TokenKind::Plus) {
                return Ok((key, Operation::Set(value)));
            }
            let other_span = self.peek().span.clone();
            let other = self.parse_identifier("after '+'")?;
            if other != key {
                self.constraint_error(
                    other_span,
                    "Only expressions like X = <value> + X are supported",
                );
            }
            return Ok((key, Operation::ListPrepend(value)));
        }

        let other_span = self.peek().span.clone();
        let other = self.parse_identifier("in assignment")?;
        let same_column = other == key;

        let operation = match self.peek_kind().clone() {
            TokenKind::Plus | TokenKind::Minus => {
                let add = self.advance().kind == TokenKind::Plus;
                let value_span = self.peek().span.clone();
                let value = self.parse_term("after operator")?;
                if !same_column {
                    self.report_not_self_referencing(other_span);
                }
                if !is_delta_operand(&value) {
                    self.constraint_error(
                        value_span,
                        "Counter updates take an integer or bind marker",
                    );
                    return Err(Halt::Recorded);
                }
                match delta_operation(add, value) {
                    Some(operation) => operation,
                    None => {
                        self.constraint_error(value_span, "Map literals cannot be subtracted");
                        return Err(Halt::Recorded);
                    }
                }
            }
            TokenKind::IntegerLiteral(text) => {
                let token = self.advance();
                if !same_column {
                    self.report_not_self_referencing(other_span);
                }
                self.validate_minus_supplied(&text, token.span)?;
                let magnitude = text.strip_prefix('-').unwrap_or(&text);
                Operation::CounterDecrement(Term::Integer(magnitude.into()))
            }
            TokenKind::QMark => {
                let marker = self.parse_scalar_term("in assignment")?;
                if !same_column {
                    self.report_not_self_referencing(other_span);
                }
                Operation::CounterDecrement(marker)
            }
            _ => {
                self.expected_token("'+' or '-'", &format!("after {other}"));
                return Err(Halt::Recorded);
            }
        };

        Ok((key, operation))
    }

    fn report_not_self_referencing(&mut self, span: Span) {
        self.constraint_error(span, "Only expressions like X = X <op> <value> are supported");
    }

    /// A counter decrement written without `-` must not be positive.
    /// A positive value aborts the whole parse.
    fn validate_minus_supplied(&mut self, text: &str, span: Span) -> RuleResult<()> {
        if is_non_positive(text) {
            return Ok(());
        }
        tracing::debug!(value = text, "counter update without operator, aborting parse");
        let diag = Diag::error(format!("missing '-' before {text} in counter update"))
            .with_primary_label(span, "expected '-' or '+' before this value")
            .with_help(format!("write `X = X + {text}` or `X = X - {text}`"))
            .with_code(codes::MISSING_MINUS);
        Err(self.fatal(diag))
    }

    /// ```text
    /// DELETE (deleteOp (',' deleteOp)*)? FROM cf
    /// (USING TIMESTAMP intValue)? WHERE relations
    /// ```
    pub(crate) fn parse_delete(&mut self) -> RuleResult<DeleteStatement> {
        self.expect(&TokenKind::Delete, "")?;

        let mut targets = Vec::new();
        if !self.at(&TokenKind::From) {
            loop {
                let column = self.parse_identifier("in DELETE selection")?;
                let key = if self.eat(&TokenKind::LBracket) {
                    let key = self.parse_term("as collection element key")?;
                    self.expect(&TokenKind::RBracket, "to close element key")?;
                    Some(key)
                } else {
                    None
                };
                targets.push(DeleteTarget { column, key });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::From, "in DELETE")?;
        let table = self.parse_cf_name()?;

        let mut attributes = Attributes::default();
        if self.eat(&TokenKind::Using) {
            self.expect(&TokenKind::Timestamp, "in DELETE USING clause")?;
            attributes.timestamp = Some(self.parse_int_value("after TIMESTAMP")?);
        }

        self.expect(&TokenKind::Where, "in DELETE")?;
        let relations = self.parse_where_clause()?;

        Ok(DeleteStatement {
            table,
            targets,
            attributes,
            relations,
        })
    }

    /// ```text
    /// BEGIN (UNLOGGED | COUNTER)? BATCH (USING ...)?
    /// ((INSERT | UPDATE | DELETE) ';'?)+
    /// APPLY BATCH
    /// ```
    ///
    /// Inner statements draw bind-marker ordinals from the same counter as
    /// the batch itself.
    pub(crate) fn parse_batch(&mut self) -> RuleResult<BatchStatement> {
        self.expect(&TokenKind::Begin, "")?;
        let batch_type = if self.eat(&TokenKind::Unlogged) {
            BatchType::Unlogged
        } else if self.eat(&TokenKind::Counter) {
            BatchType::Counter
        } else {
            BatchType::Logged
        };
        self.expect(&TokenKind::Batch, "after BEGIN")?;
        let attributes = self.parse_optional_using()?;

        let mut statements = Vec::new();
        let mut sync_points = BATCH_STATEMENT_STARTS.to_vec();
        sync_points.push(TokenKind::Apply);

        while !self.at(&TokenKind::Apply) && !self.is_eof() {
            let parsed = match self.peek_kind() {
                TokenKind::Insert => self.parse_insert().map(ModificationStatement::Insert),
                TokenKind::Update => self.parse_update().map(ModificationStatement::Update),
                TokenKind::Delete => self.parse_delete().map(ModificationStatement::Delete),
                _ => {
                    self.expected_token("INSERT, UPDATE or DELETE", "in batch");
                    Err(Halt::Recorded)
                }
            };
            match parsed {
                Ok(statement) => statements.push(statement),
                Err(Halt::Fatal) => return Err(Halt::Fatal),
                Err(Halt::Recorded) => {
                    if !self.at_any(&sync_points) {
                        self.advance();
                    }
                    self.recover_to(&sync_points);
                    continue;
                }
            }
            self.eat(&TokenKind::Semicolon);
        }

        if statements.is_empty() && self.at(&TokenKind::Apply) {
            self.expected_token("INSERT, UPDATE or DELETE", "in batch");
        }
        self.expect(&TokenKind::Apply, "to end batch")?;
        self.expect(&TokenKind::Batch, "after APPLY")?;

        Ok(BatchStatement {
            batch_type,
            attributes,
            statements,
        })
    }
}

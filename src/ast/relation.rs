//! WHERE-clause relations and SELECT selectors.

use super::identifier::ColumnIdentifier;
use super::term::Value;
use std::fmt;

/// Comparison operator of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationOperator {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl fmt::Display for RelationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RelationOperator::Eq => "=",
            RelationOperator::Lt => "<",
            RelationOperator::Lte => "<=",
            RelationOperator::Gt => ">",
            RelationOperator::Gte => ">=",
        })
    }
}

/// Right-hand side of a `TOKEN(..)` relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// `TOKEN(t1, ..., tn)`, same arity as the column list.
    Call(Vec<Value>),
    /// A single term standing for a token value.
    Term(Value),
}

/// A single predicate of a WHERE clause. Clauses are conjunctions only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `col <op> term`
    Simple {
        column: ColumnIdentifier,
        operator: RelationOperator,
        value: Value,
    },
    /// `TOKEN(c1, ..., cn) <op> value`
    Token {
        columns: Vec<ColumnIdentifier>,
        operator: RelationOperator,
        value: TokenValue,
    },
    /// `col IN (t1, ..., tn)`
    In {
        column: ColumnIdentifier,
        values: Vec<Value>,
    },
}

impl Relation {
    /// Columns the relation restricts.
    pub fn columns(&self) -> Vec<&ColumnIdentifier> {
        match self {
            Relation::Simple { column, .. } | Relation::In { column, .. } => vec![column],
            Relation::Token { columns, .. } => columns.iter().collect(),
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Relation::Token { .. })
    }
}

/// A projected expression in a SELECT list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Column(ColumnIdentifier),
    WriteTime(ColumnIdentifier),
    Ttl(ColumnIdentifier),
}

impl Selector {
    pub fn column(&self) -> &ColumnIdentifier {
        match self {
            Selector::Column(c) | Selector::WriteTime(c) | Selector::Ttl(c) => c,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Column(c) => write!(f, "{c}"),
            Selector::WriteTime(c) => write!(f, "WRITETIME({c})"),
            Selector::Ttl(c) => write!(f, "TTL({c})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Term;

    #[test]
    fn relation_columns() {
        let simple = Relation::Simple {
            column: ColumnIdentifier::unquoted("k"),
            operator: RelationOperator::Eq,
            value: Term::Integer("1".into()).into(),
        };
        assert_eq!(simple.columns().len(), 1);
        assert!(!simple.is_token());

        let token = Relation::Token {
            columns: vec![ColumnIdentifier::unquoted("a"), ColumnIdentifier::unquoted("b")],
            operator: RelationOperator::Gt,
            value: TokenValue::Call(Vec::new()),
        };
        assert_eq!(token.columns().len(), 2);
        assert!(token.is_token());
    }

    #[test]
    fn selector_display() {
        let s = Selector::WriteTime(ColumnIdentifier::quoted("V"));
        assert_eq!(s.to_string(), "WRITETIME(\"V\")");
        assert_eq!(s.column().text(), "V");
        assert_eq!(RelationOperator::Gte.to_string(), ">=");
    }
}

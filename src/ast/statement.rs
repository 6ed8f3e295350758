//! Statement nodes for queries and data modification.

use super::identifier::{CfName, ColumnIdentifier};
use super::permission::{GrantStatement, ListGrantsStatement, RevokeStatement};
use super::relation::{Relation, Selector};
use super::schema::{
    AlterKeyspaceStatement, AlterTableStatement, CreateIndexStatement, CreateKeyspaceStatement,
    CreateTableStatement, DropIndexStatement, DropKeyspaceStatement, DropTableStatement,
};
use super::span::Span;
use super::term::{Term, Value};
use super::operation::Operation;

/// Row limit of a SELECT without a LIMIT clause.
pub const DEFAULT_SELECT_LIMIT: i32 = 10_000;

/// A successfully parsed statement with its bind-marker count.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStatement {
    pub statement: Statement,
    /// Number of `?` markers in the statement, batches included.
    pub bound_terms: usize,
    pub span: Span,
}

/// Every statement the grammar accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    Batch(BatchStatement),
    Use(UseStatement),
    Truncate(TruncateStatement),
    CreateKeyspace(CreateKeyspaceStatement),
    CreateTable(CreateTableStatement),
    CreateIndex(CreateIndexStatement),
    DropKeyspace(DropKeyspaceStatement),
    DropTable(DropTableStatement),
    DropIndex(DropIndexStatement),
    AlterTable(AlterTableStatement),
    AlterKeyspace(AlterKeyspaceStatement),
    Grant(GrantStatement),
    Revoke(RevokeStatement),
    ListGrants(ListGrantsStatement),
}

impl Statement {
    /// Static name of the statement kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "SELECT",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Delete(_) => "DELETE",
            Statement::Batch(_) => "BATCH",
            Statement::Use(_) => "USE",
            Statement::Truncate(_) => "TRUNCATE",
            Statement::CreateKeyspace(_) => "CREATE KEYSPACE",
            Statement::CreateTable(_) => "CREATE TABLE",
            Statement::CreateIndex(_) => "CREATE INDEX",
            Statement::DropKeyspace(_) => "DROP KEYSPACE",
            Statement::DropTable(_) => "DROP TABLE",
            Statement::DropIndex(_) => "DROP INDEX",
            Statement::AlterTable(_) => "ALTER TABLE",
            Statement::AlterKeyspace(_) => "ALTER KEYSPACE",
            Statement::Grant(_) => "GRANT",
            Statement::Revoke(_) => "REVOKE",
            Statement::ListGrants(_) => "LIST GRANTS",
        }
    }

    /// True for statements that change schema.
    pub fn is_schema_change(&self) -> bool {
        matches!(
            self,
            Statement::CreateKeyspace(_)
                | Statement::CreateTable(_)
                | Statement::CreateIndex(_)
                | Statement::DropKeyspace(_)
                | Statement::DropTable(_)
                | Statement::DropIndex(_)
                | Statement::AlterTable(_)
                | Statement::AlterKeyspace(_)
        )
    }
}

/// Sort direction in ORDER BY and CLUSTERING ORDER BY.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn is_reversed(&self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

/// Column orderings in declaration order.
///
/// Naming a column again replaces its direction but keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOrderings {
    entries: Vec<(ColumnIdentifier, SortOrder)>,
}

impl ColumnOrderings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: ColumnIdentifier, order: SortOrder) {
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = order,
            None => self.entries.push((column, order)),
        }
    }

    pub fn get(&self, column: &ColumnIdentifier) -> Option<SortOrder> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, order)| *order)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnIdentifier, SortOrder)> {
        self.entries.iter().map(|(c, o)| (c, *o))
    }
}

/// `USING TTL .. AND TIMESTAMP ..`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub timestamp: Option<Term>,
    pub time_to_live: Option<Term>,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_none() && self.time_to_live.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub table: CfName,
    /// Empty for `*` and for COUNT queries.
    pub selectors: Vec<Selector>,
    pub is_count: bool,
    pub relations: Vec<Relation>,
    pub orderings: ColumnOrderings,
    pub limit: i32,
    pub allow_filtering: bool,
}

impl SelectStatement {
    pub fn is_wildcard(&self) -> bool {
        self.selectors.is_empty() && !self.is_count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table: CfName,
    pub columns: Vec<ColumnIdentifier>,
    /// One value per column, in the same order. Arity is not checked here.
    pub values: Vec<Value>,
    pub attributes: Attributes,
}

impl InsertStatement {
    /// Column/value pairs in declaration order.
    pub fn assignments(&self) -> impl Iterator<Item = (&ColumnIdentifier, &Value)> {
        self.columns.iter().zip(self.values.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub table: CfName,
    pub attributes: Attributes,
    pub operations: Vec<(ColumnIdentifier, Operation)>,
    pub relations: Vec<Relation>,
}

/// One target of a DELETE: a whole column or one collection element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub column: ColumnIdentifier,
    pub key: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub table: CfName,
    /// Empty when the whole row is deleted.
    pub targets: Vec<DeleteTarget>,
    pub attributes: Attributes,
    pub relations: Vec<Relation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BatchType {
    #[default]
    Logged,
    Unlogged,
    Counter,
}

/// A statement allowed inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum ModificationStatement {
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
}

impl ModificationStatement {
    pub fn table(&self) -> &CfName {
        match self {
            ModificationStatement::Insert(s) => &s.table,
            ModificationStatement::Update(s) => &s.table,
            ModificationStatement::Delete(s) => &s.table,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatement {
    pub batch_type: BatchType,
    pub attributes: Attributes,
    pub statements: Vec<ModificationStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseStatement {
    pub keyspace: ColumnIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateStatement {
    pub table: CfName,
}

//! AST and value model produced by the parser.

mod identifier;
mod operation;
mod permission;
mod properties;
mod relation;
mod schema;
mod span;
mod statement;
mod term;
mod types;

pub use span::Span;

pub use identifier::{CfName, ColumnIdentifier};
pub use term::{BindMarker, CollectionKind, CollectionLiteral, Term, Value};

pub use operation::Operation;
pub use relation::{Relation, RelationOperator, Selector, TokenValue};

pub use properties::{PropertyDefinitions, PropertyValue};
pub use types::{NativeType, ParsedType};

pub use statement::{
    Attributes, BatchStatement, BatchType, ColumnOrderings, DEFAULT_SELECT_LIMIT, DeleteStatement,
    DeleteTarget, InsertStatement, ModificationStatement, ParsedStatement, SelectStatement,
    SortOrder, Statement, TruncateStatement, UpdateStatement, UseStatement,
};

pub use schema::{
    AlterKeyspaceStatement, AlterTableAction, AlterTableStatement, CreateIndexStatement,
    CreateKeyspaceStatement, CreateTableStatement, DropIndexStatement, DropKeyspaceStatement,
    DropTableStatement,
};

pub use permission::{GrantStatement, ListGrantsStatement, Permission, RevokeStatement};

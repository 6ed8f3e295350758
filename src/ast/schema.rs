//! Schema statements: keyspaces, tables and indexes.

use super::identifier::{CfName, ColumnIdentifier};
use super::properties::PropertyDefinitions;
use super::statement::ColumnOrderings;
use super::types::ParsedType;
use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateKeyspaceStatement {
    pub keyspace: ColumnIdentifier,
    pub properties: PropertyDefinitions,
}

/// `CREATE TABLE`.
///
/// `key_aliases` holds the partition key; each inner list is one component
/// (a single column for the inline `PRIMARY KEY` form). `column_aliases`
/// are the clustering columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStatement {
    pub table: CfName,
    pub definitions: Vec<(ColumnIdentifier, ParsedType)>,
    pub key_aliases: Vec<Vec<ColumnIdentifier>>,
    pub column_aliases: Vec<ColumnIdentifier>,
    pub properties: PropertyDefinitions,
    pub compact_storage: bool,
    pub clustering_order: ColumnOrderings,
}

impl CreateTableStatement {
    /// Declared type of a column.
    pub fn column_type(&self, column: &ColumnIdentifier) -> Option<&ParsedType> {
        self.definitions
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, t)| t)
    }

    /// Partition key columns, flattened.
    pub fn partition_key(&self) -> impl Iterator<Item = &ColumnIdentifier> {
        self.key_aliases.iter().flatten()
    }

    /// Columns that are part of neither the partition key nor the clustering key.
    pub fn regular_columns(&self) -> Vec<&(ColumnIdentifier, ParsedType)> {
        self.definitions
            .iter()
            .filter(|(c, _)| {
                !self.partition_key().any(|k| k == c) && !self.column_aliases.contains(c)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndexStatement {
    pub name: Option<SmolStr>,
    pub table: CfName,
    pub column: ColumnIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropKeyspaceStatement {
    pub keyspace: ColumnIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTableStatement {
    pub table: CfName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndexStatement {
    pub name: SmolStr,
}

/// The single change an ALTER TABLE makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterTableAction {
    Alter {
        column: ColumnIdentifier,
        validator: ParsedType,
    },
    Add {
        column: ColumnIdentifier,
        validator: ParsedType,
    },
    Drop {
        column: ColumnIdentifier,
    },
    WithProperties(PropertyDefinitions),
    Rename(Vec<(ColumnIdentifier, ColumnIdentifier)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableStatement {
    pub table: CfName,
    pub action: AlterTableAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterKeyspaceStatement {
    pub keyspace: ColumnIdentifier,
    pub properties: PropertyDefinitions,
}

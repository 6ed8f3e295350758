//! Column identifiers and table references.

use smol_str::SmolStr;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A column (or keyspace/table name part) as written in a query.
///
/// Unquoted identifiers are case-insensitive and stored lower-cased; quoted
/// identifiers keep their exact text. Equality and hashing use the stored
/// text only, so `"foo"` and `FOO` name the same column.
#[derive(Debug, Clone, Eq)]
pub struct ColumnIdentifier {
    text: SmolStr,
    quoted: bool,
}

impl ColumnIdentifier {
    /// Builds an identifier from raw source text.
    pub fn new(raw: &str, quoted: bool) -> Self {
        let text = if quoted {
            SmolStr::new(raw)
        } else {
            SmolStr::new(raw.to_lowercase())
        };
        Self { text, quoted }
    }

    /// An unquoted, case-folded identifier.
    pub fn unquoted(raw: &str) -> Self {
        Self::new(raw, false)
    }

    /// A quoted identifier whose case is kept.
    pub fn quoted(raw: &str) -> Self {
        Self::new(raw, true)
    }

    /// Canonical text used for comparisons.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }
}

impl PartialEq for ColumnIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Hash for ColumnIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.text.replace('"', "\"\""))
        } else {
            f.write_str(&self.text)
        }
    }
}

/// A table reference, optionally qualified by its keyspace.
///
/// A missing keyspace is resolved against the session's current keyspace by
/// whoever executes the statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CfName {
    pub keyspace: Option<ColumnIdentifier>,
    pub table: ColumnIdentifier,
}

impl CfName {
    pub fn new(keyspace: Option<ColumnIdentifier>, table: ColumnIdentifier) -> Self {
        Self { keyspace, table }
    }

    /// True when the reference names its keyspace explicitly.
    pub fn has_keyspace(&self) -> bool {
        self.keyspace.is_some()
    }
}

impl fmt::Display for CfName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.keyspace {
            Some(keyspace) => write!(f, "{keyspace}.{}", self.table),
            None => write!(f, "{}", self.table),
        }
    }
}

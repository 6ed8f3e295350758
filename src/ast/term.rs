//! Literal values: scalar terms, bind markers and collection literals.

use smol_str::SmolStr;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A positional `?` placeholder and the ordinal it was assigned while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindMarker {
    pub ordinal: usize,
}

/// A scalar literal or a bind marker.
///
/// Numeric, UUID and hex constants keep the exact source text; nothing is
/// renormalized. Equality compares kind and text; two bind markers compare
/// equal whatever their ordinals.
#[derive(Debug, Clone)]
pub enum Term {
    String(SmolStr),
    Integer(SmolStr),
    Float(SmolStr),
    Boolean(bool),
    Uuid(SmolStr),
    Hex(SmolStr),
    BindMarker(BindMarker),
}

impl Term {
    pub fn is_bind_marker(&self) -> bool {
        matches!(self, Term::BindMarker(_))
    }

    /// Ordinal of a bind marker term.
    pub fn bind_ordinal(&self) -> Option<usize> {
        match self {
            Term::BindMarker(marker) => Some(marker.ordinal),
            _ => None,
        }
    }

    /// Source text of a constant, with string quotes removed.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Term::String(text)
            | Term::Integer(text)
            | Term::Float(text)
            | Term::Uuid(text)
            | Term::Hex(text) => Some(text),
            Term::Boolean(true) => Some("true"),
            Term::Boolean(false) => Some("false"),
            Term::BindMarker(_) => None,
        }
    }

    /// Value of an integer constant, if it fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Term::Integer(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Short name of the term kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::String(_) => "string",
            Term::Integer(_) => "integer",
            Term::Float(_) => "float",
            Term::Boolean(_) => "boolean",
            Term::Uuid(_) => "uuid",
            Term::Hex(_) => "blob",
            Term::BindMarker(_) => "bind marker",
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::String(a), Term::String(b))
            | (Term::Integer(a), Term::Integer(b))
            | (Term::Float(a), Term::Float(b))
            | (Term::Uuid(a), Term::Uuid(b))
            | (Term::Hex(a), Term::Hex(b)) => a == b,
            (Term::Boolean(a), Term::Boolean(b)) => a == b,
            (Term::BindMarker(_), Term::BindMarker(_)) => true,
            _ => false,
        }
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Term::BindMarker(_) => {}
            Term::Boolean(b) => b.hash(state),
            other => other.raw_text().hash(state),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Term::BindMarker(_) => f.write_str("?"),
            other => f.write_str(other.raw_text().unwrap_or_default()),
        }
    }
}

/// Which collection a literal builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    List,
    Set,
    Map,
}

/// A collection literal as written in the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionLiteral {
    /// `[a, b, ...]`, order kept.
    List(Vec<Value>),
    /// `{a, b, ...}`.
    Set(Vec<Value>),
    /// `{k: v, ...}`.
    Map(Vec<(Value, Value)>),
    /// `{}`: an empty set or an empty map, depending on the target column.
    ///
    /// Syntactically this is a set. Only a consumer that knows the column's
    /// declared type can tell, see [`CollectionLiteral::resolve`].
    EmptyBraces,
}

impl CollectionLiteral {
    /// The collection kind as far as the syntax tells; `{}` reads as a set.
    pub fn kind(&self) -> CollectionKind {
        match self {
            CollectionLiteral::List(_) => CollectionKind::List,
            CollectionLiteral::Set(_) | CollectionLiteral::EmptyBraces => CollectionKind::Set,
            CollectionLiteral::Map(_) => CollectionKind::Map,
        }
    }

    pub fn is_empty_braces(&self) -> bool {
        matches!(self, CollectionLiteral::EmptyBraces)
    }

    pub fn len(&self) -> usize {
        match self {
            CollectionLiteral::List(items) | CollectionLiteral::Set(items) => items.len(),
            CollectionLiteral::Map(entries) => entries.len(),
            CollectionLiteral::EmptyBraces => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reinterprets `{}` for a column of the given collection kind.
    ///
    /// Any other literal is returned unchanged.
    pub fn resolve(self, target: CollectionKind) -> CollectionLiteral {
        match (self, target) {
            (CollectionLiteral::EmptyBraces, CollectionKind::Map) => CollectionLiteral::Map(Vec::new()),
            (CollectionLiteral::EmptyBraces, CollectionKind::Set) => CollectionLiteral::Set(Vec::new()),
            (CollectionLiteral::EmptyBraces, CollectionKind::List) => CollectionLiteral::EmptyBraces,
            (literal, _) => literal,
        }
    }
}

impl fmt::Display for CollectionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionLiteral::List(items) => {
                f.write_str("[")?;
                write_joined(f, items.iter())?;
                f.write_str("]")
            }
            CollectionLiteral::Set(items) => {
                f.write_str("{")?;
                write_joined(f, items.iter())?;
                f.write_str("}")
            }
            CollectionLiteral::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            CollectionLiteral::EmptyBraces => f.write_str("{}"),
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Anything that can stand where the grammar accepts a term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Term(Term),
    Collection(CollectionLiteral),
}

impl Value {
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Value::Term(term) => Some(term),
            Value::Collection(_) => None,
        }
    }

    pub fn as_collection(&self) -> Option<&CollectionLiteral> {
        match self {
            Value::Collection(literal) => Some(literal),
            Value::Term(_) => None,
        }
    }

    pub fn is_bind_marker(&self) -> bool {
        self.as_term().is_some_and(Term::is_bind_marker)
    }

    /// True for a plain integer constant (not a bind marker).
    pub fn is_integer_literal(&self) -> bool {
        matches!(self, Value::Term(Term::Integer(_)))
    }
}

impl From<Term> for Value {
    fn from(term: Term) -> Self {
        Value::Term(term)
    }
}

impl From<CollectionLiteral> for Value {
    fn from(literal: CollectionLiteral) -> Self {
        Value::Collection(literal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Term(term) => write!(f, "{term}"),
            Value::Collection(literal) => write!(f, "{literal}"),
        }
    }
}

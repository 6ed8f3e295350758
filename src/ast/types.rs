//! Column type descriptors.

use smol_str::SmolStr;
use std::fmt;

/// Native scalar column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Counter,
    Decimal,
    Double,
    Float,
    Inet,
    Int,
    Text,
    Timestamp,
    Uuid,
    Varchar,
    Varint,
    Timeuuid,
}

impl NativeType {
    pub fn name(&self) -> &'static str {
        match self {
            NativeType::Ascii => "ascii",
            NativeType::Bigint => "bigint",
            NativeType::Blob => "blob",
            NativeType::Boolean => "boolean",
            NativeType::Counter => "counter",
            NativeType::Decimal => "decimal",
            NativeType::Double => "double",
            NativeType::Float => "float",
            NativeType::Inet => "inet",
            NativeType::Int => "int",
            NativeType::Text => "text",
            NativeType::Timestamp => "timestamp",
            NativeType::Uuid => "uuid",
            NativeType::Varchar => "varchar",
            NativeType::Varint => "varint",
            NativeType::Timeuuid => "timeuuid",
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column type as written in DDL.
///
/// Nested collections are representable; rejecting them is left to whoever
/// validates the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedType {
    Native(NativeType),
    Map(Box<ParsedType>, Box<ParsedType>),
    List(Box<ParsedType>),
    Set(Box<ParsedType>),
    /// A custom type given by its class name, recorded as-is.
    Custom(SmolStr),
}

impl ParsedType {
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            ParsedType::Map(..) | ParsedType::List(_) | ParsedType::Set(_)
        )
    }

    pub fn is_counter(&self) -> bool {
        matches!(self, ParsedType::Native(NativeType::Counter))
    }
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedType::Native(native) => write!(f, "{native}"),
            ParsedType::Map(key, value) => write!(f, "map<{key}, {value}>"),
            ParsedType::List(element) => write!(f, "list<{element}>"),
            ParsedType::Set(element) => write!(f, "set<{element}>"),
            ParsedType::Custom(class) => write!(f, "'{}'", class.replace('\'', "''")),
        }
    }
}

//! Token types and representations for CQL lexical analysis.

use crate::ast::Span;
use smol_str::SmolStr;
use std::fmt;

/// The kind of a lexical token in CQL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords - Statements
    Select,
    From,
    Where,
    And,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Begin,
    Unlogged,
    Batch,
    Apply,
    Use,
    Truncate,
    Create,
    Drop,
    Alter,
    Keyspace,
    Table,
    ColumnFamily,
    Index,
    On,
    To,
    With,
    Using,
    Limit,
    Order,
    By,
    Asc,
    Desc,
    Allow,
    Filtering,
    In,
    Token,
    Count,
    Writetime,
    Ttl,
    Primary,
    Key,
    Compact,
    Storage,
    Clustering,
    Add,
    Rename,
    Type,

    // Keywords - Permissions
    Grant,
    Grants,
    Revoke,
    List,
    For,
    Option,
    Describe,
    FullAccess,
    NoAccess,

    // Native type names
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
    Map,

    // Boolean literals
    True,
    False,

    // Identifiers
    Identifier(SmolStr),
    QuotedName(SmolStr),

    // Literals
    StringLiteral(SmolStr),
    IntegerLiteral(SmolStr),
    FloatLiteral(SmolStr),
    UuidLiteral(SmolStr),
    HexLiteral(SmolStr),

    // Bind marker
    QMark,

    // Operators
    Eq,   // =
    Lt,   // <
    Gt,   // >
    LtEq, // <=
    GtEq, // >=
    Plus,  // +
    Minus, // -
    Star,  // *

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Semicolon, // ;
    Dot,       // .
    Colon,     // :

    // Special
    Eof,
}

impl TokenKind {
    /// Returns true if this token kind is a keyword.
    pub fn is_keyword(&self) -> bool {
        self.keyword_text().is_some()
    }

    /// Returns true if this keyword may also be used where an identifier is
    /// expected (column, table and keyspace names, property names).
    pub fn is_unreserved_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Key
                | TokenKind::Clustering
                | TokenKind::Count
                | TokenKind::Ttl
                | TokenKind::Compact
                | TokenKind::Storage
                | TokenKind::Type
                | TokenKind::Values
                | TokenKind::Writetime
                | TokenKind::Map
                | TokenKind::List
                | TokenKind::Filtering
                | TokenKind::Grants
                | TokenKind::Option
                | TokenKind::Describe
                | TokenKind::FullAccess
                | TokenKind::NoAccess
        ) || self.is_native_type()
    }

    /// Returns true if this keyword names a native column type.
    pub fn is_native_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Ascii
                | TokenKind::Bigint
                | TokenKind::Blob
                | TokenKind::Boolean
                | TokenKind::Counter
                | TokenKind::Decimal
                | TokenKind::Double
                | TokenKind::Float
                | TokenKind::Inet
                | TokenKind::Int
                | TokenKind::Text
                | TokenKind::Timestamp
                | TokenKind::Uuid
                | TokenKind::Varchar
                | TokenKind::Varint
                | TokenKind::Timeuuid
        )
    }

    /// Returns true if the token can stand where an identifier is expected.
    pub fn is_identifier_like(&self) -> bool {
        matches!(self, TokenKind::Identifier(_) | TokenKind::QuotedName(_))
            || self.is_unreserved_keyword()
    }

    /// Returns true if this token kind is a constant literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral(_)
                | TokenKind::IntegerLiteral(_)
                | TokenKind::FloatLiteral(_)
                | TokenKind::UuidLiteral(_)
                | TokenKind::HexLiteral(_)
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Returns true if this token kind is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Eq | TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq
        )
    }

    /// Canonical upper-case spelling of a keyword, `None` for everything else.
    pub fn keyword_text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::And => "AND",
            TokenKind::Insert => "INSERT",
            TokenKind::Into => "INTO",
            TokenKind::Values => "VALUES",
            TokenKind::Update => "UPDATE",
            TokenKind::Set => "SET",
            TokenKind::Delete => "DELETE",
            TokenKind::Begin => "BEGIN",
            TokenKind::Unlogged => "UNLOGGED",
            TokenKind::Batch => "BATCH",
            TokenKind::Apply => "APPLY",
            TokenKind::Use => "USE",
            TokenKind::Truncate => "TRUNCATE",
            TokenKind::Create => "CREATE",
            TokenKind::Drop => "DROP",
            TokenKind::Alter => "ALTER",
            TokenKind::Keyspace => "KEYSPACE",
            TokenKind::Table => "TABLE",
            TokenKind::ColumnFamily => "COLUMNFAMILY",
            TokenKind::Index => "INDEX",
            TokenKind::On => "ON",
            TokenKind::To => "TO",
            TokenKind::With => "WITH",
            TokenKind::Using => "USING",
            TokenKind::Limit => "LIMIT",
            TokenKind::Order => "ORDER",
            TokenKind::By => "BY",
            TokenKind::Asc => "ASC",
            TokenKind::Desc => "DESC",
            TokenKind::Allow => "ALLOW",
            TokenKind::Filtering => "FILTERING",
            TokenKind::In => "IN",
            TokenKind::Token => "TOKEN",
            TokenKind::Count => "COUNT",
            TokenKind::Writetime => "WRITETIME",
            TokenKind::Ttl => "TTL",
            TokenKind::Primary => "PRIMARY",
            TokenKind::Key => "KEY",
            TokenKind::Compact => "COMPACT",
            TokenKind::Storage => "STORAGE",
            TokenKind::Clustering => "CLUSTERING",
            TokenKind::Add => "ADD",
            TokenKind::Rename => "RENAME",
            TokenKind::Type => "TYPE",
            TokenKind::Grant => "GRANT",
            TokenKind::Grants => "GRANTS",
            TokenKind::Revoke => "REVOKE",
            TokenKind::List => "LIST",
            TokenKind::For => "FOR",
            TokenKind::Option => "OPTION",
            TokenKind::Describe => "DESCRIBE",
            TokenKind::FullAccess => "FULL_ACCESS",
            TokenKind::NoAccess => "NO_ACCESS",
            TokenKind::Ascii => "ASCII",
            TokenKind::Bigint => "BIGINT",
            TokenKind::Blob => "BLOB",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Counter => "COUNTER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::Double => "DOUBLE",
            TokenKind::Float => "FLOAT",
            TokenKind::Inet => "INET",
            TokenKind::Int => "INT",
            TokenKind::Text => "TEXT",
            TokenKind::Timestamp => "TIMESTAMP",
            TokenKind::Uuid => "UUID",
            TokenKind::Varchar => "VARCHAR",
            TokenKind::Varint => "VARINT",
            TokenKind::Timeuuid => "TIMEUUID",
            TokenKind::Map => "MAP",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(keyword) = self.keyword_text() {
            return f.write_str(keyword);
        }
        match self {
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::QuotedName(name) => write!(f, "\"{}\"", name.replace('"', "\"\"")),
            TokenKind::StringLiteral(s) => write!(f, "'{}'", s.replace('\'', "''")),
            TokenKind::IntegerLiteral(n)
            | TokenKind::FloatLiteral(n)
            | TokenKind::UuidLiteral(n)
            | TokenKind::HexLiteral(n) => write!(f, "{n}"),
            TokenKind::QMark => write!(f, "?"),
            TokenKind::Eq => write!(f, "="),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::LtEq => write!(f, "<="),
            TokenKind::GtEq => write!(f, ">="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Eof => write!(f, "<EOF>"),
            _ => unreachable!("keywords are rendered through keyword_text"),
        }
    }
}

/// A lexical token with its kind, raw source text and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span in source text.
    pub span: Span,
    /// The raw source text covered by the token.
    pub text: SmolStr,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }
}

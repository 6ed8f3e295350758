//! Keyword recognition for CQL.
//!
//! Keywords are case-insensitive; the matched token's kind is decided by the
//! upper-cased text alone.

use super::token::TokenKind;

/// Looks up a keyword by name (case-insensitive).
pub fn lookup_keyword(name: &str) -> Option<TokenKind> {
    match name.to_ascii_uppercase().as_str() {
        // Statements and clauses
        "SELECT" => Some(TokenKind::Select),
        "FROM" => Some(TokenKind::From),
        "WHERE" => Some(TokenKind::Where),
        "AND" => Some(TokenKind::And),
        "INSERT" => Some(TokenKind::Insert),
        "INTO" => Some(TokenKind::Into),
        "VALUES" => Some(TokenKind::Values),
        "UPDATE" => Some(TokenKind::Update),
        "SET" => Some(TokenKind::Set),
        "DELETE" => Some(TokenKind::Delete),
        "BEGIN" => Some(TokenKind::Begin),
        "UNLOGGED" => Some(TokenKind::Unlogged),
        "BATCH" => Some(TokenKind::Batch),
        "APPLY" => Some(TokenKind::Apply),
        "USE" => Some(TokenKind::Use),
        "TRUNCATE" => Some(TokenKind::Truncate),
        "CREATE" => Some(TokenKind::Create),
        "DROP" => Some(TokenKind::Drop),
        "ALTER" => Some(TokenKind::Alter),
        "KEYSPACE" => Some(TokenKind::Keyspace),
        "TABLE" => Some(TokenKind::Table),
        "COLUMNFAMILY" => Some(TokenKind::ColumnFamily),
        "INDEX" => Some(TokenKind::Index),
        "ON" => Some(TokenKind::On),
        "TO" => Some(TokenKind::To),
        "WITH" => Some(TokenKind::With),
        "USING" => Some(TokenKind::Using),
        "LIMIT" => Some(TokenKind::Limit),
        "ORDER" => Some(TokenKind::Order),
        "BY" => Some(TokenKind::By),
        "ASC" => Some(TokenKind::Asc),
        "DESC" => Some(TokenKind::Desc),
        "ALLOW" => Some(TokenKind::Allow),
        "FILTERING" => Some(TokenKind::Filtering),
        "IN" => Some(TokenKind::In),
        "TOKEN" => Some(TokenKind::Token),
        "COUNT" => Some(TokenKind::Count),
        "WRITETIME" => Some(TokenKind::Writetime),
        "TTL" => Some(TokenKind::Ttl),
        "PRIMARY" => Some(TokenKind::Primary),
        "KEY" => Some(TokenKind::Key),
        "COMPACT" => Some(TokenKind::Compact),
        "STORAGE" => Some(TokenKind::Storage),
        "CLUSTERING" => Some(TokenKind::Clustering),
        "ADD" => Some(TokenKind::Add),
        "RENAME" => Some(TokenKind::Rename),
        "TYPE" => Some(TokenKind::Type),

        // Permissions
        "GRANT" => Some(TokenKind::Grant),
        "GRANTS" => Some(TokenKind::Grants),
        "REVOKE" => Some(TokenKind::Revoke),
        "LIST" => Some(TokenKind::List),
        "FOR" => Some(TokenKind::For),
        "OPTION" => Some(TokenKind::Option),
        "DESCRIBE" => Some(TokenKind::Describe),
        "FULL_ACCESS" => Some(TokenKind::FullAccess),
        "NO_ACCESS" => Some(TokenKind::NoAccess),

        // Native types
        "ASCII" => Some(TokenKind::Ascii),
        "BIGINT" => Some(TokenKind::Bigint),
        "BLOB" => Some(TokenKind::Blob),
        "BOOLEAN" => Some(TokenKind::Boolean),
        "COUNTER" => Some(TokenKind::Counter),
        "DECIMAL" => Some(TokenKind::Decimal),
        "DOUBLE" => Some(TokenKind::Double),
        "FLOAT" => Some(TokenKind::Float),
        "INET" => Some(TokenKind::Inet),
        "INT" => Some(TokenKind::Int),
        "TEXT" => Some(TokenKind::Text),
        "TIMESTAMP" => Some(TokenKind::Timestamp),
        "UUID" => Some(TokenKind::Uuid),
        "VARCHAR" => Some(TokenKind::Varchar),
        "VARINT" => Some(TokenKind::Varint),
        "TIMEUUID" => Some(TokenKind::Timeuuid),
        "MAP" => Some(TokenKind::Map),

        // Boolean literals
        "TRUE" => Some(TokenKind::True),
        "FALSE" => Some(TokenKind::False),

        _ => None,
    }
}

/// Returns true if the given name is a keyword (case-insensitive).
pub fn is_keyword(name: &str) -> bool {
    lookup_keyword(name).is_some()
}

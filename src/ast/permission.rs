//! Permission management statements.

use super::identifier::CfName;
use smol_str::SmolStr;
use std::fmt;

/// Permissions that can be granted on a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Describe,
    Use,
    Create,
    Alter,
    Drop,
    Select,
    Insert,
    Update,
    Delete,
    FullAccess,
    NoAccess,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Permission::Describe => "DESCRIBE",
            Permission::Use => "USE",
            Permission::Create => "CREATE",
            Permission::Alter => "ALTER",
            Permission::Drop => "DROP",
            Permission::Select => "SELECT",
            Permission::Insert => "INSERT",
            Permission::Update => "UPDATE",
            Permission::Delete => "DELETE",
            Permission::FullAccess => "FULL_ACCESS",
            Permission::NoAccess => "NO_ACCESS",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantStatement {
    pub permission: Permission,
    pub resource: CfName,
    pub username: SmolStr,
    pub grant_option: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeStatement {
    pub permission: Permission,
    pub resource: CfName,
    pub username: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGrantsStatement {
    pub username: SmolStr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_display() {
        assert_eq!(Permission::FullAccess.to_string(), "FULL_ACCESS");
        assert_eq!(Permission::Select.to_string(), "SELECT");
    }
}

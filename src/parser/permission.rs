//! GRANT, REVOKE and LIST GRANTS grammar.

use crate::ast::{GrantStatement, ListGrantsStatement, Permission, RevokeStatement, Statement};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser, RuleResult};

fn permission_from_kind(kind: &TokenKind) -> Option<Permission> {
    let permission = match kind {
        TokenKind::Describe => Permission::Describe,
        TokenKind::Use => Permission::Use,
        TokenKind::Create => Permission::Create,
        TokenKind::Alter => Permission::Alter,
        TokenKind::Drop => Permission::Drop,
        TokenKind::Select => Permission::Select,
        TokenKind::Insert => Permission::Insert,
        TokenKind::Update => Permission::Update,
        TokenKind::Delete => Permission::Delete,
        TokenKind::FullAccess => Permission::FullAccess,
        TokenKind::NoAccess => Permission::NoAccess,
        _ => return None,
    };
    Some(permission)
}

impl Parser {
    fn parse_permission(&mut self) -> RuleResult<Permission> {
        match permission_from_kind(self.peek_kind()) {
            Some(permission) => {
                self.advance();
                Ok(permission)
            }
            None => {
                self.expected_token("permission", "");
                Err(Halt::Recorded)
            }
        }
    }

    /// `GRANT permission ON cf TO user (WITH GRANT OPTION)?`
    pub(crate) fn parse_grant(&mut self) -> RuleResult<Statement> {
        self.expect(&TokenKind::Grant, "")?;
        let permission = self.parse_permission()?;
        self.expect(&TokenKind::On, "after permission")?;
        let resource = self.parse_cf_name()?;
        self.expect(&TokenKind::To, "after resource")?;
        let username = self.parse_username("after TO")?;

        let grant_option = if self.eat(&TokenKind::With) {
            self.expect(&TokenKind::Grant, "after WITH")?;
            self.expect(&TokenKind::Option, "after WITH GRANT")?;
            true
        } else {
            false
        };

        Ok(Statement::Grant(GrantStatement {
            permission,
            resource,
            username,
            grant_option,
        }))
    }

    /// `REVOKE permission ON cf FROM user`
    pub(crate) fn parse_revoke(&mut self) -> RuleResult<Statement> {
        self.expect(&TokenKind::Revoke, "")?;
        let permission = self.parse_permission()?;
        self.expect(&TokenKind::On, "after permission")?;
        let resource = self.parse_cf_name()?;
        self.expect(&TokenKind::From, "after resource")?;
        let username = self.parse_username("after FROM")?;
        Ok(Statement::Revoke(RevokeStatement {
            permission,
            resource,
            username,
        }))
    }

    /// `LIST GRANTS FOR user`
    pub(crate) fn parse_list_grants(&mut self) -> RuleResult<Statement> {
        self.expect(&TokenKind::List, "")?;
        self.expect(&TokenKind::Grants, "after LIST")?;
        self.expect(&TokenKind::For, "after LIST GRANTS")?;
        let username = self.parse_username("after FOR")?;
        Ok(Statement::ListGrants(ListGrantsStatement { username }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parser_for(source: &str) -> Parser {
        Parser::new(Lexer::new(source).tokenize().tokens)
    }

    #[test]
    fn grant_with_option() {
        let mut parser = parser_for("GRANT SELECT ON ks.users TO 'Alice' WITH GRANT OPTION");
        let Ok(Statement::Grant(stmt)) = parser.parse_grant() else {
            panic!("expected GRANT");
        };
        assert_eq!(stmt.permission, Permission::Select);
        assert_eq!(stmt.resource.to_string(), "ks.users");
        assert_eq!(stmt.username, "Alice");
        assert!(stmt.grant_option);
    }

    #[test]
    fn grant_full_access_without_option() {
        let mut parser = parser_for("GRANT FULL_ACCESS ON t TO bob");
        let Ok(Statement::Grant(stmt)) = parser.parse_grant() else {
            panic!("expected GRANT");
        };
        assert_eq!(stmt.permission, Permission::FullAccess);
        assert!(!stmt.grant_option);
    }

    #[test]
    fn revoke_and_list() {
        let mut parser = parser_for("REVOKE DROP ON t FROM bob");
        let Ok(Statement::Revoke(stmt)) = parser.parse_revoke() else {
            panic!("expected REVOKE");
        };
        assert_eq!(stmt.permission, Permission::Drop);
        assert_eq!(stmt.username, "bob");

        let mut parser = parser_for("LIST GRANTS FOR 'carol'");
        let Ok(Statement::ListGrants(stmt)) = parser.parse_list_grants() else {
            panic!("expected LIST GRANTS");
        };
        assert_eq!(stmt.username, "carol");
    }

    #[test]
    fn unknown_permission_is_recorded() {
        let mut parser = parser_for("GRANT TRUNCATE ON t TO bob");
        assert_eq!(parser.parse_grant(), Err(Halt::Recorded));
        assert!(
            parser
                .diagnostics
                .latest()
                .is_some_and(|d| d.message.starts_with("expected permission"))
        );
    }
}

mod common;

use common::{parse_cleanly, parse_failure};
use cql_parser::Statement;
use cql_parser::ast::Permission;

#[test]
fn grant_every_permission_keyword() {
    let cases = [
        ("DESCRIBE", Permission::Describe),
        ("USE", Permission::Use),
        ("CREATE", Permission::Create),
        ("ALTER", Permission::Alter),
        ("DROP", Permission::Drop),
        ("SELECT", Permission::Select),
        ("INSERT", Permission::Insert),
        ("UPDATE", Permission::Update),
        ("DELETE", Permission::Delete),
        ("FULL_ACCESS", Permission::FullAccess),
        ("no_access", Permission::NoAccess),
    ];
    for (keyword, expected) in cases {
        let source = format!("GRANT {keyword} ON ks.t TO alice");
        let Statement::Grant(stmt) = parse_cleanly(&source).statement else {
            panic!("expected GRANT for {source}");
        };
        assert_eq!(stmt.permission, expected);
        assert!(!stmt.grant_option);
    }
}

#[test]
fn grant_option_and_string_username() {
    let Statement::Grant(stmt) =
        parse_cleanly("GRANT SELECT ON t TO 'Bob Smith' WITH GRANT OPTION;").statement
    else {
        panic!("expected GRANT");
    };
    assert_eq!(stmt.username, "Bob Smith");
    assert!(stmt.grant_option);
}

#[test]
fn revoke_and_list_grants() {
    let Statement::Revoke(stmt) = parse_cleanly("REVOKE UPDATE ON t FROM bob").statement else {
        panic!("expected REVOKE");
    };
    assert_eq!(stmt.permission, Permission::Update);

    let Statement::ListGrants(stmt) = parse_cleanly("LIST GRANTS FOR bob").statement else {
        panic!("expected LIST GRANTS");
    };
    assert_eq!(stmt.username, "bob");
}

#[test]
fn revoke_uses_from_not_to() {
    let error = parse_failure("REVOKE SELECT ON t TO bob");
    assert!(error.message().starts_with("expected FROM"));
}

//! SELECT parsing through the public entry point.

mod common;

use common::{assert_has_error_containing, parse_cleanly, parse_failure};
use cql_parser::ast::{
    ColumnIdentifier, DEFAULT_SELECT_LIMIT, Relation, RelationOperator, SelectStatement, Selector,
    SortOrder, Term, TokenValue, Value,
};
use cql_parser::Statement;

fn select(source: &str) -> SelectStatement {
    match parse_cleanly(source).statement {
        Statement::Select(select) => select,
        other => panic!("expected SELECT, got {}", other.kind()),
    }
}

#[test]
fn wildcard_select_uses_default_limit() {
    let stmt = select("SELECT * FROM users");
    assert!(stmt.is_wildcard());
    assert!(!stmt.is_count);
    assert_eq!(stmt.limit, DEFAULT_SELECT_LIMIT);
    assert!(stmt.table.keyspace.is_none());
}

#[test]
fn keywords_are_case_insensitive() {
    let stmt = select("select A, b from KS.Users where Id = 5 limit 3;");
    assert_eq!(stmt.table.to_string(), "ks.users");
    assert_eq!(stmt.selectors[0], Selector::Column(ColumnIdentifier::unquoted("a")));
    assert_eq!(stmt.limit, 3);
}

#[test]
fn quoted_identifiers_keep_case() {
    let stmt = select("SELECT \"UserName\" FROM \"Users\"");
    let column = stmt.selectors[0].column();
    assert!(column.is_quoted());
    assert_eq!(column.text(), "UserName");
    assert_eq!(stmt.table.table.text(), "Users");
}

#[test]
fn unreserved_keywords_as_column_names() {
    let stmt = select("SELECT key, ttl, count, type FROM t WHERE key = 1");
    let names: Vec<_> = stmt.selectors.iter().map(|s| s.column().text().to_string()).collect();
    assert_eq!(names, vec!["key", "ttl", "count", "type"]);
}

#[test]
fn writetime_and_ttl_selectors() {
    let stmt = select("SELECT WRITETIME(v), TTL(v) FROM t");
    assert_eq!(stmt.selectors[0].to_string(), "WRITETIME(v)");
    assert!(matches!(stmt.selectors[1], Selector::Ttl(_)));
}

#[test]
fn where_clause_forms() {
    let stmt = select(
        "SELECT * FROM t WHERE k IN (1, 2) AND c > 'a' AND TOKEN(k) <= TOKEN(5) AND d = 2.5",
    );
    assert_eq!(stmt.relations.len(), 4);
    assert!(matches!(&stmt.relations[0], Relation::In { values, .. } if values.len() == 2));
    assert!(matches!(
        &stmt.relations[1],
        Relation::Simple { operator: RelationOperator::Gt, .. }
    ));
    assert!(matches!(
        &stmt.relations[2],
        Relation::Token { value: TokenValue::Call(args), .. } if args.len() == 1
    ));
    assert!(matches!(
        &stmt.relations[3],
        Relation::Simple { value: Value::Term(Term::Float(text)), .. } if text == "2.5"
    ));
}

#[test]
fn order_by_preserves_declaration_order() {
    let stmt = select("SELECT * FROM t WHERE k = 0 ORDER BY c2 DESC, c1");
    let orderings: Vec<_> = stmt
        .orderings
        .iter()
        .map(|(column, order)| (column.text().to_string(), order))
        .collect();
    assert_eq!(
        orderings,
        vec![("c2".to_string(), SortOrder::Desc), ("c1".to_string(), SortOrder::Asc)]
    );
}

#[test]
fn allow_filtering_flag() {
    assert!(select("SELECT * FROM t WHERE v = 1 ALLOW FILTERING").allow_filtering);
}

#[test]
fn count_star_and_count_one() {
    assert!(select("SELECT COUNT(*) FROM t").is_count);
    assert!(select("SELECT COUNT(1) FROM t").is_count);
}

#[test]
fn count_other_argument_is_rejected() {
    let error = parse_failure("SELECT COUNT(5) FROM t");
    assert_eq!(error.message(), "Only COUNT(1) is supported, got COUNT(5)");
    assert_eq!(error.code(), Some("P010"));
}

#[test]
fn token_arity_mismatch_is_rejected() {
    let error = parse_failure("SELECT * FROM t WHERE TOKEN(a, b) > TOKEN(1, 2, 3)");
    assert_eq!(
        error.message(),
        "The number of arguments to the token() function don't match"
    );
}

#[test]
fn disjunction_is_not_supported() {
    let error = parse_failure("SELECT * FROM t WHERE a = 1 OR a = 2");
    assert_has_error_containing(&error, "after statement");
}

#[test]
fn missing_from_is_rejected() {
    let error = parse_failure("SELECT a b");
    assert_has_error_containing(&error, "expected FROM");
}

#[test]
fn missing_projection_and_table() {
    let outcome = cql_parser::parse_outcome("SELECT FROM");
    assert!(outcome.statement.is_none());
    assert!(!outcome.diagnostics.is_empty());
}

//! INSERT, UPDATE, DELETE and BATCH parsing.

mod common;

use common::{assert_has_error_containing, parse_cleanly, parse_failure};
use cql_parser::Statement;
use cql_parser::ast::{
    BatchStatement, BatchType, CollectionLiteral, ColumnIdentifier, ModificationStatement,
    Operation, Term, UpdateStatement, Value,
};

fn update(source: &str) -> UpdateStatement {
    match parse_cleanly(source).statement {
        Statement::Update(update) => update,
        other => panic!("expected UPDATE, got {}", other.kind()),
    }
}

fn single_operation(source: &str) -> Operation {
    let mut stmt = update(source);
    assert_eq!(stmt.operations.len(), 1, "{source}");
    stmt.operations.remove(0).1
}

fn batch(source: &str) -> BatchStatement {
    match parse_cleanly(source).statement {
        Statement::Batch(batch) => batch,
        other => panic!("expected BATCH, got {}", other.kind()),
    }
}

fn int(text: &str) -> Term {
    Term::Integer(text.into())
}

#[test]
fn insert_with_using_clause() {
    let parsed = parse_cleanly(
        "INSERT INTO ks.users (id, name, tags) VALUES (?, 'bob', {'a', 'b'}) USING TTL 86400 AND TIMESTAMP 123",
    );
    let Statement::Insert(stmt) = parsed.statement else {
        panic!("expected INSERT");
    };
    assert_eq!(parsed.bound_terms, 1);
    assert_eq!(stmt.columns.len(), 3);
    assert_eq!(stmt.attributes.time_to_live, Some(int("86400")));
    assert_eq!(stmt.attributes.timestamp, Some(int("123")));
    let (column, value) = stmt.assignments().nth(2).expect("third assignment");
    assert_eq!(column, &ColumnIdentifier::unquoted("tags"));
    assert!(matches!(value, Value::Collection(CollectionLiteral::Set(items)) if items.len() == 2));
}

#[test]
fn insert_requires_two_columns() {
    let error = parse_failure("INSERT INTO t (a) VALUES (1)");
    assert_has_error_containing(&error, "expected ,");
}

#[test]
fn insert_arity_is_not_checked() {
    let parsed = parse_cleanly("INSERT INTO t (a, b, c) VALUES (1, 2)");
    let Statement::Insert(stmt) = parsed.statement else {
        panic!("expected INSERT");
    };
    assert_eq!((stmt.columns.len(), stmt.values.len()), (3, 2));
}

#[test]
fn counter_updates() {
    assert_eq!(
        single_operation("UPDATE t SET c = c + 5 WHERE k = 1"),
        Operation::CounterIncrement(int("5"))
    );
    assert_eq!(
        single_operation("UPDATE t SET c = c - 5 WHERE k = 1"),
        Operation::CounterDecrement(int("5"))
    );
    assert_eq!(
        single_operation("UPDATE t SET c = c -5 WHERE k = 1"),
        Operation::CounterDecrement(int("5"))
    );
}

#[test]
fn decrement_without_operator_accepts_non_positive_and_markers() {
    assert!(matches!(
        single_operation("UPDATE t SET c = c 0 WHERE k = 1"),
        Operation::CounterDecrement(_)
    ));
    let parsed = parse_cleanly("UPDATE t SET c = c ? WHERE k = ?");
    assert_eq!(parsed.bound_terms, 2);
}

#[test]
fn decrement_without_minus_aborts() {
    let error = parse_failure("UPDATE t SET c = c 7, d = 'x' WHERE k = 1");
    assert!(error.is_aborted());
    assert_eq!(error.code(), Some("P020"));
    assert_eq!(error.diagnostics().len(), 1);
    assert_eq!(error.message(), "missing '-' before 7 in counter update");
}

#[test]
fn counter_update_must_reference_target() {
    let error = parse_failure("UPDATE t SET c = d + 1 WHERE k = 1");
    assert_eq!(
        error.message(),
        "Only expressions like X = X <op> <value> are supported"
    );
    assert!(!error.is_aborted());
}

#[test]
fn list_prepend_must_reference_target() {
    assert_eq!(
        single_operation("UPDATE t SET l = [1, 2] + l WHERE k = 1"),
        Operation::ListPrepend(Value::Collection(CollectionLiteral::List(vec![
            int("1").into(),
            int("2").into()
        ])))
    );
    let error = parse_failure("UPDATE t SET l = [1] + m WHERE k = 1");
    assert_eq!(
        error.message(),
        "Only expressions like X = <value> + X are supported"
    );
}

#[test]
fn collection_operations() {
    assert!(matches!(
        single_operation("UPDATE t SET l = l + [3] WHERE k = 1"),
        Operation::ListAppend(_)
    ));
    assert!(matches!(
        single_operation("UPDATE t SET l = l - [3] WHERE k = 1"),
        Operation::ListDiscard(_)
    ));
    assert!(matches!(
        single_operation("UPDATE t SET s = s + {'x'} WHERE k = 1"),
        Operation::SetAdd(_)
    ));
    assert!(matches!(
        single_operation("UPDATE t SET s = s - {'x'} WHERE k = 1"),
        Operation::SetDiscard(_)
    ));
    assert!(matches!(
        single_operation("UPDATE t SET m = m + {'k': 1} WHERE k = 1"),
        Operation::MapPutAll(_)
    ));
    assert!(matches!(
        single_operation("UPDATE t SET s = {} WHERE k = 1"),
        Operation::Set(Value::Collection(CollectionLiteral::EmptyBraces))
    ));
}

#[test]
fn element_assignments() {
    assert_eq!(
        single_operation("UPDATE t SET l[2] = 'x' WHERE k = 1"),
        Operation::ListSetIndex {
            index: int("2").into(),
            value: Term::String("x".into()).into(),
        }
    );
    assert!(matches!(
        single_operation("UPDATE t SET m['a'] = 1 WHERE k = 1"),
        Operation::MapPut { .. }
    ));
}

#[test]
fn update_requires_where() {
    let error = parse_failure("UPDATE t SET a = 1");
    assert_has_error_containing(&error, "expected WHERE");
}

#[test]
fn delete_forms() {
    let parsed = parse_cleanly("DELETE a, m['k'] FROM ks.t USING TIMESTAMP 99 WHERE id = ?");
    let Statement::Delete(stmt) = parsed.statement else {
        panic!("expected DELETE");
    };
    assert_eq!(stmt.targets.len(), 2);
    assert!(stmt.targets[0].key.is_none());
    assert!(stmt.targets[1].key.is_some());
    assert_eq!(stmt.attributes.timestamp, Some(int("99")));
    assert_eq!(parsed.bound_terms, 1);
}

#[test]
fn delete_rejects_ttl() {
    let error = parse_failure("DELETE FROM t USING TTL 5 WHERE k = 1");
    assert_has_error_containing(&error, "expected TIMESTAMP");
}

#[test]
fn batch_types() {
    assert_eq!(
        batch("BEGIN BATCH INSERT INTO t (a, b) VALUES (1, 2) APPLY BATCH").batch_type,
        BatchType::Logged
    );
    assert_eq!(
        batch("BEGIN UNLOGGED BATCH DELETE FROM t WHERE k = 1; APPLY BATCH").batch_type,
        BatchType::Unlogged
    );
    let counter = batch("BEGIN COUNTER BATCH UPDATE t SET c = c + 1 WHERE k = 1 APPLY BATCH");
    assert_eq!(counter.batch_type, BatchType::Counter);
}

#[test]
fn batch_shares_one_counter() {
    let parsed = parse_cleanly(
        "BEGIN BATCH USING TIMESTAMP ? \
           INSERT INTO t (a, b) VALUES (?, ?); \
           UPDATE t SET c = ? WHERE k = ?; \
           DELETE FROM t WHERE k = ? \
         APPLY BATCH",
    );
    assert_eq!(parsed.bound_terms, 6);
    let Statement::Batch(stmt) = parsed.statement else {
        panic!("expected BATCH");
    };
    assert_eq!(stmt.statements.len(), 3);
    assert_eq!(stmt.statements[0].table().to_string(), "t");
    assert_eq!(
        stmt.attributes.timestamp.as_ref().and_then(Term::bind_ordinal),
        Some(0)
    );
    let ModificationStatement::Delete(delete) = &stmt.statements[2] else {
        panic!("expected DELETE in batch");
    };
    let cql_parser::ast::Relation::Simple { value, .. } = &delete.relations[0] else {
        panic!("expected simple relation");
    };
    assert_eq!(value.as_term().and_then(Term::bind_ordinal), Some(5));
}

#[test]
fn batch_reports_errors_from_several_statements() {
    let error = parse_failure(
        "BEGIN BATCH \
           UPDATE t SET c = d + 1 WHERE k = 1; \
           SELECT * FROM t; \
           INSERT INTO t (a, b) VALUES (1, 2) \
         APPLY BATCH",
    );
    assert_eq!(error.diagnostics().len(), 2);
}

#[test]
fn non_integer_counter_deltas_are_rejected() {
    let error = parse_failure("UPDATE t SET x = x + 'abc', y = y - 1.5 WHERE k = 1");
    assert_eq!(error.diagnostics().len(), 2);
    assert_has_error_containing(&error, "Counter updates take an integer or bind marker");
}

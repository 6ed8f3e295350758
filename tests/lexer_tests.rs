mod common;

use common::tokenize_cleanly;
use cql_parser::{TokenKind, tokenize};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize_cleanly(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn uuid_is_preferred_over_number_and_identifier() {
    let uuid = "550e8400-e29b-41d4-a716-446655440000";
    assert_eq!(
        kinds(uuid),
        vec![TokenKind::UuidLiteral(uuid.into()), TokenKind::Eof]
    );
    let upper = "ABCDEF01-2345-6789-ABCD-EF0123456789";
    assert_eq!(kinds(upper)[0], TokenKind::UuidLiteral(upper.into()));
}

#[test]
fn float_forms() {
    assert_eq!(kinds("3.")[0], TokenKind::FloatLiteral("3.".into()));
    assert_eq!(kinds("-2.50")[0], TokenKind::FloatLiteral("-2.50".into()));
    assert_eq!(kinds("1e10")[0], TokenKind::FloatLiteral("1e10".into()));
    assert_eq!(kinds("42")[0], TokenKind::IntegerLiteral("42".into()));
}

#[test]
fn leading_dot_is_not_a_number() {
    assert_eq!(
        kinds(".5"),
        vec![
            TokenKind::Dot,
            TokenKind::IntegerLiteral("5".into()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn strings_and_quoted_names_fold_doubled_quotes() {
    assert_eq!(
        kinds("'it''s' \"a\"\"b\""),
        vec![
            TokenKind::StringLiteral("it's".into()),
            TokenKind::QuotedName("a\"b".into()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn comments_are_ignored() {
    assert_eq!(
        kinds("USE -- trailing\n ks /* block */ ; // end"),
        vec![
            TokenKind::Use,
            TokenKind::Identifier("ks".into()),
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn invalid_characters_are_all_reported() {
    let result = tokenize("SELECT @ FROM t WHERE a = $");
    assert_eq!(result.diagnostics.len(), 2);
    assert!(
        result
            .diagnostics
            .iter()
            .all(|d| d.code.as_deref() == Some("L001"))
    );
}

#[test]
fn malformed_hex_constant() {
    let result = tokenize("0x12zz");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code.as_deref(), Some("L002"));
}

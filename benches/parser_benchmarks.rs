//! End-to-End Parser Benchmarks
//!
//! Measures lexing plus parsing of single CQL statements, grouped by
//! statement family:
//!
//! - **Queries**: SELECT with and without WHERE/ORDER BY/LIMIT
//! - **Modifications**: INSERT, UPDATE (counter and collection operations), DELETE
//! - **Batches**: BATCH statements of growing size
//! - **DDL**: CREATE TABLE / KEYSPACE with property bags
//! - **Error Paths**: inputs that collect several diagnostics
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench queries
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cql_parser::{parse, tokenize};

// ============================================================================
// Query Benchmarks
// ============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let queries = vec![
        ("wildcard", "SELECT * FROM users"),
        ("projection", "SELECT id, name, WRITETIME(name) FROM ks.users WHERE id = ?"),
        ("count", "SELECT COUNT(*) FROM events WHERE day = '2024-01-01'"),
        (
            "full_clauses",
            "SELECT a, b FROM t WHERE k IN (1, 2, 3) AND c >= 10 AND c < 20 ORDER BY c DESC LIMIT 100 ALLOW FILTERING",
        ),
        (
            "token_range",
            "SELECT * FROM t WHERE TOKEN(a, b) > TOKEN(?, ?) LIMIT 500",
        ),
    ];

    for (name, query) in queries {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, q| {
            b.iter(|| parse(black_box(q)));
        });
    }

    group.finish();
}

// ============================================================================
// Modification Benchmarks
// ============================================================================

fn bench_modifications(c: &mut Criterion) {
    let mut group = c.benchmark_group("modifications");

    let queries = vec![
        (
            "insert",
            "INSERT INTO ks.users (id, name, emails, prefs) VALUES (?, 'bob', {'a@x', 'b@x'}, {'lang': 'en'}) USING TTL 3600",
        ),
        ("counter", "UPDATE page_views SET hits = hits + 1 WHERE url = ?"),
        (
            "collections",
            "UPDATE t SET l = [0] + l, s = s - {'x'}, m['k'] = 'v', l[2] = 7 WHERE k = 1",
        ),
        ("delete", "DELETE a, m['k'] FROM t USING TIMESTAMP 1234 WHERE k = ?"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, q| {
            b.iter(|| parse(black_box(q)));
        });
    }

    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

fn batch_source(statements: usize) -> String {
    let mut source = String::from("BEGIN UNLOGGED BATCH USING TIMESTAMP ? ");
    for i in 0..statements {
        source.push_str(&format!(
            "INSERT INTO t (k, v) VALUES ({i}, ?); UPDATE t SET c = c + 1 WHERE k = {i}; "
        ));
    }
    source.push_str("APPLY BATCH");
    source
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batches");

    for size in [1, 10, 100] {
        let source = batch_source(size);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, q| {
            b.iter(|| parse(black_box(q)));
        });
    }

    group.finish();
}

// ============================================================================
// DDL Benchmarks
// ============================================================================

fn bench_ddl(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddl");

    let queries = vec![
        (
            "create_keyspace",
            "CREATE KEYSPACE ks WITH replication = {'class': 'SimpleStrategy', 'replication_factor': 3}",
        ),
        (
            "create_table",
            "CREATE TABLE ks.timeline (user_id uuid, posted timeuuid, body text, tags set<text>, \
             PRIMARY KEY (user_id, posted)) WITH CLUSTERING ORDER BY (posted DESC) \
             AND comment = 'timeline' AND compaction = {'class': 'LeveledCompactionStrategy'}",
        ),
        ("alter_table", "ALTER TABLE t ADD extra map<text, bigint>"),
        ("grant", "GRANT SELECT ON ks.t TO 'analyst' WITH GRANT OPTION"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, q| {
            b.iter(|| parse(black_box(q)));
        });
    }

    group.finish();
}

// ============================================================================
// Lexer and Error Path Benchmarks
// ============================================================================

fn bench_lexer_only(c: &mut Criterion) {
    let source = batch_source(100);
    c.bench_function("lexer_batch_100", |b| {
        b.iter(|| tokenize(black_box(&source)));
    });
}

fn bench_error_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_paths");

    let queries = vec![
        ("count_and_token", "SELECT COUNT(2) FROM t WHERE TOKEN(a) = TOKEN(1, 2)"),
        (
            "bad_properties",
            "CREATE KEYSPACE ks WITH a = {'k': ?} AND b = {?: 'v'} AND c = ?",
        ),
        ("missing_minus", "UPDATE t SET c = c 5 WHERE k = 1"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, q| {
            b.iter(|| parse(black_box(q)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_queries,
    bench_modifications,
    bench_batches,
    bench_ddl,
    bench_lexer_only,
    bench_error_paths
);
criterion_main!(benches);

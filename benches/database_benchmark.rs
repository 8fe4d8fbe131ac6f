use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use booldex::analysis::analyzer::Analyzer;
use booldex::core::config::Config;
use booldex::core::database::Database;
use booldex::core::types::DocId;
use booldex::corpus::manifest::Corpus;
use booldex::index::index_writer::IndexWriter;
use std::path::Path;
use std::sync::Arc;
use rand::Rng;

const WORDS: [&str; 12] = [
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog",
    "cat", "bird", "river", "stone",
];

/// Helper to create a random document body
fn random_text(word_count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..word_count)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Helper to write `doc_count` documents and open a database over them
fn create_database(dir: &Path, doc_count: usize) -> Database {
    let paths: Vec<_> = (0..doc_count)
        .map(|i| {
            let path = dir.join(format!("doc{}.txt", i));
            std::fs::write(&path, random_text(100)).unwrap();
            path
        })
        .collect();

    let config = Config { analyzer: "simple".to_string(), ..Config::default() };
    Database::build(Corpus::from_paths(paths), Arc::new(Analyzer::simple()), config).unwrap()
}

/// Benchmark in-memory indexing of document text
fn bench_index_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_documents");

    for doc_count in [100, 1000, 5000].iter() {
        let texts: Vec<String> = (0..*doc_count).map(|_| random_text(100)).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(doc_count),
            &texts,
            |b, texts| {
                b.iter(|| {
                    let mut writer = IndexWriter::new(Arc::new(Analyzer::simple()));
                    for (i, text) in texts.iter().enumerate() {
                        writer.index_document(DocId::new(i as u32 + 1), text);
                    }
                    black_box(writer.finish());
                });
            },
        );
    }

    group.finish();
}

/// Benchmark query evaluation by query shape
fn bench_search(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let db = create_database(dir.path(), 2000);

    let queries = [
        ("single_term", "fox"),
        ("conjunction", "quick brown fox"),
        ("disjunction", "cat | bird | river"),
        ("negation", "!dog !cat"),
        ("mixed", "quick !lazy | bird stone | !river"),
        ("unknown_term", "unicorn | fox"),
    ];

    let mut group = c.benchmark_group("search");
    for (name, query) in queries.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| {
                black_box(db.search(black_box(query)).unwrap());
            });
        });
    }
    group.finish();
}

/// Benchmark the query parser alone
fn bench_parse_query(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let db = create_database(dir.path(), 10);
    let long_query = (0..50)
        .map(|i| format!("{} !{}", WORDS[i % WORDS.len()], WORDS[(i + 3) % WORDS.len()]))
        .collect::<Vec<_>>()
        .join(" | ");

    c.bench_function("parse_long_query", |b| {
        b.iter(|| {
            black_box(db.parse_query(black_box(&long_query)).unwrap());
        });
    });
}

criterion_group!(benches, bench_index_documents, bench_search, bench_parse_query);
criterion_main!(benches);

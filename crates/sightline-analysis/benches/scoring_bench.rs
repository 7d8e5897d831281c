//! Criterion benchmarks for the scoring path.

use criterion::{criterion_group, criterion_main, Criterion};

use sightline_analysis::batch::parse_batch;
use sightline_analysis::scoring::ScoringAggregator;
use sightline_core::models::{Category, CategoryTable, Query, ResponseTable};

const MODELS: [&str; 4] = ["gpt", "claude", "gemini", "mistral"];

fn fixture(num_queries: usize) -> (Vec<Query>, ResponseTable, CategoryTable, Vec<String>) {
    let categories: CategoryTable = [
        Category::new("comparison", "Comparison", 0.5),
        Category::new("pricing", "Pricing", 0.3),
        Category::new("support", "Support", 0.2),
    ]
    .into_iter()
    .collect();
    let keys = ["comparison", "pricing", "support"];

    let queries: Vec<Query> = (0..num_queries)
        .map(|i| Query::new(format!("best tool for use case {i}"), keys[i % keys.len()], i))
        .collect();

    let responses: ResponseTable = MODELS
        .iter()
        .enumerate()
        .map(|(m, model)| {
            let answers: Vec<String> = (0..num_queries)
                .map(|i| {
                    if (i + m) % 3 == 0 {
                        "Top picks:\n1. Globex - solid\n2. Acme - cheaper\n3. Initech".to_string()
                    } else {
                        "Most teams choose Globex or Hooli for this.".to_string()
                    }
                })
                .collect();
            (*model, answers)
        })
        .collect();

    let competitors = ["Globex", "Initech", "Hooli"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    (queries, responses, categories, competitors)
}

fn bench_aggregate(c: &mut Criterion) {
    let (queries, responses, categories, competitors) = fixture(50);
    let aggregator = ScoringAggregator::new("Acme");

    c.bench_function("aggregate_50_queries_4_models", |b| {
        b.iter(|| aggregator.aggregate(&queries, &responses, &categories, &competitors))
    });
}

fn bench_parse_batch(c: &mut Criterion) {
    let blob: String = (1..=20)
        .map(|i| format!("Query {i}: For this one, Acme and Globex are both worth a look.\n"))
        .collect();

    c.bench_function("parse_batch_20_markers", |b| b.iter(|| parse_batch(&blob, 20)));
}

criterion_group!(benches, bench_aggregate, bench_parse_batch);
criterion_main!(benches);

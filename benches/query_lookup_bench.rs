use criterion::{black_box, criterion_group, criterion_main, Criterion};
use query_lookup::{parse_structured_url, QueryLookup};

fn bench_query_lookup(c: &mut Criterion) {
    let query: Vec<String> = (0..50).map(|i| format!("param{}=value%20{}", i, i)).collect();
    let raw = format!("https://example.com/search?{}&flag", query.join("&"));
    let url = parse_structured_url(&raw).expect("benchmark URL should parse");

    let mut group = c.benchmark_group("query_lookup");

    group.bench_function("value_first", |b| {
        b.iter(|| url.value_for_query_parameter(black_box("param0")))
    });

    group.bench_function("value_last", |b| {
        b.iter(|| url.value_for_query_parameter(black_box("param49")))
    });

    group.bench_function("value_missing", |b| {
        b.iter(|| url.value_for_query_parameter(black_box("missing")))
    });

    group.bench_function("has_flag", |b| {
        b.iter(|| url.has_query_parameter(black_box("flag")))
    });

    group.finish();
}

criterion_group!(benches, bench_query_lookup);
criterion_main!(benches);

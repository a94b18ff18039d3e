#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: query-params vs url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use query_params::{QueryParams, step};
use url::form_urlencoded;

const SIMPLE: &str = "?page=1&sort=name";
const COMPLEX: &str = "?q=rust+url+parser&lang=en&filter=stars%3E100&filter=forks%3E10&cursor=eyJpZCI6MTIzNDU2fQ%3D%3D&utm_source=news&utm_medium=email&utm_campaign=autumn%20sale";

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, input) in [("simple", SIMPLE), ("complex", COMPLEX)] {
        group.bench_function(format!("query_params/{name}"), |b| {
            b.iter(|| QueryParams::parse(black_box(input)));
        });

        group.bench_function(format!("form_urlencoded/{name}"), |b| {
            b.iter(|| {
                let query = black_box(input).trim_start_matches('?');
                form_urlencoded::parse(query.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let params = QueryParams::parse(COMPLEX);
    let pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    group.bench_function("query_params", |b| {
        b.iter(|| black_box(&params).serialized_query());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    group.bench_function("add_or_replace", |b| {
        b.iter(|| {
            let mut params = QueryParams::parse(black_box(COMPLEX));
            params.add_or_replace_param("filter", "stars>500")
        });
    });

    group.bench_function("compose", |b| {
        b.iter(|| {
            let mut params = QueryParams::parse(black_box(COMPLEX));
            params.compose([
                step(|q| q.remove_param_list(["utm_source", "utm_medium", "utm_campaign"])),
                step(|q| q.add_or_replace_param("lang", "ja")),
                step(|q| q.add_param("filter", "issues<5")),
            ])
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_all, bench_serialize_all, bench_mutations);
criterion_main!(benches);

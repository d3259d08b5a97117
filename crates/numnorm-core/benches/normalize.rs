use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numnorm_core::normalizer::{explain, normalize};

const INPUTS: &[&str] = &[
    "1000031",
    "127.00",
    "1000031.69",
    "1.000.000,12",
    "1,000,000.12",
    "SEK 1 000 000,50",
    "1.234",
    "not a number",
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize/mixed_formats", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(normalize(black_box(input)));
            }
        })
    });

    c.bench_function("normalize/period_grouped", |b| {
        b.iter(|| normalize(black_box("9.223.372.036.854.775,49")))
    });

    c.bench_function("explain/comma_grouped", |b| {
        b.iter(|| explain(black_box("1,000,000.12")))
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);

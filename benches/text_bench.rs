//! String view benchmarks.

use arenakit::{StrView, equals};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_skip_whitespace(c: &mut Criterion) {
    let padded = format!("{}token", " \t".repeat(64));
    c.bench_function("skip_leading_whitespace", |b| {
        let view = StrView::from(padded.as_str());
        b.iter(|| black_box(black_box(view).skip_leading_whitespace()))
    });
}

fn bench_equals(c: &mut Criterion) {
    let a = "x".repeat(256);
    let mut b_text = a.clone();
    b_text.push('y');
    b_text.remove(0);

    c.bench_function("equals_same_size", |b| {
        let left = StrView::from(a.as_str());
        let right = StrView::from(b_text.as_str());
        b.iter(|| black_box(equals(black_box(&left), black_box(&right))))
    });
}

fn bench_substring(c: &mut Criterion) {
    let text = "abcdefghijklmnopqrstuvwxyz".repeat(16);
    c.bench_function("substring", |b| {
        let view = StrView::from(text.as_str());
        b.iter(|| {
            for start in 0..view.size() - 8 {
                black_box(view.substring(start, 8).unwrap());
            }
        })
    });
}

criterion_group!(text_benches, bench_skip_whitespace, bench_equals, bench_substring);
criterion_main!(text_benches);

//! Per-frame hot path budget: area and quote computation both run on every
//! resize drag frame and must stay O(1).

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use engine::pricing::{quote, quote_all_tiers};
use engine::zone::ZoneGeometry;

fn bench_area(c: &mut Criterion) {
    let circle = ZoneGeometry::Circle { radius: 123.4 };
    let rect = ZoneGeometry::Rectangle {
        width: 220.0,
        height: 145.0,
    };

    c.bench_function("area_sqm_circle", |b| {
        b.iter(|| black_box(circle).area_sqm())
    });
    c.bench_function("area_sqm_rectangle", |b| {
        b.iter(|| black_box(rect).area_sqm())
    });
}

fn bench_quote(c: &mut Criterion) {
    c.bench_function("quote_three_months", |b| {
        b.iter(|| quote(black_box(1_257), black_box(3)))
    });
    c.bench_function("quote_all_tiers", |b| {
        b.iter(|| quote_all_tiers(black_box(1_257)))
    });
}

criterion_group!(benches, bench_area, bench_quote);
criterion_main!(benches);

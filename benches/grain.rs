//! Compares whole-frame render times across grain sizes on a grid
//! small enough for criterion to sample many times.
extern crate criterion;
extern crate grainbrot;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grainbrot::escape::escape_time;
use grainbrot::{Config, Renderer};
use num::Complex;

fn bench_grain_sizes(c: &mut Criterion) {
    let config = Config {
        width: 200,
        height: 200,
        ..Config::default()
    };
    let renderer = Renderer::new(&config).unwrap();

    let mut group = c.benchmark_group("render_200x200");
    for grain in &[1, 5, 20, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(grain), grain, |b, &grain| {
            b.iter(|| renderer.render(black_box(grain)).unwrap());
        });
    }
    group.bench_function("sequential", |b| b.iter(|| renderer.render_sequential()));
    group.finish();
}

fn bench_escape_time(c: &mut Criterion) {
    c.bench_function("escape_time_interior", |b| {
        b.iter(|| escape_time(black_box(Complex::new(-0.1, 0.1)), 256))
    });
}

criterion_group!(benches, bench_grain_sizes, bench_escape_time);
criterion_main!(benches);

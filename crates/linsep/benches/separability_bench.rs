//! Criterion benchmarks comparing the sequential and parallel entry points.
//!
//! - Layouts: separable (gap around x = 0) and random (full square).
//! - Sizes: 1e3, 1e4, 1e5 points per set.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linsep::api::{draw_point_sets, Layout, SampleCfg, SampleReplay, Strategy};

fn bench_separability(c: &mut Criterion) {
    let mut group = c.benchmark_group("separability");
    group.sample_size(20);
    for layout in [Layout::Separable, Layout::Random] {
        for &n in &[1_000usize, 10_000, 100_000] {
            let cfg = SampleCfg::new(layout, n);
            let sets = draw_point_sets(&cfg, SampleReplay { seed: 42, index: n as u64 })
                .expect("valid sampler params");
            for strategy in Strategy::ALL {
                group.bench_with_input(
                    BenchmarkId::new(format!("{layout}/{strategy}"), n),
                    &sets,
                    |b, sets| b.iter(|| strategy.run(&sets.a, &sets.b)),
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_separability);
criterion_main!(benches);

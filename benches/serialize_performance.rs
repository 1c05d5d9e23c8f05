//! Benchmarks for trajectory serialization and archive encoding
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use simout_rs::output::export::ArchiveBuilder;
use simout_rs::output::serialize::serialize_trajectory;
use simout_rs::scenario::{Trajectory, VariableSeries};

/// Build a three-variable trajectory with `n` samples.
fn make_trajectory(n: usize) -> Trajectory {
    let time: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();

    let mut trajectory = Trajectory::new(time.clone());
    for (name, rate) in [("c_outlet", 0.05), ("c_column", 0.02), ("q_solid", 0.01)] {
        let mean: Vec<f64> = time.iter().map(|t| (-rate * t).exp()).collect();
        let lower: Vec<f64> = mean.iter().map(|v| v * 0.9).collect();
        let upper: Vec<f64> = mean.iter().map(|v| v * 1.1).collect();
        trajectory.push_variable(VariableSeries::new(name, mean, lower, upper));
    }
    trajectory
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_trajectory");

    for n in [100, 1_000, 10_000] {
        let trajectory = make_trajectory(n);

        group.bench_with_input(BenchmarkId::new("summary", n), &trajectory, |b, t| {
            b.iter(|| serialize_trajectory(black_box(t), false, None).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("detailed", n), &trajectory, |b, t| {
            b.iter(|| serialize_trajectory(black_box(t), true, None).unwrap())
        });
    }

    group.finish();
}

fn bench_archive(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive_encode");

    for n in [1_000, 10_000] {
        let trajectory = make_trajectory(n);
        let summary = serialize_trajectory(&trajectory, false, None).unwrap();
        let detailed = serialize_trajectory(&trajectory, true, None).unwrap();

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let mut builder = ArchiveBuilder::new();
                builder.add_text("summary.csv", summary.clone());
                builder.add_text("detailed.csv", detailed.clone());
                builder.generate().wait().unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serialize, bench_archive);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array1;
use swarm_solution::batch::{update_all_fitness, update_all_parameters};
use swarm_solution::variants::ContinuousVariant;
use swarm_solution::Solution;

fn sphere(x: &Array1<f64>) -> f64 {
    -x.iter().map(|&v| v * v).sum::<f64>()
}

type SphereSolution = Solution<ContinuousVariant<fn(&Array1<f64>) -> f64>>;

fn build_swarm(size: usize, dim: usize) -> Vec<SphereSolution> {
    let objective: fn(&Array1<f64>) -> f64 = sphere;
    (0..size)
        .map(|i| {
            let start = Array1::from_elem(dim, (i % 10) as f64 - 5.0);
            Solution::new(ContinuousVariant::new(objective), start, -5.0, 5.0).unwrap()
        })
        .collect()
}

/// Benchmark single-solution move with clamping
fn bench_update_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_parameters");

    for dim in [10, 100, 1000].iter() {
        let mut solution = build_swarm(1, *dim).remove(0);
        let speeds = Array1::from_elem(*dim, 0.75);
        let back = Array1::from_elem(*dim, -0.75);

        group.bench_with_input(BenchmarkId::from_parameter(dim), dim, |b, _| {
            b.iter(|| {
                solution.update_parameters(&speeds).unwrap();
                solution.update_parameters(&back).unwrap();
            });
        });
    }
    group.finish();
}

/// Benchmark a full move-then-evaluate step across a swarm
fn bench_swarm_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm_step");

    for size in [100, 1000, 10_000].iter() {
        let mut swarm = build_swarm(*size, 30);
        let speeds: Vec<Array1<f64>> = (0..*size)
            .map(|i| Array1::from_elem(30, if i % 2 == 0 { 0.5 } else { -0.5 }))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                update_all_parameters(&mut swarm, &speeds).unwrap();
                update_all_fitness(&mut swarm).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update_parameters, bench_swarm_step);
criterion_main!(benches);

//! Criterion benchmarks for the u-genalg engine.
//!
//! Uses synthetic problems (OneMax, Sphere) to measure engine overhead
//! independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, RngCore};
use u_genalg::ga::{FitnessScale, GeneticAlgorithm, Parameters};

// ===========================================================================
// OneMax: maximize the number of set bits
// ===========================================================================

fn bits(n: usize) -> impl FnMut(&mut dyn RngCore) -> Vec<bool> {
    move |rng: &mut dyn RngCore| -> Vec<bool> { (0..n).map(|_| rng.random_bool(0.5)).collect() }
}

fn count_ones(c: &[bool]) -> f64 {
    c.iter().filter(|&&b| b).count() as f64
}

fn bench_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax");
    for &n in &[32usize, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let params = Parameters::for_chromosome_length(n).unwrap().with_seed(42);
                let mut ga =
                    GeneticAlgorithm::with_parameters(100, bits(n), count_ones, params).unwrap();
                ga.generate(50, None).unwrap();
                black_box(ga.best_individual().fitness())
            });
        });
    }
    group.finish();
}

// ===========================================================================
// Sphere: maximize -sum(x_i^2)
// ===========================================================================

fn reals(dim: usize) -> impl FnMut(&mut dyn RngCore) -> Vec<f64> {
    move |rng: &mut dyn RngCore| -> Vec<f64> {
        (0..dim).map(|_| rng.random_range(-5.0..5.0)).collect()
    }
}

fn neg_sphere(x: &[f64]) -> f64 {
    -x.iter().map(|v| v * v).sum::<f64>()
}

fn bench_scaling_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_scaling");
    for scale in [
        FitnessScale::Rough,
        FitnessScale::Windowing,
        FitnessScale::Linear,
    ] {
        group.bench_function(format!("{scale:?}"), |b| {
            b.iter(|| {
                let params = Parameters::for_chromosome_length(20)
                    .unwrap()
                    .with_fitness_scale(scale)
                    .with_seed(7);
                let mut ga =
                    GeneticAlgorithm::with_parameters(200, reals(20), neg_sphere, params).unwrap();
                ga.generate(30, None).unwrap();
                black_box(ga.best_individual().fitness())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_onemax, bench_scaling_modes);
criterion_main!(benches);

//! Benchmarks for the simulation engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use gbm_risk_rs::market::GBMPriceProcess;
use gbm_risk_rs::risk::{histogram, summarize};
use gbm_risk_rs::{simulate, simulate_parallel, SimulationParameters};

fn benchmark_price_process(c: &mut Criterion) {
    let process = GBMPriceProcess::new(0.10, 0.1125, 1.0 / 252.0);

    c.bench_function("gbm_step", |bench| {
        bench.iter(|| process.step(black_box(100.0), black_box(0.3)))
    });
}

fn benchmark_simulate(c: &mut Criterion) {
    let params = SimulationParameters::default().with_initial_price(100.0);

    c.bench_function("simulate_10k_x_252", |bench| {
        bench.iter(|| {
            let mut rng = Pcg64::seed_from_u64(42);
            black_box(simulate(&params, &mut rng).unwrap())
        })
    });

    c.bench_function("simulate_parallel_10k_x_252", |bench| {
        bench.iter(|| {
            let mut rng = Pcg64::seed_from_u64(42);
            black_box(simulate_parallel(&params, &mut rng, None).unwrap())
        })
    });
}

fn benchmark_risk(c: &mut Criterion) {
    let params = SimulationParameters::default().with_initial_price(100.0);
    let terminal = simulate(&params, &mut Pcg64::seed_from_u64(42))
        .unwrap()
        .terminal_prices();

    c.bench_function("summarize_10k", |bench| {
        bench.iter(|| black_box(summarize(black_box(&terminal), 100.0).unwrap()))
    });

    c.bench_function("histogram_10k_100_bins", |bench| {
        bench.iter(|| black_box(histogram(black_box(&terminal), 100).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_price_process,
    benchmark_simulate,
    benchmark_risk,
);

criterion_main!(benches);

//! Criterion benchmarks for portfolio aggregation and stress testing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyrisk_core::types::{RiskParameters, ScenarioSpec};
use cyrisk_portfolio::aggregator::analyze_portfolio;
use cyrisk_portfolio::stress::{run_stress_tests, StressScenario};
use cyrisk_sim::config::SimulationConfig;

fn make_scenarios(count: usize) -> Vec<ScenarioSpec> {
    (0..count)
        .map(|i| {
            let p = 0.05 + 0.02 * (i % 10) as f64;
            let lower = 10_000.0 * (1 + i % 5) as f64;
            ScenarioSpec::new(
                format!("Scenario {i}"),
                RiskParameters::new(p, lower, lower * 8.0),
            )
        })
        .collect()
}

fn bench_analyze_portfolio(c: &mut Criterion) {
    let config = SimulationConfig::builder()
        .iterations(10_000)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("analyze_portfolio");
    for &count in &[4usize, 16, 32] {
        let scenarios = make_scenarios(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &scenarios, |b, s| {
            b.iter(|| black_box(analyze_portfolio(black_box(s), &config, None)))
        });
    }
    group.finish();
}

fn bench_stress_tests(c: &mut Criterion) {
    let config = SimulationConfig::builder()
        .iterations(10_000)
        .build()
        .unwrap();
    let scenarios = make_scenarios(8);
    let stresses = vec![
        StressScenario::new("Likelihood x2", 2.0, 1.0),
        StressScenario::new("Impact +50%", 1.0, 1.5),
        StressScenario::new("Combined", 1.5, 1.25),
    ];

    c.bench_function("run_stress_tests_8x3", |b| {
        b.iter(|| {
            black_box(run_stress_tests(
                black_box(&scenarios),
                black_box(&stresses),
                &config,
            ))
        })
    });
}

criterion_group!(benches, bench_analyze_portfolio, bench_stress_tests);
criterion_main!(benches);

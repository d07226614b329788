//! Performance benchmarks for the withholding engine.
//!
//! Both calculators are table-driven arithmetic, so the targets are tight:
//! - Single contribution calculation: < 1μs mean
//! - Single progressive calculation (base + tax): < 5μs mean
//! - Calculator construction (table already loaded): < 10μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;
use std::str::FromStr;

use impostos_engine::calculation::{ContributionCalculator, ProgressiveCalculator};
use impostos_engine::config::TableLoader;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Benchmark: single contribution calculation across the three code paths.
fn bench_contribution(c: &mut Criterion) {
    let table = TableLoader::load_contribution_table(None).expect("Failed to load table");
    let inss = ContributionCalculator::new(Some(2023), dec("0.2"), &table).unwrap();

    let mut group = c.benchmark_group("contribution");
    for (name, base) in [
        ("below_ceiling", dec("5000")),
        ("above_ceiling", dec("100000")),
        ("non_positive", dec("-50")),
    ] {
        group.bench_function(name, |b| b.iter(|| black_box(inss.calculate(black_box(base)))));
    }
    group.finish();
}

/// Benchmark: taxable-base computation plus the bracket formula.
fn bench_progressive(c: &mut Criterion) {
    let table = TableLoader::load_progressive_table(None).expect("Failed to load table");

    c.bench_function("progressive_base_and_tax", |b| {
        let mut irpf = ProgressiveCalculator::new(2023, 6, &table).unwrap();
        b.iter(|| {
            let result = irpf.taxable_base(black_box(dec("10000")), dec("1417.44"), 2);
            black_box(irpf.calculate(result.base, 2).unwrap())
        })
    });
}

/// Benchmark: calculator construction from an already-loaded table.
fn bench_construction(c: &mut Criterion) {
    let inss_table = TableLoader::load_contribution_table(None).expect("Failed to load table");
    let irpf_table = TableLoader::load_progressive_table(None).expect("Failed to load table");

    c.bench_function("construct_contribution", |b| {
        b.iter(|| black_box(ContributionCalculator::new(Some(2023), dec("0.2"), &inss_table)))
    });

    c.bench_function("construct_progressive", |b| {
        b.iter(|| black_box(ProgressiveCalculator::new(2023, 6, &irpf_table)))
    });
}

/// Benchmark: a month of payroll (batch of composed calculations).
fn bench_batch(c: &mut Criterion) {
    let inss_table = TableLoader::load_contribution_table(None).expect("Failed to load table");
    let irpf_table = TableLoader::load_progressive_table(None).expect("Failed to load table");

    let inss = ContributionCalculator::new(Some(2023), dec("0.2"), &inss_table).unwrap();
    let grosses: Vec<Decimal> = (1..=1000).map(|i| Decimal::from(i * 37)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("batch_1000_payslips", |b| {
        b.iter(|| {
            let mut irpf = ProgressiveCalculator::new(2023, 6, &irpf_table).unwrap();
            let mut total = Decimal::ZERO;
            for gross in &grosses {
                let contribution = inss.calculate(*gross);
                let result = irpf.taxable_base(*gross, contribution, 1);
                total += irpf.calculate(result.base, 1).unwrap();
            }
            black_box(total)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_contribution,
    bench_progressive,
    bench_construction,
    bench_batch,
);
criterion_main!(benches);

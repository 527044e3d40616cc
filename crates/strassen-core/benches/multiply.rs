//! Criterion benchmarks for the multiplication engines.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use strassen_core::{default_multipliers, Matrix};

#[allow(clippy::cast_possible_wrap)]
fn sample(order: usize, salt: usize) -> Matrix<i64> {
    let data = (0..order * order)
        .map(|i| ((i * 31 + salt) % 21) as i64 - 10)
        .collect();
    Matrix::from_vec(order, order, data).unwrap()
}

fn bench_algorithms(c: &mut Criterion) {
    let orders: Vec<usize> = vec![16, 32, 64, 128];

    for multiplier in default_multipliers::<i64>() {
        let mut group = c.benchmark_group(multiplier.name());
        for &order in &orders {
            let a = sample(order, 1);
            let b = sample(order, 2);
            group.bench_with_input(BenchmarkId::from_parameter(order), &order, |bench, _| {
                bench.iter(|| multiplier.multiply(&a, &b).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);

extern crate criterion;

use criterion::*;
use exact_num::{BigInteger, Rational};

fn operand(digits: usize) -> BigInteger {
    "9876543210".repeat(digits / 10).parse().unwrap()
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("big integer");
    group.sample_size(10);
    let a = operand(700);
    let b = operand(350);
    group.bench_function("mul 700x350 digits", |bench| bench.iter(|| black_box(&a * &b)));
    group.bench_function("div 700/350 digits", |bench| bench.iter(|| black_box(&a / &b)));
    group.finish();

    let third = Rational::new(1.into(), 3.into()).unwrap();
    c.bench_function("rational as_decimal 200", |bench| {
        bench.iter(|| black_box(third.as_decimal(200)))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);

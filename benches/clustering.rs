use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dbscan1d::Dbscan1D;
use rand::prelude::*;

fn bench_dbscan1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan1d");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 100_000;
    let data: Vec<f64> = (0..n).map(|_| rng.random::<f64>() * 1_000.0).collect();

    group.bench_function("fit_predict_n100k", |b| {
        b.iter(|| {
            let mut model = Dbscan1D::new(0.05, 5);
            model.fit_predict(black_box(&data), None).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan1d);
criterion_main!(benches);

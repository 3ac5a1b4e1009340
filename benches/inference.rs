//! Inference benchmark: feature vector → standardized logistic prediction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heartscore::features::FeatureVector;
use heartscore::model::{ModelArtifact, Scorer};

fn bench_scorer() -> Scorer {
    Scorer::new(ModelArtifact {
        weights: vec![0.8, 0.4, 0.2, -0.6, 0.7, 0.9],
        bias: -0.1,
        mean: vec![54.4, 246.7, 0.15, 149.6, 1.04, 0.67],
        std: vec![9.1, 51.8, 0.36, 22.9, 1.16, 0.94],
    })
    .unwrap()
}

fn bench_predict(c: &mut Criterion) {
    let scorer = bench_scorer();
    let fv = FeatureVector::new([60.0, 300.0, 1.0, 120.0, 2.5, 2.0]);

    c.bench_function("predict_6d", |b| b.iter(|| scorer.predict(black_box(&fv))));
}

fn bench_stages(c: &mut Criterion) {
    let scorer = bench_scorer();
    let fv = FeatureVector::new([60.0, 300.0, 1.0, 120.0, 2.5, 2.0]);

    let mut g = c.benchmark_group("predict_stages");
    g.bench_function("standardize", |b| {
        b.iter(|| scorer.standardize(black_box(&fv)))
    });
    g.bench_function("linear_score", |b| {
        b.iter(|| scorer.linear_score(black_box(&fv)))
    });
    g.bench_function("classify", |b| {
        b.iter(|| scorer.risk_engine().classify(black_box(0.63)))
    });
    g.finish();
}

criterion_group!(benches, bench_predict, bench_stages);
criterion_main!(benches);

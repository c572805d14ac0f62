use kmeans::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        clustering_kmeans_reference,
        clustering_kmeans_lloyd,
}

const N: usize = 4096;
const K: usize = 16;
const T: usize = 8;

fn points() -> Vec<Point<f64, 8>> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..N)
        .map(|_| Point::from(std::array::from_fn(|_| rng.random_range(-1.0..1.0))))
        .collect()
}

fn clustering_kmeans_reference(c: &mut criterion::Criterion) {
    let points = points();
    let mut slots = vec![0; N];
    c.bench_function("cluster 4096 points, single assignment pass", |b| {
        b.iter(|| {
            let ref mut sampler = RngSampler(SmallRng::seed_from_u64(1));
            cluster(&points, &mut slots, K, T, sampler).unwrap().rms()
        })
    });
}

fn clustering_kmeans_lloyd(c: &mut criterion::Criterion) {
    let points = points();
    let mut slots = vec![0; N];
    c.bench_function("cluster 4096 points, alternating passes", |b| {
        b.iter(|| {
            let ref mut sampler = RngSampler(SmallRng::seed_from_u64(1));
            cluster_lloyd(&points, &mut slots, K, T, sampler).unwrap().rms()
        })
    });
}

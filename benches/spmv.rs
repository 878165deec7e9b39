//! Criterion benchmarks comparing the kernel strategies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spmv_bench::{
    random_vector, spmv_parallel, spmv_sequential, SeedPolicy, SparseMatrixCSR, Triplet,
};

/// Random matrix with roughly `avg_nnz_per_row` entries per row
fn random_matrix(n: usize, avg_nnz_per_row: usize, seed: u64) -> SparseMatrixCSR<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let value_range = Uniform::new(-10.0, 10.0);

    let mut triplets = Vec::with_capacity(n * avg_nnz_per_row);
    for row in 0..n {
        for _ in 0..avg_nnz_per_row {
            triplets.push(Triplet::new(
                row,
                rng.gen_range(0..n),
                value_range.sample(&mut rng),
            ));
        }
    }
    SparseMatrixCSR::from_triplets(n, n, triplets).unwrap()
}

fn bench_spmv(c: &mut Criterion) {
    let mut group = c.benchmark_group("spmv");

    for &n in &[1_000usize, 10_000] {
        let matrix = random_matrix(n, 16, 42);
        let x = random_vector(n, SeedPolicy::Fixed(7));
        let mut y = vec![0.0; n];
        let chunk_rows = (n / (num_cpus::get().max(1) * 4)).max(1);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, _| {
            b.iter(|| {
                spmv_sequential(&matrix, &x, &mut y);
                black_box(&y);
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| {
                spmv_parallel(&matrix, &x, &mut y, chunk_rows);
                black_box(&y);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spmv);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use spirator::SpiralTraversal;
use std::hint::black_box;

// Helper function to build row-major test matrices
fn create_test_matrix(width: usize, height: usize) -> Vec<Vec<u32>> {
    (0..height)
        .map(|y| (0..width).map(|x| (y * width + x) as u32).collect())
        .collect()
}

// Benchmark different matrix sizes
fn bench_matrix_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_sizes");
    let sizes = [(10, 10), (100, 100), (500, 500), (1000, 1000)];

    for size in sizes.iter() {
        let (width, height) = *size;
        let matrix = create_test_matrix(width, height);

        group.bench_with_input(
            BenchmarkId::new("size", format!("{}x{}", width, height)),
            &matrix,
            |b, matrix| {
                b.iter(|| {
                    let mut traversal = SpiralTraversal::new(matrix.as_slice());
                    black_box(traversal.collect_remaining());
                });
            },
        );
    }
    group.finish();
}

// Benchmark different aspect ratios at a fixed element count
fn bench_aspect_ratios(c: &mut Criterion) {
    let mut group = c.benchmark_group("aspect_ratios");
    let shapes = [
        ("square", 316, 316),
        ("row", 100_000, 1),
        ("column", 1, 100_000),
        ("wide", 10_000, 10),
        ("tall", 10, 10_000),
    ];

    for (name, width, height) in shapes.iter() {
        let matrix = create_test_matrix(*width, *height);

        group.bench_with_input(BenchmarkId::new("shape", name), &matrix, |b, matrix| {
            b.iter(|| {
                let mut traversal = SpiralTraversal::new(matrix.as_slice());
                black_box(traversal.collect_remaining());
            });
        });
    }
    group.finish();
}

// Benchmark eager collection against lazy iterator consumption
fn bench_lazy_vs_eager(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_vs_eager");
    let matrix = create_test_matrix(500, 500);

    group.bench_with_input(
        BenchmarkId::new("consume", "eager_collect"),
        &matrix,
        |b, matrix| {
            b.iter(|| {
                let mut traversal = SpiralTraversal::new(matrix.as_slice());
                black_box(traversal.collect_remaining());
            });
        },
    );

    group.bench_with_input(
        BenchmarkId::new("consume", "lazy_sum"),
        &matrix,
        |b, matrix| {
            b.iter(|| {
                let traversal = SpiralTraversal::new(matrix.as_slice());
                black_box(traversal.map(u64::from).sum::<u64>());
            });
        },
    );

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20); // Reduced sample size for faster runs
    targets = bench_matrix_sizes, bench_aspect_ratios, bench_lazy_vs_eager
}
criterion_main!(benches);

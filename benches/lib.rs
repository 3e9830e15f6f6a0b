use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [(&str, usize); 4] = [
    ("32B", 32),
    ("1KiB", 1024),
    ("1MiB", 1024 * 1024),
    ("10MiB", 10 * 1024 * 1024),
];

fn digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    for (label, size) in SIZES {
        let input = "x".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        if size >= 1024 * 1024 {
            group.sample_size(10);
        }

        group.bench_with_input(BenchmarkId::new("md5_wasm", label), &input, |b, input| {
            b.iter(|| md5_wasm::digest(black_box(input)));
        });

        group.bench_with_input(BenchmarkId::new("md-5", label), &input, |b, input| {
            use md5::Digest as _;
            b.iter(|| {
                let hash = md5::Md5::digest(black_box(input.as_bytes()));
                hash.iter().map(|v| format!("{v:02x}")).collect::<String>()
            });
        });
    }
    group.finish();
}

fn compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let data = vec![0xFFu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| md5_wasm::compute(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, digest, compute);
criterion_main!(benches);

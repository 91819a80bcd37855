//! Scalar vs parallel reduction throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use texmatch_compute::{compute_statistics_with, ScalarKernels};
use texmatch_core::PixelBuffer;

fn noise_buffer(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut state = seed | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 40) as f32 / (1u64 << 24) as f32
    };
    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            buf.set_pixel(x, y, [next(), next(), next(), 1.0]);
        }
    }
    buf
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_statistics");

    for size in [256u32, 512, 1024] {
        let buf = noise_buffer(size, size, 0x5eed);

        group.bench_with_input(BenchmarkId::new("scalar", size), &buf, |b, buf| {
            let kernels = ScalarKernels::new();
            b.iter(|| compute_statistics_with(&kernels, buf, 0.0, None).unwrap());
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &buf, |b, buf| {
            let kernels = texmatch_compute::ParallelKernels::new();
            b.iter(|| compute_statistics_with(&kernels, buf, 0.0, None).unwrap());
        });
    }

    group.finish();
}

fn bench_sequential(c: &mut Criterion) {
    let buf = noise_buffer(512, 512, 0xfeed);
    c.bench_function("sequential_statistics_512", |b| {
        b.iter(|| texmatch_stats::compute_statistics(&buf, 0.0, None).unwrap());
    });
}

criterion_group!(benches, bench_statistics, bench_sequential);
criterion_main!(benches);

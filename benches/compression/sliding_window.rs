use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use window_lz::compression::{compress, decompress, SlidingWindowBuffer, WindowConfig};

fn sample_data(size: usize, seed: u64) -> Vec<u8> {
    // Small alphabet so the search finds matches of varying length.
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(b'a'..=b'h')).collect()
}

fn bench_find_longest_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_longest_match");
    for &fill in &[256usize, 1024, 4096] {
        let mut history = SlidingWindowBuffer::new(4096).unwrap();
        history.extend_from_slice(&sample_data(fill, 0x5eed));
        let mut lookahead = SlidingWindowBuffer::new(15).unwrap();
        // A different seed keeps the lookahead from matching slot 0 in full.
        lookahead.extend_from_slice(&sample_data(15, 0xfeed));

        group.bench_with_input(BenchmarkId::from_parameter(fill), &fill, |b, _| {
            b.iter(|| black_box(history.find_longest_match(15, black_box(&lookahead))));
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let config = WindowConfig::default();
    let mut group = c.benchmark_group("lzss");
    for &size in &[1024usize, 16 * 1024] {
        let data = sample_data(size, 0x5eed);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| compress(black_box(data), &config).unwrap());
        });

        let tokens = compress(&data, &config).unwrap();
        group.bench_with_input(BenchmarkId::new("decompress", size), &tokens, |b, tokens| {
            b.iter(|| decompress(black_box(tokens), &config).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_longest_match, bench_round_trip);
criterion_main!(benches);

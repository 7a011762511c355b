use cipherbench::buffer::{decrypt_buffer, encrypt_buffer};
use cipherbench::{CipherConfig, KeyMaterial, SampleBuffer};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

// Benchmark the RAM pipeline of one configuration in both directions.
fn bench_config(c: &mut Criterion, config: CipherConfig) {
    let mut group = c.benchmark_group(config.to_string());
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let keys = KeyMaterial::generate_with(&mut rng, config);

    // Benchmark throughput for different buffer sizes.
    for size in [1024, 16384, 1024 * 1024] {
        let sample = SampleBuffer::random_with(&mut rng, size);
        let ciphertext = encrypt_buffer(config, &keys, sample.as_bytes()).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &sample, |b, sample| {
            b.iter(|| encrypt_buffer(config, &keys, black_box(sample.as_bytes())).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &ciphertext, |b, ct| {
            b.iter(|| decrypt_buffer(config, &keys, black_box(ct)).unwrap());
        });
    }
    group.finish();
}

// Main benchmark function that sets up and runs all benchmarks.
fn benchmarks(c: &mut Criterion) {
    for config in CipherConfig::SUITE {
        bench_config(c, config);
    }
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);

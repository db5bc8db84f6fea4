//! Criterion benchmark untuk Ring Buffer
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use styx::core::{MemoryRegion, RingBuffer};

fn bench_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Bytes(64));

    // Benchmark write
    group.bench_function("write_64", |b| {
        let mut rb = RingBuffer::new(65536);
        rb.init().unwrap();
        let data = [0xA5u8; 64];
        b.iter(|| {
            if rb.available_for_write() < 64 {
                rb.reset();
            }
            let _ = rb.write(black_box(&data));
        });
    });

    // Benchmark read
    group.bench_function("read_64", |b| {
        let mut rb = RingBuffer::new(65536);
        rb.init().unwrap();
        let data = [0xA5u8; 64];
        let mut out = [0u8; 64];
        // Pre-fill
        while rb.available_for_write() >= 64 {
            rb.write(&data).unwrap();
        }
        b.iter(|| {
            if rb.available() < 64 {
                while rb.available_for_write() >= 64 {
                    rb.write(&data).unwrap();
                }
            }
            let _ = rb.read(black_box(&mut out));
        });
    });

    // Benchmark write+read cycle
    group.bench_function("write_read_cycle_64", |b| {
        let mut rb = RingBuffer::new(65536);
        rb.init().unwrap();
        let data = [0xA5u8; 64];
        let mut out = [0u8; 64];
        b.iter(|| {
            rb.write(black_box(&data)).unwrap();
            rb.read(black_box(&mut out)).unwrap();
        });
    });

    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    // Chunked streaming
    for chunk_size in [64, 1024, 16384].iter() {
        group.throughput(Throughput::Bytes(*chunk_size as u64));
        group.bench_function(format!("chunk_{}", chunk_size), |b| {
            let mut rb = RingBuffer::new(1 << 20);
            rb.init().unwrap();
            let data = vec![0x5Au8; *chunk_size];
            let mut out = vec![0u8; *chunk_size];
            b.iter(|| {
                rb.write(black_box(&data)).unwrap();
                rb.read(black_box(&mut out)).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_wraparound(c: &mut Criterion) {
    let mut group = c.benchmark_group("wraparound");
    group.throughput(Throughput::Bytes(61));

    // Kapasitas prime: split copy ter-exercise hampir tiap cycle
    group.bench_function("prime_capacity_cycle", |b| {
        let mut rb = RingBuffer::new(4093);
        rb.init().unwrap();
        let data = [0x3Cu8; 61];
        let mut out = [0u8; 61];
        b.iter(|| {
            rb.write(black_box(&data)).unwrap();
            rb.read(black_box(&mut out)).unwrap();
        });
    });

    group.finish();
}

fn bench_regions(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions");
    group.throughput(Throughput::Bytes(256));

    for (name, region) in [
        ("standard_cycle", MemoryRegion::Standard),
        ("alternate_cycle", MemoryRegion::Alternate),
    ] {
        group.bench_function(name, |b| {
            let mut rb = RingBuffer::with_region(1 << 20, region);
            rb.init().unwrap();
            let data = [0x5Au8; 256];
            let mut out = [0u8; 256];
            b.iter(|| {
                rb.write(black_box(&data)).unwrap();
                rb.read(black_box(&mut out)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_write_read,
    bench_throughput,
    bench_wraparound,
    bench_regions
);
criterion_main!(benches);

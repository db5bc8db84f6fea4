//! Styx - Fixed-Capacity SPSC Byte Ring Buffer
//!
//! Demo driver: mengukur latency dan throughput operasi ring buffer
//! di kedua backing-memory region.

mod core;

use crate::core::{MemoryRegion, RingBuffer};
use std::time::Instant;

fn main() {
    println!("🚀 Styx Byte Ring Buffer - v0.1");
    println!("================================\n");

    benchmark_ring_buffer();

    benchmark_regions();

    benchmark_wraparound();

    println!("\n✅ All benchmarks complete!");
    println!("\nTo run the threaded pipe demo: cargo run --release --bin styx_pipe");
}

fn benchmark_ring_buffer() {
    println!("📊 Ring Buffer Benchmark (Fixed-Capacity SPSC)");
    println!("----------------------------------------------");

    const ITERATIONS: usize = 1_000_000;
    const CHUNK: usize = 64;

    let mut rb = RingBuffer::new(65536);
    rb.init().expect("init failed");

    let data = [0xA5u8; CHUNK];
    let mut out = [0u8; CHUNK];

    // Warm up
    for _ in 0..1000 {
        let _ = rb.write(&data);
        let _ = rb.read(&mut out);
    }
    rb.reset();

    // Benchmark write
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        if rb.available_for_write() < CHUNK {
            rb.reset();
        }
        let _ = rb.write(&data);
    }
    let write_duration = start.elapsed();

    // Benchmark read
    rb.reset();
    while rb.available_for_write() >= CHUNK {
        let _ = rb.write(&data);
    }

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        if rb.available() < CHUNK {
            while rb.available_for_write() >= CHUNK {
                let _ = rb.write(&data);
            }
        }
        let _ = rb.read(&mut out);
    }
    let read_duration = start.elapsed();

    let write_ns = write_duration.as_nanos() as f64 / ITERATIONS as f64;
    let read_ns = read_duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Chunk size: {} bytes", CHUNK);
    println!("  Operations: {}", ITERATIONS);
    println!(
        "  Write latency: {:.2} ns/op ({:.3} μs/op)",
        write_ns,
        write_ns / 1000.0
    );
    println!(
        "  Read latency:  {:.2} ns/op ({:.3} μs/op)",
        read_ns,
        read_ns / 1000.0
    );
    println!(
        "  Write throughput: {:.2} MB/sec\n",
        (ITERATIONS * CHUNK) as f64 / write_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_regions() {
    println!("📊 Backing Region Benchmark (Standard vs Alternate)");
    println!("---------------------------------------------------");

    const ITERATIONS: usize = 500_000;
    const CHUNK: usize = 256;

    let standard = region_throughput(MemoryRegion::Standard, ITERATIONS, CHUNK);
    let alternate = region_throughput(MemoryRegion::Alternate, ITERATIONS, CHUNK);

    println!("  Chunk size: {} bytes", CHUNK);
    println!("  Operations: {}", ITERATIONS);
    println!("  Standard  (heap): {:.2} MB/sec", standard);
    println!("  Alternate (mmap): {:.2} MB/sec\n", alternate);
}

fn region_throughput(region: MemoryRegion, iterations: usize, chunk: usize) -> f64 {
    let mut rb = RingBuffer::with_region(1 << 20, region);
    rb.init().expect("init failed");

    let data = vec![0x5Au8; chunk];
    let mut out = vec![0u8; chunk];

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = rb.write(&data);
        let _ = rb.read(&mut out);
    }
    let duration = start.elapsed();

    (iterations * chunk) as f64 / duration.as_secs_f64() / 1_000_000.0
}

fn benchmark_wraparound() {
    println!("📊 Wrap-Around Benchmark (prime capacity)");
    println!("-----------------------------------------");

    const ITERATIONS: usize = 1_000_000;
    const CHUNK: usize = 61;

    // Kapasitas prime: hampir tiap cycle melewati batas region,
    // split copy terus-menerus ter-exercise
    let mut rb = RingBuffer::new(4093);
    rb.init().expect("init failed");

    let data = [0x3Cu8; CHUNK];
    let mut out = [0u8; CHUNK];

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        let _ = rb.write(&data);
        let _ = rb.read(&mut out);
    }
    let duration = start.elapsed();

    let cycle_ns = duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Capacity: 4093 bytes, chunk: {} bytes", CHUNK);
    println!("  Cycles: {}", ITERATIONS);
    println!(
        "  Write+read cycle: {:.2} ns ({:.3} μs)",
        cycle_ns,
        cycle_ns / 1000.0
    );
    println!(
        "  Throughput: {:.2} MB/sec",
        (ITERATIONS * CHUNK) as f64 / duration.as_secs_f64() / 1_000_000.0
    );
}

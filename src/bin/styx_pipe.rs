//! Styx Pipe Demo - Threaded Producer/Consumer Streaming
//!
//! Satu producer thread menulis byte stream deterministik ke ring buffer,
//! satu consumer thread membaca dan memverifikasi setiap byte. Keduanya
//! fail-fast: poll ruang/data dulu, yield kalau tidak muat, tidak ada
//! blocking di dalam buffer.
//!
//! Usage:
//!   cargo run --release --bin styx_pipe [OPTIONS]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use styx::core::{MemoryRegion, RingBuffer};

/// Pipe configuration
struct PipeConfig {
    capacity: usize,
    chunk: usize,
    duration_secs: u64,
    alternate: bool,
    verbose: bool,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            capacity: 64 * 1024,
            chunk: 512,
            duration_secs: 10,
            alternate: false,
            verbose: false,
        }
    }
}

/// Pipe statistics
struct PipeStats {
    bytes_produced: AtomicU64,
    bytes_consumed: AtomicU64,
    write_stalls: AtomicU64,
    read_stalls: AtomicU64,
    corrupt_bytes: AtomicU64,
}

impl PipeStats {
    fn new() -> Self {
        Self {
            bytes_produced: AtomicU64::new(0),
            bytes_consumed: AtomicU64::new(0),
            write_stalls: AtomicU64::new(0),
            read_stalls: AtomicU64::new(0),
            corrupt_bytes: AtomicU64::new(0),
        }
    }

    fn print_stats(&self, uptime: Duration) {
        let produced = self.bytes_produced.load(Ordering::Relaxed);
        let consumed = self.bytes_consumed.load(Ordering::Relaxed);
        let wstalls = self.write_stalls.load(Ordering::Relaxed);
        let rstalls = self.read_stalls.load(Ordering::Relaxed);
        let corrupt = self.corrupt_bytes.load(Ordering::Relaxed);

        let rate = consumed as f64 / uptime.as_secs_f64() / 1_000_000.0;

        println!("\n📊 Pipe Stats (uptime: {:.1}s)", uptime.as_secs_f64());
        println!("   Produced:     {} KB", produced / 1024);
        println!("   Consumed:     {} KB ({:.2} MB/sec)", consumed / 1024, rate);
        println!("   Write stalls: {}", wstalls);
        println!("   Read stalls:  {}", rstalls);
        if corrupt > 0 {
            println!("   Corrupt:      {} bytes ⚠️", corrupt);
        }
    }
}

/// Deterministic byte stream - producer dan consumer menjalankan
/// generator yang sama, jadi setiap byte bisa diverifikasi
struct ByteStream {
    state: u64,
}

impl ByteStream {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 56) as u8
    }
}

fn producer(
    ring: Arc<Mutex<RingBuffer>>,
    chunk_size: usize,
    duration_secs: u64,
    stats: Arc<PipeStats>,
    stop_flag: Arc<AtomicBool>,
) {
    let mut stream = ByteStream::new(42);
    let mut chunk = vec![0u8; chunk_size];
    let end_time = Instant::now() + Duration::from_secs(duration_secs);

    while Instant::now() < end_time && !stop_flag.load(Ordering::Relaxed) {
        for byte in chunk.iter_mut() {
            *byte = stream.next_byte();
        }

        // Fail-fast retry loop: write gagal saat penuh, bukan block
        loop {
            let result = {
                let mut rb = ring.lock().unwrap();
                rb.write(&chunk)
            };
            match result {
                Ok(()) => {
                    stats
                        .bytes_produced
                        .fetch_add(chunk_size as u64, Ordering::Relaxed);
                    break;
                }
                Err(_) => {
                    stats.write_stalls.fetch_add(1, Ordering::Relaxed);
                    if stop_flag.load(Ordering::Relaxed) {
                        return;
                    }
                    thread::yield_now();
                }
            }
        }
    }
}

fn consumer(
    ring: Arc<Mutex<RingBuffer>>,
    chunk_size: usize,
    stats: Arc<PipeStats>,
    producer_done: Arc<AtomicBool>,
) {
    let mut stream = ByteStream::new(42);
    let mut chunk = vec![0u8; chunk_size];

    loop {
        let taken = {
            let mut rb = ring.lock().unwrap();
            let n = rb.available().min(chunk_size);
            if n > 0 {
                rb.read(&mut chunk[..n]).expect("read failed");
            }
            n
        };

        if taken == 0 {
            if producer_done.load(Ordering::Relaxed) {
                // Producer selesai dan buffer kosong: drain tuntas
                let drained = ring.lock().unwrap().is_empty();
                if drained {
                    break;
                }
            }
            stats.read_stalls.fetch_add(1, Ordering::Relaxed);
            thread::yield_now();
            continue;
        }

        // Verifikasi byte-per-byte terhadap generator yang sama
        for &byte in &chunk[..taken] {
            if byte != stream.next_byte() {
                stats.corrupt_bytes.fetch_add(1, Ordering::Relaxed);
            }
        }
        stats
            .bytes_consumed
            .fetch_add(taken as u64, Ordering::Relaxed);
    }
}

fn run_pipe(config: PipeConfig) {
    println!("🚀 STYX PIPE - SPSC Streaming Demo");
    println!("==================================\n");

    // Chunk yang tidak pernah muat akan stall selamanya
    if config.chunk == 0 || config.chunk > config.capacity {
        eprintln!(
            "❌ Chunk ({}) must be between 1 and capacity ({})",
            config.chunk, config.capacity
        );
        std::process::exit(1);
    }

    let region = if config.alternate {
        MemoryRegion::Alternate
    } else {
        MemoryRegion::Standard
    };

    let mut rb = RingBuffer::with_region(config.capacity, region);
    if let Err(e) = rb.init() {
        eprintln!("❌ Buffer init failed: {}", e);
        std::process::exit(1);
    }

    println!(
        "💾 Buffer: {} KB ({})",
        config.capacity / 1024,
        if rb.in_alternate_memory() {
            "alternate/mmap"
        } else {
            "standard/heap"
        }
    );
    println!("📦 Chunk: {} bytes", config.chunk);
    println!("⏱️  Duration: {}s\n", config.duration_secs);

    let ring = Arc::new(Mutex::new(rb));
    let stats = Arc::new(PipeStats::new());
    let stop_flag = Arc::new(AtomicBool::new(false));
    let producer_done = Arc::new(AtomicBool::new(false));

    let start = Instant::now();

    let producer_handle = {
        let ring = Arc::clone(&ring);
        let stats = Arc::clone(&stats);
        let stop = Arc::clone(&stop_flag);
        let chunk = config.chunk;
        let duration_secs = config.duration_secs;
        thread::spawn(move || producer(ring, chunk, duration_secs, stats, stop))
    };

    let consumer_handle = {
        let ring = Arc::clone(&ring);
        let stats = Arc::clone(&stats);
        let done = Arc::clone(&producer_done);
        let chunk = config.chunk;
        thread::spawn(move || consumer(ring, chunk, stats, done))
    };

    // Periodic stats dari main thread
    if config.verbose {
        let end_time = Instant::now() + Duration::from_secs(config.duration_secs);
        while Instant::now() < end_time {
            thread::sleep(Duration::from_secs(1));
            stats.print_stats(start.elapsed());
        }
    }

    producer_handle.join().expect("producer panicked");
    producer_done.store(true, Ordering::Relaxed);
    consumer_handle.join().expect("consumer panicked");

    let duration = start.elapsed();
    stats.print_stats(duration);

    let produced = stats.bytes_produced.load(Ordering::Relaxed);
    let consumed = stats.bytes_consumed.load(Ordering::Relaxed);
    let corrupt = stats.corrupt_bytes.load(Ordering::Relaxed);

    if corrupt == 0 && produced == consumed {
        println!("\n✅ PIPE VERIFIED - {} KB streamed intact", consumed / 1024);
    } else {
        println!(
            "\n⚠️  PIPE MISMATCH - produced {} consumed {} corrupt {}",
            produced, consumed, corrupt
        );
        std::process::exit(1);
    }
}

fn parse_args() -> PipeConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = PipeConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--capacity" | "-c" => {
                if i + 1 < args.len() {
                    config.capacity = args[i + 1].parse().unwrap_or(64 * 1024);
                    i += 1;
                }
            }
            "--chunk" => {
                if i + 1 < args.len() {
                    config.chunk = args[i + 1].parse().unwrap_or(512);
                    i += 1;
                }
            }
            "--duration" | "-d" => {
                if i + 1 < args.len() {
                    config.duration_secs = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--alternate" | "-a" => {
                config.alternate = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Styx Pipe - SPSC Streaming Demo\n");
                println!("Usage: styx_pipe [OPTIONS]\n");
                println!("Options:");
                println!("  -c, --capacity <BYTES>  Ring capacity (default: 65536)");
                println!("      --chunk <BYTES>     Chunk size per op (default: 512)");
                println!("  -d, --duration <SEC>    Run duration (default: 10)");
                println!("  -a, --alternate         Use alternate (mmap) backing region");
                println!("  -v, --verbose           Periodic stats output");
                println!("  -h, --help              Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn main() {
    let config = parse_args();
    run_pipe(config);
}

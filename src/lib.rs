//! Styx - Fixed-Capacity SPSC Byte Ring Buffer
//!
//! Satu writer menambah bytes, satu reader mengkonsumsi bytes, kapasitas
//! tetap. Seluruh library adalah pointer/distance algebra dari dua cursor
//! yang berjalan modulo kapasitas.
//!
//! Arsitektur:
//! - Two-Cursor Ring: free/used space dihitung dari jarak cursor, tanpa fill counter
//! - Explicit Empty Flag: ambiguitas empty/full saat cursor bertemu dipecahkan eksplisit
//! - Pluggable Backing: heap (Standard) atau anonymous mmap (Alternate)
//! - Checked Operations: overflow dan underflow ditolak, tidak pernah partial

pub mod core;

pub use crate::core::{MemoryRegion, RingBuffer, RingError};

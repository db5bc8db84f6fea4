//! Error taxonomy untuk ring buffer
//!
//! Semua failure bersifat lokal dan synchronous - tidak ada retry,
//! tidak ada logging di dalam core. Caller yang memutuskan.

use thiserror::Error;

/// Error dari operasi ring buffer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// Alokasi backing memory gagal (init atau resize)
    #[error("backing allocation of {requested} bytes failed")]
    AllocationFailed { requested: usize },

    /// Write melebihi ruang kosong - tidak ada partial write
    #[error("write of {requested} bytes rejected, only {free} bytes free")]
    Overflow { requested: usize, free: usize },

    /// Read melebihi data yang tersedia - tidak ada partial read
    #[error("read of {requested} bytes rejected, only {available} bytes buffered")]
    Underflow { requested: usize, available: usize },

    /// Storage belum dialokasikan - panggil init() dulu
    #[error("storage not allocated, call init() first")]
    Uninitialized,
}

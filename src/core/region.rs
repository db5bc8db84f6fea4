//! Backing Memory Regions: Heap vs Memory-Mapped
//!
//! Beberapa platform punya lebih dari satu memory region: working memory
//! yang cepat, dan region sekunder yang lebih besar tapi lebih lambat.
//! Di sini keduanya di-render sebagai:
//! - Standard: alokasi heap biasa (`Box<[u8]>`)
//! - Alternate: anonymous mmap region via memmap2
//!
//! Alokasi hanya terjadi lewat `Storage::allocate` - satu seam yang
//! fallible, supaya out-of-memory jadi error yang dilaporkan, bukan abort.

use memmap2::{MmapMut, MmapOptions};

use super::error::RingError;

/// Pilihan backing-memory region untuk ring buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    /// Working memory biasa (heap)
    Standard,
    /// Region sekunder - anonymous memory mapping, biasanya lebih besar
    /// tapi lebih lambat dari heap
    Alternate,
}

/// Byte region yang dimiliki eksklusif oleh satu RingBuffer
///
/// Region di-zero saat alokasi. Tidak ada aliasing: satu owner,
/// akses hanya lewat operasi read/write buffer.
pub(crate) enum Storage {
    Heap(Box<[u8]>),
    Mapped(MmapMut),
}

impl Storage {
    /// Alokasi region sebesar `len` bytes dari region yang dipilih
    ///
    /// Returns `Err(AllocationFailed)` jika request tidak bisa dipenuhi.
    pub(crate) fn allocate(region: MemoryRegion, len: usize) -> Result<Self, RingError> {
        match region {
            MemoryRegion::Standard => {
                let mut buf = Vec::new();
                buf.try_reserve_exact(len)
                    .map_err(|_| RingError::AllocationFailed { requested: len })?;
                buf.resize(len, 0);
                Ok(Storage::Heap(buf.into_boxed_slice()))
            }
            MemoryRegion::Alternate => {
                let mut mmap = MmapOptions::new()
                    .len(len)
                    .map_anon()
                    .map_err(|_| RingError::AllocationFailed { requested: len })?;

                // Akses ring bersifat sekuensial - advise kernel untuk readahead
                #[cfg(unix)]
                unsafe {
                    libc::madvise(
                        mmap.as_mut_ptr() as *mut libc::c_void,
                        len,
                        libc::MADV_SEQUENTIAL,
                    );
                }

                Ok(Storage::Mapped(mmap))
            }
        }
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Heap(buf) => buf,
            Storage::Mapped(mmap) => mmap,
        }
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Heap(buf) => buf,
            Storage::Mapped(mmap) => mmap,
        }
    }
}

//! Fixed-Capacity SPSC Byte Ring Buffer
//!
//! Dua cursor (read/write) berjalan modulo kapasitas di atas satu byte
//! region. Ruang kosong dan data terisi dihitung dari jarak antar cursor -
//! tidak ada fill counter. Ambiguitas empty/full saat kedua cursor bertemu
//! dipecahkan dengan satu flag eksplisit, bukan dengan mengorbankan satu slot.
//!
//! Storage dialokasikan lazy oleh `init`, bukan oleh constructor. Tidak ada
//! alokasi di hot path setelah init.

use super::error::RingError;
use super::region::{MemoryRegion, Storage};

/// Fixed-capacity circular byte buffer untuk streaming satu arah:
/// satu writer menambah bytes, satu reader mengkonsumsi bytes.
///
/// Semua operasi non-blocking dan fail-fast: `write` langsung gagal kalau
/// ruang tidak cukup, `read` langsung gagal kalau data tidak cukup. Caller
/// poll `available`/`available_for_write` sebelum memanggil.
///
/// Buffer tidak menginterpretasi bytes yang disimpan.
pub struct RingBuffer {
    /// Kapasitas region dalam bytes - tetap, hanya berubah lewat `resize`
    capacity: usize,
    /// Backing-memory region yang dikonfigurasi
    region: MemoryRegion,
    /// Byte region - `None` sampai `init` dipanggil
    storage: Option<Storage>,
    /// Index byte berikutnya yang akan ditulis, dalam `[0, capacity)`
    write_cursor: usize,
    /// Index byte berikutnya yang akan dibaca, dalam `[0, capacity)`
    read_cursor: usize,
    /// Disambiguator empty/full: true persis ketika buffer memegang 0 bytes.
    /// Tanpa flag ini, `read_cursor == write_cursor` bisa berarti kosong
    /// atau penuh total.
    empty: bool,
}

impl RingBuffer {
    /// Membuat ring buffer dengan kapasitas tertentu di working memory.
    ///
    /// Storage TIDAK dialokasikan di sini - panggil `init` dulu sebelum
    /// read/write.
    ///
    /// # Panics
    /// Panic jika `capacity == 0`
    pub fn new(capacity: usize) -> Self {
        Self::with_region(capacity, MemoryRegion::Standard)
    }

    /// Membuat ring buffer dengan backing-memory region yang dipilih.
    ///
    /// # Panics
    /// Panic jika `capacity == 0`
    pub fn with_region(capacity: usize, region: MemoryRegion) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            capacity,
            region,
            storage: None,
            write_cursor: 0,
            read_cursor: 0,
            empty: true,
        }
    }

    /// Alokasi storage sebesar kapasitas dari region yang dikonfigurasi.
    ///
    /// Idempotent: kalau storage sudah ada, ini no-op yang sukses -
    /// BUKAN re-init destruktif.
    pub fn init(&mut self) -> Result<(), RingError> {
        if self.storage.is_some() {
            return Ok(());
        }
        self.storage = Some(Storage::allocate(self.region, self.capacity)?);
        Ok(())
    }

    /// Ganti kapasitas (dan region) buffer.
    ///
    /// Sebelum `init`: hanya mencatat kapasitas/region baru untuk `init`
    /// berikutnya. Sesudah `init`: alokasi region baru, copy prefix
    /// `min(old, new)` bytes, swap. Cursor dipertahankan kalau keduanya
    /// masih di dalam kapasitas baru; kalau tidak, buffer rewind ke state
    /// kosong. Data logis yang sempat wrap melewati prefix tidak
    /// direkonstruksi - setelah shrink pada buffer non-empty, `reset`
    /// adalah pilihan yang aman.
    ///
    /// Kalau alokasi gagal, storage lama tetap utuh dan tetap bisa dipakai.
    ///
    /// Tidak aman dipanggil bersamaan dengan read/write yang sedang jalan -
    /// serialize secara eksternal.
    ///
    /// # Panics
    /// Panic jika `new_capacity == 0`
    #[allow(dead_code)] // Resize is part of the public API
    pub fn resize(&mut self, new_capacity: usize, region: MemoryRegion) -> Result<(), RingError> {
        assert!(new_capacity > 0, "capacity must be > 0");

        if let Some(old) = self.storage.as_ref() {
            let mut next = Storage::allocate(region, new_capacity)?;
            let keep = self.capacity.min(new_capacity);
            next.as_mut_slice()[..keep].copy_from_slice(&old.as_slice()[..keep]);
            self.storage = Some(next);

            // Cursor di luar region baru tidak bisa dipertahankan
            if self.write_cursor >= new_capacity || self.read_cursor >= new_capacity {
                self.write_cursor = 0;
                self.read_cursor = 0;
                self.empty = true;
            }
        }

        self.capacity = new_capacity;
        self.region = region;
        Ok(())
    }

    /// Jumlah bytes yang belum dibaca.
    ///
    /// Jarak maju dari read cursor ke write cursor, dengan wrap-around.
    /// Saat cursor bertemu, flag yang memutuskan: kosong berarti 0,
    /// penuh berarti kapasitas.
    ///
    /// Hanya membaca cursor dan flag - aman dievaluasi dari context
    /// manapun yang legal memegang borrow.
    #[inline(always)]
    pub fn available(&self) -> usize {
        if self.read_cursor == self.write_cursor {
            if self.empty {
                0
            } else {
                self.capacity
            }
        } else if self.write_cursor < self.read_cursor {
            self.write_cursor + (self.capacity - self.read_cursor)
        } else {
            self.write_cursor - self.read_cursor
        }
    }

    /// Jumlah bytes kosong yang boleh ditulis tanpa menyusul reader.
    ///
    /// Jarak maju dari write cursor ke read cursor, dengan wrap-around.
    /// Saat cursor bertemu, flag yang memutuskan: kosong berarti
    /// kapasitas penuh tersedia, penuh berarti 0.
    #[inline(always)]
    pub fn available_for_write(&self) -> usize {
        if self.read_cursor == self.write_cursor {
            if self.empty {
                self.capacity
            } else {
                0
            }
        } else if self.read_cursor < self.write_cursor {
            self.read_cursor + (self.capacity - self.write_cursor)
        } else {
            self.read_cursor - self.write_cursor
        }
    }

    /// Tulis `data` ke buffer mulai dari write cursor.
    ///
    /// Gagal dengan `Overflow` kalau `data.len() > available_for_write()` -
    /// tidak ada partial write, data yang belum dibaca tidak pernah
    /// ditimpa. Copy di-split dua kalau melewati akhir region: chunk tail
    /// sampai `capacity - 1`, sisanya mulai dari index 0.
    ///
    /// Write kosong (`data.len() == 0`) sukses tanpa menyentuh state.
    #[inline(always)]
    pub fn write(&mut self, data: &[u8]) -> Result<(), RingError> {
        let size = data.len();
        let free = self.available_for_write();
        let capacity = self.capacity;
        let write_cursor = self.write_cursor;

        let storage = self.storage.as_mut().ok_or(RingError::Uninitialized)?;

        if size > free {
            return Err(RingError::Overflow {
                requested: size,
                free,
            });
        }
        if size == 0 {
            return Ok(());
        }

        let buf = storage.as_mut_slice();
        let tail = capacity - write_cursor;
        if size <= tail {
            buf[write_cursor..write_cursor + size].copy_from_slice(data);
        } else {
            // Wrap: chunk tail dulu, sisanya ke head region
            buf[write_cursor..].copy_from_slice(&data[..tail]);
            buf[..size - tail].copy_from_slice(&data[tail..]);
        }

        self.write_cursor = (write_cursor + size) % capacity;
        self.empty = false;
        Ok(())
    }

    /// Baca `out.len()` bytes dari buffer mulai dari read cursor.
    ///
    /// Gagal dengan `Underflow` kalau `out.len() > available()` - tidak
    /// ada partial read, tidak ada byte basi yang keluar. Wrap-around
    /// di-split persis seperti `write`.
    ///
    /// Bytes yang sudah dikonsumsi tidak di-zero - tetap di region sampai
    /// tertimpa write berikutnya.
    #[inline(always)]
    pub fn read(&mut self, out: &mut [u8]) -> Result<(), RingError> {
        let size = out.len();
        let avail = self.available();
        let capacity = self.capacity;
        let read_cursor = self.read_cursor;

        let storage = self.storage.as_ref().ok_or(RingError::Uninitialized)?;

        if size > avail {
            return Err(RingError::Underflow {
                requested: size,
                available: avail,
            });
        }
        if size == 0 {
            return Ok(());
        }

        let buf = storage.as_slice();
        let tail = capacity - read_cursor;
        if size <= tail {
            out.copy_from_slice(&buf[read_cursor..read_cursor + size]);
        } else {
            out[..tail].copy_from_slice(&buf[read_cursor..]);
            out[tail..].copy_from_slice(&buf[..size - tail]);
        }

        self.read_cursor = (read_cursor + size) % capacity;
        // Drain habis mengembalikan buffer ke state kosong
        if self.read_cursor == self.write_cursor {
            self.empty = true;
        }
        Ok(())
    }

    /// Buang semua data yang ter-buffer secara logis.
    ///
    /// Kedua cursor rewind ke 0, flag kosong di-set. Isi storage dan
    /// kapasitas tidak disentuh (bytes tidak di-zero).
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_cursor = 0;
        self.read_cursor = 0;
        self.empty = true;
    }

    /// Kapasitas yang sudah dialokasikan, atau 0 kalau `init` belum
    /// dipanggil - pembeda buffer yang siap pakai dari yang belum.
    #[inline(always)]
    #[allow(dead_code)]
    pub fn size(&self) -> usize {
        if self.storage.is_some() {
            self.capacity
        } else {
            0
        }
    }

    /// Cek apakah buffer kosong
    #[inline(always)]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.available() == 0
    }

    /// Cek apakah buffer penuh
    #[inline(always)]
    #[allow(dead_code)]
    pub fn is_full(&self) -> bool {
        self.available_for_write() == 0
    }

    /// Backing-memory region yang dikonfigurasi
    #[inline(always)]
    #[allow(dead_code)]
    pub fn region(&self) -> MemoryRegion {
        self.region
    }

    /// True kalau buffer memakai region sekunder (mmap)
    #[inline(always)]
    #[allow(dead_code)]
    pub fn in_alternate_memory(&self) -> bool {
        self.region == MemoryRegion::Alternate
    }
}

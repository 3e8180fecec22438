//! File-backed indexed data source.
//!
//! ## Purpose
//!
//! Holds sequences too large for memory. Each element occupies one
//! fixed-width record of `U::WIDTH` bytes; element `i` lives at byte offset
//! `i * U::WIDTH`.
//!
//! ## Design notes
//!
//! * **Anonymous by default**: Backed by an unnamed temporary file that the OS removes on drop.
//! * **Named files**: A caller-chosen path may be used instead; the file is truncated to size.
//! * **Uncached**: Every `get`/`set` is one positioned read/write of a single record.
//!
//! ## Invariants
//!
//! * The file length is exactly `size * U::WIDTH` after construction.
//! * Fresh storage reads back as `U::decode` of all-zero bytes.
//!
//! ## Non-goals
//!
//! * No page cache or read-ahead.

// External dependencies
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

// Internal dependencies
use crate::primitives::codec::FixedWidthCodec;
use crate::primitives::errors::AlgebraError;
use crate::primitives::storage::{IndexedDataSource, check_index};

// ============================================================================
// File Storage
// ============================================================================

/// Fixed-width records in a file.
#[derive(Debug)]
pub struct FileStorage<U> {
    file: File,
    size: usize,
    _member: PhantomData<fn() -> U>,
}

impl<U: FixedWidthCodec> FileStorage<U> {
    /// Allocate `size` zeroed records in an anonymous temporary file.
    pub fn new(size: usize) -> Result<Self, AlgebraError> {
        let file = tempfile::tempfile()?;
        Self::with_file(file, size)
    }

    /// Allocate `size` zeroed records in an anonymous temporary file inside `dir`.
    pub fn new_in<P: AsRef<Path>>(dir: P, size: usize) -> Result<Self, AlgebraError> {
        let file = tempfile::tempfile_in(dir)?;
        Self::with_file(file, size)
    }

    /// Allocate `size` zeroed records in the file at `path`, creating or truncating it.
    pub fn create<P: AsRef<Path>>(path: P, size: usize) -> Result<Self, AlgebraError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Self::with_file(file, size)
    }

    fn with_file(file: File, size: usize) -> Result<Self, AlgebraError> {
        let bytes = size
            .checked_mul(U::WIDTH)
            .ok_or(AlgebraError::Overflow)? as u64;
        file.set_len(bytes)?;
        debug!(size, width = U::WIDTH, bytes, "allocated file-backed storage");
        Ok(Self {
            file,
            size,
            _member: PhantomData,
        })
    }

    #[inline]
    fn offset(index: usize) -> u64 {
        (index * U::WIDTH) as u64
    }
}

impl<U: FixedWidthCodec> IndexedDataSource<U> for FileStorage<U> {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        check_index(index, self.size)?;
        let mut buf = vec![0u8; U::WIDTH];
        let mut file = &self.file;
        file.seek(SeekFrom::Start(Self::offset(index)))?;
        file.read_exact(&mut buf)?;
        Ok(U::decode(&buf))
    }

    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError> {
        check_index(index, self.size)?;
        let mut buf = vec![0u8; U::WIDTH];
        value.encode(&mut buf);
        self.file.seek(SeekFrom::Start(Self::offset(index)))?;
        self.file.write_all(&buf)?;
        Ok(())
    }
}

//! Storage allocation policy.
//!
//! ## Purpose
//!
//! Decides where a new sequence lives. Small sequences go to memory;
//! sequences at or above the configured threshold go to a file so that
//! algorithms can process data larger than RAM through the same interface.
//!
//! ## Design notes
//!
//! * **Threshold**: Measured in elements. `usize::MAX` (the default) keeps everything in memory.
//! * **No-std**: Without `std` there is no file backend and every allocation is an array.
//!
//! ## Invariants
//!
//! * Freshly allocated storage holds `size` copies of the fill value.

// Feature-gated imports
#[cfg(feature = "std")]
use std::path::PathBuf;

// External dependencies
use tracing::debug;

// Internal dependencies
use crate::primitives::codec::FixedWidthCodec;
use crate::primitives::errors::AlgebraError;
#[cfg(feature = "std")]
use crate::primitives::file_storage::FileStorage;
use crate::primitives::storage::{ArrayStorage, IndexedDataSource};

// ============================================================================
// Allocated Storage
// ============================================================================

/// Storage chosen by a [`StorageAllocator`].
#[derive(Debug)]
pub enum AllocatedStorage<U> {
    /// In-memory storage.
    Array(ArrayStorage<U>),

    /// File-backed storage.
    #[cfg(feature = "std")]
    File(FileStorage<U>),
}

impl<U> AllocatedStorage<U> {
    /// True for file-backed storage.
    pub fn is_file_backed(&self) -> bool {
        !matches!(self, Self::Array(_))
    }
}

impl<U: Clone + FixedWidthCodec> IndexedDataSource<U> for AllocatedStorage<U> {
    fn size(&self) -> usize {
        match self {
            Self::Array(s) => s.size(),
            #[cfg(feature = "std")]
            Self::File(s) => s.size(),
        }
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        match self {
            Self::Array(s) => s.get(index),
            #[cfg(feature = "std")]
            Self::File(s) => s.get(index),
        }
    }

    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError> {
        match self {
            Self::Array(s) => s.set(index, value),
            #[cfg(feature = "std")]
            Self::File(s) => s.set(index, value),
        }
    }
}

// ============================================================================
// Allocator
// ============================================================================

/// Chooses array or file storage by size.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageAllocator {
    /// Element count at which storage moves to a file.
    pub(crate) file_threshold: usize,

    /// Directory for temporary files (system default when `None`).
    #[cfg(feature = "std")]
    pub(crate) directory: Option<PathBuf>,
}

impl Default for StorageAllocator {
    fn default() -> Self {
        Self {
            file_threshold: usize::MAX,
            #[cfg(feature = "std")]
            directory: None,
        }
    }
}

impl StorageAllocator {
    /// Element count at which storage moves to a file.
    pub fn file_threshold(&self) -> usize {
        self.file_threshold
    }

    /// Allocate `size` copies of `fill`.
    pub fn allocate<U>(&self, size: usize, fill: U) -> Result<AllocatedStorage<U>, AlgebraError>
    where
        U: Clone + FixedWidthCodec,
    {
        #[cfg(feature = "std")]
        if size >= self.file_threshold {
            debug!(size, threshold = self.file_threshold, "allocating file-backed storage");
            let mut storage = match &self.directory {
                Some(dir) => FileStorage::new_in(dir, size)?,
                None => FileStorage::new(size)?,
            };
            // New files read back as zero bytes; only non-zero fills need writing
            let mut encoded = vec![0u8; U::WIDTH];
            fill.encode(&mut encoded);
            if encoded.iter().any(|&b| b != 0) {
                for i in 0..size {
                    storage.set(i, &fill)?;
                }
            }
            return Ok(AllocatedStorage::File(storage));
        }

        debug!(size, "allocating array storage");
        Ok(AllocatedStorage::Array(ArrayStorage::new(size, fill)))
    }
}

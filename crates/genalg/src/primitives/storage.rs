//! Indexed data sources: the storage abstraction under every algorithm.
//!
//! ## Purpose
//!
//! Algorithms never see a `Vec` or a file. They read and write members
//! through [`IndexedDataSource`], an ordered, fixed-size, index-addressed
//! sequence. This decouples the algorithm body from memory layout so the same
//! code runs over arrays, files, computed sequences, and views.
//!
//! ## Design notes
//!
//! * **Value semantics**: `get` returns an owned member, `set` copies one in.
//!   File-backed and virtual sources cannot hand out references, so neither does the trait.
//! * **Fallible**: Every access returns `Result` so IO failures and bad indices propagate with `?`.
//! * **Views**: Trimmed, strided and reversed views wrap any source (including `&S`
//!   and `&mut S`) without copying.
//!
//! ## Key concepts
//!
//! * **ArrayStorage**: `Vec`-backed, the default. Exposes its slice via [`ContiguousStorage`].
//! * **GeneratedStorage / ConstantStorage**: Virtual, read-only sequences.
//! * **TrimmedDataSource / StridedDataSource / ReversedDataSource**: Index-remapping views.
//!
//! ## Invariants
//!
//! * `size()` never changes over the lifetime of a source.
//! * `get(i)` and `set(i, _)` fail with `IndexOutOfBounds` for `i >= size()`.
//! * Views validate their range on construction.
//!
//! ## Non-goals
//!
//! * Sources do not grow or shrink.
//! * Sources do not synchronize concurrent access (parallel passes split slices instead).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::primitives::errors::AlgebraError;

// ============================================================================
// Core Trait
// ============================================================================

/// An ordered, fixed-size sequence of members addressable by index.
pub trait IndexedDataSource<U> {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Read the element at `index`.
    fn get(&self, index: usize) -> Result<U, AlgebraError>;

    /// Overwrite the element at `index` with a copy of `value`.
    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError>;

    /// True when the source holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A source whose elements live in one contiguous slice.
///
/// Parallel passes require this to split work without locking.
pub trait ContiguousStorage<U> {
    /// The elements as a slice.
    fn as_slice(&self) -> &[U];

    /// The elements as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [U];
}

#[inline]
pub(crate) fn check_index(index: usize, size: usize) -> Result<(), AlgebraError> {
    if index >= size {
        return Err(AlgebraError::IndexOutOfBounds { index, size });
    }
    Ok(())
}

impl<U, S: IndexedDataSource<U> + ?Sized> IndexedDataSource<U> for &mut S {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        (**self).get(index)
    }

    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError> {
        (**self).set(index, value)
    }
}

/// Shared references are read-only: `set` always fails with `ReadOnly`.
impl<U, S: IndexedDataSource<U> + ?Sized> IndexedDataSource<U> for &S {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        (**self).get(index)
    }

    fn set(&mut self, _index: usize, _value: &U) -> Result<(), AlgebraError> {
        Err(AlgebraError::ReadOnly)
    }
}

// ============================================================================
// Array Storage
// ============================================================================

/// `Vec`-backed storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayStorage<U>(Vec<U>);

impl<U: Clone> ArrayStorage<U> {
    /// Allocate `size` copies of `fill`.
    pub fn new(size: usize, fill: U) -> Self {
        Self(vec![fill; size])
    }
}

impl<U> ArrayStorage<U> {
    /// Take ownership of an existing vector.
    pub fn from_vec(values: Vec<U>) -> Self {
        Self(values)
    }

    /// Release the underlying vector.
    pub fn into_vec(self) -> Vec<U> {
        self.0
    }
}

impl<U> From<Vec<U>> for ArrayStorage<U> {
    fn from(values: Vec<U>) -> Self {
        Self(values)
    }
}

impl<U: Clone> IndexedDataSource<U> for ArrayStorage<U> {
    #[inline]
    fn size(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        self.0
            .get(index)
            .cloned()
            .ok_or(AlgebraError::IndexOutOfBounds {
                index,
                size: self.0.len(),
            })
    }

    #[inline]
    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError> {
        let size = self.0.len();
        match self.0.get_mut(index) {
            Some(slot) => {
                slot.clone_from(value);
                Ok(())
            }
            None => Err(AlgebraError::IndexOutOfBounds { index, size }),
        }
    }
}

impl<U> ContiguousStorage<U> for ArrayStorage<U> {
    fn as_slice(&self) -> &[U] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [U] {
        &mut self.0
    }
}

// ============================================================================
// Virtual Storage
// ============================================================================

/// Read-only sequence whose elements are computed from their index.
pub struct GeneratedStorage<U, F> {
    size: usize,
    generator: F,
    _member: PhantomData<fn() -> U>,
}

impl<U, F: Fn(usize) -> U> GeneratedStorage<U, F> {
    /// Create a sequence of `size` elements, element `i` being `generator(i)`.
    pub fn new(size: usize, generator: F) -> Self {
        Self {
            size,
            generator,
            _member: PhantomData,
        }
    }
}

impl<U, F: Fn(usize) -> U> IndexedDataSource<U> for GeneratedStorage<U, F> {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        check_index(index, self.size)?;
        Ok((self.generator)(index))
    }

    fn set(&mut self, _index: usize, _value: &U) -> Result<(), AlgebraError> {
        Err(AlgebraError::ReadOnly)
    }
}

/// Read-only sequence of `size` copies of one value.
#[derive(Debug, Clone)]
pub struct ConstantStorage<U> {
    size: usize,
    value: U,
}

impl<U> ConstantStorage<U> {
    /// Create a constant sequence.
    pub fn new(size: usize, value: U) -> Self {
        Self { size, value }
    }
}

impl<U: Clone> IndexedDataSource<U> for ConstantStorage<U> {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        check_index(index, self.size)?;
        Ok(self.value.clone())
    }

    fn set(&mut self, _index: usize, _value: &U) -> Result<(), AlgebraError> {
        Err(AlgebraError::ReadOnly)
    }
}

// ============================================================================
// Views
// ============================================================================

/// The window `[offset, offset + len)` of another source.
#[derive(Debug, Clone)]
pub struct TrimmedDataSource<S> {
    source: S,
    offset: usize,
    len: usize,
}

impl<S> TrimmedDataSource<S> {
    /// Create a window; fails with `InvalidRange` if it exceeds the parent.
    pub fn new<U>(source: S, offset: usize, len: usize) -> Result<Self, AlgebraError>
    where
        S: IndexedDataSource<U>,
    {
        let size = source.size();
        if offset.checked_add(len).is_none_or(|end| end > size) {
            return Err(AlgebraError::InvalidRange { offset, len, size });
        }
        Ok(Self {
            source,
            offset,
            len,
        })
    }
}

impl<U, S: IndexedDataSource<U>> IndexedDataSource<U> for TrimmedDataSource<S> {
    fn size(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        check_index(index, self.len)?;
        self.source.get(self.offset + index)
    }

    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError> {
        check_index(index, self.len)?;
        self.source.set(self.offset + index, value)
    }
}

/// Every `stride`th element of another source, starting at `start`.
#[derive(Debug, Clone)]
pub struct StridedDataSource<S> {
    source: S,
    start: usize,
    stride: usize,
    count: usize,
}

impl<S> StridedDataSource<S> {
    /// Create a strided view of `count` elements.
    ///
    /// Fails with `InvalidInput` for a zero stride and `InvalidRange` when the
    /// last addressed element lies beyond the parent.
    pub fn new<U>(source: S, start: usize, stride: usize, count: usize) -> Result<Self, AlgebraError>
    where
        S: IndexedDataSource<U>,
    {
        if stride == 0 {
            return Err(AlgebraError::InvalidInput("stride must be positive".into()));
        }
        let size = source.size();
        if count > 0 {
            let last = (count - 1)
                .checked_mul(stride)
                .and_then(|span| span.checked_add(start));
            if last.is_none_or(|last| last >= size) {
                return Err(AlgebraError::InvalidRange {
                    offset: start,
                    len: count,
                    size,
                });
            }
        }
        Ok(Self {
            source,
            start,
            stride,
            count,
        })
    }
}

impl<U, S: IndexedDataSource<U>> IndexedDataSource<U> for StridedDataSource<S> {
    fn size(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        check_index(index, self.count)?;
        self.source.get(self.start + index * self.stride)
    }

    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError> {
        check_index(index, self.count)?;
        self.source.set(self.start + index * self.stride, value)
    }
}

/// Another source read back to front.
#[derive(Debug, Clone)]
pub struct ReversedDataSource<S>(S);

impl<S> ReversedDataSource<S> {
    /// Wrap a source.
    pub fn new(source: S) -> Self {
        Self(source)
    }
}

impl<U, S: IndexedDataSource<U>> IndexedDataSource<U> for ReversedDataSource<S> {
    fn size(&self) -> usize {
        self.0.size()
    }

    fn get(&self, index: usize) -> Result<U, AlgebraError> {
        let size = self.0.size();
        check_index(index, size)?;
        self.0.get(size - 1 - index)
    }

    fn set(&mut self, index: usize, value: &U) -> Result<(), AlgebraError> {
        let size = self.0.size();
        check_index(index, size)?;
        self.0.set(size - 1 - index, value)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read every element of a source into a `Vec`.
pub fn to_vec<U, S: IndexedDataSource<U> + ?Sized>(source: &S) -> Result<Vec<U>, AlgebraError> {
    let mut out = Vec::with_capacity(source.size());
    for i in 0..source.size() {
        out.push(source.get(i)?);
    }
    Ok(out)
}

/// Fail with `SizeMismatch` unless both sizes agree.
#[inline]
pub(crate) fn check_same_size(expected: usize, got: usize) -> Result<(), AlgebraError> {
    if expected != got {
        return Err(AlgebraError::SizeMismatch { expected, got });
    }
    Ok(())
}

#![cfg(feature = "dev")]
//! Tests for indexed data sources and storage allocation.
//!
//! These tests verify the storage layer that every algorithm reads through:
//! - In-memory, generated and constant sources
//! - Window, strided and reversed views
//! - File-backed storage and the allocator that chooses it
//!
//! ## Test Organization
//!
//! 1. **Array Storage** - Basic reads, writes and bounds
//! 2. **Virtual Storage** - Generated and constant sequences
//! 3. **Views** - Trimmed, strided, reversed
//! 4. **File Storage** - Records in temporary files
//! 5. **Allocator** - Threshold policy and builder validation

use genalg::prelude::*;

// ============================================================================
// Array Storage Tests
// ============================================================================

/// Test reads and writes on array storage.
#[test]
fn test_array_storage_get_set() {
    let mut data = ArrayStorage::new(4, 0i32);
    assert_eq!(data.size(), 4);
    assert!(!data.is_empty());

    data.set(2, &7).unwrap();
    assert_eq!(data.get(2).unwrap(), 7);
    assert_eq!(data.as_slice(), &[0, 0, 7, 0]);
}

/// Test out-of-range access.
///
/// Verifies that both reads and writes report the index and size.
#[test]
fn test_array_storage_out_of_bounds() {
    let mut data = ArrayStorage::from_vec(vec![1.0, 2.0]);
    assert_eq!(
        data.get(2),
        Err(AlgebraError::IndexOutOfBounds { index: 2, size: 2 })
    );
    assert_eq!(
        data.set(5, &0.0),
        Err(AlgebraError::IndexOutOfBounds { index: 5, size: 2 })
    );
}

/// Test that a shared reference is a read-only source.
#[test]
fn test_shared_reference_is_read_only() {
    let data = ArrayStorage::from_vec(vec![1u8, 2, 3]);
    let mut view = &data;
    assert_eq!(view.get(1).unwrap(), 2);
    assert_eq!(
        <&ArrayStorage<u8> as IndexedDataSource<u8>>::set(&mut view, 0, &9),
        Err(AlgebraError::ReadOnly)
    );
}

/// Test an empty source.
#[test]
fn test_empty_storage() {
    let data: ArrayStorage<f64> = ArrayStorage::from_vec(Vec::new());
    assert!(data.is_empty());
    assert_eq!(data.into_vec(), Vec::<f64>::new());
}

// ============================================================================
// Virtual Storage Tests
// ============================================================================

/// Test a generated sequence.
#[test]
fn test_generated_storage() {
    let mut squares = GeneratedStorage::new(5, |i| (i * i) as i64);
    assert_eq!(squares.size(), 5);
    assert_eq!(squares.get(4).unwrap(), 16);
    assert_eq!(squares.set(0, &1), Err(AlgebraError::ReadOnly));
    assert!(squares.get(5).is_err());
}

/// Test a constant sequence feeding a reduction.
#[test]
fn test_constant_storage_sum() {
    let ones = ConstantStorage::new(1000, 1u32);
    let total = genalg::algorithms::sequence::sum(&UINT32, &ones).unwrap();
    assert_eq!(total, 1000);
}

// ============================================================================
// View Tests
// ============================================================================

/// Test a window over a parent source.
///
/// Verifies that writes through the window land in the parent.
#[test]
fn test_trimmed_view_writes_through() {
    let mut data = ArrayStorage::from_vec(vec![0, 1, 2, 3, 4, 5]);
    {
        let mut window = TrimmedDataSource::new(&mut data, 2, 3).unwrap();
        assert_eq!(window.size(), 3);
        assert_eq!(window.get(0).unwrap(), 2);
        window.set(2, &40).unwrap();
        assert!(window.get(3).is_err());
    }
    assert_eq!(data.as_slice(), &[0, 1, 2, 3, 40, 5]);
}

/// Test that windows exceeding the parent are rejected.
#[test]
fn test_trimmed_view_invalid_range() {
    let data = ArrayStorage::from_vec(vec![1.0; 4]);
    let err = TrimmedDataSource::new(&data, 3, 2).unwrap_err();
    assert_eq!(
        err,
        AlgebraError::InvalidRange {
            offset: 3,
            len: 2,
            size: 4
        }
    );
    assert!(TrimmedDataSource::new(&data, usize::MAX, 2).is_err());
}

/// Test a strided view.
#[test]
fn test_strided_view() {
    let data = ArrayStorage::from_vec((0..10).collect::<Vec<i32>>());
    let odds = StridedDataSource::new(&data, 1, 2, 5).unwrap();
    assert_eq!(to_vec(&odds).unwrap(), vec![1, 3, 5, 7, 9]);

    assert!(StridedDataSource::new(&data, 1, 2, 6).is_err());
    assert!(matches!(
        StridedDataSource::new(&data, 0, 0, 3),
        Err(AlgebraError::InvalidInput(_))
    ));
}

/// Test a reversed view and writes through it.
#[test]
fn test_reversed_view() {
    let mut data = ArrayStorage::from_vec(vec![1, 2, 3]);
    {
        let mut rev = ReversedDataSource::new(&mut data);
        assert_eq!(rev.get(0).unwrap(), 3);
        rev.set(0, &30).unwrap();
    }
    assert_eq!(data.as_slice(), &[1, 2, 30]);
}

// ============================================================================
// File Storage Tests
// ============================================================================

/// Test that new file storage reads back as zero.
#[test]
fn test_file_storage_zeroed() {
    let storage: FileStorage<f64> = FileStorage::new(8).unwrap();
    assert_eq!(storage.size(), 8);
    for i in 0..8 {
        assert_eq!(storage.get(i).unwrap(), 0.0);
    }
}

/// Test writes and reads of complex records in a named file.
#[test]
fn test_file_storage_complex_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.bin");
    let mut storage: FileStorage<Complex<f64>> = FileStorage::create(&path, 3).unwrap();

    storage.set(1, &Complex::new(1.5, -2.0)).unwrap();
    assert_eq!(storage.get(1).unwrap(), Complex::new(1.5, -2.0));
    assert_eq!(storage.get(0).unwrap(), Complex::new(0.0, 0.0));
    assert!(storage.get(3).is_err());

    let len = std::fs::metadata(&path).unwrap().len();
    assert_eq!(len, 3 * <Complex<f64> as FixedWidthCodec>::WIDTH as u64);
}

/// A caller-defined record with its own binary layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Sample {
    id: u16,
    value: f32,
}

impl FixedWidthCodec for Sample {
    const WIDTH: usize = 6;

    fn encode(&self, buf: &mut [u8]) {
        self.id.encode(&mut buf[..2]);
        self.value.encode(&mut buf[2..6]);
    }

    fn decode(buf: &[u8]) -> Self {
        Self {
            id: u16::decode(&buf[..2]),
            value: f32::decode(&buf[2..6]),
        }
    }
}

/// Test storing a caller-defined record type in a file.
#[test]
fn test_file_storage_custom_records() {
    let mut storage: FileStorage<Sample> = FileStorage::new(3).unwrap();
    let sample = Sample {
        id: 7,
        value: -0.25,
    };
    storage.set(2, &sample).unwrap();
    assert_eq!(
        to_vec(&storage).unwrap(),
        vec![Sample::default(), Sample::default(), sample]
    );
}

/// Test sorting directly in a file.
#[test]
fn test_file_storage_sort() {
    let mut storage: FileStorage<i16> = FileStorage::new(5).unwrap();
    for (i, v) in [5i16, -3, 9, 0, 2].iter().enumerate() {
        storage.set(i, v).unwrap();
    }
    genalg::algorithms::sort::sort(&INT16, &mut storage).unwrap();
    let values: Vec<i16> = (0..5).map(|i| storage.get(i).unwrap()).collect();
    assert_eq!(values, vec![-3, 0, 2, 5, 9]);
}

// ============================================================================
// Allocator Tests
// ============================================================================

/// Test that the default allocator keeps everything in memory.
#[test]
fn test_allocator_default_in_memory() {
    let allocator = StorageBuilder::new().build().unwrap();
    assert_eq!(allocator.file_threshold(), usize::MAX);
    let storage = allocator.allocate(100, 1.0f32).unwrap();
    assert!(!storage.is_file_backed());
    assert_eq!(storage.get(99).unwrap(), 1.0);
}

/// Test that allocations at the threshold move to a file with the fill applied.
#[test]
fn test_allocator_file_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let allocator = StorageBuilder::new()
        .file_threshold(16)
        .directory(dir.path())
        .build()
        .unwrap();

    let small = allocator.allocate(15, 3i64).unwrap();
    assert!(!small.is_file_backed());

    let mut large = allocator.allocate(16, 3i64).unwrap();
    assert!(large.is_file_backed());
    assert_eq!(large.get(15).unwrap(), 3);
    large.set(0, &-1).unwrap();
    assert_eq!(large.get(0).unwrap(), -1);
}

/// Test builder validation.
#[test]
fn test_storage_builder_validation() {
    let err = StorageBuilder::new()
        .file_threshold(1)
        .file_threshold(2)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        AlgebraError::DuplicateParameter {
            parameter: "file_threshold"
        }
    );

    let missing = std::env::temp_dir().join("genalg-no-such-directory-4f1c");
    let err = StorageBuilder::new().directory(missing).build().unwrap_err();
    assert!(matches!(err, AlgebraError::InvalidInput(_)));
}

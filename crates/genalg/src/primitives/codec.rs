//! Fixed-width binary encoding of members.
//!
//! ## Purpose
//!
//! File-backed storage keeps every element in a record of identical byte
//! width so that element `i` lives at byte offset `i * WIDTH`. This module
//! defines that encoding for the primitive member types.
//!
//! ## Invariants
//!
//! * `encode` writes exactly `WIDTH` bytes; `decode` reads exactly `WIDTH` bytes.
//! * All encodings are little-endian.
//! * `decode(encode(v)) == v` bit for bit (NaN payloads included).

// External dependencies
use num_complex::Complex;

// ============================================================================
// Codec Trait
// ============================================================================

/// A member type with a fixed-size little-endian binary layout.
pub trait FixedWidthCodec: Sized {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Write `Self::WIDTH` bytes into the front of `buf`.
    fn encode(&self, buf: &mut [u8]);

    /// Read a value from the first `Self::WIDTH` bytes of `buf`.
    fn decode(buf: &[u8]) -> Self;
}

macro_rules! impl_codec_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl FixedWidthCodec for $t {
                const WIDTH: usize = core::mem::size_of::<$t>();

                #[inline]
                fn encode(&self, buf: &mut [u8]) {
                    buf[..Self::WIDTH].copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn decode(buf: &[u8]) -> Self {
                    let mut bytes = [0u8; core::mem::size_of::<$t>()];
                    bytes.copy_from_slice(&buf[..Self::WIDTH]);
                    <$t>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_codec_primitive!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: FixedWidthCodec> FixedWidthCodec for Complex<T> {
    const WIDTH: usize = 2 * T::WIDTH;

    fn encode(&self, buf: &mut [u8]) {
        self.re.encode(&mut buf[..T::WIDTH]);
        self.im.encode(&mut buf[T::WIDTH..Self::WIDTH]);
    }

    fn decode(buf: &[u8]) -> Self {
        Complex::new(T::decode(&buf[..T::WIDTH]), T::decode(&buf[T::WIDTH..]))
    }
}

use crate::encoding::varint::VarUint;

/// Signed integers that can be folded into an unsigned, magnitude-ordered counterpart.
///
/// The mapping interleaves signs so that `0, -1, 1, -2, 2, ...` become `0, 1, 2, 3, 4, ...`.
/// All arithmetic stays at the native width of `Self`; the wraparound of `n << 1` is what
/// sends the minimum value to the all-ones pattern.
pub trait ZigZag: Copy + private::Sealed {
    /// Unsigned integer of the same width.
    type Unsigned: VarUint;

    /// Maps a signed value to its zigzag form.
    fn zigzag_encode(self) -> Self::Unsigned;

    /// Inverse of [`ZigZag::zigzag_encode`].
    fn zigzag_decode(raw: Self::Unsigned) -> Self;
}

mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

macro_rules! impl_zigzag {
    ($signed:ty, $unsigned:ty) => {
        impl ZigZag for $signed {
            type Unsigned = $unsigned;

            #[inline]
            fn zigzag_encode(self) -> $unsigned {
                ((self << 1) ^ (self >> (<$signed>::BITS - 1))) as $unsigned
            }

            #[inline]
            fn zigzag_decode(raw: $unsigned) -> $signed {
                ((raw >> 1) as $signed) ^ -((raw & 1) as $signed)
            }
        }
    };
}

impl_zigzag!(i32, u32);
impl_zigzag!(i64, u64);

/// Zigzag-encodes a 32-bit signed integer.
#[inline]
pub fn zigzag_encode_32(value: i32) -> u32 {
    value.zigzag_encode()
}

/// Zigzag-decodes a 32-bit unsigned integer.
#[inline]
pub fn zigzag_decode_32(raw: u32) -> i32 {
    i32::zigzag_decode(raw)
}

/// Zigzag-encodes a 64-bit signed integer.
#[inline]
pub fn zigzag_encode_64(value: i64) -> u64 {
    value.zigzag_encode()
}

/// Zigzag-decodes a 64-bit unsigned integer.
#[inline]
pub fn zigzag_decode_64(raw: u64) -> i64 {
    i64::zigzag_decode(raw)
}

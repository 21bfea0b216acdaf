//! Base-128 continuation engine shared by the 32-bit and 64-bit codecs.

use bytes::BufMut;

use crate::encoding::decoder::{Canonicality, DecodeOptions, ExcessBits};
use crate::error::{Error, Result};

/// Maximum number of bytes a 32-bit value can occupy.
pub const MAX_LEN_32: usize = 5;
/// Maximum number of bytes a 64-bit value can occupy.
pub const MAX_LEN_64: usize = 10;

const PAYLOAD_MASK: u8 = 0x7f;
const CONTINUATION: u8 = 0x80;

/// Fixed-width unsigned integers carried by the continuation encoding.
///
/// Sealed; only `u32` and `u64` implement it.
pub trait VarUint: Copy + private::Sealed {
    /// Bit width of the integer.
    const BITS: u32;
    /// Maximum number of encoded bytes.
    const MAX_LEN: usize;
    /// Payload bits of the final group that still fit the width.
    const FINAL_GROUP_MASK: u8 =
        ((1u32 << (Self::BITS - 7 * (Self::MAX_LEN as u32 - 1))) - 1) as u8;
    #[doc(hidden)]
    const ZERO: Self;

    #[doc(hidden)]
    fn low_group(self) -> u8;
    #[doc(hidden)]
    fn shr7(self) -> Self;
    #[doc(hidden)]
    fn is_zero(self) -> bool;
    /// ORs `group` into the value at group position `index`, discarding bits past the width.
    #[doc(hidden)]
    fn with_group(self, group: u8, index: usize) -> Self;
    #[doc(hidden)]
    fn significant_bits(self) -> u32;
}

mod private {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

macro_rules! impl_var_uint {
    ($ty:ty, $max_len:expr) => {
        impl VarUint for $ty {
            const BITS: u32 = <$ty>::BITS;
            const MAX_LEN: usize = $max_len;
            const ZERO: Self = 0;

            #[inline]
            fn low_group(self) -> u8 {
                (self as u8) & PAYLOAD_MASK
            }

            #[inline]
            fn shr7(self) -> Self {
                self >> 7
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn with_group(self, group: u8, index: usize) -> Self {
                self | ((group as $ty) << (7 * index as u32))
            }

            #[inline]
            fn significant_bits(self) -> u32 {
                <$ty>::BITS - self.leading_zeros()
            }
        }
    };
}

impl_var_uint!(u32, MAX_LEN_32);
impl_var_uint!(u64, MAX_LEN_64);

/// Appends `value` as little-endian 7-bit groups to `out`, returning the number of bytes written.
pub(crate) fn encode_uvarint<U: VarUint, B: BufMut>(mut value: U, out: &mut B) -> usize {
    let mut written = 0;
    loop {
        let byte = value.low_group();
        value = value.shr7();
        written += 1;
        if value.is_zero() {
            out.put_u8(byte);
            return written;
        }
        out.put_u8(byte | CONTINUATION);
    }
}

/// Number of bytes [`encode_uvarint`] emits for `value`.
#[inline]
pub(crate) fn uvarint_len<U: VarUint>(value: U) -> usize {
    value.significant_bits().max(1).div_ceil(7) as usize
}

/// Incremental decoder state fed one byte at a time.
///
/// Every byte source (slices, `Buf`, `Read`, `AsyncRead`) drives the same state so the
/// width checks and policy handling live in one place.
pub(crate) struct Accumulator<U> {
    value: U,
    consumed: usize,
    options: DecodeOptions,
}

impl<U: VarUint> Accumulator<U> {
    pub(crate) fn new(options: DecodeOptions) -> Self {
        Self {
            value: U::ZERO,
            consumed: 0,
            options,
        }
    }

    /// Bytes accepted so far.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    /// Feeds the next byte, yielding the raw value once the terminating byte is seen.
    pub(crate) fn push(&mut self, byte: u8) -> Result<Option<U>> {
        let index = self.consumed;
        let group = byte & PAYLOAD_MASK;
        self.consumed += 1;

        if byte & CONTINUATION != 0 {
            if self.consumed == U::MAX_LEN {
                return Err(Error::Overlong {
                    max_len: U::MAX_LEN,
                });
            }
            self.value = self.value.with_group(group, index);
            return Ok(None);
        }

        let is_final_group = index + 1 == U::MAX_LEN;
        if is_final_group
            && group & !U::FINAL_GROUP_MASK != 0
            && self.options.excess_bits == ExcessBits::Reject
        {
            return Err(Error::ExcessBits { width: U::BITS });
        }
        // Only in-range bits count; a final group holding nothing else adds no value.
        let kept = if is_final_group {
            group & U::FINAL_GROUP_MASK
        } else {
            group
        };
        if index > 0 && kept == 0 && self.options.canonical == Canonicality::Strict {
            return Err(Error::NonCanonical {
                len: self.consumed,
            });
        }

        self.value = self.value.with_group(group, index);
        Ok(Some(self.value))
    }
}

use bytes::BufMut;
use smallvec::SmallVec;

use crate::encoding::decoder::Decoder;
use crate::encoding::varint::{MAX_LEN_64, encode_uvarint, uvarint_len};
use crate::encoding::zigzag::ZigZag;
use crate::error::Result;

/// Inline buffer large enough for any encoded value.
pub type EncodedBytes = SmallVec<[u8; MAX_LEN_64]>;

/// Encodes a signed integer using ZigZag + varint encoding, appending to `out`.
///
/// Returns the number of bytes written.
pub fn encode_signed<T: ZigZag, B: BufMut>(value: T, out: &mut B) -> usize {
    encode_uvarint(value.zigzag_encode(), out)
}

/// Encodes a signed integer into an inline buffer.
pub fn encode_to_array<T: ZigZag>(value: T) -> EncodedBytes {
    let mut buf = [0u8; MAX_LEN_64];
    let len = encode_signed(value, &mut &mut buf[..]);
    SmallVec::from_buf_and_len(buf, len)
}

/// Number of bytes [`encode_signed`] would write for `value`.
pub fn encoded_len<T: ZigZag>(value: T) -> usize {
    uvarint_len(value.zigzag_encode())
}

/// Decodes a signed integer at `input[*offset]` with the default (lenient) decoder.
pub fn decode_signed<T: ZigZag>(input: &[u8], offset: &mut usize) -> Result<T> {
    Decoder::new().decode(input, offset)
}

/// Appends the 1 to 5 byte encoding of a 32-bit signed integer.
pub fn encode_var_int<B: BufMut>(value: i32, out: &mut B) -> usize {
    encode_signed(value, out)
}

/// Appends the 1 to 10 byte encoding of a 64-bit signed integer.
pub fn encode_var_long<B: BufMut>(value: i64, out: &mut B) -> usize {
    encode_signed(value, out)
}

/// Decodes a 32-bit signed integer at `input[*offset]`, advancing `offset` past it.
pub fn decode_var_int(input: &[u8], offset: &mut usize) -> Result<i32> {
    decode_signed(input, offset)
}

/// Decodes a 64-bit signed integer at `input[*offset]`, advancing `offset` past it.
pub fn decode_var_long(input: &[u8], offset: &mut usize) -> Result<i64> {
    decode_signed(input, offset)
}

/// Decodes a 32-bit signed integer, returning the value and bytes consumed.
pub fn decode_var_int_with_len(input: &[u8]) -> Result<(i32, usize)> {
    Decoder::new().decode_with_len(input)
}

/// Decodes a 64-bit signed integer, returning the value and bytes consumed.
pub fn decode_var_long_with_len(input: &[u8]) -> Result<(i64, usize)> {
    Decoder::new().decode_with_len(input)
}

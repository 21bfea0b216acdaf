//! Encoding helpers (zig-zag folding, base-128 varints, decode policies).

mod decoder;
mod varint;
mod varint_signed;
mod zigzag;

pub use decoder::{Canonicality, DecodeOptions, Decoder, DecoderBuilder, ExcessBits};
#[cfg(feature = "async")]
pub(crate) use varint::Accumulator;
pub use varint::{MAX_LEN_32, MAX_LEN_64, VarUint};
pub use varint_signed::{
    EncodedBytes, decode_signed, decode_var_int, decode_var_int_with_len, decode_var_long,
    decode_var_long_with_len, encode_signed, encode_to_array, encode_var_int, encode_var_long,
    encoded_len,
};
pub use zigzag::{ZigZag, zigzag_decode_32, zigzag_decode_64, zigzag_encode_32, zigzag_encode_64};

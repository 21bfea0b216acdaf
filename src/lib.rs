#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Zig-zag folding, the base-128 continuation engine, and the signed codecs built on them.
pub mod encoding;
/// Shared error and result types.
pub mod error;
/// Read/write adapters for `std::io` streams and `bytes` buffers.
pub mod io;

#[cfg(feature = "async")]
pub mod async_support;

pub use encoding::{
    Canonicality, DecodeOptions, Decoder, DecoderBuilder, EncodedBytes, ExcessBits, MAX_LEN_32,
    MAX_LEN_64, ZigZag, decode_var_int, decode_var_int_with_len, decode_var_long,
    decode_var_long_with_len, encode_to_array, encode_var_int, encode_var_long, encoded_len,
};
pub use error::{Error, Result};
pub use io::{ReadVarIntExt, VarIntBufExt, VarIntBufMutExt, WriteVarIntExt};

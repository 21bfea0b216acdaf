use std::io::{Read, Write};

use crate::encoding::{Decoder, ZigZag, encode_to_array};
use crate::error::Result;

/// Reads zigzag varints directly from any [`Read`] implementation.
///
/// Bytes are pulled one at a time, so the reader is left positioned right after the value.
/// Wrap unbuffered sources in a `BufReader`.
pub trait ReadVarIntExt: Read {
    /// Reads a 32-bit signed integer.
    fn read_var_int(&mut self) -> Result<i32> {
        Decoder::new().read(self)
    }

    /// Reads a 64-bit signed integer.
    fn read_var_long(&mut self) -> Result<i64> {
        Decoder::new().read(self)
    }

    /// Reads a signed integer of either width using `decoder`'s policies.
    fn read_signed_with<T: ZigZag>(&mut self, decoder: &Decoder) -> Result<T> {
        decoder.read(self)
    }
}

impl<R: Read + ?Sized> ReadVarIntExt for R {}

/// Writes zigzag varints to any [`Write`] implementation.
pub trait WriteVarIntExt: Write {
    /// Writes a 32-bit signed integer, returning the number of bytes written.
    fn write_var_int(&mut self, value: i32) -> Result<usize> {
        self.write_signed(value)
    }

    /// Writes a 64-bit signed integer, returning the number of bytes written.
    fn write_var_long(&mut self, value: i64) -> Result<usize> {
        self.write_signed(value)
    }

    /// Writes a signed integer of either width, returning the number of bytes written.
    fn write_signed<T: ZigZag>(&mut self, value: T) -> Result<usize> {
        let encoded = encode_to_array(value);
        self.write_all(&encoded)?;
        Ok(encoded.len())
    }
}

impl<W: Write + ?Sized> WriteVarIntExt for W {}

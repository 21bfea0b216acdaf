use bytes::{Buf, BufMut};

use crate::encoding::{Decoder, encode_signed};
use crate::error::Result;

/// Varint getters for [`bytes::Buf`] cursors.
pub trait VarIntBufExt: Buf {
    /// Reads a 32-bit signed integer, advancing the buffer past it.
    fn get_var_int(&mut self) -> Result<i32>
    where
        Self: Sized,
    {
        Decoder::new().decode_buf(self)
    }

    /// Reads a 64-bit signed integer, advancing the buffer past it.
    fn get_var_long(&mut self) -> Result<i64>
    where
        Self: Sized,
    {
        Decoder::new().decode_buf(self)
    }
}

impl<B: Buf + ?Sized> VarIntBufExt for B {}

/// Varint putters for [`bytes::BufMut`] sinks.
pub trait VarIntBufMutExt: BufMut {
    /// Appends a 32-bit signed integer, returning the number of bytes written.
    fn put_var_int(&mut self, value: i32) -> usize
    where
        Self: Sized,
    {
        encode_signed(value, self)
    }

    /// Appends a 64-bit signed integer, returning the number of bytes written.
    fn put_var_long(&mut self, value: i64) -> usize
    where
        Self: Sized,
    {
        encode_signed(value, self)
    }
}

impl<B: BufMut + ?Sized> VarIntBufMutExt for B {}

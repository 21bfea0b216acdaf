//! Async helpers that read and write zigzag varints over tokio streams.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::encoding::{Accumulator, Decoder, ZigZag, encode_to_array};
use crate::error::{Error, Result};

/// Reads a signed integer of either width from `reader` using `decoder`'s policies.
///
/// Bytes are pulled one at a time; wrap unbuffered sources in a `tokio::io::BufReader`.
pub async fn read_signed_with<T, R>(reader: &mut R, decoder: &Decoder) -> Result<T>
where
    T: ZigZag,
    R: AsyncRead + Unpin + ?Sized,
{
    let mut acc = Accumulator::<T::Unsigned>::new(*decoder.options());
    loop {
        let byte = reader
            .read_u8()
            .await
            .map_err(|err| Error::from_read(err, acc.consumed()))?;
        if let Some(raw) = acc.push(byte)? {
            return Ok(T::zigzag_decode(raw));
        }
    }
}

/// Reads a 32-bit signed integer with the default decoder.
pub async fn read_var_int<R>(reader: &mut R) -> Result<i32>
where
    R: AsyncRead + Unpin + ?Sized,
{
    read_signed_with(reader, &Decoder::new()).await
}

/// Reads a 64-bit signed integer with the default decoder.
pub async fn read_var_long<R>(reader: &mut R) -> Result<i64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    read_signed_with(reader, &Decoder::new()).await
}

/// Writes a signed integer of either width, returning the number of bytes written.
pub async fn write_signed<T, W>(writer: &mut W, value: T) -> Result<usize>
where
    T: ZigZag,
    W: AsyncWrite + Unpin + ?Sized,
{
    let encoded = encode_to_array(value);
    writer.write_all(&encoded).await?;
    Ok(encoded.len())
}

/// Writes a 32-bit signed integer, returning the number of bytes written.
pub async fn write_var_int<W>(writer: &mut W, value: i32) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_signed(writer, value).await
}

/// Writes a 64-bit signed integer, returning the number of bytes written.
pub async fn write_var_long<W>(writer: &mut W, value: i64) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_signed(writer, value).await
}

use std::io::Read;

use bytes::Buf;

use crate::encoding::varint::Accumulator;
use crate::encoding::zigzag::ZigZag;
use crate::error::{Error, Result};

/// Handling of payload bits that fall beyond the integer width in the final group.
///
/// The fifth byte of a 32-bit value only has four meaningful bits and the tenth byte of a
/// 64-bit value only one; encoders always leave the rest clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcessBits {
    /// Silently drop the out-of-range bits.
    #[default]
    Mask,
    /// Fail with [`Error::ExcessBits`].
    Reject,
}

/// Handling of encodings that end in a redundant zero group, such as `0x80 0x00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Canonicality {
    /// Accept and decode them like the shortest form.
    #[default]
    Lenient,
    /// Fail with [`Error::NonCanonical`].
    Strict,
}

/// Controls how a [`Decoder`] treats malformed input.
///
/// Truncated input and values longer than the width allows are always errors; these
/// options only govern the two cases that can still be decoded unambiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Policy for bits beyond the width in the final group.
    pub excess_bits: ExcessBits,
    /// Policy for redundant trailing zero groups.
    pub canonical: Canonicality,
}

impl DecodeOptions {
    /// Options that reject every encoding the encoder would not have produced.
    pub const STRICT: Self = Self {
        excess_bits: ExcessBits::Reject,
        canonical: Canonicality::Strict,
    };
}

/// Builder used to configure and construct a [`Decoder`].
#[derive(Debug, Clone, Default)]
pub struct DecoderBuilder {
    options: DecodeOptions,
}

impl DecoderBuilder {
    /// Creates a builder with lenient defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides decode options wholesale.
    pub fn options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Selects the policy for out-of-range bits in the final group.
    pub fn excess_bits(mut self, policy: ExcessBits) -> Self {
        self.options.excess_bits = policy;
        self
    }

    /// Selects the policy for redundant trailing zero groups.
    pub fn canonical(mut self, policy: Canonicality) -> Self {
        self.options.canonical = policy;
        self
    }

    /// Rejects every non-canonical form when `true`, restores lenient defaults when `false`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options = if strict {
            DecodeOptions::STRICT
        } else {
            DecodeOptions::default()
        };
        self
    }

    /// Consumes the builder, constructing the decoder.
    pub fn build(self) -> Decoder {
        Decoder {
            options: self.options,
        }
    }
}

/// Zigzag varint decoder for any supported width.
///
/// A decoder is a plain value holding its [`DecodeOptions`]; copy it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Decoder with lenient defaults.
    pub const fn new() -> Self {
        Self {
            options: DecodeOptions {
                excess_bits: ExcessBits::Mask,
                canonical: Canonicality::Lenient,
            },
        }
    }

    /// Decoder that rejects non-canonical input and out-of-range bits.
    pub const fn strict() -> Self {
        Self {
            options: DecodeOptions::STRICT,
        }
    }

    /// Returns a builder for custom policies.
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    /// Returns the options this decoder applies.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes a value starting at `input[*offset]`.
    ///
    /// On success `offset` is advanced by exactly the number of bytes consumed; on failure it
    /// is left untouched. An offset at or past the end of `input` reports truncation.
    pub fn decode<T: ZigZag>(&self, input: &[u8], offset: &mut usize) -> Result<T> {
        let start = *offset;
        let tail = input.get(start..).unwrap_or_default();
        let (value, consumed) = self.decode_raw::<T>(tail).inspect_err(|err| {
            tracing::debug!(offset = start, error = %err, "rejected varint");
        })?;
        *offset = start + consumed;
        Ok(value)
    }

    /// Decodes a value from the front of `input`, returning it with the number of bytes consumed.
    pub fn decode_with_len<T: ZigZag>(&self, input: &[u8]) -> Result<(T, usize)> {
        self.decode_raw(input).inspect_err(|err| {
            tracing::debug!(error = %err, "rejected varint");
        })
    }

    /// Decodes a value from the front of `input`, advancing the slice on success.
    pub fn decode_slice<T: ZigZag>(&self, input: &mut &[u8]) -> Result<T> {
        let tail: &[u8] = *input;
        let (value, consumed) = self.decode_with_len::<T>(tail)?;
        *input = &tail[consumed..];
        Ok(value)
    }

    /// Decodes a value from a [`Buf`]. Bytes examined before a failure stay consumed.
    pub fn decode_buf<T: ZigZag, B: Buf>(&self, buf: &mut B) -> Result<T> {
        let mut acc = Accumulator::<T::Unsigned>::new(self.options);
        let mut pull = || -> Result<T::Unsigned> {
            while buf.has_remaining() {
                if let Some(raw) = acc.push(buf.get_u8())? {
                    return Ok(raw);
                }
            }
            Err(Error::truncated(acc.consumed()))
        };
        let raw = pull().inspect_err(|err| {
            tracing::debug!(error = %err, "rejected varint");
        })?;
        Ok(T::zigzag_decode(raw))
    }

    /// Reads a value from `reader` one byte at a time, never reading past its last byte.
    pub fn read<T: ZigZag, R: Read + ?Sized>(&self, reader: &mut R) -> Result<T> {
        let mut acc = Accumulator::<T::Unsigned>::new(self.options);
        let mut buf = [0u8; 1];
        loop {
            reader
                .read_exact(&mut buf)
                .map_err(|err| Error::from_read(err, acc.consumed()))?;
            if let Some(raw) = acc.push(buf[0])? {
                return Ok(T::zigzag_decode(raw));
            }
        }
    }

    fn decode_raw<T: ZigZag>(&self, input: &[u8]) -> Result<(T, usize)> {
        let mut acc = Accumulator::<T::Unsigned>::new(self.options);
        for &byte in input {
            if let Some(raw) = acc.push(byte)? {
                return Ok((T::zigzag_decode(raw), acc.consumed()));
            }
        }
        Err(Error::truncated(acc.consumed()))
    }
}

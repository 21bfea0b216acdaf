use std::io;

/// Convenient alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can be produced while reading or writing variable-length integers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Wrapper around standard I/O errors other than end-of-file.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before a byte without the continuation bit was seen.
    #[error("unexpected end of input after {consumed} varint byte(s)")]
    Truncated {
        /// Number of bytes consumed before the input ran out.
        consumed: usize,
    },

    /// The continuation bit was still set on the last byte the width allows.
    #[error("varint exceeds maximum length of {max_len} bytes")]
    Overlong {
        /// Maximum encoded length for the requested width.
        max_len: usize,
    },

    /// The final group carries payload bits that do not fit the width.
    #[error("varint carries bits beyond the {width}-bit range")]
    ExcessBits {
        /// Bit width of the integer being decoded.
        width: u32,
    },

    /// A multi-byte value ended in a redundant zero group.
    #[error("non-canonical varint encoding of {len} bytes")]
    NonCanonical {
        /// Length of the rejected encoding.
        len: usize,
    },
}

impl Error {
    pub(crate) fn truncated(consumed: usize) -> Self {
        Self::Truncated { consumed }
    }

    /// Maps an I/O failure while pulling the next byte, treating EOF as truncation.
    pub(crate) fn from_read(err: io::Error, consumed: usize) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::truncated(consumed)
        } else {
            Self::Io(err)
        }
    }

    /// Returns `true` when the error reports malformed encoded data rather than I/O trouble.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

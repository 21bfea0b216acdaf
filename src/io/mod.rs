//! Adapters that read and write zigzag varints through common byte-stream abstractions.

mod buf;
mod streaming;

pub use buf::{VarIntBufExt, VarIntBufMutExt};
pub use streaming::{ReadVarIntExt, WriteVarIntExt};

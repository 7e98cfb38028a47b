//! Byte sources feeding the record decoders.
//!
//! The decoders only ever read forward: a source hands out exactly the number
//! of bytes requested or fails with `SourceError::Truncated`. File access and
//! buffering stay here so the decoders remain pure over a cursor.

mod error;
mod io;
mod slice;

pub use error::SourceError;
pub use io::IoSource;
pub use slice::SliceSource;

/// Sequential, forward-only byte cursor.
pub trait ByteSource {
    /// Fill `buf` completely or fail without panicking.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError>;

    /// Discard `count` bytes.
    fn skip(&mut self, count: u64) -> Result<(), SourceError> {
        let mut scratch = [0u8; 256];
        let mut left = count;
        while left > 0 {
            let chunk = left.min(scratch.len() as u64) as usize;
            self.read_exact(&mut scratch[..chunk])?;
            left -= chunk as u64;
        }
        Ok(())
    }

    /// Bytes consumed since the source was created.
    fn position(&self) -> u64;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        (**self).read_exact(buf)
    }

    fn skip(&mut self, count: u64) -> Result<(), SourceError> {
        (**self).skip(count)
    }

    fn position(&self) -> u64 {
        (**self).position()
    }
}

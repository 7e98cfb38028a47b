use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{ByteSource, SourceError};

/// Source backed by any `std::io::Read` implementation.
///
/// End of input is reported as `SourceError::Truncated` with the number of
/// bytes that were still available; other I/O failures pass through as
/// `SourceError::Io`.
pub struct IoSource<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl IoSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.pos += filled as u64;
                    return Err(SourceError::Truncated {
                        needed: buf.len() as u64,
                        available: filled as u64,
                    });
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => return Err(SourceError::Io(err)),
            }
        }
        self.pos += filled as u64;
        Ok(())
    }

    fn skip(&mut self, count: u64) -> Result<(), SourceError> {
        let copied = std::io::copy(&mut self.inner.by_ref().take(count), &mut std::io::sink())?;
        self.pos += copied;
        if copied < count {
            return Err(SourceError::Truncated {
                needed: count,
                available: copied,
            });
        }
        Ok(())
    }

    fn position(&self) -> u64 {
        self.pos
    }
}

use super::{ByteSource, SourceError};

/// In-memory source over a borrowed byte slice.
///
/// # Examples
/// ```
/// use mtstream_core::{ByteSource, SliceSource};
///
/// let mut source = SliceSource::new(&[1, 2, 3]);
/// let mut buf = [0u8; 2];
/// source.read_exact(&mut buf).unwrap();
/// assert_eq!(buf, [1, 2]);
/// assert_eq!(source.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Unread tail of the underlying slice.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        let end = self
            .pos
            .checked_add(buf.len())
            .filter(|end| *end <= self.data.len())
            .ok_or(SourceError::Truncated {
                needed: buf.len() as u64,
                available: self.remaining() as u64,
            })?;
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    fn skip(&mut self, count: u64) -> Result<(), SourceError> {
        let remaining = self.remaining() as u64;
        if count > remaining {
            return Err(SourceError::Truncated {
                needed: count,
                available: remaining,
            });
        }
        self.pos += count as usize;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.pos as u64
    }
}

#[cfg(test)]
mod tests {
    use super::SliceSource;
    use crate::source::{ByteSource, SourceError};

    #[test]
    fn read_past_end_leaves_cursor() {
        let mut source = SliceSource::new(&[1, 2, 3]);
        let mut buf = [0u8; 4];
        let err = source.read_exact(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Truncated {
                needed: 4,
                available: 3
            }
        ));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn skip_advances_and_bounds() {
        let mut source = SliceSource::new(&[0u8; 8]);
        source.skip(5).unwrap();
        assert_eq!(source.position(), 5);
        assert!(source.skip(4).is_err());
        source.skip(3).unwrap();
        assert_eq!(source.remaining(), 0);
    }
}

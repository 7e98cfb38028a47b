use serde::Serialize;

use super::error::DecodeError;
use super::layout;
use super::primitives::RawName;
use super::{DataObjectType, SerializationProperties, SystemType};
use crate::options::{DecodeOptions, TrailingBytesPolicy};
use crate::source::{ByteSource, SourceError};

const READ_CHUNK: usize = 4096;

/// Byte order of multi-byte integers in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Unswapped streams store little-endian integers.
    pub fn from_swapped(is_byte_swapped: bool) -> Self {
        if is_byte_swapped {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

/// Cursor-side field decoding with the session's byte order and limits.
///
/// Integers always go through the byte-order path; raw blocks are copied
/// verbatim. The reader counts every byte it consumes so records carrying a
/// declared size can be checked against what was actually read.
pub struct FieldReader<'a, S: ?Sized> {
    source: &'a mut S,
    props: SerializationProperties,
    options: &'a DecodeOptions,
    order: ByteOrder,
    consumed: u64,
}

impl<'a, S: ByteSource + ?Sized> FieldReader<'a, S> {
    pub fn new(
        source: &'a mut S,
        props: SerializationProperties,
        options: &'a DecodeOptions,
    ) -> Self {
        Self {
            source,
            props,
            options,
            order: ByteOrder::from_swapped(props.is_byte_swapped),
            consumed: 0,
        }
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn system_type(&self) -> SystemType {
        self.props.system_type
    }

    pub fn options(&self) -> &DecodeOptions {
        self.options
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        self.source.read_exact(&mut buf)?;
        self.consumed += N as u64;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_array::<2>()?;
        Ok(match self.order {
            ByteOrder::Little => u16::from_le_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
        })
    }

    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        let bytes = self.read_array::<2>()?;
        Ok(match self.order {
            ByteOrder::Little => i16::from_le_bytes(bytes),
            ByteOrder::Big => i16::from_be_bytes(bytes),
        })
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_array::<4>()?;
        Ok(match self.order {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        })
    }

    /// Read `len` raw bytes, growing the buffer as data arrives so a bogus
    /// length cannot force a large allocation up front.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::with_capacity(len.min(READ_CHUNK));
        let mut chunk = [0u8; READ_CHUNK];
        while out.len() < len {
            let take = (len - out.len()).min(READ_CHUNK);
            match self.source.read_exact(&mut chunk[..take]) {
                Ok(()) => {}
                Err(SourceError::Truncated { available, .. }) => {
                    return Err(DecodeError::Truncated {
                        needed: (len - out.len()) as u64,
                        available,
                    });
                }
                Err(err) => return Err(err.into()),
            }
            out.extend_from_slice(&chunk[..take]);
            self.consumed += take as u64;
        }
        Ok(out)
    }

    pub fn skip(&mut self, count: u64) -> Result<(), DecodeError> {
        self.source.skip(count)?;
        self.consumed += count;
        Ok(())
    }

    /// Read a name whose length was decoded earlier in the record.
    pub fn read_name(&mut self, object: DataObjectType, len: u32) -> Result<RawName, DecodeError> {
        if len > self.options.max_name_length {
            return Err(DecodeError::InconsistentLength {
                object,
                field: "name_length",
                declared: len as u64,
                actual: self.options.max_name_length as u64,
            });
        }
        Ok(RawName::from(self.read_bytes(len as usize)?))
    }

    pub fn check_marker(
        &self,
        object: DataObjectType,
        expected: u32,
        actual: u32,
    ) -> Result<(), DecodeError> {
        if self.options.verify_markers && actual != expected {
            return Err(DecodeError::InvalidMarker {
                object,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Bytes of the record consumed so far, framing included.
    pub fn record_len(&self) -> u64 {
        layout::RECORD_HEADER_LEN + self.consumed
    }

    /// Reconcile a declared size-including-tag with the bytes consumed.
    ///
    /// A declared size below what was read is an error; any excess is
    /// skipped or rejected according to the session's trailing-bytes policy.
    pub fn finish_declared_size(
        &mut self,
        object: DataObjectType,
        declared: u32,
    ) -> Result<(), DecodeError> {
        let declared = declared as u64;
        let actual = self.record_len();
        if declared < actual {
            return Err(DecodeError::InconsistentLength {
                object,
                field: "size_including_tag",
                declared,
                actual,
            });
        }
        let excess = declared - actual;
        if excess == 0 {
            return Ok(());
        }
        match self.options.trailing_bytes {
            TrailingBytesPolicy::Skip => {
                tracing::warn!(
                    object = ?object,
                    declared,
                    consumed = actual,
                    "Skipping undecoded trailing bytes"
                );
                self.skip(excess)
            }
            TrailingBytesPolicy::Reject => Err(DecodeError::InconsistentLength {
                object,
                field: "size_including_tag",
                declared,
                actual,
            }),
        }
    }

    /// Check that a size covering data stored outside the record is at least
    /// as large as the record itself.
    pub fn check_covering_size(
        &self,
        object: DataObjectType,
        field: &'static str,
        declared: u32,
    ) -> Result<(), DecodeError> {
        let actual = self.record_len();
        if (declared as u64) < actual {
            return Err(DecodeError::InconsistentLength {
                object,
                field,
                declared: declared as u64,
                actual,
            });
        }
        Ok(())
    }
}

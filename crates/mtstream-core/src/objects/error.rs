use thiserror::Error;

use super::DataObjectType;
use crate::source::SourceError;

/// Errors returned by record decoding.
///
/// Every variant is local to the record being decoded: the caller decides
/// whether to abort the container walk or skip the record. After an error the
/// source cursor position is unspecified.
///
/// # Examples
/// ```
/// use mtstream_core::{DataObjectType, DecodeError};
///
/// let err = DecodeError::InvalidMarker {
///     object: DataObjectType::Debris,
///     expected: 0xDEBB_EEFD,
///     actual: 0,
/// };
/// assert!(err.to_string().contains("invalid marker"));
/// ```
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record truncated: need {needed} bytes, got {available}")]
    Truncated { needed: u64, available: u64 },
    #[error("invalid marker for {object:?}: expected {expected:#010x}, got {actual:#010x}")]
    InvalidMarker {
        object: DataObjectType,
        expected: u32,
        actual: u32,
    },
    #[error("inconsistent {field} for {object:?}: declared {declared}, actual {actual}")]
    InconsistentLength {
        object: DataObjectType,
        field: &'static str,
        declared: u64,
        actual: u64,
    },
    #[error("unsupported revision {revision} for {object:?}")]
    UnsupportedRevision {
        object: DataObjectType,
        revision: u16,
    },
    #[error("label tree nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

impl From<SourceError> for DecodeError {
    fn from(value: SourceError) -> Self {
        match value {
            SourceError::Truncated { needed, available } => {
                DecodeError::Truncated { needed, available }
            }
            SourceError::Io(err) => DecodeError::Io(err),
        }
    }
}

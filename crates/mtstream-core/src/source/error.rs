use thiserror::Error;

/// Errors returned by byte sources.
///
/// # Examples
/// ```
/// use mtstream_core::SourceError;
///
/// let err = SourceError::Truncated { needed: 4, available: 1 };
/// assert!(err.to_string().contains("need 4 bytes"));
/// ```
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source exhausted: need {needed} bytes, got {available}")]
    Truncated { needed: u64, available: u64 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

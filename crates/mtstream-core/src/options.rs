//! Decode session configuration.
//!
//! Options are plain data: they can be built in code or loaded from JSON, and
//! every field falls back to its default when omitted.

use serde::{Deserialize, Serialize};

/// How to treat a revision outside a variant's known layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionPolicy {
    /// Decode with the closest known layout and log a warning.
    #[default]
    Nearest,
    /// Fail with `DecodeError::UnsupportedRevision`.
    Strict,
}

/// What to do when a declared record size exceeds the bytes a decoder used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBytesPolicy {
    /// Consume the excess as opaque bytes.
    #[default]
    Skip,
    /// Fail with `DecodeError::InconsistentLength`.
    Reject,
}

/// Options shared by every record decoded in a session.
///
/// # Examples
/// ```
/// use mtstream_core::{DecodeOptions, RevisionPolicy};
///
/// let options = DecodeOptions::from_json_str(r#"{ "revision_policy": "strict" }"#).unwrap();
/// assert_eq!(options.revision_policy, RevisionPolicy::Strict);
/// assert!(options.verify_markers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub revision_policy: RevisionPolicy,
    /// Compare fixed validation words against their expected constants.
    pub verify_markers: bool,
    /// Check the asset catalog's name total against its entries' names.
    pub verify_name_totals: bool,
    pub trailing_bytes: TrailingBytesPolicy,
    /// Upper bound for any declared name length, checked before allocating.
    pub max_name_length: u32,
    /// Upper bound for label tree nesting.
    pub max_label_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            revision_policy: RevisionPolicy::Nearest,
            verify_markers: true,
            verify_name_totals: true,
            trailing_bytes: TrailingBytesPolicy::Skip,
            max_name_length: u16::MAX as u32,
            max_label_depth: 64,
        }
    }
}

impl DecodeOptions {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

//! Concrete record decoders.
//!
//! Each record type reads its fields in wire order through `FieldReader`:
//! preamble (marker and/or declared size), fixed fields, revision-gated
//! fields, the name, then any platform-specific tail. Decoders build a new
//! value and never expose a partially decoded one.

use std::ops::RangeInclusive;

use super::error::DecodeError;
use super::reader::FieldReader;
use super::{DataObjectType, SerializationProperties};
use crate::options::{DecodeOptions, RevisionPolicy};
use crate::source::ByteSource;

pub mod assets;
pub mod catalog;
pub mod label_map;
pub mod modifiers;
pub mod placeholder;
pub mod stream;
pub mod structural;

/// A record shape with a fixed type and a known revision range.
pub(crate) trait Record: Sized {
    const TYPE: DataObjectType;
    const REVISIONS: RangeInclusive<u16>;

    /// Decode the record body; `revision` is already within `REVISIONS`.
    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError>;
}

pub(crate) fn decode_record<T: Record, S: ByteSource + ?Sized>(
    source: &mut S,
    revision: u16,
    props: SerializationProperties,
    options: &DecodeOptions,
) -> Result<T, DecodeError> {
    let layout_revision =
        resolve_revision(T::TYPE, &T::REVISIONS, revision, options.revision_policy)?;
    let mut reader = FieldReader::new(source, props, options);
    let record = T::decode(&mut reader, layout_revision)?;
    tracing::debug!(
        object = ?T::TYPE,
        revision,
        bytes = reader.record_len(),
        "Decoded record"
    );
    Ok(record)
}

/// Map a wire revision onto a known layout according to `policy`.
pub(crate) fn resolve_revision(
    object: DataObjectType,
    known: &RangeInclusive<u16>,
    revision: u16,
    policy: RevisionPolicy,
) -> Result<u16, DecodeError> {
    if known.contains(&revision) {
        return Ok(revision);
    }
    match policy {
        RevisionPolicy::Strict => Err(DecodeError::UnsupportedRevision { object, revision }),
        RevisionPolicy::Nearest => {
            let nearest = revision.clamp(*known.start(), *known.end());
            tracing::warn!(
                object = ?object,
                revision,
                layout_revision = nearest,
                "Unknown revision, decoding with nearest known layout"
            );
            Ok(nearest)
        }
    }
}

/// Exactly one platform-specific tail of a record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "platform", content = "part")]
pub enum PlatformPart<M, W> {
    Mac(M),
    Windows(W),
}

impl<M, W> PlatformPart<M, W> {
    pub fn mac(&self) -> Option<&M> {
        match self {
            PlatformPart::Mac(part) => Some(part),
            PlatformPart::Windows(_) => None,
        }
    }

    pub fn windows(&self) -> Option<&W> {
        match self {
            PlatformPart::Mac(_) => None,
            PlatformPart::Windows(part) => Some(part),
        }
    }
}

//! Shape-agnostic stand-in for record kinds without a decoder.
//!
//! A placeholder reads the common `unknown`/`size_including_tag` preamble and
//! skips the rest of the record, which keeps the caller's cursor on the next
//! record boundary.

use serde::Serialize;

use crate::objects::error::DecodeError;
use crate::objects::layout;
use crate::objects::reader::FieldReader;
use crate::objects::{DataObjectType, SerializationProperties};
use crate::options::DecodeOptions;
use crate::source::ByteSource;

/// Known record kinds that are recognised but not decoded.
const NOT_YET_IMPLEMENTED: &[(u32, &str)] = &[
    (0x000a, "Sound element"),
    (0x0027, "Alias modifier"),
    (0x0136, "Change scene modifier"),
    (0x01a4, "Sound effect modifier"),
    (0x0208, "Drag motion modifier"),
    (0x021b, "Path motion modifier"),
    (0x0226, "Vector motion modifier"),
    (0x026c, "Scene transition modifier"),
    (0x02bc, "If messenger modifier"),
    (0x02c7, "Compound variable modifier"),
    (0x02da, "Messenger modifier"),
    (0x02df, "Set modifier"),
    (0x02e4, "Timer messenger modifier"),
    (0x02ee, "Collision detection messenger modifier"),
    (0x02f8, "Boundary detection messenger modifier"),
    (0x0302, "Keyboard messenger modifier"),
    (0x0321, "Boolean variable modifier"),
    (0x0322, "Integer variable modifier"),
    (0x0324, "Integer range variable modifier"),
    (0x0326, "Point variable modifier"),
    (0x0327, "Vector variable modifier"),
    (0x0328, "Floating point variable modifier"),
    (0x0329, "String variable modifier"),
    (0x032a, "Text style modifier"),
    (0x0334, "Graphic modifier"),
    (0x0384, "Image effect modifier"),
    (0x03c0, "Miniscript modifier"),
    (0x04b0, "Gradient modifier"),
    (0x04c4, "Color table modifier"),
    (0x04d8, "Save and restore modifier"),
];

/// Label of a recognised-but-undecoded record kind.
pub fn not_yet_implemented_label(tag: u32) -> Option<&'static str> {
    NOT_YET_IMPLEMENTED
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, label)| *label)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// `NotYetImplemented` or `Unknown`.
    pub object_type: DataObjectType,
    /// Raw tag read from the stream.
    pub tag: u32,
    pub label: &'static str,
    pub revision: u16,
    pub unknown: u32,
    pub size_including_tag: u32,
}

impl Placeholder {
    /// Placeholder for `tag`, labelled from the static table when known.
    pub fn for_tag(tag: u32) -> Self {
        let (object_type, label) = match not_yet_implemented_label(tag) {
            Some(label) => (DataObjectType::NotYetImplemented, label),
            None => (DataObjectType::Unknown, "Unknown"),
        };
        Self {
            object_type,
            tag,
            label,
            revision: 0,
            unknown: 0,
            size_including_tag: 0,
        }
    }

    /// Consume the record as opaque bytes; any revision is accepted.
    pub(crate) fn decode<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
        revision: u16,
        props: SerializationProperties,
        options: &DecodeOptions,
    ) -> Result<Self, DecodeError> {
        let mut r = FieldReader::new(source, props, options);
        let unknown = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let declared = size_including_tag as u64;
        if declared < layout::PLACEHOLDER_PREAMBLE_LEN {
            return Err(DecodeError::InconsistentLength {
                object: self.object_type,
                field: "size_including_tag",
                declared,
                actual: layout::PLACEHOLDER_PREAMBLE_LEN,
            });
        }
        r.skip(declared - r.record_len())?;
        tracing::debug!(
            tag = self.tag,
            label = self.label,
            revision,
            bytes = r.record_len(),
            "Skipped record"
        );

        Ok(Placeholder {
            object_type: self.object_type,
            tag: self.tag,
            label: self.label,
            revision,
            unknown,
            size_including_tag,
        })
    }
}

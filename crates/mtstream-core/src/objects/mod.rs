//! Data object records.
//!
//! Decoding follows a layered structure:
//! - `layout`: tags, markers, revision ranges and flag bits (source of truth)
//! - `reader`: byte-order aware field access and size accounting
//! - `records`: one decoder per record shape (no direct byte handling)
//! - `factory`: tag dispatch onto empty records
//! - `error`: explicit, actionable errors
//!
//! Decoders are pure over a `ByteSource`; the container walk that discovers
//! tags and platform belongs to the caller.

use serde::Serialize;

use crate::options::DecodeOptions;
use crate::source::ByteSource;

mod error;
mod factory;
pub(crate) mod layout;
mod primitives;
mod reader;
pub mod records;

pub use error::DecodeError;
pub use factory::{create_object_from_type, read_record};
pub use primitives::{Event, Point, RawName, Rect};
pub use reader::{ByteOrder, FieldReader};

use records::assets::{AudioAsset, ColorTableAsset, MovieAsset};
use records::catalog::AssetCatalog;
use records::decode_record;
use records::label_map::ProjectLabelMap;
use records::modifiers::{BehaviorModifier, MacOnlyCursorModifier, PlugInModifier};
use records::placeholder::Placeholder;
use records::stream::{Debris, EndOfStream, StreamHeader, Unknown17, Unknown19, Unknown3ec};
use records::structural::{
    ImageStructuralDef, MToonStructuralDef, MovieStructuralDef, ProjectStructuralDef,
    SceneStructuralDef, SectionStructuralDef, SubsectionStructuralDef,
};

/// Authoring platform of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SystemType {
    Mac,
    Windows,
}

/// Per-stream decoding context, fixed for a whole decode session.
///
/// `is_byte_swapped` selects big-endian integers (Mac streams); the system
/// type selects platform tails and Rect/Point field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SerializationProperties {
    pub is_byte_swapped: bool,
    pub system_type: SystemType,
}

impl SerializationProperties {
    pub fn mac() -> Self {
        Self {
            is_byte_swapped: true,
            system_type: SystemType::Mac,
        }
    }

    pub fn windows() -> Self {
        Self {
            is_byte_swapped: false,
            system_type: SystemType::Windows,
        }
    }
}

/// Kind of a data object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataObjectType {
    Unknown,
    StreamHeader,
    Unknown3ec,
    Unknown17,
    Unknown19,
    Debris,
    ProjectLabelMap,
    AssetCatalog,
    ProjectStructuralDef,
    SectionStructuralDef,
    SubsectionStructuralDef,
    SceneStructuralDef,
    ImageStructuralDef,
    MovieStructuralDef,
    MToonStructuralDef,
    BehaviorModifier,
    PlugInModifier,
    MacOnlyCursorModifier,
    ColorTableAsset,
    AudioAsset,
    MovieAsset,
    EndOfStream,
    NotYetImplemented,
}

impl DataObjectType {
    /// Every kind with a wire tag of its own.
    pub const TAGGED: [DataObjectType; 21] = [
        DataObjectType::StreamHeader,
        DataObjectType::Unknown3ec,
        DataObjectType::Unknown17,
        DataObjectType::Unknown19,
        DataObjectType::Debris,
        DataObjectType::ProjectLabelMap,
        DataObjectType::AssetCatalog,
        DataObjectType::ProjectStructuralDef,
        DataObjectType::SectionStructuralDef,
        DataObjectType::SubsectionStructuralDef,
        DataObjectType::SceneStructuralDef,
        DataObjectType::ImageStructuralDef,
        DataObjectType::MovieStructuralDef,
        DataObjectType::MToonStructuralDef,
        DataObjectType::BehaviorModifier,
        DataObjectType::PlugInModifier,
        DataObjectType::MacOnlyCursorModifier,
        DataObjectType::ColorTableAsset,
        DataObjectType::AudioAsset,
        DataObjectType::MovieAsset,
        DataObjectType::EndOfStream,
    ];

    /// Wire tag, or `None` for the placeholder kinds.
    pub fn tag(self) -> Option<u32> {
        let tag = match self {
            DataObjectType::StreamHeader => layout::TAG_STREAM_HEADER,
            DataObjectType::Unknown3ec => layout::TAG_UNKNOWN_3EC,
            DataObjectType::Unknown17 => layout::TAG_UNKNOWN_17,
            DataObjectType::Unknown19 => layout::TAG_UNKNOWN_19,
            DataObjectType::Debris => layout::TAG_DEBRIS,
            DataObjectType::ProjectLabelMap => layout::TAG_PROJECT_LABEL_MAP,
            DataObjectType::AssetCatalog => layout::TAG_ASSET_CATALOG,
            DataObjectType::ProjectStructuralDef => layout::TAG_PROJECT_STRUCTURAL_DEF,
            DataObjectType::SectionStructuralDef => layout::TAG_SECTION_STRUCTURAL_DEF,
            DataObjectType::SubsectionStructuralDef => layout::TAG_SUBSECTION_STRUCTURAL_DEF,
            DataObjectType::SceneStructuralDef => layout::TAG_SCENE_STRUCTURAL_DEF,
            DataObjectType::ImageStructuralDef => layout::TAG_IMAGE_STRUCTURAL_DEF,
            DataObjectType::MovieStructuralDef => layout::TAG_MOVIE_STRUCTURAL_DEF,
            DataObjectType::MToonStructuralDef => layout::TAG_MTOON_STRUCTURAL_DEF,
            DataObjectType::BehaviorModifier => layout::TAG_BEHAVIOR_MODIFIER,
            DataObjectType::PlugInModifier => layout::TAG_PLUG_IN_MODIFIER,
            DataObjectType::MacOnlyCursorModifier => layout::TAG_MAC_ONLY_CURSOR_MODIFIER,
            DataObjectType::ColorTableAsset => layout::TAG_COLOR_TABLE_ASSET,
            DataObjectType::AudioAsset => layout::TAG_AUDIO_ASSET,
            DataObjectType::MovieAsset => layout::TAG_MOVIE_ASSET,
            DataObjectType::EndOfStream => layout::TAG_END_OF_STREAM,
            DataObjectType::Unknown | DataObjectType::NotYetImplemented => return None,
        };
        Some(tag)
    }

    /// Kind carrying `tag`, if it has a decoder.
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::TAGGED.into_iter().find(|kind| kind.tag() == Some(tag))
    }
}

/// A decoded (or still empty) record.
///
/// Values come from `create_object_from_type` and are filled by `decode`,
/// which replaces the value only when the whole record decoded.
///
/// # Examples
/// ```
/// use mtstream_core::{
///     DataObjectType, SerializationProperties, SliceSource, create_object_from_type,
/// };
///
/// // Debris: marker and a size of 14 (6 framing + 8 body bytes), big-endian.
/// let body = [0xDE, 0xBB, 0xEE, 0xFD, 0, 0, 0, 14];
/// let mut object = create_object_from_type(0xFFFF_FFFE);
/// object.decode(&mut SliceSource::new(&body), 0, &SerializationProperties::mac())?;
/// assert_eq!(object.object_type(), DataObjectType::Debris);
/// # Ok::<(), mtstream_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum DataObject {
    StreamHeader(StreamHeader),
    Unknown3ec(Unknown3ec),
    Unknown17(Unknown17),
    Unknown19(Unknown19),
    Debris(Debris),
    ProjectLabelMap(ProjectLabelMap),
    AssetCatalog(AssetCatalog),
    ProjectStructuralDef(ProjectStructuralDef),
    SectionStructuralDef(SectionStructuralDef),
    SubsectionStructuralDef(SubsectionStructuralDef),
    SceneStructuralDef(SceneStructuralDef),
    ImageStructuralDef(ImageStructuralDef),
    MovieStructuralDef(MovieStructuralDef),
    MToonStructuralDef(MToonStructuralDef),
    BehaviorModifier(BehaviorModifier),
    PlugInModifier(PlugInModifier),
    MacOnlyCursorModifier(MacOnlyCursorModifier),
    ColorTableAsset(ColorTableAsset),
    AudioAsset(AudioAsset),
    MovieAsset(MovieAsset),
    EndOfStream(EndOfStream),
    Placeholder(Placeholder),
}

impl DataObject {
    pub fn object_type(&self) -> DataObjectType {
        match self {
            DataObject::StreamHeader(_) => DataObjectType::StreamHeader,
            DataObject::Unknown3ec(_) => DataObjectType::Unknown3ec,
            DataObject::Unknown17(_) => DataObjectType::Unknown17,
            DataObject::Unknown19(_) => DataObjectType::Unknown19,
            DataObject::Debris(_) => DataObjectType::Debris,
            DataObject::ProjectLabelMap(_) => DataObjectType::ProjectLabelMap,
            DataObject::AssetCatalog(_) => DataObjectType::AssetCatalog,
            DataObject::ProjectStructuralDef(_) => DataObjectType::ProjectStructuralDef,
            DataObject::SectionStructuralDef(_) => DataObjectType::SectionStructuralDef,
            DataObject::SubsectionStructuralDef(_) => DataObjectType::SubsectionStructuralDef,
            DataObject::SceneStructuralDef(_) => DataObjectType::SceneStructuralDef,
            DataObject::ImageStructuralDef(_) => DataObjectType::ImageStructuralDef,
            DataObject::MovieStructuralDef(_) => DataObjectType::MovieStructuralDef,
            DataObject::MToonStructuralDef(_) => DataObjectType::MToonStructuralDef,
            DataObject::BehaviorModifier(_) => DataObjectType::BehaviorModifier,
            DataObject::PlugInModifier(_) => DataObjectType::PlugInModifier,
            DataObject::MacOnlyCursorModifier(_) => DataObjectType::MacOnlyCursorModifier,
            DataObject::ColorTableAsset(_) => DataObjectType::ColorTableAsset,
            DataObject::AudioAsset(_) => DataObjectType::AudioAsset,
            DataObject::MovieAsset(_) => DataObjectType::MovieAsset,
            DataObject::EndOfStream(_) => DataObjectType::EndOfStream,
            DataObject::Placeholder(p) => p.object_type,
        }
    }

    /// Wire tag this object was created from.
    pub fn type_tag(&self) -> u32 {
        match self {
            DataObject::Placeholder(p) => p.tag,
            // Every non-placeholder kind has a tag.
            other => other.object_type().tag().unwrap_or_default(),
        }
    }

    /// Decode the record body with default options.
    pub fn decode<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        revision: u16,
        props: &SerializationProperties,
    ) -> Result<(), DecodeError> {
        self.decode_with_options(source, revision, props, &DecodeOptions::default())
    }

    /// Decode the record body; `self` is left untouched on failure.
    pub fn decode_with_options<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        revision: u16,
        props: &SerializationProperties,
        options: &DecodeOptions,
    ) -> Result<(), DecodeError> {
        let props = *props;
        let decoded = match self {
            DataObject::StreamHeader(_) => {
                DataObject::StreamHeader(decode_record(source, revision, props, options)?)
            }
            DataObject::Unknown3ec(_) => {
                DataObject::Unknown3ec(decode_record(source, revision, props, options)?)
            }
            DataObject::Unknown17(_) => {
                DataObject::Unknown17(decode_record(source, revision, props, options)?)
            }
            DataObject::Unknown19(_) => {
                DataObject::Unknown19(decode_record(source, revision, props, options)?)
            }
            DataObject::Debris(_) => {
                DataObject::Debris(decode_record(source, revision, props, options)?)
            }
            DataObject::ProjectLabelMap(_) => {
                DataObject::ProjectLabelMap(decode_record(source, revision, props, options)?)
            }
            DataObject::AssetCatalog(_) => {
                DataObject::AssetCatalog(decode_record(source, revision, props, options)?)
            }
            DataObject::ProjectStructuralDef(_) => {
                DataObject::ProjectStructuralDef(decode_record(source, revision, props, options)?)
            }
            DataObject::SectionStructuralDef(_) => {
                DataObject::SectionStructuralDef(decode_record(source, revision, props, options)?)
            }
            DataObject::SubsectionStructuralDef(_) => DataObject::SubsectionStructuralDef(
                decode_record(source, revision, props, options)?,
            ),
            DataObject::SceneStructuralDef(_) => {
                DataObject::SceneStructuralDef(decode_record(source, revision, props, options)?)
            }
            DataObject::ImageStructuralDef(_) => {
                DataObject::ImageStructuralDef(decode_record(source, revision, props, options)?)
            }
            DataObject::MovieStructuralDef(_) => {
                DataObject::MovieStructuralDef(decode_record(source, revision, props, options)?)
            }
            DataObject::MToonStructuralDef(_) => {
                DataObject::MToonStructuralDef(decode_record(source, revision, props, options)?)
            }
            DataObject::BehaviorModifier(_) => {
                DataObject::BehaviorModifier(decode_record(source, revision, props, options)?)
            }
            DataObject::PlugInModifier(_) => {
                DataObject::PlugInModifier(decode_record(source, revision, props, options)?)
            }
            DataObject::MacOnlyCursorModifier(_) => {
                DataObject::MacOnlyCursorModifier(decode_record(source, revision, props, options)?)
            }
            DataObject::ColorTableAsset(_) => {
                DataObject::ColorTableAsset(decode_record(source, revision, props, options)?)
            }
            DataObject::AudioAsset(_) => {
                DataObject::AudioAsset(decode_record(source, revision, props, options)?)
            }
            DataObject::MovieAsset(_) => {
                DataObject::MovieAsset(decode_record(source, revision, props, options)?)
            }
            DataObject::EndOfStream(_) => {
                DataObject::EndOfStream(decode_record(source, revision, props, options)?)
            }
            DataObject::Placeholder(p) => {
                DataObject::Placeholder(p.decode(source, revision, props, options)?)
            }
        };
        *self = decoded;
        Ok(())
    }
}

//! mtstream core library: typed decoding of authoring-tool project streams.
//!
//! A project stream is a sequence of framed data object records. Each record
//! carries a type tag selecting its shape, a revision gating optional fields,
//! and depends on the authoring platform for byte order and for one of two
//! platform-specific trailing parts. This crate decodes one record at a time:
//! the factory maps a tag onto an empty `DataObject`, which `decode` fills from
//! a forward-only `ByteSource`. Walking a whole container is up to the caller.
//!
//! Invariants:
//! - Every multi-byte integer goes through the stream's byte order.
//! - A decode consumes exactly its record's bytes or returns an error.
//! - A failed decode never exposes a partially filled object.
//!
//! Version française (résumé):
//! Cette crate décode, enregistrement par enregistrement, les flux de projet
//! d'un outil auteur : fabrique par étiquette -> décodage typé depuis une
//! `ByteSource` séquentielle. L'ordre des octets et la partie spécifique à la
//! plateforme dépendent des `SerializationProperties` de la session.
//!
//! # Examples
//! ```
//! use mtstream_core::{
//!     DataObject, DecodeOptions, SerializationProperties, SliceSource, read_record,
//! };
//!
//! // Windows stream: end-of-stream record (tag 0x3e8, revision 0).
//! let bytes = [0xe8, 0x03, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0];
//! let mut source = SliceSource::new(&bytes);
//! let object = read_record(
//!     &mut source,
//!     &SerializationProperties::windows(),
//!     &DecodeOptions::default(),
//! )?;
//! assert!(matches!(object, DataObject::EndOfStream(_)));
//! # Ok::<(), mtstream_core::DecodeError>(())
//! ```

mod objects;
mod options;
mod source;

pub use objects::records::PlatformPart;
pub use objects::records::assets::{
    AudioAsset, AudioEncoding, AudioMacPart, AudioWinPart, ColorDef, ColorTableAsset, MovieAsset,
    MovieMacPart, MovieWinPart,
};
pub use objects::records::catalog::{AssetCatalog, AssetInfo, AssetType};
pub use objects::records::label_map::{LabelTree, ProjectLabelMap, SuperGroup};
pub use objects::records::modifiers::{
    BehaviorModifier, CursorKind, MacCursorPart, MacOnlyCursorModifier, PlugInModifier,
    WinCursorPart,
};
pub use objects::records::placeholder::{Placeholder, not_yet_implemented_label};
pub use objects::records::stream::{
    Debris, EndOfStream, StreamHeader, Unknown17, Unknown19, Unknown3ec,
};
pub use objects::records::structural::{
    AnimationFlags, ImageStructuralDef, MToonStructuralDef, MovieStructuralDef,
    ProjectStructuralDef, SceneStructuralDef, SectionStructuralDef, StructuralFlags,
    SubsectionStructuralDef,
};
pub use objects::{
    ByteOrder, DataObject, DataObjectType, DecodeError, Event, FieldReader, Point, RawName, Rect,
    SerializationProperties, SystemType, create_object_from_type, read_record,
};
pub use options::{DecodeOptions, RevisionPolicy, TrailingBytesPolicy};
pub use source::{ByteSource, IoSource, SliceSource, SourceError};

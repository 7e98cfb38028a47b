//! Tag dispatch.

use super::records::assets::{AudioAsset, ColorTableAsset, MovieAsset};
use super::records::catalog::AssetCatalog;
use super::records::label_map::ProjectLabelMap;
use super::records::modifiers::{BehaviorModifier, MacOnlyCursorModifier, PlugInModifier};
use super::records::placeholder::Placeholder;
use super::records::stream::{Debris, EndOfStream, StreamHeader, Unknown17, Unknown19, Unknown3ec};
use super::records::structural::{
    ImageStructuralDef, MToonStructuralDef, MovieStructuralDef, ProjectStructuralDef,
    SceneStructuralDef, SectionStructuralDef, SubsectionStructuralDef,
};
use super::{DataObject, DataObjectType, DecodeError, FieldReader, SerializationProperties};
use crate::options::DecodeOptions;
use crate::source::ByteSource;

/// Empty object for a raw type tag.
///
/// Total over `u32`: tags without a decoder yield a `Placeholder` that keeps
/// the raw tag.
///
/// # Examples
/// ```
/// use mtstream_core::{DataObjectType, create_object_from_type};
///
/// assert_eq!(create_object_from_type(0x0d).object_type(), DataObjectType::AssetCatalog);
/// let unknown = create_object_from_type(0xabcd);
/// assert_eq!(unknown.object_type(), DataObjectType::Unknown);
/// assert_eq!(unknown.type_tag(), 0xabcd);
/// ```
pub fn create_object_from_type(tag: u32) -> DataObject {
    let Some(kind) = DataObjectType::from_tag(tag) else {
        return DataObject::Placeholder(Placeholder::for_tag(tag));
    };
    match kind {
        DataObjectType::StreamHeader => DataObject::StreamHeader(StreamHeader::default()),
        DataObjectType::Unknown3ec => DataObject::Unknown3ec(Unknown3ec::default()),
        DataObjectType::Unknown17 => DataObject::Unknown17(Unknown17::default()),
        DataObjectType::Unknown19 => DataObject::Unknown19(Unknown19::default()),
        DataObjectType::Debris => DataObject::Debris(Debris::default()),
        DataObjectType::ProjectLabelMap => DataObject::ProjectLabelMap(ProjectLabelMap::default()),
        DataObjectType::AssetCatalog => DataObject::AssetCatalog(AssetCatalog::default()),
        DataObjectType::ProjectStructuralDef => {
            DataObject::ProjectStructuralDef(ProjectStructuralDef::default())
        }
        DataObjectType::SectionStructuralDef => {
            DataObject::SectionStructuralDef(SectionStructuralDef::default())
        }
        DataObjectType::SubsectionStructuralDef => {
            DataObject::SubsectionStructuralDef(SubsectionStructuralDef::default())
        }
        DataObjectType::SceneStructuralDef => {
            DataObject::SceneStructuralDef(SceneStructuralDef::default())
        }
        DataObjectType::ImageStructuralDef => {
            DataObject::ImageStructuralDef(ImageStructuralDef::default())
        }
        DataObjectType::MovieStructuralDef => {
            DataObject::MovieStructuralDef(MovieStructuralDef::default())
        }
        DataObjectType::MToonStructuralDef => {
            DataObject::MToonStructuralDef(MToonStructuralDef::default())
        }
        DataObjectType::BehaviorModifier => {
            DataObject::BehaviorModifier(BehaviorModifier::default())
        }
        DataObjectType::PlugInModifier => DataObject::PlugInModifier(PlugInModifier::default()),
        DataObjectType::MacOnlyCursorModifier => {
            DataObject::MacOnlyCursorModifier(MacOnlyCursorModifier::default())
        }
        DataObjectType::ColorTableAsset => DataObject::ColorTableAsset(ColorTableAsset::default()),
        DataObjectType::AudioAsset => DataObject::AudioAsset(AudioAsset::default()),
        DataObjectType::MovieAsset => DataObject::MovieAsset(MovieAsset::default()),
        DataObjectType::EndOfStream => DataObject::EndOfStream(EndOfStream::default()),
        DataObjectType::Unknown | DataObjectType::NotYetImplemented => {
            DataObject::Placeholder(Placeholder::for_tag(tag))
        }
    }
}

/// Read one framed record (tag, revision, body) from `source`.
///
/// This does not walk a container: the caller still owns stream order and
/// platform detection.
pub fn read_record<S: ByteSource + ?Sized>(
    source: &mut S,
    props: &SerializationProperties,
    options: &DecodeOptions,
) -> Result<DataObject, DecodeError> {
    let (tag, revision) = {
        let mut framing = FieldReader::new(&mut *source, *props, options);
        (framing.read_u32()?, framing.read_u16()?)
    };
    let mut object = create_object_from_type(tag);
    object.decode_with_options(source, revision, props, options)?;
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::{create_object_from_type, read_record};
    use crate::objects::error::DecodeError;
    use crate::objects::{DataObject, DataObjectType, SerializationProperties, layout};
    use crate::options::DecodeOptions;
    use crate::source::SliceSource;

    #[test]
    fn every_known_tag_round_trips() {
        for kind in DataObjectType::TAGGED {
            let tag = kind.tag().unwrap();
            let object = create_object_from_type(tag);
            assert_eq!(object.object_type(), kind);
            assert_eq!(object.type_tag(), tag);
        }
    }

    #[test]
    fn unrecognised_tags_become_placeholders() {
        for tag in [0, 1, 0x9999, 0xffff_fffd] {
            let object = create_object_from_type(tag);
            assert_eq!(object.object_type(), DataObjectType::Unknown);
            assert_eq!(object.type_tag(), tag);
        }
        let nyi = create_object_from_type(0x27);
        assert_eq!(nyi.object_type(), DataObjectType::NotYetImplemented);
        assert_eq!(nyi.type_tag(), 0x27);
    }

    #[test]
    fn read_record_consumes_framing_and_body() {
        let mut bytes = layout::TAG_END_OF_STREAM.to_be_bytes().to_vec();
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 2]);
        bytes.push(0xff);

        let mut source = SliceSource::new(&bytes);
        let object = read_record(
            &mut source,
            &SerializationProperties::mac(),
            &DecodeOptions::default(),
        )
        .unwrap();
        match object {
            DataObject::EndOfStream(end) => {
                assert_eq!(end.unknown1, 1);
                assert_eq!(end.unknown2, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(source.rest(), &[0xff]);
    }

    #[test]
    fn read_record_truncated_framing() {
        let mut source = SliceSource::new(&[0x22, 0, 0]);
        let err = read_record(
            &mut source,
            &SerializationProperties::windows(),
            &DecodeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { .. }));
    }
}

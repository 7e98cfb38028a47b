//! Asset catalog: the table of asset metadata referenced by structural
//! records. Entry order is the on-disk order and is significant.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::Record;
use crate::objects::DataObjectType;
use crate::objects::error::DecodeError;
use crate::objects::layout;
use crate::objects::primitives::RawName;
use crate::objects::reader::FieldReader;
use crate::source::ByteSource;

/// Asset kind tag stored in catalog entries (separate from record tags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssetType {
    ColorTable,
    Image,
    MToon,
    /// Looks like an image but is always nameless.
    Unknown1f,
    WaveformSound,
    Movie,
    Midi,
    Other(u32),
}

impl From<u32> for AssetType {
    fn from(value: u32) -> Self {
        match value {
            layout::ASSET_TYPE_COLOR_TABLE => AssetType::ColorTable,
            layout::ASSET_TYPE_IMAGE => AssetType::Image,
            layout::ASSET_TYPE_MTOON => AssetType::MToon,
            layout::ASSET_TYPE_UNKNOWN_1F => AssetType::Unknown1f,
            layout::ASSET_TYPE_WAVEFORM_SOUND => AssetType::WaveformSound,
            layout::ASSET_TYPE_MOVIE => AssetType::Movie,
            layout::ASSET_TYPE_MIDI => AssetType::Midi,
            other => AssetType::Other(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetInfo {
    pub flags1: u32,
    pub name_length: u16,
    pub always_zero: u16,
    /// Possibly a scene id; absent before revision 4.
    pub unknown1: Option<u32>,
    pub file_position: u32,
    pub asset_type: u32,
    pub flags2: u32,
    pub name: RawName,
}

impl AssetInfo {
    pub fn kind(&self) -> AssetType {
        AssetType::from(self.asset_type)
    }

    pub fn is_deleted(&self) -> bool {
        self.flags1 & layout::ASSET_FLAG1_DELETED != 0
    }

    pub fn is_limited_one_per_segment(&self) -> bool {
        self.flags1 & layout::ASSET_FLAG1_LIMIT_ONE_PER_SEGMENT != 0
    }

    pub fn is_external(&self) -> bool {
        self.flags2 & layout::ASSET_FLAG2_EXTERNAL != 0
    }

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let flags1 = r.read_u32()?;
        let name_length = r.read_u16()?;
        let always_zero = r.read_u16()?;
        let unknown1 = if revision >= layout::ASSET_INFO_UNKNOWN1_SINCE {
            Some(r.read_u32()?)
        } else {
            None
        };
        let file_position = r.read_u32()?;
        let asset_type = r.read_u32()?;
        let flags2 = r.read_u32()?;
        let name = r.read_name(DataObjectType::AssetCatalog, name_length as u32)?;

        Ok(AssetInfo {
            flags1,
            name_length,
            always_zero,
            unknown1,
            file_position,
            asset_type,
            flags2,
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetCatalog {
    pub marker: u32,
    pub total_name_size_plus_22: u32,
    pub unknown1: [u8; 4],
    pub num_assets: u32,
    pub assets: Vec<AssetInfo>,
}

impl AssetCatalog {
    /// Entries are addressed by 1-based asset id in catalog order.
    pub fn asset_by_id(&self, id: u32) -> Option<&AssetInfo> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.assets.get(index)
    }
}

impl Record for AssetCatalog {
    const TYPE: DataObjectType = DataObjectType::AssetCatalog;
    const REVISIONS: RangeInclusive<u16> = layout::ASSET_CATALOG_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::ASSET_CATALOG_MARKER, marker)?;
        let total_name_size_plus_22 = r.read_u32()?;
        let unknown1 = r.read_array()?;
        let num_assets = r.read_u32()?;

        // Each entry reads at least one byte, so a bogus count fails as
        // truncation long before the capacity hint matters.
        let mut assets = Vec::with_capacity((num_assets as usize).min(1024));
        for _ in 0..num_assets {
            assets.push(AssetInfo::decode(r, revision)?);
        }

        let names: u64 = assets.iter().map(|a| a.name_length as u64).sum();
        let expected = names + layout::ASSET_CATALOG_NAME_BASE;
        if r.options().verify_name_totals && total_name_size_plus_22 as u64 != expected {
            return Err(DecodeError::InconsistentLength {
                object: Self::TYPE,
                field: "total_name_size_plus_22",
                declared: total_name_size_plus_22 as u64,
                actual: expected,
            });
        }

        Ok(AssetCatalog {
            marker,
            total_name_size_plus_22,
            unknown1,
            num_assets,
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetCatalog, AssetType};
    use crate::objects::error::DecodeError;
    use crate::objects::layout;
    use crate::objects::records::decode_record;
    use crate::objects::records::test_support::{Body, assert_prefixes_truncated, mac, windows};
    use crate::options::DecodeOptions;
    use crate::source::SliceSource;

    fn entry(body: Body, revision: u16, name: &[u8], asset_type: u32, flags2: u32) -> Body {
        let body = body.u32(0).u16(name.len() as u16).u16(0);
        let body = if revision >= 4 { body.u32(0x55) } else { body };
        body.u32(0x1000).u32(asset_type).u32(flags2).raw(name)
    }

    fn catalog(props: crate::objects::SerializationProperties, revision: u16) -> Vec<u8> {
        let body = Body::new(props)
            .u32(layout::ASSET_CATALOG_MARKER)
            .u32(22 + 5 + 4)
            .zeros(4)
            .u32(2);
        let body = entry(body, revision, b"Logo\0", layout::ASSET_TYPE_IMAGE, 0);
        entry(body, revision, b"Bgm\0", layout::ASSET_TYPE_WAVEFORM_SOUND, 0x4000).bytes
    }

    #[test]
    fn catalog_revision_4_has_unknown1() {
        let bytes = catalog(mac(), 4);
        let mut source = SliceSource::new(&bytes);
        let cat: AssetCatalog =
            decode_record(&mut source, 4, mac(), &DecodeOptions::default()).unwrap();
        assert_eq!(cat.assets.len(), 2);
        assert_eq!(cat.assets[0].unknown1, Some(0x55));
        assert_eq!(cat.assets[0].name.to_display_string(), "Logo");
        assert_eq!(cat.assets[0].kind(), AssetType::Image);
        assert_eq!(cat.assets[1].kind(), AssetType::WaveformSound);
        assert!(cat.assets[1].is_external());
        assert!(!cat.assets[1].is_deleted());
        assert_eq!(cat.asset_by_id(2).unwrap().file_position, 0x1000);
        assert!(cat.asset_by_id(0).is_none());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn catalog_revision_2_omits_unknown1() {
        let bytes = catalog(windows(), 2);
        let mut source = SliceSource::new(&bytes);
        let cat: AssetCatalog =
            decode_record(&mut source, 2, windows(), &DecodeOptions::default()).unwrap();
        assert!(cat.assets.iter().all(|a| a.unknown1.is_none()));
        assert_eq!(cat.assets[1].name.as_bytes(), b"Bgm\0");
    }

    #[test]
    fn catalog_name_total_mismatch() {
        let mut bytes = catalog(windows(), 4);
        bytes[4] = 0;
        let options = DecodeOptions::default();
        let mut source = SliceSource::new(&bytes);
        let err =
            decode_record::<AssetCatalog, _>(&mut source, 4, windows(), &options).unwrap_err();
        assert!(matches!(err, DecodeError::InconsistentLength { .. }));
    }

    #[test]
    fn catalog_name_total_check_can_be_disabled() {
        let mut bytes = catalog(windows(), 4);
        bytes[4] = 0;
        let options = DecodeOptions {
            verify_name_totals: false,
            ..DecodeOptions::default()
        };
        let mut source = SliceSource::new(&bytes);
        let cat: AssetCatalog = decode_record(&mut source, 4, windows(), &options).unwrap();
        assert_eq!(cat.total_name_size_plus_22, 0);
        assert_eq!(cat.assets.len(), 2);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn catalog_count_overrun_is_truncated() {
        let bytes = Body::new(mac())
            .u32(layout::ASSET_CATALOG_MARKER)
            .u32(22)
            .zeros(4)
            .u32(u32::MAX)
            .bytes;
        let options = DecodeOptions::default();
        let mut source = SliceSource::new(&bytes);
        let err = decode_record::<AssetCatalog, _>(&mut source, 4, mac(), &options).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { .. }));
    }

    #[test]
    fn every_prefix_is_truncated() {
        assert_prefixes_truncated::<AssetCatalog>(&catalog(mac(), 4), 4, mac());
        assert_prefixes_truncated::<AssetCatalog>(&catalog(windows(), 2), 2, windows());
    }

    #[test]
    fn asset_type_maps_unknown_values() {
        assert_eq!(AssetType::from(0x5c), AssetType::Midi);
        assert_eq!(AssetType::from(0x99), AssetType::Other(0x99));
    }
}

//! Asset definition records.
//!
//! Audio and movie assets end with exactly one platform tail. Their combined
//! size also covers sample/movie data stored elsewhere, so it is only checked
//! to be at least the record's own length.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::{PlatformPart, Record};
use crate::objects::error::DecodeError;
use crate::objects::layout;
use crate::objects::reader::FieldReader;
use crate::objects::{DataObjectType, SystemType};
use crate::source::ByteSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColorDef {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorTableAsset {
    pub marker: u32,
    pub size_including_tag: u32,
    pub unknown1: [u8; 4],
    pub asset_id: u32,
    /// Usually zero, sometimes 0xb.
    pub unknown2: u32,
    /// Always 256 entries once decoded.
    pub colors: Vec<ColorDef>,
}

impl Record for ColorTableAsset {
    const TYPE: DataObjectType = DataObjectType::ColorTableAsset;
    const REVISIONS: RangeInclusive<u16> = layout::COLOR_TABLE_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::COLOR_TABLE_MARKER, marker)?;
        let size_including_tag = r.read_u32()?;
        let unknown1 = r.read_array()?;
        let asset_id = r.read_u32()?;
        let unknown2 = r.read_u32()?;

        let mut colors = Vec::with_capacity(layout::COLOR_TABLE_ENTRIES);
        for _ in 0..layout::COLOR_TABLE_ENTRIES {
            colors.push(ColorDef {
                red: r.read_u16()?,
                green: r.read_u16()?,
                blue: r.read_u16()?,
            });
        }
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(ColorTableAsset {
            marker,
            size_including_tag,
            unknown1,
            asset_id,
            unknown2,
            colors,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AudioEncoding {
    Uncompressed,
    Mace3,
    Mace6,
    Other(u8),
}

impl From<u8> for AudioEncoding {
    fn from(value: u8) -> Self {
        match value {
            layout::AUDIO_ENCODING_UNCOMPRESSED => AudioEncoding::Uncompressed,
            layout::AUDIO_ENCODING_MACE3 => AudioEncoding::Mace3,
            layout::AUDIO_ENCODING_MACE6 => AudioEncoding::Mace6,
            other => AudioEncoding::Other(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioMacPart {
    pub unknown4: [u8; 4],
    pub unknown5: [u8; 5],
    pub unknown6: [u8; 3],
    pub unknown8: [u8; 20],
    pub unknown13: [u8; 10],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioWinPart {
    pub unknown9: [u8; 3],
    pub unknown10: [u8; 3],
    pub unknown11: [u8; 15],
    pub unknown12: [u8; 12],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioAsset {
    pub marker: u32,
    pub asset_and_data_combined_size: u32,
    pub unknown2: [u8; 4],
    pub asset_id: u32,
    pub unknown3: [u8; 20],
    pub sample_rate1: u16,
    pub bits_per_sample: u8,
    pub encoding1: u8,
    pub channels: u8,
    pub coded_duration: [u8; 4],
    pub sample_rate2: u16,
    pub file_position: u32,
    pub size: u32,
    /// Set once decoded.
    pub platform: Option<PlatformPart<AudioMacPart, AudioWinPart>>,
}

impl AudioAsset {
    pub fn encoding(&self) -> AudioEncoding {
        AudioEncoding::from(self.encoding1)
    }
}

impl Record for AudioAsset {
    const TYPE: DataObjectType = DataObjectType::AudioAsset;
    const REVISIONS: RangeInclusive<u16> = layout::AUDIO_ASSET_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::AUDIO_ASSET_MARKER, marker)?;
        let asset_and_data_combined_size = r.read_u32()?;
        let unknown2 = r.read_array()?;
        let asset_id = r.read_u32()?;
        let unknown3 = r.read_array()?;
        let sample_rate1 = r.read_u16()?;
        let bits_per_sample = r.read_u8()?;
        let encoding1 = r.read_u8()?;
        let channels = r.read_u8()?;
        let coded_duration = r.read_array()?;
        let sample_rate2 = r.read_u16()?;
        let file_position = r.read_u32()?;
        let size = r.read_u32()?;
        let platform = match r.system_type() {
            SystemType::Mac => PlatformPart::Mac(AudioMacPart {
                unknown4: r.read_array()?,
                unknown5: r.read_array()?,
                unknown6: r.read_array()?,
                unknown8: r.read_array()?,
                unknown13: r.read_array()?,
            }),
            SystemType::Windows => PlatformPart::Windows(AudioWinPart {
                unknown9: r.read_array()?,
                unknown10: r.read_array()?,
                unknown11: r.read_array()?,
                unknown12: r.read_array()?,
            }),
        };
        r.check_covering_size(
            Self::TYPE,
            "asset_and_data_combined_size",
            asset_and_data_combined_size,
        )?;

        Ok(AudioAsset {
            marker,
            asset_and_data_combined_size,
            unknown2,
            asset_id,
            unknown3,
            sample_rate1,
            bits_per_sample,
            encoding1,
            channels,
            coded_duration,
            sample_rate2,
            file_position,
            size,
            platform: Some(platform),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieMacPart {
    /// 38 opaque bytes.
    pub unknown5: Vec<u8>,
    pub unknown6: [u8; 12],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieWinPart {
    /// 72 opaque bytes.
    pub unknown3: Vec<u8>,
    pub unknown4: [u8; 12],
    pub unknown7: [u8; 12],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieAsset {
    pub marker: u32,
    pub asset_and_data_combined_size: u32,
    pub unknown1: [u8; 4],
    pub asset_id: u32,
    pub movie_data_pos: u32,
    pub moov_atom_pos: u32,
    pub movie_data_size: u32,
    /// Set once decoded.
    pub platform: Option<PlatformPart<MovieMacPart, MovieWinPart>>,
}

impl Record for MovieAsset {
    const TYPE: DataObjectType = DataObjectType::MovieAsset;
    const REVISIONS: RangeInclusive<u16> = layout::MOVIE_ASSET_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(Self::TYPE, layout::MOVIE_ASSET_MARKER, marker)?;
        let asset_and_data_combined_size = r.read_u32()?;
        let unknown1 = r.read_array()?;
        let asset_id = r.read_u32()?;
        let movie_data_pos = r.read_u32()?;
        let moov_atom_pos = r.read_u32()?;
        let movie_data_size = r.read_u32()?;
        let platform = match r.system_type() {
            SystemType::Mac => PlatformPart::Mac(MovieMacPart {
                unknown5: r.read_array::<38>()?.to_vec(),
                unknown6: r.read_array()?,
            }),
            SystemType::Windows => PlatformPart::Windows(MovieWinPart {
                unknown3: r.read_array::<72>()?.to_vec(),
                unknown4: r.read_array()?,
                unknown7: r.read_array()?,
            }),
        };
        r.check_covering_size(
            Self::TYPE,
            "asset_and_data_combined_size",
            asset_and_data_combined_size,
        )?;

        Ok(MovieAsset {
            marker,
            asset_and_data_combined_size,
            unknown1,
            asset_id,
            movie_data_pos,
            moov_atom_pos,
            movie_data_size,
            platform: Some(platform),
        })
    }
}

//! Structural definitions: project, sections, subsections, scenes and the
//! element kinds placed on them.
//!
//! All of them open with `unknown1`, a size including the tag and `unknown2`,
//! and end with the name whose length was read among the fixed fields.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::Record;
use crate::objects::DataObjectType;
use crate::objects::error::DecodeError;
use crate::objects::layout;
use crate::objects::primitives::{RawName, Rect};
use crate::objects::reader::FieldReader;
use crate::source::ByteSource;

/// Editor and runtime flags shared by structural definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StructuralFlags(pub u32);

impl StructuralFlags {
    pub fn not_direct_to_screen(self) -> bool {
        self.0 & layout::STRUCTURAL_NOT_DIRECT_TO_SCREEN != 0
    }

    pub fn hidden(self) -> bool {
        self.0 & layout::STRUCTURAL_HIDDEN != 0
    }

    pub fn paused(self) -> bool {
        self.0 & layout::STRUCTURAL_PAUSED != 0
    }

    pub fn expanded_in_editor(self) -> bool {
        self.0 & layout::STRUCTURAL_EXPANDED_IN_EDITOR != 0
    }

    pub fn cache_bitmap(self) -> bool {
        self.0 & layout::STRUCTURAL_CACHE_BITMAP != 0
    }

    pub fn selected_in_editor(self) -> bool {
        self.0 & layout::STRUCTURAL_SELECTED_IN_EDITOR != 0
    }
}

/// Playback flags of movie and mToon elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnimationFlags(pub u32);

impl AnimationFlags {
    /// mToon elements: keep the authored frame rate.
    pub fn maintain_rate(self) -> bool {
        self.0 & layout::ANIMATION_MAINTAIN_RATE != 0
    }

    /// QuickTime elements: never drop frames.
    pub fn play_every_frame(self) -> bool {
        self.0 & layout::ANIMATION_PLAY_EVERY_FRAME != 0
    }

    pub fn looping(self) -> bool {
        self.0 & layout::ANIMATION_LOOP != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStructuralDef {
    /// Observed as 0x16.
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub flags: u32,
    pub name_length: u16,
    pub name: RawName,
}

impl Record for ProjectStructuralDef {
    const TYPE: DataObjectType = DataObjectType::ProjectStructuralDef;
    const REVISIONS: RangeInclusive<u16> = layout::PROJECT_STRUCTURAL_DEF_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let flags = r.read_u32()?;
        let name_length = r.read_u16()?;
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(ProjectStructuralDef {
            unknown1,
            size_including_tag,
            unknown2,
            flags,
            name_length,
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionStructuralDef {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub name_length: u16,
    pub flags: u32,
    pub unknown4: u16,
    pub section_id: u16,
    /// Revision 1 and later.
    pub segment_id: Option<u32>,
    pub name: RawName,
}

impl Record for SectionStructuralDef {
    const TYPE: DataObjectType = DataObjectType::SectionStructuralDef;
    const REVISIONS: RangeInclusive<u16> = layout::SECTION_STRUCTURAL_DEF_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let name_length = r.read_u16()?;
        let flags = r.read_u32()?;
        let unknown4 = r.read_u16()?;
        let section_id = r.read_u16()?;
        let segment_id = if revision >= layout::SECTION_SEGMENT_ID_SINCE {
            Some(r.read_u32()?)
        } else {
            None
        };
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(SectionStructuralDef {
            unknown1,
            size_including_tag,
            unknown2,
            name_length,
            flags,
            unknown4,
            section_id,
            segment_id,
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubsectionStructuralDef {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub name_length: u16,
    pub flags: u32,
    pub section_id: u16,
    pub name: RawName,
}

impl Record for SubsectionStructuralDef {
    const TYPE: DataObjectType = DataObjectType::SubsectionStructuralDef;
    const REVISIONS: RangeInclusive<u16> = layout::SUBSECTION_STRUCTURAL_DEF_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let name_length = r.read_u16()?;
        let flags = r.read_u32()?;
        let section_id = r.read_u16()?;
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(SubsectionStructuralDef {
            unknown1,
            size_including_tag,
            unknown2,
            name_length,
            flags,
            section_id,
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneStructuralDef {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub name_length: u16,
    pub flags: u32,
    pub unknown4: [u8; 2],
    pub section_id: u16,
    pub rect1: Rect,
    pub rect2: Rect,
    /// 1-based stream index in the low byte; revision 1 and later.
    pub stream_locator: Option<u32>,
    pub unknown11: Option<[u8; 4]>,
    pub name: RawName,
}

impl SceneStructuralDef {
    pub fn stream_index(&self) -> Option<u32> {
        self.stream_locator
            .map(|locator| locator & layout::SCENE_STREAM_ID_MASK)
    }
}

impl Record for SceneStructuralDef {
    const TYPE: DataObjectType = DataObjectType::SceneStructuralDef;
    const REVISIONS: RangeInclusive<u16> = layout::SCENE_STRUCTURAL_DEF_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let name_length = r.read_u16()?;
        let flags = r.read_u32()?;
        let unknown4 = r.read_array()?;
        let section_id = r.read_u16()?;
        let rect1 = Rect::decode(r)?;
        let rect2 = Rect::decode(r)?;
        let (stream_locator, unknown11) = if revision >= layout::SCENE_STREAM_LOCATOR_SINCE {
            (Some(r.read_u32()?), Some(r.read_array()?))
        } else {
            (None, None)
        };
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(SceneStructuralDef {
            unknown1,
            size_including_tag,
            unknown2,
            name_length,
            flags,
            unknown4,
            section_id,
            rect1,
            rect2,
            stream_locator,
            unknown11,
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageStructuralDef {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub name_length: u16,
    pub flags: u32,
    pub unknown4: [u8; 2],
    pub section_id: u16,
    pub rect1: Rect,
    pub rect2: Rect,
    pub image_asset_id: u32,
    /// Revision 2 and later.
    pub stream_locator: Option<u32>,
    pub unknown7: [u8; 4],
    pub name: RawName,
}

impl Record for ImageStructuralDef {
    const TYPE: DataObjectType = DataObjectType::ImageStructuralDef;
    const REVISIONS: RangeInclusive<u16> = layout::IMAGE_STRUCTURAL_DEF_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let name_length = r.read_u16()?;
        let flags = r.read_u32()?;
        let unknown4 = r.read_array()?;
        let section_id = r.read_u16()?;
        let rect1 = Rect::decode(r)?;
        let rect2 = Rect::decode(r)?;
        let image_asset_id = r.read_u32()?;
        let stream_locator = if revision >= layout::IMAGE_STREAM_LOCATOR_SINCE {
            Some(r.read_u32()?)
        } else {
            None
        };
        let unknown7 = r.read_array()?;
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(ImageStructuralDef {
            unknown1,
            size_including_tag,
            unknown2,
            name_length,
            flags,
            unknown4,
            section_id,
            rect1,
            rect2,
            image_asset_id,
            stream_locator,
            unknown7,
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieStructuralDef {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub name_length: u16,
    pub flags: u32,
    pub layer: u16,
    /// 44 opaque bytes.
    pub unknown3: Vec<u8>,
    pub section_id: u16,
    pub unknown5: [u8; 2],
    pub rect1: Rect,
    pub rect2: Rect,
    pub asset_id: u32,
    pub unknown7: u32,
    pub volume: u16,
    pub animation_flags: u32,
    pub unknown10: [u8; 4],
    pub unknown11: [u8; 4],
    /// Revision 2 and later, together with `unknown13`.
    pub stream_locator: Option<u32>,
    pub unknown13: Option<[u8; 4]>,
    pub name: RawName,
}

impl MovieStructuralDef {
    pub fn animation(&self) -> AnimationFlags {
        AnimationFlags(self.animation_flags)
    }
}

impl Record for MovieStructuralDef {
    const TYPE: DataObjectType = DataObjectType::MovieStructuralDef;
    const REVISIONS: RangeInclusive<u16> = layout::MOVIE_STRUCTURAL_DEF_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let name_length = r.read_u16()?;
        let flags = r.read_u32()?;
        let layer = r.read_u16()?;
        let unknown3 = r.read_array::<44>()?.to_vec();
        let section_id = r.read_u16()?;
        let unknown5 = r.read_array()?;
        let rect1 = Rect::decode(r)?;
        let rect2 = Rect::decode(r)?;
        let asset_id = r.read_u32()?;
        let unknown7 = r.read_u32()?;
        let volume = r.read_u16()?;
        let animation_flags = r.read_u32()?;
        let unknown10 = r.read_array()?;
        let unknown11 = r.read_array()?;
        let (stream_locator, unknown13) = if revision >= layout::MOVIE_STREAM_LOCATOR_SINCE {
            (Some(r.read_u32()?), Some(r.read_array()?))
        } else {
            (None, None)
        };
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(MovieStructuralDef {
            unknown1,
            size_including_tag,
            unknown2,
            name_length,
            flags,
            layer,
            unknown3,
            section_id,
            unknown5,
            rect1,
            rect2,
            asset_id,
            unknown7,
            volume,
            animation_flags,
            unknown10,
            unknown11,
            stream_locator,
            unknown13,
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MToonStructuralDef {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub name_length: u16,
    pub structural_flags: u32,
    pub unknown3: [u8; 2],
    pub animation_flags: u32,
    pub unknown4: [u8; 4],
    pub section_id: u16,
    pub rect1: Rect,
    pub rect2: Rect,
    pub unknown5: u32,
    /// Frame rate × 10000; revision 2 and later.
    pub rate_times_10000: Option<u32>,
    pub stream_locator: u32,
    pub unknown6: u32,
    pub name: RawName,
}

impl MToonStructuralDef {
    pub fn frame_rate(&self) -> Option<f64> {
        self.rate_times_10000.map(|rate| rate as f64 / 10_000.0)
    }

    pub fn structural(&self) -> StructuralFlags {
        StructuralFlags(self.structural_flags)
    }

    pub fn animation(&self) -> AnimationFlags {
        AnimationFlags(self.animation_flags)
    }
}

impl Record for MToonStructuralDef {
    const TYPE: DataObjectType = DataObjectType::MToonStructuralDef;
    const REVISIONS: RangeInclusive<u16> = layout::MTOON_STRUCTURAL_DEF_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let name_length = r.read_u16()?;
        let structural_flags = r.read_u32()?;
        let unknown3 = r.read_array()?;
        let animation_flags = r.read_u32()?;
        let unknown4 = r.read_array()?;
        let section_id = r.read_u16()?;
        let rect1 = Rect::decode(r)?;
        let rect2 = Rect::decode(r)?;
        let unknown5 = r.read_u32()?;
        let rate_times_10000 = if revision >= layout::MTOON_RATE_SINCE {
            Some(r.read_u32()?)
        } else {
            None
        };
        let stream_locator = r.read_u32()?;
        let unknown6 = r.read_u32()?;
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(MToonStructuralDef {
            unknown1,
            size_including_tag,
            unknown2,
            name_length,
            structural_flags,
            unknown3,
            animation_flags,
            unknown4,
            section_id,
            rect1,
            rect2,
            unknown5,
            rate_times_10000,
            stream_locator,
            unknown6,
            name,
        })
    }
}

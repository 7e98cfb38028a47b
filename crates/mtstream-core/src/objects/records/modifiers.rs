//! Modifier records.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::{PlatformPart, Record};
use crate::objects::error::DecodeError;
use crate::objects::layout;
use crate::objects::primitives::{Event, Point, RawName};
use crate::objects::reader::FieldReader;
use crate::objects::{DataObjectType, SystemType};
use crate::source::ByteSource;

/// Container modifier; its `num_children` child modifiers follow as
/// separate records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BehaviorModifier {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: [u8; 2],
    pub unknown3: u32,
    pub unknown4: u32,
    pub unknown5: u16,
    pub unknown6: u32,
    pub editor_layout_position: Point,
    pub name_length: u16,
    pub num_children: u16,
    pub flags: u32,
    pub enable_when: Event,
    pub disable_when: Event,
    /// Revision 1 and later.
    pub unknown7: Option<[u8; 2]>,
    pub name: RawName,
}

impl Record for BehaviorModifier {
    const TYPE: DataObjectType = DataObjectType::BehaviorModifier;
    const REVISIONS: RangeInclusive<u16> = layout::BEHAVIOR_MODIFIER_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_array()?;
        let unknown3 = r.read_u32()?;
        let unknown4 = r.read_u32()?;
        let unknown5 = r.read_u16()?;
        let unknown6 = r.read_u32()?;
        let editor_layout_position = Point::decode(r)?;
        let name_length = r.read_u16()?;
        let num_children = r.read_u16()?;
        let flags = r.read_u32()?;
        let enable_when = Event::decode(r)?;
        let disable_when = Event::decode(r)?;
        let unknown7 = if revision >= layout::BEHAVIOR_TRAILER_SINCE {
            Some(r.read_array()?)
        } else {
            None
        };
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(BehaviorModifier {
            unknown1,
            size_including_tag,
            unknown2,
            unknown3,
            unknown4,
            unknown5,
            unknown6,
            editor_layout_position,
            name_length,
            num_children,
            flags,
            enable_when,
            disable_when,
            unknown7,
            name,
        })
    }
}

/// Modifier implemented by a plug-in; the body after the name is private
/// to the plug-in and kept opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlugInModifier {
    /// Plug-in modifier class name, NUL padded.
    pub plugin: RawName,
    pub unknown1: u32,
    /// Record size including the tag.
    pub weird_size: u32,
    pub unknown2: [u8; 20],
    pub name_length: u16,
    pub name: RawName,
    pub private_data_size: u32,
    #[serde(skip)]
    pub private_data: Vec<u8>,
    /// Plug-ins version their own data, so every revision is accepted.
    pub revision: u16,
}

impl Record for PlugInModifier {
    const TYPE: DataObjectType = DataObjectType::PlugInModifier;
    const REVISIONS: RangeInclusive<u16> = 0..=u16::MAX;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        revision: u16,
    ) -> Result<Self, DecodeError> {
        let plugin = RawName::from(r.read_array::<{ layout::PLUG_IN_NAME_LEN }>()?.to_vec());
        let unknown1 = r.read_u32()?;
        let weird_size = r.read_u32()?;
        let unknown2 = r.read_array()?;
        let name_length = r.read_u16()?;

        let fixed = layout::PLUG_IN_FIXED_LEN + name_length as u64;
        let private_data_size = (weird_size as u64)
            .checked_sub(fixed)
            .and_then(|size| u32::try_from(size).ok())
            .ok_or(DecodeError::InconsistentLength {
                object: Self::TYPE,
                field: "weird_size",
                declared: weird_size as u64,
                actual: fixed,
            })?;

        let name = r.read_name(Self::TYPE, name_length as u32)?;
        let private_data = r.read_bytes(private_data_size as usize)?;

        Ok(PlugInModifier {
            plugin,
            unknown1,
            weird_size,
            unknown2,
            name_length,
            name,
            private_data_size,
            private_data,
            revision,
        })
    }
}

/// Cursor shapes selectable by the Mac-only cursor modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CursorKind {
    Inactive,
    Interact,
    HandGrabBw,
    HandOpenBw,
    HandPointUp,
    HandPointRight,
    HandPointLeft,
    HandPointDown,
    HandGrabColor,
    HandOpenColor,
    Arrow,
    Pencil,
    Smiley,
    Wait,
    Hidden,
}

impl CursorKind {
    const ALL: [CursorKind; 15] = [
        CursorKind::Inactive,
        CursorKind::Interact,
        CursorKind::HandGrabBw,
        CursorKind::HandOpenBw,
        CursorKind::HandPointUp,
        CursorKind::HandPointRight,
        CursorKind::HandPointLeft,
        CursorKind::HandPointDown,
        CursorKind::HandGrabColor,
        CursorKind::HandOpenColor,
        CursorKind::Arrow,
        CursorKind::Pencil,
        CursorKind::Smiley,
        CursorKind::Wait,
        CursorKind::Hidden,
    ];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MacCursorPart {
    pub apply_when: Event,
    pub unknown1: u32,
    pub unknown2: u16,
    pub cursor_index: u32,
}

impl MacCursorPart {
    pub fn cursor(&self) -> Option<CursorKind> {
        CursorKind::from_index(self.cursor_index)
    }
}

/// Windows streams store nothing after the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WinCursorPart;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MacOnlyCursorModifier {
    pub unknown1: u32,
    pub size_including_tag: u32,
    pub unknown2: u32,
    pub unknown3: u32,
    pub unknown4: u16,
    pub unknown5: u32,
    pub unknown6: [u8; 4],
    pub name_length: u16,
    pub name: RawName,
    /// Set once decoded.
    pub platform: Option<PlatformPart<MacCursorPart, WinCursorPart>>,
}

impl MacOnlyCursorModifier {
    pub fn mac_part(&self) -> Option<&MacCursorPart> {
        self.platform.as_ref().and_then(PlatformPart::mac)
    }
}

impl Record for MacOnlyCursorModifier {
    const TYPE: DataObjectType = DataObjectType::MacOnlyCursorModifier;
    const REVISIONS: RangeInclusive<u16> = layout::CURSOR_MODIFIER_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let unknown1 = r.read_u32()?;
        let size_including_tag = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let unknown3 = r.read_u32()?;
        let unknown4 = r.read_u16()?;
        let unknown5 = r.read_u32()?;
        let unknown6 = r.read_array()?;
        let name_length = r.read_u16()?;
        let name = r.read_name(Self::TYPE, name_length as u32)?;
        let platform = match r.system_type() {
            SystemType::Mac => PlatformPart::Mac(MacCursorPart {
                apply_when: Event::decode(r)?,
                unknown1: r.read_u32()?,
                unknown2: r.read_u16()?,
                cursor_index: r.read_u32()?,
            }),
            SystemType::Windows => PlatformPart::Windows(WinCursorPart),
        };
        r.finish_declared_size(Self::TYPE, size_including_tag)?;

        Ok(MacOnlyCursorModifier {
            unknown1,
            size_including_tag,
            unknown2,
            unknown3,
            unknown4,
            unknown5,
            unknown6,
            name_length,
            name,
            platform: Some(platform),
        })
    }
}

//! Wire constants for data object records (source of truth).

use std::ops::RangeInclusive;

/// Type tag (u32) plus revision (u16) preceding every record body.
pub const RECORD_HEADER_LEN: u64 = 6;

pub const TAG_PROJECT_STRUCTURAL_DEF: u32 = 0x0002;
pub const TAG_SECTION_STRUCTURAL_DEF: u32 = 0x0003;
pub const TAG_MOVIE_STRUCTURAL_DEF: u32 = 0x0005;
pub const TAG_MTOON_STRUCTURAL_DEF: u32 = 0x0006;
pub const TAG_IMAGE_STRUCTURAL_DEF: u32 = 0x0007;
pub const TAG_SCENE_STRUCTURAL_DEF: u32 = 0x0008;
pub const TAG_ASSET_CATALOG: u32 = 0x000d;
pub const TAG_MOVIE_ASSET: u32 = 0x0010;
pub const TAG_AUDIO_ASSET: u32 = 0x0011;
pub const TAG_UNKNOWN_17: u32 = 0x0017;
pub const TAG_UNKNOWN_19: u32 = 0x0019;
pub const TAG_COLOR_TABLE_ASSET: u32 = 0x001e;
pub const TAG_SUBSECTION_STRUCTURAL_DEF: u32 = 0x0021;
pub const TAG_PROJECT_LABEL_MAP: u32 = 0x0022;
pub const TAG_BEHAVIOR_MODIFIER: u32 = 0x02c6;
pub const TAG_MAC_ONLY_CURSOR_MODIFIER: u32 = 0x03ca;
pub const TAG_END_OF_STREAM: u32 = 0x03e8;
pub const TAG_STREAM_HEADER: u32 = 0x03e9;
pub const TAG_UNKNOWN_3EC: u32 = 0x03ec;
pub const TAG_DEBRIS: u32 = 0xffff_fffe;
pub const TAG_PLUG_IN_MODIFIER: u32 = 0xffff_ffff;

pub const STREAM_HEADER_MARKER: u32 = 0x0000_0001;
pub const UNKNOWN_3EC_MARKER: u32 = 0x0000_0001;
pub const UNKNOWN_17_MARKER: u32 = 0x0000_0001;
pub const UNKNOWN_19_MARKER: u32 = 0x0000_0001;
pub const DEBRIS_MARKER: u32 = 0xdebb_eefd;
pub const ASSET_CATALOG_MARKER: u32 = 0x0000_0002;
pub const PROJECT_LABEL_MAP_MARKER: u32 = 0x0000_0002;
pub const COLOR_TABLE_MARKER: u32 = 0x0000_0003;
pub const AUDIO_ASSET_MARKER: u32 = 0x0000_0003;
pub const MOVIE_ASSET_MARKER: u32 = 0x0000_0003;

/// Second validation word of the project label map.
pub const PROJECT_LABEL_MAP_CONSTANT: u32 = 0x16;

pub const STREAM_HEADER_NAME_LEN: usize = 16;
pub const PLUG_IN_NAME_LEN: usize = 16;
/// Fixed bytes covered by a plug-in modifier's `weird_size`, framing included.
pub const PLUG_IN_FIXED_LEN: u64 = 52;
/// Framing plus the `unknown`/`size` pair every placeholder reads.
pub const PLACEHOLDER_PREAMBLE_LEN: u64 = 14;
/// Catalog fixed part, framing included, added to the summed name lengths.
pub const ASSET_CATALOG_NAME_BASE: u64 = 22;
pub const COLOR_TABLE_ENTRIES: usize = 256;

pub const STREAM_HEADER_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const UNKNOWN_3EC_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const UNKNOWN_17_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const UNKNOWN_19_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const DEBRIS_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const ASSET_CATALOG_REVISIONS: RangeInclusive<u16> = 2..=4;
pub const PROJECT_LABEL_MAP_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const PROJECT_STRUCTURAL_DEF_REVISIONS: RangeInclusive<u16> = 1..=1;
pub const SECTION_STRUCTURAL_DEF_REVISIONS: RangeInclusive<u16> = 0..=1;
pub const SUBSECTION_STRUCTURAL_DEF_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const SCENE_STRUCTURAL_DEF_REVISIONS: RangeInclusive<u16> = 0..=1;
pub const IMAGE_STRUCTURAL_DEF_REVISIONS: RangeInclusive<u16> = 1..=2;
pub const MOVIE_STRUCTURAL_DEF_REVISIONS: RangeInclusive<u16> = 1..=2;
pub const MTOON_STRUCTURAL_DEF_REVISIONS: RangeInclusive<u16> = 1..=2;
pub const BEHAVIOR_MODIFIER_REVISIONS: RangeInclusive<u16> = 0..=1;
pub const CURSOR_MODIFIER_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const COLOR_TABLE_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const AUDIO_ASSET_REVISIONS: RangeInclusive<u16> = 0..=2;
pub const MOVIE_ASSET_REVISIONS: RangeInclusive<u16> = 0..=0;
pub const END_OF_STREAM_REVISIONS: RangeInclusive<u16> = 0..=0;

// Revision gates: the field is present from this revision on.
pub const ASSET_INFO_UNKNOWN1_SINCE: u16 = 4;
pub const SECTION_SEGMENT_ID_SINCE: u16 = 1;
pub const SCENE_STREAM_LOCATOR_SINCE: u16 = 1;
pub const IMAGE_STREAM_LOCATOR_SINCE: u16 = 2;
pub const MOVIE_STREAM_LOCATOR_SINCE: u16 = 2;
pub const MTOON_RATE_SINCE: u16 = 2;
pub const BEHAVIOR_TRAILER_SINCE: u16 = 1;

pub const ASSET_FLAG1_DELETED: u32 = 0x0000_0001;
pub const ASSET_FLAG1_LIMIT_ONE_PER_SEGMENT: u32 = 0x0000_0002;
pub const ASSET_FLAG2_EXTERNAL: u32 = 0x0000_4000;

pub const LABEL_EXPANDED_IN_EDITOR: u32 = 0x8000_0000;

pub const STRUCTURAL_NOT_DIRECT_TO_SCREEN: u32 = 0x0000_1000;
pub const STRUCTURAL_HIDDEN: u32 = 0x0000_8000;
pub const STRUCTURAL_PAUSED: u32 = 0x0001_0000;
pub const STRUCTURAL_EXPANDED_IN_EDITOR: u32 = 0x0080_0000;
pub const STRUCTURAL_CACHE_BITMAP: u32 = 0x0200_0000;
pub const STRUCTURAL_SELECTED_IN_EDITOR: u32 = 0x1000_0000;

/// mToon: keep the authored rate. QuickTime: play every frame.
pub const ANIMATION_MAINTAIN_RATE: u32 = 0x0200_0000;
pub const ANIMATION_PLAY_EVERY_FRAME: u32 = 0x0200_0000;
pub const ANIMATION_LOOP: u32 = 0x0800_0000;

pub const SCENE_STREAM_ID_MASK: u32 = 0xff;

pub const ASSET_TYPE_COLOR_TABLE: u32 = 0x02;
pub const ASSET_TYPE_IMAGE: u32 = 0x0e;
pub const ASSET_TYPE_MTOON: u32 = 0x10;
pub const ASSET_TYPE_UNKNOWN_1F: u32 = 0x1f;
pub const ASSET_TYPE_WAVEFORM_SOUND: u32 = 0x54;
pub const ASSET_TYPE_MOVIE: u32 = 0x55;
pub const ASSET_TYPE_MIDI: u32 = 0x5c;

pub const AUDIO_ENCODING_UNCOMPRESSED: u8 = 0x00;
pub const AUDIO_ENCODING_MACE3: u8 = 0x03;
pub const AUDIO_ENCODING_MACE6: u8 = 0x04;

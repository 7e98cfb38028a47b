//! Project label map: super groups, each rooting one recursive label tree.
//!
//! Trees are value-owned (`Vec` children), so dropping a node drops its
//! subtree. Child counts are trusted only as far as the source has bytes: an
//! overrun fails with `Truncated`. Nesting is bounded by
//! `DecodeOptions::max_label_depth`. Any failure aborts the whole map.

use std::ops::RangeInclusive;

use serde::Serialize;

use super::Record;
use crate::objects::DataObjectType;
use crate::objects::error::DecodeError;
use crate::objects::layout;
use crate::objects::primitives::RawName;
use crate::objects::reader::FieldReader;
use crate::source::ByteSource;

const OBJECT: DataObjectType = DataObjectType::ProjectLabelMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelTree {
    pub name_length: u32,
    pub is_group: u32,
    pub id: u32,
    pub unknown1: u32,
    pub flags: u32,
    pub name: RawName,
    pub children: Vec<LabelTree>,
}

impl LabelTree {
    pub fn is_group(&self) -> bool {
        self.is_group != 0
    }

    pub fn is_expanded_in_editor(&self) -> bool {
        self.flags & layout::LABEL_EXPANDED_IN_EDITOR != 0
    }

    /// Depth-first search by label id.
    pub fn find(&self, id: u32) -> Option<&LabelTree> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Number of nodes in this subtree, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LabelTree::node_count).sum::<usize>()
    }

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        depth: usize,
    ) -> Result<Self, DecodeError> {
        let limit = r.options().max_label_depth;
        if depth >= limit {
            return Err(DecodeError::DepthExceeded { limit });
        }

        let name_length = r.read_u32()?;
        let is_group = r.read_u32()?;
        let id = r.read_u32()?;
        let unknown1 = r.read_u32()?;
        let flags = r.read_u32()?;
        let name = r.read_name(OBJECT, name_length)?;

        let num_children = r.read_u32()?;
        let mut children = Vec::with_capacity((num_children as usize).min(64));
        for _ in 0..num_children {
            children.push(LabelTree::decode(r, depth + 1)?);
        }

        Ok(LabelTree {
            name_length,
            is_group,
            id,
            unknown1,
            flags,
            name,
            children,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuperGroup {
    pub name_length: u32,
    pub unknown1: u32,
    pub unknown2: u32,
    pub name: RawName,
    pub tree: LabelTree,
}

impl SuperGroup {
    fn decode<S: ByteSource + ?Sized>(r: &mut FieldReader<'_, S>) -> Result<Self, DecodeError> {
        let name_length = r.read_u32()?;
        let unknown1 = r.read_u32()?;
        let unknown2 = r.read_u32()?;
        let name = r.read_name(OBJECT, name_length)?;
        let tree = LabelTree::decode(r, 1)?;

        Ok(SuperGroup {
            name_length,
            unknown1,
            unknown2,
            name,
            tree,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectLabelMap {
    pub marker: u32,
    /// Always 0x16.
    pub unknown1: u32,
    pub num_super_groups: u32,
    pub next_available_id: u32,
    pub super_groups: Vec<SuperGroup>,
}

impl ProjectLabelMap {
    pub fn find_label(&self, id: u32) -> Option<&LabelTree> {
        self.super_groups
            .iter()
            .find_map(|group| group.tree.find(id))
    }
}

impl Record for ProjectLabelMap {
    const TYPE: DataObjectType = OBJECT;
    const REVISIONS: RangeInclusive<u16> = layout::PROJECT_LABEL_MAP_REVISIONS;

    fn decode<S: ByteSource + ?Sized>(
        r: &mut FieldReader<'_, S>,
        _revision: u16,
    ) -> Result<Self, DecodeError> {
        let marker = r.read_u32()?;
        r.check_marker(OBJECT, layout::PROJECT_LABEL_MAP_MARKER, marker)?;
        let unknown1 = r.read_u32()?;
        r.check_marker(OBJECT, layout::PROJECT_LABEL_MAP_CONSTANT, unknown1)?;
        let num_super_groups = r.read_u32()?;
        let next_available_id = r.read_u32()?;

        let mut super_groups = Vec::with_capacity((num_super_groups as usize).min(64));
        for _ in 0..num_super_groups {
            super_groups.push(SuperGroup::decode(r)?);
        }

        Ok(ProjectLabelMap {
            marker,
            unknown1,
            num_super_groups,
            next_available_id,
            super_groups,
        })
    }
}

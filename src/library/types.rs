//! Data model for the persisted library document
//!
//! The document is stored as JSON at `<root>/.tptags/library.json` and is
//! always read and written as a whole. Field names in the serialized form
//! (`tags`, `tagGroups`, `entries`) are part of the on-disk format and must
//! not change.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, uniquely identified label applicable to assets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Display label; uniqueness is a caller concern, not enforced here
    pub name: String,

    /// Alternate names for the tag, in caller-supplied order
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Stable opaque identifier (4-digit decimal string)
    pub id: String,
}

/// A named collection of tag ids
///
/// Membership is by id reference only; a tag may belong to any number of
/// groups, and deleting a tag prunes its id from every group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagGroup {
    pub name: String,

    #[serde(default)]
    pub aliases: Vec<String>,

    /// Identifier drawn from the same namespace as tag ids
    pub id: String,

    /// Member tag ids, in caller-supplied order
    #[serde(default)]
    pub ids: Vec<String>,
}

/// The complete persisted state for one library root
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LibraryDocument {
    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default, rename = "tagGroups")]
    pub tag_groups: Vec<TagGroup>,

    /// Per-asset tagging records. Opaque to the manager: preserved across
    /// load/save but never inspected or modified.
    #[serde(default)]
    pub entries: Vec<serde_json::Value>,
}

impl LibraryDocument {
    /// Create an empty document (no tags, no groups, no entries)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collect every identifier currently in use, across both tags and
    /// groups (the two share a single id namespace)
    #[must_use]
    pub fn ids_in_use(&self) -> HashSet<String> {
        self.tags
            .iter()
            .map(|t| t.id.clone())
            .chain(self.tag_groups.iter().map(|g| g.id.clone()))
            .collect()
    }

    /// Find a tag by id
    #[must_use]
    pub fn find_tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == tag_id)
    }

    /// Find a tag group by id
    #[must_use]
    pub fn find_group(&self, group_id: &str) -> Option<&TagGroup> {
        self.tag_groups.iter().find(|g| g.id == group_id)
    }

    /// Groups whose member list references the given tag id
    pub fn groups_containing<'a>(
        &'a self,
        tag_id: &'a str,
    ) -> impl Iterator<Item = &'a TagGroup> + 'a {
        self.tag_groups
            .iter()
            .filter(move |g| g.ids.iter().any(|id| id == tag_id))
    }
}

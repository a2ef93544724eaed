use std::path::{Path, PathBuf};

use {
    serde::Serialize,
    skillport_platforms::{ItemType, Platform, SKILL_FILE},
};

use crate::error::{Error, Result};

/// A catalog entry produced by one discovery pass.
///
/// Content is not loaded at discovery time; call [`DiscoveredItem::read_content`]
/// when it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredItem {
    pub name: String,
    pub item_type: ItemType,
    pub description: String,
    /// Platforms this item installs on, in registry order.
    pub platforms: Vec<Platform>,
    /// Slash-separated path relative to the repository root, or the bare file
    /// name when the item lives outside it.
    pub relative_path: String,
    /// Source path as resolved on disk (directory for skills).
    #[serde(skip)]
    pub path: PathBuf,
    /// Marketplace plugin that declared this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
}

impl DiscoveredItem {
    /// Uniqueness key within one item type.
    pub fn item_key(&self) -> &str {
        if self.relative_path.is_empty() {
            &self.name
        } else {
            &self.relative_path
        }
    }

    /// The file holding the item's frontmatter and body.
    pub fn content_path(&self) -> PathBuf {
        content_path(self.item_type, &self.path)
    }

    /// Read the item's raw content from disk.
    pub fn read_content(&self) -> Result<String> {
        let path = self.content_path();
        std::fs::read_to_string(&path).map_err(|e| Error::read(&path, e))
    }

    pub fn is_installable_on(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

pub(crate) fn content_path(item_type: ItemType, path: &Path) -> PathBuf {
    if item_type.is_directory() {
        path.join(SKILL_FILE)
    } else {
        path.to_path_buf()
    }
}

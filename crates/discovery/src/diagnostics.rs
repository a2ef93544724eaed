//! Why things were left out of a discovery pass.
//!
//! Discovery never fails on bad input. Whatever it drops is recorded here so
//! tests and `skillport discover --diagnostics` can show it.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use {serde::Serialize, skillport_platforms::ItemType};

use crate::{
    item::DiscoveredItem,
    resolve::{self, ResolveOptions},
};

/// Reason a declared or scanned path did not become a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing exists at the path.
    Missing,
    /// A file where a directory was expected, or the reverse.
    WrongKind,
    /// The item type requires a declared `name` and the frontmatter has none.
    MissingName,
    /// The content file exists but could not be read.
    Unreadable { error: String },
    /// An earlier item already claimed this key.
    Duplicate { item_key: String },
    /// The item does not install on the requested platform.
    FilteredOut,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("path does not exist"),
            Self::WrongKind => f.write_str("wrong kind of path (file vs directory)"),
            Self::MissingName => f.write_str("frontmatter does not declare a name"),
            Self::Unreadable { error } => write!(f, "unreadable: {error}"),
            Self::Duplicate { item_key } => write!(f, "duplicate of {item_key}"),
            Self::FilteredOut => f.write_str("not installable on the requested platform"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedItem {
    pub path: PathBuf,
    pub item_type: ItemType,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.item_type, self.path.display(), self.reason)
    }
}

/// Something worth knowing about the pass that did not drop an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscoveryNote {
    /// A declared path resolved outside the repository root. The item was
    /// kept under its bare file name.
    PathEscapesRoot { declared: String },
    /// The manifest exists but could not be parsed; directory conventions
    /// were used instead.
    ManifestUnreadable { reason: String },
}

impl fmt::Display for DiscoveryNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathEscapesRoot { declared } => {
                write!(f, "{declared} resolves outside the repository root")
            },
            Self::ManifestUnreadable { reason } => {
                write!(f, "manifest ignored: {reason}")
            },
        }
    }
}

/// Accumulates one pass' results before dedup and filtering.
#[derive(Debug, Default)]
pub(crate) struct Outcome {
    pub items: Vec<DiscoveredItem>,
    pub skipped: Vec<SkippedItem>,
    pub notes: Vec<DiscoveryNote>,
}

impl Outcome {
    /// Resolve one candidate path and record whatever comes of it.
    /// `declared` is the path as the manifest or walk spelled it.
    pub fn resolve(
        &mut self,
        path: &Path,
        item_type: ItemType,
        repo_root: &Path,
        options: &ResolveOptions<'_>,
        declared: &str,
    ) {
        match resolve::resolve_detailed(path, item_type, repo_root, options) {
            Ok(resolution) => {
                if resolution.escaped_root {
                    self.notes.push(DiscoveryNote::PathEscapesRoot {
                        declared: declared.to_string(),
                    });
                }
                self.items.push(resolution.item);
            },
            Err(reason) => self.skip(path.to_path_buf(), item_type, reason),
        }
    }

    pub fn skip(&mut self, path: PathBuf, item_type: ItemType, reason: SkipReason) {
        tracing::debug!(path = %path.display(), %item_type, %reason, "skipping item");
        self.skipped.push(SkippedItem {
            path,
            item_type,
            reason,
        });
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reason_serializes_with_kind_tag() {
        let json = serde_json::to_value(SkipReason::Duplicate {
            item_key: "skills/pdf".into(),
        })
        .unwrap();
        assert_eq!(json["kind"], "duplicate");
        assert_eq!(json["item_key"], "skills/pdf");

        let json = serde_json::to_value(SkipReason::MissingName).unwrap();
        assert_eq!(json["kind"], "missing_name");
    }

    #[test]
    fn skipped_item_display() {
        let skipped = SkippedItem {
            path: PathBuf::from("commands/x.md"),
            item_type: ItemType::Command,
            reason: SkipReason::MissingName,
        };
        assert_eq!(
            skipped.to_string(),
            "command commands/x.md: frontmatter does not declare a name"
        );
    }
}

//! Turn one path plus a declared item type into a [`DiscoveredItem`].

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use {
    skillport_platforms::{ItemType, Platform, PlatformRegistry},
    tracing::warn,
};

use crate::{
    diagnostics::SkipReason,
    frontmatter,
    item::{self, DiscoveredItem},
    naming,
};

/// Per-call resolver settings, set by whoever found the path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions<'a> {
    /// Drop the item unless its frontmatter declares a non-empty `name`.
    pub require_frontmatter: bool,
    /// Platform for plain `.md` files and skills. `None` leaves such items
    /// with no platform.
    pub default_platform: Option<Platform>,
    /// Marketplace plugin that declared the path.
    pub plugin: Option<&'a str>,
}

impl<'a> ResolveOptions<'a> {
    /// The usual settings for `item_type`: commands must declare a name,
    /// skills and agents need not.
    pub fn for_item_type(item_type: ItemType, default_platform: Platform) -> Self {
        Self {
            require_frontmatter: item_type.requires_frontmatter(),
            default_platform: Some(default_platform),
            plugin: None,
        }
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: &'a str) -> Self {
        self.plugin = Some(plugin);
        self
    }
}

/// A resolved item and whether its path left the repository root.
#[derive(Debug)]
pub(crate) struct Resolution {
    pub item: DiscoveredItem,
    pub escaped_root: bool,
}

/// Resolve `path` or explain why it is not an item.
pub fn try_resolve(
    path: &Path,
    item_type: ItemType,
    repo_root: &Path,
    options: &ResolveOptions<'_>,
) -> Result<DiscoveredItem, SkipReason> {
    resolve_detailed(path, item_type, repo_root, options).map(|r| r.item)
}

/// Resolve `path`, or `None` when it is not a usable item.
pub fn resolve(
    path: &Path,
    item_type: ItemType,
    repo_root: &Path,
    options: &ResolveOptions<'_>,
) -> Option<DiscoveredItem> {
    try_resolve(path, item_type, repo_root, options).ok()
}

pub(crate) fn resolve_detailed(
    path: &Path,
    item_type: ItemType,
    repo_root: &Path,
    options: &ResolveOptions<'_>,
) -> Result<Resolution, SkipReason> {
    let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SkipReason::Missing,
        _ => SkipReason::Unreadable {
            error: e.to_string(),
        },
    })?;
    let kind_matches = if item_type.is_directory() {
        meta.is_dir()
    } else {
        meta.is_file()
    };
    if !kind_matches {
        return Err(SkipReason::WrongKind);
    }

    let content_path = item::content_path(item_type, path);
    let content = std::fs::read_to_string(&content_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SkipReason::Missing,
        _ => SkipReason::Unreadable {
            error: e.to_string(),
        },
    })?;
    let doc = frontmatter::parse(&content);

    if options.require_frontmatter
        && doc
            .get_str("name")
            .is_none_or(|name| name.trim().is_empty())
    {
        return Err(SkipReason::MissingName);
    }

    let name = naming::resolve_name(item_type, &doc.metadata, path);
    let description = doc
        .get_str("description")
        .map(|d| d.trim().to_string())
        .unwrap_or_default();
    let platforms = assign_platforms(item_type, path, options.default_platform);

    let (relative_path, escaped_root) = match relative_to(path, repo_root) {
        Some(rel) => (rel, false),
        None => {
            let bare = file_name(path);
            warn!(
                path = %path.display(),
                root = %repo_root.display(),
                key = %bare,
                "item resolves outside the repository root, keying it by file name"
            );
            (bare, true)
        },
    };

    Ok(Resolution {
        item: DiscoveredItem {
            name,
            item_type,
            description,
            platforms,
            relative_path,
            path: path.to_path_buf(),
            plugin: options.plugin.map(str::to_string),
        },
        escaped_root,
    })
}

/// Platform applicability, first match wins:
/// 1. a specific suffix (`.agent.md`, `.prompt.md`) selects its platform group;
/// 2. a plain `.md` file takes the default platform;
/// 3. anything else gets no platform.
///
/// Skills always take the default platform.
fn assign_platforms(
    item_type: ItemType,
    path: &Path,
    default_platform: Option<Platform>,
) -> Vec<Platform> {
    if item_type.is_directory() {
        return default_platform.into_iter().collect();
    }
    let name = file_name(path);
    if let Some(group) = PlatformRegistry::builtin().platforms_for_suffix(item_type, &name) {
        return group;
    }
    if name.ends_with(".md") {
        default_platform.into_iter().collect()
    } else {
        Vec::new()
    }
}

/// Slash-separated path of `path` below `repo_root`, after resolving
/// symlinks. The root itself is `"."`. `None` when it is not below the root.
fn relative_to(path: &Path, repo_root: &Path) -> Option<String> {
    let root = canonical(repo_root);
    let target = canonical(path);
    let rel = target.strip_prefix(&root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        return Some(".".to_string());
    }
    Some(parts.join("/"))
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

//! Item names derived from file and directory names.

use std::path::Path;

use skillport_platforms::{ItemType, PlatformRegistry};

use crate::frontmatter::{self, Metadata};

/// Type suffixes some authors bake into the stem (`analyst.agent.md` read by
/// a tool that only strips `.md`).
const TYPE_SUFFIXES: &[&str] = &[".agent"];

/// Name an item gets when its frontmatter does not declare one.
///
/// Skills take their directory name. Agents and commands take their file
/// name minus any platform suffix (`.agent.md`, `.prompt.md`) or plain
/// extension.
pub fn derive_name(item_type: ItemType, path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if item_type.is_directory() {
        return file_name;
    }
    strip_type_suffix(file_stem(&file_name)).to_string()
}

/// Frontmatter `name` when declared, otherwise [`derive_name`].
pub fn resolve_name(item_type: ItemType, metadata: &Metadata, path: &Path) -> String {
    match frontmatter::get_str(metadata, "name").map(str::trim) {
        Some(name) if !name.is_empty() => strip_type_suffix(name).to_string(),
        _ => derive_name(item_type, path),
    }
}

/// Drop a trailing `.agent` (or other type marker) from a name.
pub fn strip_type_suffix(name: &str) -> &str {
    TYPE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix).filter(|s| !s.is_empty()))
        .unwrap_or(name)
}

fn file_stem(file_name: &str) -> &str {
    let specific = PlatformRegistry::builtin().specific_suffixes();
    if let Some(stem) = specific
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix).filter(|s| !s.is_empty()))
    {
        return stem;
    }
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

//! Directory-convention walk for repositories without a manifest.
//!
//! Layout per item type:
//! - skills: immediate subdirectories holding a `SKILL.md`,
//! - agents: `.md` files in the directory and in its immediate
//!   subdirectories (`agents/claude/*.md`, `agents/vs-code-agents/*.agent.md`),
//! - commands: `.md` files directly in the directory.
//!
//! Entries are visited in file-name order so repeated walks agree.

use std::path::{Path, PathBuf};

use {
    skillport_config::{ConventionDir, DiscoveryConfig},
    skillport_platforms::{ItemType, SKILL_FILE},
    tracing::debug,
    walkdir::WalkDir,
};

use crate::{diagnostics::Outcome, resolve::ResolveOptions};

/// Walk every configured convention directory under `repo_root`.
pub(crate) fn walk(repo_root: &Path, config: &DiscoveryConfig, outcome: &mut Outcome) {
    for convention in &config.conventions {
        walk_one(repo_root, convention, outcome);
    }
}

fn walk_one(repo_root: &Path, convention: &ConventionDir, outcome: &mut Outcome) {
    let dir = repo_root.join(&convention.path);
    if !dir.is_dir() {
        debug!(
            dir = %dir.display(),
            item_type = %convention.item_type,
            "convention directory absent"
        );
        return;
    }

    let options = ResolveOptions::for_item_type(convention.item_type, convention.platform);
    let found = candidates(&dir, convention.item_type);
    debug!(
        dir = %dir.display(),
        item_type = %convention.item_type,
        count = found.len(),
        "scanning convention directory"
    );
    for path in found {
        let declared = path
            .strip_prefix(repo_root)
            .unwrap_or(&path)
            .display()
            .to_string();
        outcome.resolve(&path, convention.item_type, repo_root, &options, &declared);
    }
}

/// Paths under `dir` that look like items of `item_type`.
pub fn candidates(dir: &Path, item_type: ItemType) -> Vec<PathBuf> {
    let max_depth = match item_type {
        ItemType::Agent => 2,
        ItemType::Skill | ItemType::Command => 1,
    };
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                None
            },
        })
        .filter(|path| {
            if item_type.is_directory() {
                path.is_dir() && path.join(SKILL_FILE).is_file()
            } else {
                path.is_file() && path.extension().is_some_and(|ext| ext == "md")
            }
        })
        .collect()
}

//! Discovery engine: one pass over one repository working tree.

use std::{collections::HashSet, fmt, path::Path};

use {
    serde::Serialize,
    skillport_config::DiscoveryConfig,
    skillport_platforms::{ItemType, Platform},
    tracing::{debug, info, warn},
};

use crate::{
    convention,
    diagnostics::{DiscoveryNote, Outcome, SkipReason, SkippedItem},
    item::DiscoveredItem,
    marketplace::{self, MarketplaceManifest},
    resolve::ResolveOptions,
};

/// Anything that can produce a catalog from a repository working tree.
pub trait ItemDiscoverer {
    /// Items found under `repo_root`, deduplicated by `(item_type, item_key)`
    /// and limited to `platform` when given. Never fails; unusable paths are
    /// left out.
    fn discover(&self, repo_root: &Path, platform: Option<Platform>) -> Vec<DiscoveredItem>;
}

/// Which source of truth a pass used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Marketplace,
    Convention,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marketplace => f.write_str("marketplace"),
            Self::Convention => f.write_str("convention"),
        }
    }
}

/// Full result of a pass: the catalog plus everything left out of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryReport {
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_name: Option<String>,
    pub items: Vec<DiscoveredItem>,
    pub skipped: Vec<SkippedItem>,
    pub notes: Vec<DiscoveryNote>,
}

impl DiscoveryReport {
    pub fn find(&self, item_type: Option<ItemType>, item_key: &str) -> Option<&DiscoveredItem> {
        find_item(&self.items, item_type, item_key)
    }
}

/// Look an item up by key, falling back to its name.
pub fn find_item<'a>(
    items: &'a [DiscoveredItem],
    item_type: Option<ItemType>,
    key: &str,
) -> Option<&'a DiscoveredItem> {
    let of_type = |item: &&DiscoveredItem| item_type.is_none_or(|t| item.item_type == t);
    items
        .iter()
        .filter(of_type)
        .find(|item| item.item_key() == key)
        .or_else(|| items.iter().filter(of_type).find(|item| item.name == key))
}

/// Manifest-first discovery with a convention fallback.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    config: DiscoveryConfig,
}

impl Discovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// The catalog for `repo_root`, optionally limited to one platform.
    pub fn discover_all(
        &self,
        repo_root: &Path,
        platform: Option<Platform>,
    ) -> Vec<DiscoveredItem> {
        self.discover_with_report(repo_root, platform).items
    }

    /// Same pass as [`Discovery::discover_all`], keeping the skip reasons.
    pub fn discover_with_report(
        &self,
        repo_root: &Path,
        platform: Option<Platform>,
    ) -> DiscoveryReport {
        let mut outcome = Outcome::default();

        let manifest = match marketplace::read_manifest(repo_root, &self.config.manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(
                    root = %repo_root.display(),
                    error = %e,
                    "ignoring unreadable marketplace manifest"
                );
                outcome.notes.push(DiscoveryNote::ManifestUnreadable {
                    reason: e.to_string(),
                });
                None
            },
        };

        let (layout, manifest_name) = match manifest {
            Some(manifest) => {
                self.walk_manifest(repo_root, &manifest, &mut outcome);
                (Layout::Marketplace, Some(manifest.name))
            },
            None => {
                convention::walk(repo_root, &self.config, &mut outcome);
                (Layout::Convention, None)
            },
        };

        let Outcome {
            items,
            mut skipped,
            notes,
        } = outcome;
        let items = dedup(items, &mut skipped);
        let items = filter(items, platform, &mut skipped);

        info!(
            root = %repo_root.display(),
            %layout,
            count = items.len(),
            skipped = skipped.len(),
            "discovery finished"
        );

        DiscoveryReport {
            layout,
            manifest_name,
            items,
            skipped,
            notes,
        }
    }

    fn walk_manifest(
        &self,
        repo_root: &Path,
        manifest: &MarketplaceManifest,
        outcome: &mut Outcome,
    ) {
        for plugin in &manifest.plugins {
            for (item_type, declared) in plugin.declared() {
                let options =
                    ResolveOptions::for_item_type(item_type, self.config.manifest_platform)
                        .with_plugin(&plugin.name);
                let path = repo_root.join(marketplace::normalize_declared_path(declared));
                outcome.resolve(&path, item_type, repo_root, &options, declared);
            }
        }
    }
}

impl ItemDiscoverer for Discovery {
    fn discover(&self, repo_root: &Path, platform: Option<Platform>) -> Vec<DiscoveredItem> {
        self.discover_all(repo_root, platform)
    }
}

/// Keep the first item for each `(item_type, item_key)`.
fn dedup(items: Vec<DiscoveredItem>, skipped: &mut Vec<SkippedItem>) -> Vec<DiscoveredItem> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert((item.item_type, item.item_key().to_string())) {
            kept.push(item);
        } else {
            debug!(item_type = %item.item_type, key = item.item_key(), "dropping duplicate item");
            skipped.push(SkippedItem {
                path: item.path.clone(),
                item_type: item.item_type,
                reason: SkipReason::Duplicate {
                    item_key: item.item_key().to_string(),
                },
            });
        }
    }
    kept
}

fn filter(
    items: Vec<DiscoveredItem>,
    platform: Option<Platform>,
    skipped: &mut Vec<SkippedItem>,
) -> Vec<DiscoveredItem> {
    let Some(platform) = platform else {
        return items;
    };
    let (kept, dropped): (Vec<_>, Vec<_>) = items
        .into_iter()
        .partition(|item| item.is_installable_on(platform));
    skipped.extend(dropped.into_iter().map(|item| SkippedItem {
        path: item.path,
        item_type: item.item_type,
        reason: SkipReason::FilteredOut,
    }));
    kept
}

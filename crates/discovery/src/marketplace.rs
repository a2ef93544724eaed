//! Marketplace manifest (`.claude-plugin/marketplace.json`).
//!
//! ```json
//! {
//!   "name": "acme-tools",
//!   "plugins": [
//!     { "name": "docs", "skills": ["./skills/pdf"], "agents": ["./agents/pdf-agent.md"] }
//!   ]
//! }
//! ```
//!
//! Only the fields discovery needs are modelled; everything else is ignored.

use std::path::Path;

use {
    serde::{Deserialize, Deserializer},
    skillport_platforms::ItemType,
};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketplaceManifest {
    pub name: String,
    pub plugins: Vec<PluginDeclaration>,
}

/// One plugin entry and the item paths it declares.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PluginDeclaration {
    pub name: String,
    #[serde(deserialize_with = "one_or_many")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub agents: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub commands: Vec<String>,
}

impl PluginDeclaration {
    /// Every declared path with its item type: skills, then agents, then
    /// commands, each in manifest order.
    pub fn declared(&self) -> impl Iterator<Item = (ItemType, &str)> {
        tagged(ItemType::Skill, &self.skills)
            .chain(tagged(ItemType::Agent, &self.agents))
            .chain(tagged(ItemType::Command, &self.commands))
    }
}

fn tagged(item_type: ItemType, paths: &[String]) -> impl Iterator<Item = (ItemType, &str)> {
    paths.iter().map(move |path| (item_type, path.as_str()))
}

/// Strip one leading `./`. Nothing else is rewritten, so `../` sequences
/// survive and may point outside the repository.
pub fn normalize_declared_path(declared: &str) -> &str {
    declared.strip_prefix("./").unwrap_or(declared)
}

/// Read the manifest at `repo_root/manifest_path`.
///
/// `Ok(None)` when there is no manifest, which is the ordinary case for a
/// repository that only follows directory conventions.
pub fn read_manifest(repo_root: &Path, manifest_path: &str) -> Result<Option<MarketplaceManifest>> {
    let path = repo_root.join(manifest_path);
    if !path.is_file() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&path).map_err(|e| Error::read(&path, e))?;
    let manifest = serde_json::from_str(&raw)
        .map_err(|e| Error::invalid_manifest(&path, e.to_string()))?;
    Ok(Some(manifest))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(path)) => vec![path],
        Some(OneOrMany::Many(paths)) => paths,
        None => Vec::new(),
    })
}

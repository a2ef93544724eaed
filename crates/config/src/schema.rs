use {
    serde::{Deserialize, Serialize},
    skillport_platforms::{ItemType, Platform},
};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillportConfig {
    pub discovery: DiscoveryConfig,
}

/// How repositories are scanned for installable items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Marketplace manifest location, relative to the repository root.
    pub manifest_path: String,
    /// Platform that manifest-declared items default to.
    pub manifest_platform: Platform,
    /// Directories scanned when a repository has no manifest.
    pub conventions: Vec<ConventionDir>,
}

/// One convention directory: where to look for an item type, and which
/// platform plain `.md` files found there belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionDir {
    pub item_type: ItemType,
    pub path: String,
    pub platform: Platform,
}

impl ConventionDir {
    pub fn new(item_type: ItemType, path: impl Into<String>, platform: Platform) -> Self {
        Self {
            item_type,
            path: path.into(),
            platform,
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            manifest_path: ".claude-plugin/marketplace.json".into(),
            manifest_platform: Platform::Claude,
            conventions: vec![
                ConventionDir::new(ItemType::Skill, "skills", Platform::Claude),
                ConventionDir::new(ItemType::Skill, ".claude/skills", Platform::Claude),
                ConventionDir::new(ItemType::Agent, "agents", Platform::Claude),
                ConventionDir::new(ItemType::Agent, ".claude/agents", Platform::Claude),
                ConventionDir::new(ItemType::Agent, ".github/agents", Platform::Copilot),
                ConventionDir::new(ItemType::Command, "commands", Platform::Claude),
                ConventionDir::new(ItemType::Command, ".claude/commands", Platform::Claude),
                ConventionDir::new(ItemType::Command, ".github/prompts", Platform::VsCode),
            ],
        }
    }
}

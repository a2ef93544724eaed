use std::path::{Path, PathBuf};

use {
    anyhow::Context,
    tracing::{debug, warn},
};

use crate::schema::SkillportConfig;

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "skillport.toml",
    "skillport.yaml",
    "skillport.yml",
    "skillport.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<SkillportConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&raw, path).with_context(|| format!("invalid config {}", path.display()))
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./skillport.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/skillport/skillport.{toml,yaml,yml,json}` (user-global)
///
/// Returns `SkillportConfig::default()` if no config file is found or the
/// one found cannot be parsed.
pub fn discover_and_load() -> SkillportConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    SkillportConfig::default()
}

/// Find the first config file in standard locations.
pub fn find_config_file() -> Option<PathBuf> {
    find_in(Path::new(".")).or_else(|| config_dir().and_then(|dir| find_in(&dir)))
}

fn find_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Returns the user-global config directory (`~/.config/skillport/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "skillport").map(|d| d.config_dir().to_path_buf())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<SkillportConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => {
            // An empty YAML document is null, not an empty mapping.
            if raw.trim().is_empty() {
                return Ok(SkillportConfig::default());
            }
            Ok(serde_yaml::from_str(raw)?)
        },
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        skillport_platforms::{ItemType, Platform},
    };

    #[test]
    fn loads_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillport.toml");
        std::fs::write(
            &path,
            "[discovery]\nmanifest_path = \".codex-plugin/marketplace.json\"\n",
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(
            config.discovery.manifest_path,
            ".codex-plugin/marketplace.json"
        );
    }

    #[test]
    fn loads_yaml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillport.yaml");
        std::fs::write(
            &path,
            "discovery:\n  conventions:\n    - item_type: command\n      path: prompts\n      platform: vscode\n",
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        let conventions: Vec<_> = config
            .discovery
            .conventions
            .iter()
            .filter(|c| c.item_type == ItemType::Command)
            .collect();
        assert_eq!(conventions.len(), 1);
        assert_eq!(conventions[0].platform, Platform::VsCode);
    }

    #[test]
    fn loads_empty_yaml_as_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillport.yml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(load_config(&path).unwrap(), SkillportConfig::default());
    }

    #[test]
    fn loads_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillport.json");
        std::fs::write(&path, r#"{"discovery":{"manifest_platform":"copilot"}}"#).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.discovery.manifest_platform, Platform::Copilot);
    }

    #[test]
    fn rejects_unknown_platform() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillport.toml");
        std::fs::write(&path, "[discovery]\nmanifest_platform = \"cursor\"\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }

    #[test]
    fn rejects_unsupported_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillport.ini");
        std::fs::write(&path, "").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_config(&tmp.path().join("nope.toml")).is_err());
    }

    #[test]
    fn find_in_respects_filename_order() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("skillport.json"), "{}").unwrap();
        std::fs::write(tmp.path().join("skillport.toml"), "").unwrap();
        assert_eq!(
            find_in(tmp.path()).unwrap(),
            tmp.path().join("skillport.toml")
        );
    }
}

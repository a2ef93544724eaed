use std::path::Path;

use {
    anyhow::{Context, Result, bail},
    skillport_config::SkillportConfig,
    skillport_discovery::{DiscoveredItem, Discovery, DiscoveryReport},
    skillport_platforms::{ItemType, Platform, PlatformRegistry},
    skillport_transform::{TransformEngine, validate_for_platform},
};

fn discover(
    config: &SkillportConfig,
    repo: &Path,
    platform: Option<Platform>,
) -> Result<DiscoveryReport> {
    if !repo.is_dir() {
        bail!("{} is not a directory", repo.display());
    }
    Ok(Discovery::new(config.discovery.clone()).discover_with_report(repo, platform))
}

fn lookup<'a>(
    report: &'a DiscoveryReport,
    repo: &Path,
    item_type: Option<ItemType>,
    key: &str,
) -> Result<&'a DiscoveredItem> {
    report
        .find(item_type, key)
        .with_context(|| format!("no item '{key}' in {}", repo.display()))
}

pub fn handle_discover(
    config: &SkillportConfig,
    repo: &Path,
    platform: Option<Platform>,
    json: bool,
    diagnostics: bool,
) -> Result<()> {
    let report = discover(config, repo, platform)?;

    if json {
        let out = if diagnostics {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string_pretty(&report.items)?
        };
        println!("{out}");
        return Ok(());
    }

    if report.items.is_empty() {
        eprintln!("No items found ({} layout).", report.layout);
    } else {
        for line in catalog_lines(&report.items) {
            println!("{line}");
        }
    }

    if diagnostics {
        if let Some(ref name) = report.manifest_name {
            eprintln!("\nmarketplace: {name}");
        }
        for skipped in &report.skipped {
            eprintln!("skipped {skipped}");
        }
        for note in &report.notes {
            eprintln!("note: {note}");
        }
    }
    Ok(())
}

/// One aligned line per item: type, key, platforms, description.
fn catalog_lines(items: &[DiscoveredItem]) -> Vec<String> {
    let key_width = items.iter().map(|i| i.item_key().len()).max().unwrap_or(0);
    items
        .iter()
        .map(|item| {
            let platforms = item
                .platforms
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(",");
            let line = format!(
                "{:<7} {:<key_width$}  [{platforms}]  {}",
                item.item_type.as_str(),
                item.item_key(),
                item.description,
            );
            line.trim_end().to_string()
        })
        .collect()
}

pub fn handle_show(
    config: &SkillportConfig,
    repo: &Path,
    key: &str,
    item_type: Option<ItemType>,
) -> Result<()> {
    let report = discover(config, repo, None)?;
    let item = lookup(&report, repo, item_type, key)?;
    print!("{}", item.read_content()?);
    Ok(())
}

pub fn handle_transform(
    config: &SkillportConfig,
    repo: &Path,
    key: &str,
    item_type: Option<ItemType>,
    from: Option<Platform>,
    to: Platform,
) -> Result<()> {
    let report = discover(config, repo, None)?;
    let item = lookup(&report, repo, item_type, key)?;
    let transformed = TransformEngine::new().transform_item(item, from, to)?;
    eprintln!(
        "{} -> {}: {}",
        transformed.source, transformed.target, transformed.file_name
    );
    print!("{}", transformed.content);
    Ok(())
}

pub fn handle_validate(file: &Path, platform: Platform) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let errors = validate_for_platform(&content, platform);
    if errors.is_empty() {
        eprintln!("{} is valid for {platform}.", file.display());
        return Ok(());
    }
    for error in &errors {
        eprintln!("  error {error}");
    }
    eprintln!("{} error(s)", errors.len());
    std::process::exit(1);
}

pub fn handle_platforms() -> Result<()> {
    for schema in PlatformRegistry::builtin().schemas() {
        println!("{} ({})", schema.platform, schema.display_name);
        for convention in schema.conventions {
            println!("  {:<7} {}", convention.item_type.as_str(), convention.pattern);
        }
        println!("  required: {}", schema.required_fields.join(", "));
    }
    Ok(())
}

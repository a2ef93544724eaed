#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end discovery passes over small on-disk repositories.

use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use {
    skillport_discovery::{Discovery, DiscoveryNote, ItemDiscoverer, Layout, SkipReason},
    skillport_platforms::{ItemType, Platform},
};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn manifest(root: &Path, json: &str) {
    write(root, ".claude-plugin/marketplace.json", json);
}

#[test]
fn manifest_agent_without_frontmatter() {
    let tmp = tempfile::tempdir().unwrap();
    manifest(
        tmp.path(),
        r#"{"name": "m", "plugins": [{"name": "p", "agents": ["./agents/pdf-agent.md"]}]}"#,
    );
    write(tmp.path(), "agents/pdf-agent.md", "You convert PDFs.\n");

    let items = Discovery::default().discover_all(tmp.path(), None);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "pdf-agent");
    assert_eq!(items[0].item_type, ItemType::Agent);
    assert_eq!(items[0].relative_path, "agents/pdf-agent.md");
}

#[test]
fn manifest_command_without_name_is_excluded() {
    let tmp = tempfile::tempdir().unwrap();
    manifest(
        tmp.path(),
        r#"{"name": "m", "plugins": [{"name": "p", "commands": ["./commands/x.md"]}]}"#,
    );
    write(
        tmp.path(),
        "commands/x.md",
        "---\ndescription: Does x\n---\nDo x.\n",
    );

    let report = Discovery::default().discover_with_report(tmp.path(), None);
    assert!(report.items.iter().all(|i| i.item_type != ItemType::Command));
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::MissingName);
}

#[test]
fn manifest_missing_agent_is_excluded() {
    let tmp = tempfile::tempdir().unwrap();
    manifest(
        tmp.path(),
        r#"{"name": "m", "plugins": [{"name": "p", "agents": ["./agents/missing.md"]}]}"#,
    );

    let report = Discovery::default().discover_with_report(tmp.path(), None);
    assert_eq!(report.layout, Layout::Marketplace);
    assert!(report.items.is_empty());
    assert_eq!(report.skipped[0].reason, SkipReason::Missing);
}

#[test]
fn skill_declared_by_two_plugins_is_listed_once() {
    let tmp = tempfile::tempdir().unwrap();
    manifest(
        tmp.path(),
        r#"{"name": "m", "plugins": [
            {"name": "a", "skills": ["./skills/pdf"]},
            {"name": "b", "skills": ["skills/pdf"]}
        ]}"#,
    );
    write(
        tmp.path(),
        "skills/pdf/SKILL.md",
        "---\nname: pdf\ndescription: PDF tools\n---\n",
    );

    let report = Discovery::default().discover_with_report(tmp.path(), None);
    let skills: Vec<_> = report
        .items
        .iter()
        .filter(|i| i.item_type == ItemType::Skill)
        .collect();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "pdf");
    assert_eq!(skills[0].plugin.as_deref(), Some("a"));
    assert!(matches!(
        report.skipped[0].reason,
        SkipReason::Duplicate { ref item_key } if item_key == "skills/pdf"
    ));
}

#[test]
fn requirement_asymmetry_in_convention_walk() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "agents/reviewer.md", "Review code.\n");
    write(tmp.path(), "commands/deploy.md", "Deploy it.\n");
    write(tmp.path(), "commands/ship.md", "---\nname: ship\n---\nShip it.\n");

    let items = Discovery::default().discover_all(tmp.path(), None);
    let keys: Vec<_> = items.iter().map(|i| (i.item_type, i.name.as_str())).collect();
    assert_eq!(keys, vec![
        (ItemType::Agent, "reviewer"),
        (ItemType::Command, "ship"),
    ]);
}

fn mixed_repo(root: &Path) {
    write(root, "skills/b/SKILL.md", "---\nname: b\n---\n");
    write(root, "skills/a/SKILL.md", "---\nname: a\n---\n");
    write(root, ".claude/skills/a/SKILL.md", "---\nname: a\n---\n");
    write(root, "agents/z.md", "");
    write(root, "agents/claude/y.md", "---\nname: y\n---\n");
    write(root, "agents/vs-code-agents/x.agent.md", "---\nname: x\n---\n");
    write(root, ".github/agents/w.agent.md", "---\nname: w\n---\n");
    write(root, ".github/prompts/v.prompt.md", "---\nname: v\n---\n");
    write(root, "commands/u.md", "---\nname: u\n---\n");
}

#[test]
fn discovery_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    mixed_repo(tmp.path());

    let discovery = Discovery::default();
    let first = discovery.discover_all(tmp.path(), None);
    let second = discovery.discover_all(tmp.path(), None);
    assert_eq!(first, second);
    assert_eq!(first.len(), 9);
}

#[test]
fn keys_are_unique_per_item_type() {
    let tmp = tempfile::tempdir().unwrap();
    mixed_repo(tmp.path());
    manifest(
        tmp.path(),
        r#"{"name": "m", "plugins": [
            {"name": "a", "skills": ["./skills/a", "./skills/b"], "agents": ["./agents/z.md"]},
            {"name": "b", "skills": ["./skills/a"], "agents": ["agents/z.md", "./agents/claude/y.md"]}
        ]}"#,
    );

    let items = Discovery::default().discover(tmp.path(), None);
    let mut seen = HashSet::new();
    for item in &items {
        assert!(seen.insert((item.item_type, item.item_key().to_string())));
    }
    assert_eq!(items.len(), 4);
}

#[test]
fn vscode_agents_install_on_the_whole_family() {
    let tmp = tempfile::tempdir().unwrap();
    mixed_repo(tmp.path());

    let copilot = Discovery::default().discover_all(tmp.path(), Some(Platform::Copilot));
    let names: Vec<_> = copilot.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["x", "w"]);

    let vscode = Discovery::default().discover_all(tmp.path(), Some(Platform::VsCode));
    let names: Vec<_> = vscode.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["x", "w", "v"]);
}

#[test]
fn manifest_path_outside_root_is_kept_and_noted() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    manifest(
        &repo,
        r#"{"name": "m", "plugins": [{"name": "p", "agents": ["../shared/helper.md"]}]}"#,
    );
    write(tmp.path(), "shared/helper.md", "");

    let report = Discovery::default().discover_with_report(&repo, None);
    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].relative_path, "helper.md");
    assert_eq!(report.notes, vec![DiscoveryNote::PathEscapesRoot {
        declared: "../shared/helper.md".into()
    }]);
}

#[test]
fn manifest_agents_keep_suffix_platforms() {
    let tmp = tempfile::tempdir().unwrap();
    manifest(
        tmp.path(),
        r#"{"name": "m", "plugins": [{"name": "p", "agents": ["./agents/a.agent.md", "./agents/b.md"]}]}"#,
    );
    write(tmp.path(), "agents/a.agent.md", "");
    write(tmp.path(), "agents/b.md", "");

    let items = Discovery::default().discover_all(tmp.path(), None);
    assert_eq!(items[0].platforms, vec![
        Platform::VsCode,
        Platform::VsCodeInsiders,
        Platform::Copilot
    ]);
    assert_eq!(items[1].platforms, vec![Platform::Claude]);
}

#[test]
fn report_serializes_for_json_output() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "agents/a.md", "---\nname: a\ndescription: Agent A\n---\n");
    write(tmp.path(), "commands/b.md", "no frontmatter");

    let report = Discovery::default().discover_with_report(tmp.path(), None);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["layout"], "convention");
    assert_eq!(json["items"][0]["description"], "Agent A");
    assert_eq!(json["skipped"][0]["reason"]["kind"], "missing_name");
    assert_eq!(json["skipped"][0]["itemType"], "command");
}

//! Guess which platform a content file was written for.

use {skillport_discovery::frontmatter, skillport_platforms::Platform};

/// First matching rule wins:
/// 1. a `tools` field means VS Code,
/// 2. a `Task(subagent_type=` call in the body means Claude,
/// 3. a `#runSubagent` call in the body means VS Code,
/// 4. a `name` without `tools` means Claude.
pub fn detect_platform(content: &str) -> Option<Platform> {
    let doc = frontmatter::parse(content);
    if doc.metadata.get("tools").is_some() {
        return Some(Platform::VsCode);
    }
    if doc.body.contains("Task(subagent_type=") {
        return Some(Platform::Claude);
    }
    if doc.body.contains("#runSubagent") {
        return Some(Platform::VsCode);
    }
    if doc.get_str("name").is_some_and(|n| !n.trim().is_empty()) {
        return Some(Platform::Claude);
    }
    None
}

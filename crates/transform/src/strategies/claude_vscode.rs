use {
    serde_yaml::Value,
    skillport_discovery::Metadata,
    skillport_platforms::Platform,
    tracing::debug,
};

use crate::{
    fields,
    strategy::{TransformContext, TransformStrategy, cross},
    syntax,
};

use super::vscode_family;

/// Claude Code agents and commands to the VS Code format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeToVsCode;

impl TransformStrategy for ClaudeToVsCode {
    fn name(&self) -> &'static str {
        "claude-to-vscode"
    }

    fn pairs(&self) -> Vec<(Platform, Platform)> {
        cross(&[Platform::Claude], &vscode_family())
    }

    fn transform_metadata(&self, ctx: &TransformContext<'_>, mut metadata: Metadata) -> Metadata {
        if let Some(tools) = metadata.get("tools").map(map_tools) {
            metadata.insert(Value::String("tools".into()), tools);
        }
        fields::normalize_model(ctx, &mut metadata);
        let metadata = fields::retain_recognized(ctx, metadata);
        fields::synthesize_required(ctx, metadata)
    }

    fn transform_body(&self, _ctx: &TransformContext<'_>, body: &str) -> String {
        syntax::claude_to_vscode(body)
    }
}

/// Claude tool names to the VS Code tool sets that cover them, in first-seen
/// order. Unmapped tools are dropped, never widened to the default set.
fn map_tools(value: &Value) -> Value {
    let mut mapped: Vec<&'static str> = Vec::new();
    for tool in fields::string_list(value) {
        match fields::vscode_tool(&tool) {
            Some(vscode) if !mapped.contains(&vscode) => mapped.push(vscode),
            Some(_) => {},
            None => debug!(tool = %tool, "no VS Code equivalent for Claude tool"),
        }
    }
    fields::to_sequence(&mapped)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::test_support::{item, meta},
        skillport_discovery::frontmatter,
        skillport_platforms::ItemType,
    };

    fn run(target: Platform, metadata: Metadata) -> Metadata {
        let item = item(ItemType::Agent, "analyst", "Researches things");
        let ctx = TransformContext::new(&item, Platform::Claude, target);
        ClaudeToVsCode.transform_metadata(&ctx, metadata)
    }

    #[test]
    fn maps_model_and_tools() {
        let out = run(
            Platform::VsCode,
            meta("name: analyst\ndescription: Research\nmodel: sonnet\ntools: Read, Grep, Glob, Bash\ncolor: blue\n"),
        );
        assert_eq!(frontmatter::get_str(&out, "model"), Some("claude-sonnet-4-5"));
        assert_eq!(fields::string_list(out.get("tools").unwrap()), vec![
            "read", "search", "shell"
        ]);
        assert!(out.get("color").is_none());
        assert_eq!(frontmatter::get_str(&out, "name"), Some("analyst"));
    }

    #[test]
    fn missing_tools_get_defaults() {
        let out = run(Platform::VsCode, meta("name: analyst\n"));
        assert_eq!(
            fields::string_list(out.get("tools").unwrap()),
            fields::DEFAULT_VSCODE_TOOLS
        );
        let keys: Vec<_> = out.iter().map(|(k, _)| k.as_str().unwrap()).collect();
        assert_eq!(keys, vec!["tools", "name"]);
    }

    #[test]
    fn unknown_tools_map_to_an_empty_list() {
        let out = run(Platform::VsCode, meta("tools: [mcp__github__search]\n"));
        assert!(fields::string_list(out.get("tools").unwrap()).is_empty());
    }

    #[test]
    fn restricted_agent_gains_no_tools() {
        let out = run(
            Platform::Copilot,
            meta("name: triage\ntools: mcp__github__search_issues, Read\n"),
        );
        let tools = fields::string_list(out.get("tools").unwrap());
        assert_eq!(tools, vec!["read"]);
        assert!(!tools.iter().any(|t| t == "shell" || t == "edit"));
    }

    #[test]
    fn copilot_gets_a_name() {
        let out = run(Platform::Copilot, Metadata::new());
        assert_eq!(frontmatter::get_str(&out, "name"), Some("analyst"));
        assert!(out.get("tools").is_some());
    }

    #[test]
    fn copilot_drops_vscode_only_fields() {
        let out = run(Platform::Copilot, meta("name: a\nargument-hint: file\n"));
        assert!(out.get("argument-hint").is_none());
    }
}

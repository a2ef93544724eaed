//! Frontmatter field helpers shared by the built-in strategies.

use {
    serde_yaml::Value,
    skillport_discovery::{Metadata, frontmatter},
    tracing::debug,
};

use crate::strategy::TransformContext;

/// Tools a VS Code agent gets when the source declares none.
pub const DEFAULT_VSCODE_TOOLS: &[&str] = &["read", "edit", "shell", "search"];

/// Claude tool name to the VS Code tool set that covers it.
pub fn vscode_tool(claude_tool: &str) -> Option<&'static str> {
    match claude_tool {
        "Read" | "NotebookRead" | "LS" => Some("read"),
        "Write" | "Edit" | "MultiEdit" | "NotebookEdit" => Some("edit"),
        "Bash" => Some("shell"),
        "Grep" | "Glob" => Some("search"),
        "WebFetch" | "WebSearch" => Some("fetch"),
        "Task" => Some("agent"),
        _ => None,
    }
}

/// Values of a field that may be a YAML list or a comma-separated string.
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Sequence(seq) => seq
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

pub fn to_sequence<S: AsRef<str>>(values: &[S]) -> Value {
    Value::Sequence(
        values
            .iter()
            .map(|v| Value::String(v.as_ref().to_string()))
            .collect(),
    )
}

/// Drop every field the target schema does not recognise.
pub fn retain_recognized(ctx: &TransformContext<'_>, metadata: Metadata) -> Metadata {
    metadata
        .into_iter()
        .filter(|(key, _)| {
            let keep = key.as_str().is_some_and(|k| ctx.target.recognizes(k));
            if !keep {
                debug!(field = ?key, target = %ctx.target.platform, "dropping unrecognised field");
            }
            keep
        })
        .collect()
}

/// Respell `model` for the target platform.
pub fn normalize_model(ctx: &TransformContext<'_>, metadata: &mut Metadata) {
    if let Some(model) = frontmatter::get_str(metadata, "model") {
        let normalized = ctx.target.normalize_model(model).to_string();
        frontmatter::set_str(metadata, "model", normalized);
    }
}

/// Fill in required fields the source left out, in front of the existing
/// ones. `name` and `description` come from the item; `tools` gets the VS
/// Code default set.
pub fn synthesize_required(ctx: &TransformContext<'_>, metadata: Metadata) -> Metadata {
    let mut synthesized = Metadata::new();
    for &field in ctx.target.required_fields {
        if has_value(&metadata, field) {
            continue;
        }
        let value = match field {
            "name" => Value::String(ctx.item.name.clone()),
            "description" => Value::String(placeholder_description(ctx)),
            "tools" => to_sequence(DEFAULT_VSCODE_TOOLS),
            _ => continue,
        };
        debug!(field, target = %ctx.target.platform, "synthesizing required field");
        synthesized.insert(Value::String(field.to_string()), value);
    }
    if synthesized.is_empty() {
        return metadata;
    }
    let replaced: Vec<Value> = synthesized.iter().map(|(key, _)| key.clone()).collect();
    synthesized
        .into_iter()
        .chain(metadata.into_iter().filter(|(key, _)| !replaced.contains(key)))
        .collect()
}

fn placeholder_description(ctx: &TransformContext<'_>) -> String {
    if ctx.item.description.is_empty() {
        format!("{} {}", ctx.item.name, ctx.item.item_type)
    } else {
        ctx.item.description.clone()
    }
}

/// Present and not an empty string or null.
fn has_value(metadata: &Metadata, field: &str) -> bool {
    match metadata.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

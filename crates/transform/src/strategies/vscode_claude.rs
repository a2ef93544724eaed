use {
    skillport_discovery::Metadata,
    skillport_platforms::Platform,
};

use crate::{
    fields,
    strategy::{TransformContext, TransformStrategy, cross},
    syntax,
};

use super::vscode_family;

/// VS Code family agents and prompts to the Claude Code format.
///
/// Tool lists are dropped: a Claude agent without `tools` inherits every
/// tool, which is the closest match to VS Code tool sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct VsCodeToClaude;

impl TransformStrategy for VsCodeToClaude {
    fn name(&self) -> &'static str {
        "vscode-to-claude"
    }

    fn pairs(&self) -> Vec<(Platform, Platform)> {
        cross(&vscode_family(), &[Platform::Claude])
    }

    fn transform_metadata(&self, ctx: &TransformContext<'_>, mut metadata: Metadata) -> Metadata {
        fields::normalize_model(ctx, &mut metadata);
        let metadata = metadata
            .into_iter()
            .filter(|(key, _)| key.as_str() != Some("tools"))
            .collect();
        let metadata = fields::retain_recognized(ctx, metadata);
        fields::synthesize_required(ctx, metadata)
    }

    fn transform_body(&self, _ctx: &TransformContext<'_>, body: &str) -> String {
        syntax::vscode_to_claude(body)
    }
}

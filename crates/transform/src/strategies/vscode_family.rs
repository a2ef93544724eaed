use {
    skillport_discovery::Metadata,
    skillport_platforms::Platform,
};

use crate::{
    fields,
    strategy::{TransformContext, TransformStrategy, cross},
};

use super::vscode_family;

/// Between VS Code, VS Code Insiders and Copilot CLI. The file format is
/// shared; only the recognised and required fields differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct VsCodeFamily;

impl TransformStrategy for VsCodeFamily {
    fn name(&self) -> &'static str {
        "vscode-family"
    }

    fn pairs(&self) -> Vec<(Platform, Platform)> {
        let family = vscode_family();
        cross(&family, &family)
    }

    fn transform_metadata(&self, ctx: &TransformContext<'_>, mut metadata: Metadata) -> Metadata {
        fields::normalize_model(ctx, &mut metadata);
        let metadata = fields::retain_recognized(ctx, metadata);
        fields::synthesize_required(ctx, metadata)
    }

    fn transform_body(&self, _ctx: &TransformContext<'_>, body: &str) -> String {
        body.to_string()
    }
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

    #[test]
    fn covers_six_pairs() {
        let pairs = VsCodeFamily.pairs();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.contains(&(Platform::Copilot, Platform::VsCodeInsiders)));
        assert!(!pairs.contains(&(Platform::VsCode, Platform::VsCode)));
    }

    #[test]
    fn vscode_to_copilot_adds_name_and_keeps_tools() {
        let item = item(ItemType::Agent, "analyst", "");
        let ctx = TransformContext::new(&item, Platform::VsCode, Platform::Copilot);
        let out = VsCodeFamily.transform_metadata(
            &ctx,
            meta("tools: [read]\nhandoffs: []\nmodel: sonnet\n"),
        );
        assert_eq!(frontmatter::get_str(&out, "name"), Some("analyst"));
        assert_eq!(frontmatter::get_str(&out, "model"), Some("claude-sonnet-4-5"));
        assert!(out.get("tools").is_some());
        assert!(out.get("handoffs").is_none());
    }

    #[test]
    fn insiders_keeps_vscode_fields() {
        let item = item(ItemType::Command, "review", "");
        let ctx = TransformContext::new(&item, Platform::VsCode, Platform::VsCodeInsiders);
        let input = meta("tools: [read]\nargument-hint: path\nmode: agent\n");
        let out = VsCodeFamily.transform_metadata(&ctx, input.clone());
        assert_eq!(out, input);
    }
}

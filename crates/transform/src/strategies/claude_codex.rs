use {
    skillport_discovery::Metadata,
    skillport_platforms::Platform,
};

use crate::{
    fields,
    strategy::{TransformContext, TransformStrategy},
};

/// Claude skills to Codex. Both follow the Agent Skills `SKILL.md` layout;
/// Codex keeps only the portable fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeToCodex;

impl TransformStrategy for ClaudeToCodex {
    fn name(&self) -> &'static str {
        "claude-to-codex"
    }

    fn pairs(&self) -> Vec<(Platform, Platform)> {
        vec![(Platform::Claude, Platform::Codex)]
    }

    fn transform_metadata(&self, ctx: &TransformContext<'_>, metadata: Metadata) -> Metadata {
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
        skillport_platforms::ItemType,
    };

    #[test]
    fn keeps_portable_fields_only() {
        let item = item(ItemType::Skill, "pdf", "PDF tools");
        let ctx = TransformContext::new(&item, Platform::Claude, Platform::Codex);
        let out = ClaudeToCodex.transform_metadata(
            &ctx,
            meta("name: pdf\ndescription: PDF tools\nlicense: MIT\nmodel: opus\ndisable-model-invocation: true\n"),
        );
        assert_eq!(out, meta("name: pdf\ndescription: PDF tools\nlicense: MIT\n"));
    }
}

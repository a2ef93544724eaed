//! Built-in strategies, one per family of platform pairs.

mod claude_codex;
mod claude_vscode;
mod vscode_claude;
mod vscode_family;

use std::sync::Arc;

use skillport_platforms::Platform;

pub use {
    claude_codex::ClaudeToCodex, claude_vscode::ClaudeToVsCode, vscode_claude::VsCodeToClaude,
    vscode_family::VsCodeFamily,
};

use crate::strategy::TransformStrategy;

/// Platforms that read the VS Code agent and prompt file format.
pub(crate) fn vscode_family() -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|p| p.is_vscode_family())
        .collect()
}

/// Every built-in strategy, in registration order.
pub fn builtin() -> Vec<Arc<dyn TransformStrategy>> {
    vec![
        Arc::new(ClaudeToVsCode),
        Arc::new(VsCodeToClaude),
        Arc::new(VsCodeFamily),
        Arc::new(ClaudeToCodex),
    ]
}

//! Body rewrites between Claude and VS Code prompt syntax.
//!
//! | Claude                                   | VS Code                      |
//! |------------------------------------------|------------------------------|
//! | `Task(subagent_type="x")`                | `#runSubagent("x")`          |
//! | `Task(subagent_type="x", prompt="y")`    | `#runSubagent("x", "y")`     |
//! | `$ARGUMENTS`                             | `${input:arguments}`         |

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

static TASK_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Task\(\s*subagent_type\s*=\s*"([^"]*)"\s*(?:,\s*prompt\s*=\s*"([^"]*)"\s*)?\)"#)
        .expect("literal pattern")
});

static RUN_SUBAGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#runSubagent\(\s*"([^"]*)"\s*(?:,\s*"([^"]*)"\s*)?\)"#).expect("literal pattern")
});

static INPUT_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{input:[^}]*\}").expect("literal pattern"));

const CLAUDE_ARGUMENTS: &str = "$ARGUMENTS";
const VSCODE_ARGUMENTS: &str = "${input:arguments}";

/// Claude body to VS Code body.
pub fn claude_to_vscode(body: &str) -> String {
    let body = TASK_CALL.replace_all(body, |caps: &Captures<'_>| match caps.get(2) {
        Some(prompt) => format!(r#"#runSubagent("{}", "{}")"#, &caps[1], prompt.as_str()),
        None => format!(r#"#runSubagent("{}")"#, &caps[1]),
    });
    body.replace(CLAUDE_ARGUMENTS, VSCODE_ARGUMENTS)
}

/// VS Code body to Claude body. Every `${input:...}` variable collapses to
/// `$ARGUMENTS`, Claude's only argument placeholder.
pub fn vscode_to_claude(body: &str) -> String {
    let body = RUN_SUBAGENT.replace_all(body, |caps: &Captures<'_>| match caps.get(2) {
        Some(prompt) => format!(
            r#"Task(subagent_type="{}", prompt="{}")"#,
            &caps[1],
            prompt.as_str()
        ),
        None => format!(r#"Task(subagent_type="{}")"#, &caps[1]),
    });
    INPUT_VARIABLE
        .replace_all(&body, NoExpand(CLAUDE_ARGUMENTS))
        .into_owned()
}

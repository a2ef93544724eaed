use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ── Platforms ───────────────────────────────────────────────────────────────

/// A target AI coding tool with its own install layout and metadata schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// Claude Code: `~/.claude/{agents,commands,skills}`.
    #[serde(rename = "claude")]
    Claude,
    /// VS Code prompt files and custom agents.
    #[serde(rename = "vscode")]
    VsCode,
    /// VS Code Insiders; same format as [`Platform::VsCode`], different folder.
    #[serde(rename = "vscode-insiders")]
    VsCodeInsiders,
    /// GitHub Copilot CLI custom agents.
    #[serde(rename = "copilot")]
    Copilot,
    /// Codex / OpenCode skills.
    #[serde(rename = "codex")]
    Codex,
}

impl Platform {
    /// Every platform, in registry order.
    pub const ALL: [Self; 5] = [
        Self::Claude,
        Self::VsCode,
        Self::VsCodeInsiders,
        Self::Copilot,
        Self::Codex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::VsCode => "vscode",
            Self::VsCodeInsiders => "vscode-insiders",
            Self::Copilot => "copilot",
            Self::Codex => "codex",
        }
    }

    /// Platforms that read the VS Code agent/prompt file format.
    pub fn is_vscode_family(self) -> bool {
        matches!(self, Self::VsCode | Self::VsCodeInsiders | Self::Copilot)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| Error::unknown_platform(s))
    }
}

// ── Item types ──────────────────────────────────────────────────────────────

/// Kind of installable content found in a source repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A directory holding a `SKILL.md`.
    Skill,
    /// A single markdown file describing a sub-agent.
    Agent,
    /// A single markdown file describing a slash command / prompt.
    Command,
}

impl ItemType {
    pub const ALL: [Self; 3] = [Self::Skill, Self::Agent, Self::Command];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Agent => "agent",
            Self::Command => "command",
        }
    }

    /// Whether an item of this type lives in a directory rather than one file.
    pub fn is_directory(self) -> bool {
        matches!(self, Self::Skill)
    }

    /// Commands are invoked by name, so an undeclared name is not acceptable.
    /// Agents are browsed by humans and may fall back to their file name.
    pub fn requires_frontmatter(self) -> bool {
        matches!(self, Self::Command)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skill" | "skills" => Ok(Self::Skill),
            "agent" | "agents" => Ok(Self::Agent),
            "command" | "commands" => Ok(Self::Command),
            _ => Err(Error::UnknownItemType { name: s.to_string() }),
        }
    }
}

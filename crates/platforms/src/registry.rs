use std::sync::LazyLock;

use crate::{
    schema::{FileConvention, ModelStyle, PlatformSchema, SKILL_FILE},
    types::{ItemType, Platform},
};

const CLAUDE_MODELS: &[(&str, &str)] = &[
    ("haiku", "claude-haiku-3-5"),
    ("sonnet", "claude-sonnet-4-5"),
    ("opus", "claude-opus-4-5"),
    ("haiku", "claude-3-5-haiku"),
    ("sonnet", "claude-3-5-sonnet"),
];

const VSCODE_CONVENTIONS: &[FileConvention] = &[
    FileConvention {
        item_type: ItemType::Agent,
        pattern: "*.agent.md",
    },
    FileConvention {
        item_type: ItemType::Command,
        pattern: "*.prompt.md",
    },
];

const VSCODE_FIELDS: &[&str] = &[
    "name",
    "description",
    "model",
    "argument-hint",
    "target",
    "handoffs",
    "agent",
    "mode",
    "infer",
    "mcp-servers",
];

fn builtin_schemas() -> Vec<PlatformSchema> {
    vec![
        PlatformSchema {
            platform: Platform::Claude,
            display_name: "Claude Code",
            conventions: &[
                FileConvention {
                    item_type: ItemType::Skill,
                    pattern: SKILL_FILE,
                },
                FileConvention {
                    item_type: ItemType::Agent,
                    pattern: "*.md",
                },
                FileConvention {
                    item_type: ItemType::Command,
                    pattern: "*.md",
                },
            ],
            required_fields: &["name", "description"],
            optional_fields: &[
                "tools",
                "model",
                "color",
                "permissionMode",
                "skills",
                "allowed-tools",
                "argument-hint",
                "disable-model-invocation",
                "license",
                "metadata",
            ],
            model_style: ModelStyle::Alias,
            model_names: CLAUDE_MODELS,
        },
        PlatformSchema {
            platform: Platform::VsCode,
            display_name: "VS Code",
            conventions: VSCODE_CONVENTIONS,
            required_fields: &["tools"],
            optional_fields: VSCODE_FIELDS,
            model_style: ModelStyle::FullName,
            model_names: CLAUDE_MODELS,
        },
        PlatformSchema {
            platform: Platform::VsCodeInsiders,
            display_name: "VS Code Insiders",
            conventions: VSCODE_CONVENTIONS,
            required_fields: &["tools"],
            optional_fields: VSCODE_FIELDS,
            model_style: ModelStyle::FullName,
            model_names: CLAUDE_MODELS,
        },
        PlatformSchema {
            platform: Platform::Copilot,
            display_name: "GitHub Copilot CLI",
            conventions: &[FileConvention {
                item_type: ItemType::Agent,
                pattern: "*.agent.md",
            }],
            required_fields: &["name", "tools"],
            optional_fields: &["description", "model", "target", "infer", "mcp-servers"],
            model_style: ModelStyle::FullName,
            model_names: CLAUDE_MODELS,
        },
        PlatformSchema {
            platform: Platform::Codex,
            display_name: "Codex",
            conventions: &[FileConvention {
                item_type: ItemType::Skill,
                pattern: SKILL_FILE,
            }],
            required_fields: &["name", "description"],
            optional_fields: &["license", "metadata", "allowed-tools"],
            model_style: ModelStyle::FullName,
            model_names: &[],
        },
    ]
}

static BUILTIN: LazyLock<PlatformRegistry> = LazyLock::new(|| PlatformRegistry {
    schemas: builtin_schemas(),
});

/// Lookup table of platform schemas, loaded once per process.
#[derive(Debug)]
pub struct PlatformRegistry {
    schemas: Vec<PlatformSchema>,
}

impl PlatformRegistry {
    /// The built-in schemas for every [`Platform`].
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn schemas(&self) -> &[PlatformSchema] {
        &self.schemas
    }

    pub fn schema(&self, platform: Platform) -> &PlatformSchema {
        // Every Platform variant has a builtin schema.
        self.schemas
            .iter()
            .find(|s| s.platform == platform)
            .unwrap_or(&self.schemas[0])
    }

    /// Platforms whose file convention for `item_type` has a specific
    /// multi-part suffix that `file_name` ends with (e.g. `.agent.md`).
    ///
    /// Returns `None` when no specific suffix matches; a plain `.md` never
    /// selects a platform on its own.
    pub fn platforms_for_suffix(
        &self,
        item_type: ItemType,
        file_name: &str,
    ) -> Option<Vec<Platform>> {
        let group: Vec<Platform> = self
            .schemas
            .iter()
            .filter(|schema| {
                schema
                    .convention(item_type)
                    .is_some_and(|c| c.is_specific() && file_name.ends_with(c.suffix()))
            })
            .map(|schema| schema.platform)
            .collect();
        (!group.is_empty()).then_some(group)
    }

    /// Every specific suffix any platform uses, longest first.
    pub fn specific_suffixes(&self) -> Vec<&'static str> {
        let mut suffixes: Vec<&'static str> = self
            .schemas
            .iter()
            .flat_map(|s| s.conventions.iter())
            .filter(|c| c.is_specific())
            .map(|c| c.suffix())
            .collect();
        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        suffixes.dedup();
        suffixes
    }
}

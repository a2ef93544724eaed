use crate::{
    error::{Error, Result},
    types::{ItemType, Platform},
};

/// Skill content file inside a skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// How a platform names one item type on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileConvention {
    pub item_type: ItemType,
    /// Glob-like pattern: `*.agent.md`, `*.md`, or `SKILL.md` for skill dirs.
    pub pattern: &'static str,
}

impl FileConvention {
    /// The pattern with its leading `*` removed, e.g. `.agent.md`.
    pub fn suffix(&self) -> &'static str {
        self.pattern.trim_start_matches('*')
    }

    /// True for multi-part suffixes such as `.agent.md` or `.prompt.md`
    /// that identify a platform on their own. Plain `.md` does not.
    pub fn is_specific(&self) -> bool {
        !self.item_type.is_directory() && self.suffix().matches('.').count() > 1
    }
}

/// Which spelling of model names a platform expects in frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStyle {
    /// Short aliases: `sonnet`, `haiku`.
    Alias,
    /// Full identifiers: `claude-sonnet-4-5`.
    FullName,
}

/// Static, immutable description of a platform.
#[derive(Debug, Clone)]
pub struct PlatformSchema {
    pub platform: Platform,
    pub display_name: &'static str,
    pub conventions: &'static [FileConvention],
    pub required_fields: &'static [&'static str],
    pub optional_fields: &'static [&'static str],
    pub model_style: ModelStyle,
    /// `(short, full)` pairs. Several full names may share one alias; the
    /// first pair for an alias is the canonical full name.
    pub model_names: &'static [(&'static str, &'static str)],
}

impl PlatformSchema {
    pub fn convention(&self, item_type: ItemType) -> Option<&FileConvention> {
        self.conventions.iter().find(|c| c.item_type == item_type)
    }

    pub fn supports(&self, item_type: ItemType) -> bool {
        self.convention(item_type).is_some()
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required_fields.contains(&field)
    }

    /// Whether a frontmatter field means anything to this platform.
    pub fn recognizes(&self, field: &str) -> bool {
        self.is_required(field) || self.optional_fields.contains(&field)
    }

    /// File (or directory) name an item gets when installed here.
    pub fn install_file_name(&self, item_type: ItemType, name: &str) -> Result<String> {
        let convention = self.convention(item_type).ok_or(Error::Unsupported {
            platform: self.platform,
            item_type,
        })?;
        if item_type.is_directory() {
            return Ok(name.to_string());
        }
        Ok(convention.pattern.replacen('*', name, 1))
    }

    /// Translate a model alias to its full name; unknown names pass through.
    pub fn to_full_model<'a>(&self, model: &'a str) -> &'a str {
        self.model_names
            .iter()
            .find(|(short, _)| *short == model)
            .map_or(model, |(_, full)| *full)
    }

    /// Translate a full model name to its alias; unknown names pass through.
    pub fn to_alias_model<'a>(&self, model: &'a str) -> &'a str {
        self.model_names
            .iter()
            .find(|(_, full)| *full == model)
            .map_or(model, |(short, _)| *short)
    }

    /// Spell `model` the way this platform expects.
    pub fn normalize_model<'a>(&self, model: &'a str) -> &'a str {
        match self.model_style {
            ModelStyle::Alias => self.to_alias_model(model),
            ModelStyle::FullName => self.to_full_model(model),
        }
    }
}

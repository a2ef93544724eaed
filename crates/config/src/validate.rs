//! Semantic checks on a loaded configuration.
//!
//! Parsing already enforces types and known platform names; this catches
//! values that parse fine but cannot work, such as convention directories
//! outside the repository.

use std::{
    collections::HashSet,
    fmt,
    path::{Component, Path},
};

use skillport_platforms::PlatformRegistry;

use crate::schema::SkillportConfig;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted path, e.g. `discovery.conventions[2].path`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.path, self.message)
    }
}

/// Result of validating a configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    fn push(&mut self, severity: Severity, path: String, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity,
            path,
            message: message.into(),
        });
    }
}

/// Validate a configuration.
pub fn validate(config: &SkillportConfig) -> ValidationResult {
    let mut result = ValidationResult::default();
    let discovery = &config.discovery;

    if let Some(problem) = repo_relative_problem(&discovery.manifest_path) {
        result.push(
            Severity::Error,
            "discovery.manifest_path".into(),
            problem,
        );
    }

    let registry = PlatformRegistry::builtin();
    let mut seen = HashSet::new();
    for (i, convention) in discovery.conventions.iter().enumerate() {
        let path = format!("discovery.conventions[{i}]");

        if let Some(problem) = repo_relative_problem(&convention.path) {
            result.push(Severity::Error, format!("{path}.path"), problem);
        }

        if !seen.insert((convention.item_type, convention.path.as_str())) {
            result.push(
                Severity::Warning,
                path.clone(),
                format!(
                    "duplicate {} convention for '{}'",
                    convention.item_type, convention.path
                ),
            );
        }

        if !registry
            .schema(convention.platform)
            .supports(convention.item_type)
        {
            result.push(
                Severity::Warning,
                format!("{path}.platform"),
                format!(
                    "{} does not install {}s; items found here will not be installable",
                    convention.platform, convention.item_type
                ),
            );
        }
    }

    result
}

/// Why `raw` is not a usable repository-relative path, if it isn't.
fn repo_relative_problem(raw: &str) -> Option<&'static str> {
    if raw.trim().is_empty() {
        return Some("path must not be empty");
    }
    let path = Path::new(raw);
    if path.is_absolute() {
        return Some("path must be relative to the repository root");
    }
    if path.components().any(|c| c == Component::ParentDir) {
        return Some("path must not contain '..'");
    }
    None
}

//! Configuration loading and validation.
//!
//! Config files: `skillport.toml`, `skillport.yaml`, `skillport.yml` or
//! `skillport.json`, searched in `./` then `~/.config/skillport/`.
//! Every field has a default, so an absent file is a valid configuration.

pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::{config_dir, discover_and_load, find_config_file, load_config},
    schema::{ConventionDir, DiscoveryConfig, SkillportConfig},
    validate::{Diagnostic, Severity, ValidationResult, validate},
};

//! Static description of every platform skillport can install into.
//!
//! A [`PlatformSchema`] records which item types a platform accepts, how its
//! files are named on disk, which frontmatter fields it requires or
//! recognises, and how it spells model names. The built-in schemas live in a
//! process-wide [`PlatformRegistry`].

pub mod error;
pub mod registry;
pub mod schema;
pub mod types;

pub use {
    error::{Error, Result},
    registry::PlatformRegistry,
    schema::{FileConvention, ModelStyle, PlatformSchema, SKILL_FILE},
    types::{ItemType, Platform},
};

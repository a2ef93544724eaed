//! Converts discovered items between platform formats.
//!
//! Each supported `(source, target)` pair maps to one [`TransformStrategy`]
//! object in the [`TransformEngine`]'s table. Adding a platform pair means
//! registering one more strategy; pairs with nothing registered are copied
//! unchanged.

pub mod detect;
pub mod engine;
pub mod error;
pub mod fields;
pub mod strategies;
pub mod strategy;
pub mod syntax;
pub mod validate;

pub use {
    detect::detect_platform,
    engine::{TransformEngine, TransformedItem},
    error::{Error, Result},
    strategy::{IdentityStrategy, TransformContext, TransformStrategy},
    validate::validate_for_platform,
};

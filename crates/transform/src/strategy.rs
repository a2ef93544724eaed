//! The strategy seam: one object per family of platform pairs.

use {
    skillport_discovery::{DiscoveredItem, Metadata},
    skillport_platforms::{Platform, PlatformRegistry, PlatformSchema},
};

/// What a strategy knows about the conversion it is running.
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    pub item: &'a DiscoveredItem,
    pub source: &'a PlatformSchema,
    pub target: &'a PlatformSchema,
}

impl<'a> TransformContext<'a> {
    pub fn new(item: &'a DiscoveredItem, source: Platform, target: Platform) -> Self {
        let registry = PlatformRegistry::builtin();
        Self {
            item,
            source: registry.schema(source),
            target: registry.schema(target),
        }
    }
}

/// Converts item metadata and body from one platform's format to another's.
///
/// Both halves are pure: no I/O, no failure. Fields the target does not
/// understand are dropped rather than reported.
pub trait TransformStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// The `(source, target)` pairs this strategy handles.
    fn pairs(&self) -> Vec<(Platform, Platform)>;

    fn transform_metadata(&self, ctx: &TransformContext<'_>, metadata: Metadata) -> Metadata;

    fn transform_body(&self, ctx: &TransformContext<'_>, body: &str) -> String;
}

/// Leaves everything as it is. Used for same-platform copies and for pairs
/// nothing is registered for.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStrategy;

impl TransformStrategy for IdentityStrategy {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn pairs(&self) -> Vec<(Platform, Platform)> {
        Platform::ALL.into_iter().map(|p| (p, p)).collect()
    }

    fn transform_metadata(&self, _ctx: &TransformContext<'_>, metadata: Metadata) -> Metadata {
        metadata
    }

    fn transform_body(&self, _ctx: &TransformContext<'_>, body: &str) -> String {
        body.to_string()
    }
}

/// Every ordered pair of distinct platforms drawn from `sources` × `targets`.
pub(crate) fn cross(sources: &[Platform], targets: &[Platform]) -> Vec<(Platform, Platform)> {
    sources
        .iter()
        .flat_map(|&s| targets.iter().map(move |&t| (s, t)))
        .filter(|(s, t)| s != t)
        .collect()
}

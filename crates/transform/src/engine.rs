//! Transform engine: strategy lookup by `(source, target)` pair.

use std::{collections::HashMap, sync::Arc};

use {
    skillport_discovery::{DiscoveredItem, Metadata, frontmatter},
    skillport_platforms::{Platform, PlatformRegistry},
    tracing::{debug, warn},
};

use crate::{
    detect,
    error::Result,
    strategies,
    strategy::{IdentityStrategy, TransformContext, TransformStrategy},
};

/// An item rendered for a target platform, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedItem {
    pub source: Platform,
    pub target: Platform,
    /// File (or, for skills, directory) name on the target platform.
    pub file_name: String,
    /// Full content file: frontmatter block plus body.
    pub content: String,
}

pub struct TransformEngine {
    strategies: HashMap<(Platform, Platform), Arc<dyn TransformStrategy>>,
    identity: Arc<dyn TransformStrategy>,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine {
    /// Engine with every built-in strategy registered.
    pub fn new() -> Self {
        let mut engine = Self::empty();
        for strategy in strategies::builtin() {
            engine.register(strategy);
        }
        engine
    }

    /// Engine with no strategies; every pair falls back to identity.
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
            identity: Arc::new(IdentityStrategy),
        }
    }

    /// Register `strategy` for every pair it declares, replacing whatever was
    /// registered for those pairs before.
    pub fn register(&mut self, strategy: Arc<dyn TransformStrategy>) {
        for pair in strategy.pairs() {
            if let Some(previous) = self.strategies.insert(pair, Arc::clone(&strategy)) {
                debug!(
                    source = %pair.0,
                    target = %pair.1,
                    replaced = previous.name(),
                    by = strategy.name(),
                    "transform strategy replaced"
                );
            }
        }
    }

    /// The registered strategy for a pair, if any.
    pub fn get_strategy(
        &self,
        source: Platform,
        target: Platform,
    ) -> Option<&Arc<dyn TransformStrategy>> {
        self.strategies.get(&(source, target))
    }

    /// The strategy that [`TransformEngine::transform`] will use.
    pub fn strategy_for(&self, source: Platform, target: Platform) -> &Arc<dyn TransformStrategy> {
        if source == target {
            return &self.identity;
        }
        match self.get_strategy(source, target) {
            Some(strategy) => strategy,
            None => {
                warn!(
                    %source,
                    %target,
                    "no transform registered for this platform pair, copying unchanged"
                );
                &self.identity
            },
        }
    }

    /// Convert metadata and body from `source` to `target` format.
    pub fn transform(
        &self,
        item: &DiscoveredItem,
        metadata: Metadata,
        body: &str,
        source: Platform,
        target: Platform,
    ) -> (Metadata, String) {
        let strategy = self.strategy_for(source, target);
        let ctx = TransformContext::new(item, source, target);
        debug!(
            item = %item.name,
            %source,
            %target,
            strategy = strategy.name(),
            "transforming item"
        );
        (
            strategy.transform_metadata(&ctx, metadata),
            strategy.transform_body(&ctx, body),
        )
    }

    /// Parse raw content, transform it and render it back.
    ///
    /// Same-platform transforms return `raw` untouched, byte for byte.
    pub fn transform_document(
        &self,
        item: &DiscoveredItem,
        raw: &str,
        source: Platform,
        target: Platform,
    ) -> Result<String> {
        if source == target {
            return Ok(raw.to_string());
        }
        let doc = frontmatter::parse(raw);
        let (metadata, body) = self.transform(item, doc.metadata, &doc.body, source, target);
        Ok(frontmatter::render(&metadata, &body)?)
    }

    /// Read an item from disk and render it for `target`.
    ///
    /// Without an explicit `source`, the item's first platform is used, then
    /// whatever [`detect::detect_platform`] sees in the content, then Claude.
    pub fn transform_item(
        &self,
        item: &DiscoveredItem,
        source: Option<Platform>,
        target: Platform,
    ) -> Result<TransformedItem> {
        let raw = item.read_content()?;
        let source = source
            .or_else(|| item.platforms.first().copied())
            .or_else(|| detect::detect_platform(&raw))
            .unwrap_or(Platform::Claude);
        let file_name = PlatformRegistry::builtin()
            .schema(target)
            .install_file_name(item.item_type, &item.name)?;
        let content = self.transform_document(item, &raw, source, target)?;
        Ok(TransformedItem {
            source,
            target,
            file_name,
            content,
        })
    }
}

//! Discovery of installable items (skills, agents, commands) in a source
//! repository working tree.
//!
//! A repository either ships a marketplace manifest
//! (`.claude-plugin/marketplace.json`) that lists every item explicitly, or
//! follows directory conventions (`skills/<name>/SKILL.md`, `agents/*.md`,
//! `commands/*.md`, ...). Both paths produce [`DiscoveredItem`]s through the
//! same resolver. Discovery is fail-open: anything that cannot be resolved is
//! left out of the catalog and, when asked for, reported in a
//! [`DiscoveryReport`].

pub mod convention;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod frontmatter;
pub mod item;
pub mod marketplace;
pub mod naming;
pub mod resolve;

pub use {
    diagnostics::{DiscoveryNote, SkipReason, SkippedItem},
    engine::{Discovery, DiscoveryReport, ItemDiscoverer, Layout, find_item},
    error::{Error, Result},
    frontmatter::{Document, Metadata},
    item::DiscoveredItem,
    marketplace::{MarketplaceManifest, PluginDeclaration, read_manifest},
    resolve::{ResolveOptions, resolve, try_resolve},
};

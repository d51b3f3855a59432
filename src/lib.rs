//! Lighting look catalog, pattern generation and query matching.
//!
//! [`LightingLibrary`] is the entry point: it owns the catalog snapshot, the
//! effect registry and the recommendation cache. Everything is synchronous
//! and in memory; device transport lives with the host.

pub mod catalog;
pub mod effects;
pub mod error;
pub mod generator;
pub mod matching;
pub mod models;
pub mod query;
pub mod search;
pub mod services;
pub mod settings;

pub use catalog::{CatalogStore, CatalogTree};
pub use effects::{ColorFamily, EffectCatalog, TagLabel};
pub use error::CatalogError;
pub use generator::{pluralize, PatternGenerator};
pub use matching::{
    calculate_match_score, find_matching_effects, rank_patterns, MatchCriteria, ScoredPattern,
    SmartPattern,
};
pub use models::{
    DevicePayload, EffectId, EffectMetadata, LibraryNode, PatternItem, QueryAnalysis, Rgb,
};
pub use query::{analyze, query_hash, QueryCache};
pub use search::{LibrarySearch, SearchResults};
pub use services::{LightingLibrary, Recommendation};
pub use settings::EngineSettings;

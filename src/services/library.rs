use std::sync::{Arc, RwLock};

use crate::catalog::{CatalogStore, CatalogTree};
use crate::effects::{query_labels, EffectCatalog, TagLabel};
use crate::error::CatalogError;
use crate::generator::PatternGenerator;
use crate::matching::{find_matching_effects, rank_patterns, MatchCriteria, ScoredPattern, SmartPattern};
use crate::models::library::META_SUGGESTED_EFFECTS;
use crate::models::{FollowedTeam, LibraryNode, LiveEvent, PatternItem, QueryAnalysis, Rgb};
use crate::query::{analyze, QueryCache};
use crate::search::{LibrarySearch, SearchResults};
use crate::settings::EngineSettings;

/// Id and name given to palettes built straight from a query
const QUERY_PALETTE_ID: &str = "query";
const QUERY_PALETTE_NAME: &str = "Custom";
/// Used when a query carries no colors at all
const FALLBACK_COLOR: Rgb = Rgb::new(255, 180, 100);
/// Longest effect list a query-built palette gets
const MAX_QUERY_EFFECTS: usize = 30;

/// Ranked recommendations for one query
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub analysis: QueryAnalysis,
    /// Display chips for what the query asked for
    pub labels: Vec<TagLabel>,
    pub patterns: Vec<ScoredPattern>,
}

/// Entry point for the host: owns the catalog snapshot, the effect registry
/// and the recommendation cache. Construct once and share by reference.
pub struct LightingLibrary {
    settings: EngineSettings,
    effects: Arc<EffectCatalog>,
    store: CatalogStore,
    recommendations: QueryCache<Recommendation>,
    /// Generated patterns paired with the snapshot they came from
    pattern_index: RwLock<Option<(Arc<CatalogTree>, Arc<Vec<PatternItem>>)>>,
}

impl LightingLibrary {
    pub fn new(settings: EngineSettings) -> Self {
        Self::with_effects(settings, EffectCatalog::builtin())
    }

    pub fn with_effects(settings: EngineSettings, effects: Arc<EffectCatalog>) -> Self {
        Self {
            store: CatalogStore::new(settings.max_hierarchy_depth),
            settings,
            effects,
            recommendations: QueryCache::new(),
            pattern_index: RwLock::new(None),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn effects(&self) -> &EffectCatalog {
        &self.effects
    }

    pub fn tree(&self) -> Result<Arc<CatalogTree>, CatalogError> {
        self.store.snapshot()
    }

    pub fn children(&self, parent_id: Option<&str>) -> Result<Vec<LibraryNode>, CatalogError> {
        let tree = self.tree()?;
        Ok(tree.get_children(parent_id).into_iter().cloned().collect())
    }

    pub fn ancestors(&self, id: &str) -> Result<Vec<LibraryNode>, CatalogError> {
        let tree = self.tree()?;
        let chain = tree.get_ancestors(id)?;
        Ok(chain.into_iter().cloned().collect())
    }

    pub fn node(&self, id: &str) -> Result<Option<LibraryNode>, CatalogError> {
        Ok(self.tree()?.get_node(id).cloned())
    }

    pub fn root_category(&self, id: &str) -> Result<Option<LibraryNode>, CatalogError> {
        let tree = self.tree()?;
        let root = tree.find_root_category(id)?;
        Ok(root.cloned())
    }

    /// Generated patterns for a palette. Other nodes and unknown ids give an
    /// empty list.
    pub fn patterns_for_node(&self, id: &str) -> Result<Vec<PatternItem>, CatalogError> {
        let tree = self.tree()?;
        self.patterns_in(&tree, id)
    }

    fn patterns_in(&self, tree: &CatalogTree, id: &str) -> Result<Vec<PatternItem>, CatalogError> {
        let Some(node) = tree.get_node(id) else {
            return Ok(Vec::new());
        };
        let Some(root) = tree.find_root_category(id)? else {
            return Ok(Vec::new());
        };
        let generator = PatternGenerator::new(&self.effects, &self.settings);
        Ok(generator.generate_for_palette(node, &root.id))
    }

    /// Every generated pattern in `tree`, built once per snapshot. An index
    /// left behind by another snapshot is never served.
    fn all_patterns(&self, tree: &Arc<CatalogTree>) -> Result<Arc<Vec<PatternItem>>, CatalogError> {
        if let Some((indexed, index)) = self
            .pattern_index
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            if Arc::ptr_eq(indexed, tree) {
                return Ok(Arc::clone(index));
            }
        }

        let mut items = Vec::new();
        for palette in tree.palettes() {
            items.extend(self.patterns_in(tree, &palette.id)?);
        }
        log::debug!("[library] indexed {} patterns", items.len());

        let index = Arc::new(items);
        *self.pattern_index.write().unwrap_or_else(|e| e.into_inner()) =
            Some((Arc::clone(tree), Arc::clone(&index)));
        Ok(index)
    }

    /// Keyword search over nodes and generated patterns
    pub fn search(&self, query: &str) -> Result<SearchResults, CatalogError> {
        if query.trim().is_empty() {
            return Ok(SearchResults::default());
        }
        let tree = self.tree()?;
        let patterns = self.all_patterns(&tree)?;
        Ok(LibrarySearch::new(&self.settings).search(query, tree.nodes(), &patterns))
    }

    /// Ranked patterns for a query, optionally anchored to a node.
    ///
    /// Results are cached by the query's theme and context (scoped to the
    /// node when one is given), so queries that only differ in mood or color
    /// share a result.
    pub fn recommend(
        &self,
        node_id: Option<&str>,
        query: &str,
    ) -> Result<Arc<Recommendation>, CatalogError> {
        let analysis = analyze(query);
        let key = match node_id {
            Some(id) => format!("{}#{}", id, analysis.query_hash),
            None => analysis.query_hash.clone(),
        };

        if let Some(hit) = self.recommendations.get(&key) {
            log::debug!("[library] recommendation cache hit for {}", key);
            return Ok(hit);
        }

        // 1. Resolve the palette the candidates come from. The epoch is read
        // before the tree so a result built from a replaced tree is not cached.
        let epoch = self.recommendations.epoch();
        let tree = self.tree()?;
        let criteria = MatchCriteria::from_analysis(&analysis);
        let (palette, items) = match node_id {
            Some(id) => match tree.get_node(id) {
                Some(node) => (node.clone(), self.patterns_in(&tree, id)?),
                None => {
                    log::warn!("[library] recommend called with unknown node {}", id);
                    (LibraryNode::palette(id, id, QUERY_PALETTE_ID, vec![], 0), Vec::new())
                }
            },
            None => self.palette_for_query(&tree, &analysis, &criteria)?,
        };

        // 2. Annotate each candidate with its effect and palette tags
        let smart: Vec<SmartPattern> = items
            .into_iter()
            .map(|item| {
                let effect_id = item.device_payload.effect_id().unwrap_or_default();
                let effect = self.effects.get_or_generic(effect_id);
                SmartPattern::new(item, &effect, &palette, self.settings.default_universal_appeal)
            })
            .collect();

        // 3. Score, order and cache
        let patterns = rank_patterns(smart, &criteria);
        let labels = query_labels(&analysis);
        log::debug!(
            "[library] {} ranked patterns for {:?} ({})",
            patterns.len(),
            query,
            key
        );
        Ok(self
            .recommendations
            .put_since(epoch, key, Recommendation { analysis, labels, patterns }))
    }

    /// Palette and patterns for a query with no node: the best palette search
    /// finds for the theme, else a palette built from the query's colors.
    fn palette_for_query(
        &self,
        tree: &CatalogTree,
        analysis: &QueryAnalysis,
        criteria: &MatchCriteria,
    ) -> Result<(LibraryNode, Vec<PatternItem>), CatalogError> {
        if let Some(theme) = analysis.theme.as_deref() {
            let terms = theme.replace('_', " ");
            let found = LibrarySearch::new(&self.settings).search(&terms, tree.nodes(), &[]);
            if let Some(palette) = found.palettes.into_iter().next() {
                let items = self.patterns_in(tree, &palette.id)?;
                return Ok((palette, items));
            }
            log::debug!("[library] no palette for theme {}, building from colors", theme);
        }

        let colors = if analysis.color_preferences.is_empty() {
            vec![FALLBACK_COLOR]
        } else {
            analysis.color_preferences.clone()
        };
        let effect_ids: Vec<u16> = find_matching_effects(&self.effects, criteria)
            .into_iter()
            .map(|e| e.id)
            .take(MAX_QUERY_EFFECTS)
            .collect();
        let palette = LibraryNode::palette(
            QUERY_PALETTE_ID,
            QUERY_PALETTE_NAME,
            QUERY_PALETTE_ID,
            colors,
            0,
        )
        .with_meta(META_SUGGESTED_EFFECTS, effect_ids);

        let generator = PatternGenerator::new(&self.effects, &self.settings);
        let items = generator.generate_for_palette(&palette, QUERY_PALETTE_ID);
        Ok((palette, items))
    }

    pub fn update_live_events(&self, events: Vec<LiveEvent>) {
        log::debug!("[library] {} live events", events.len());
        self.store.set_live_events(events);
        self.drop_derived();
    }

    pub fn update_followed_teams(&self, teams: Vec<FollowedTeam>) {
        log::debug!("[library] {} followed teams", teams.len());
        self.store.set_followed_teams(teams);
        self.drop_derived();
    }

    /// Forget the catalog snapshot and everything computed from it. The store
    /// is invalidated before the caches are cleared.
    pub fn invalidate(&self) {
        self.store.invalidate();
        self.drop_derived();
    }

    fn drop_derived(&self) {
        *self.pattern_index.write().unwrap_or_else(|e| e.into_inner()) = None;
        self.recommendations.clear();
    }
}

impl Default for LightingLibrary {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

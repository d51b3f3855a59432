use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::MatchCriteria;
use crate::effects::ColorFamily;
use crate::models::{EffectMetadata, EnergyLevel, LibraryNode, Mood, MotionType, PatternItem, Vibe};

const MOOD_WEIGHT: f64 = 3.0;
const VIBE_WEIGHT: f64 = 2.0;
const COLOR_WEIGHT: f64 = 2.0;
const OCCASION_BEST: f64 = 2.0;
const OCCASION_AVOID: f64 = -1.0;
const KEYWORD_WEIGHT: f64 = 1.0;
const MATCH_BLEND: f64 = 0.8;

/// A generated pattern annotated with everything the scorer looks at
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmartPattern {
    pub item: PatternItem,
    pub moods: BTreeSet<Mood>,
    pub vibes: BTreeSet<Vibe>,
    pub motion_type: MotionType,
    pub energy_level: EnergyLevel,
    pub color_families: BTreeSet<ColorFamily>,
    pub best_for_occasions: Vec<String>,
    pub avoid_for_occasions: Vec<String>,
    pub keywords: Vec<String>,
    pub universal_appeal: f64,
    pub respects_colors: bool,
}

impl SmartPattern {
    /// Combine a generated item with its effect's tags and its palette's
    /// colors and keywords.
    pub fn new(
        item: PatternItem,
        effect: &EffectMetadata,
        palette: &LibraryNode,
        default_appeal: f64,
    ) -> Self {
        let mut keywords: Vec<String> = palette.keywords();
        for text in [item.name.as_str(), palette.name.as_str(), effect.name.as_str()] {
            for word in text.split(|c: char| !c.is_alphanumeric()) {
                let word = word.to_lowercase();
                if !word.is_empty() && !keywords.contains(&word) {
                    keywords.push(word);
                }
            }
        }

        Self {
            moods: effect.moods.clone(),
            vibes: effect.vibes.clone(),
            motion_type: effect.motion_type,
            energy_level: effect.energy_level,
            color_families: palette
                .theme_colors
                .iter()
                .map(|c| ColorFamily::of(*c))
                .collect(),
            best_for_occasions: effect.best_for_occasions.clone(),
            avoid_for_occasions: effect.avoid_for_occasions.clone(),
            keywords,
            universal_appeal: palette
                .universal_appeal()
                .unwrap_or(default_appeal)
                .clamp(0.0, 1.0),
            respects_colors: effect.respects_colors,
            item,
        }
    }

    fn is_best_for(&self, occasion: &str) -> bool {
        self.best_for_occasions
            .iter()
            .any(|o| o.eq_ignore_ascii_case(occasion))
    }

    fn should_avoid_for(&self, occasion: &str) -> bool {
        self.avoid_for_occasions
            .iter()
            .any(|o| o.eq_ignore_ascii_case(occasion))
    }
}

/// Share of `wanted` present in `have`
fn overlap_ratio<T: Ord>(wanted: &BTreeSet<T>, have: &BTreeSet<T>) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }
    wanted.intersection(have).count() as f64 / wanted.len() as f64
}

/// Weighted score of a pattern against the criteria.
///
/// Each supplied factor contributes its weighted value; the sum is averaged
/// over the factors present and blended 80/20 with the pattern's universal
/// appeal. With nothing supplied the appeal is returned as is. A pattern that
/// ignores supplied colors scores 0.
pub fn calculate_match_score(pattern: &SmartPattern, criteria: &MatchCriteria) -> f64 {
    if !pattern.respects_colors && criteria.requires_color_respect() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut factors = 0u32;

    if !criteria.moods.is_empty() {
        factors += 1;
        total += overlap_ratio(&criteria.moods, &pattern.moods) * MOOD_WEIGHT;
    }
    if !criteria.vibes.is_empty() {
        factors += 1;
        total += overlap_ratio(&criteria.vibes, &pattern.vibes) * VIBE_WEIGHT;
    }
    if !criteria.color_families.is_empty() {
        factors += 1;
        total += overlap_ratio(&criteria.color_families, &pattern.color_families) * COLOR_WEIGHT;
    }
    if let Some(occasion) = &criteria.occasion {
        factors += 1;
        if pattern.is_best_for(occasion) {
            total += OCCASION_BEST;
        } else if pattern.should_avoid_for(occasion) {
            total += OCCASION_AVOID;
        }
    }
    if !criteria.keywords.is_empty() {
        factors += 1;
        let matched = criteria
            .keywords
            .iter()
            .filter(|k| pattern.keywords.iter().any(|p| p == *k))
            .count();
        total += matched as f64 / criteria.keywords.len() as f64 * KEYWORD_WEIGHT;
    }

    if factors == 0 {
        return pattern.universal_appeal;
    }
    let raw = total / f64::from(factors);
    raw * MATCH_BLEND + pattern.universal_appeal * (1.0 - MATCH_BLEND)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPattern {
    pub pattern: SmartPattern,
    pub score: f64,
}

/// Score and order candidates, best first. Patterns that ignore supplied
/// colors are dropped when the criteria carry a color preference without the
/// override. Ties fall back to name, then id.
pub fn rank_patterns(patterns: Vec<SmartPattern>, criteria: &MatchCriteria) -> Vec<ScoredPattern> {
    let mut scored: Vec<ScoredPattern> = patterns
        .into_iter()
        .filter(|p| p.respects_colors || !criteria.requires_color_respect())
        .map(|pattern| {
            let score = calculate_match_score(&pattern, criteria);
            ScoredPattern { pattern, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.pattern.item.name.cmp(&b.pattern.item.name))
            .then_with(|| a.pattern.item.id.cmp(&b.pattern.item.id))
    });
    scored
}

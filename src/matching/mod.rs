//! Effect filtering and pattern scoring against a query's attributes.

pub mod score;

use std::collections::BTreeSet;

use crate::effects::{ColorFamily, EffectCatalog};
use crate::models::{EffectMetadata, EnergyLevel, Mood, MotionType, QueryAnalysis, Vibe};

pub use score::{calculate_match_score, rank_patterns, ScoredPattern, SmartPattern};

/// Motions that can stand in for one another
const MOTION_GROUPS: &[&[MotionType]] = &[
    &[MotionType::Flowing, MotionType::Pulsing],
    &[MotionType::Chasing, MotionType::Scanning],
    &[MotionType::Twinkling, MotionType::Explosive],
];

/// Same motion, or both in one compatibility group
pub fn motion_compatible(wanted: MotionType, candidate: MotionType) -> bool {
    wanted == candidate
        || MOTION_GROUPS
            .iter()
            .any(|group| group.contains(&wanted) && group.contains(&candidate))
}

/// Constraints and preferences a candidate is checked against. Empty sets and
/// `None` mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchCriteria {
    pub moods: BTreeSet<Mood>,
    pub vibes: BTreeSet<Vibe>,
    pub motion_type: Option<MotionType>,
    pub energy_level: Option<EnergyLevel>,
    pub occasion: Option<String>,
    pub color_families: BTreeSet<ColorFamily>,
    pub keywords: Vec<String>,
    pub has_color_preference: bool,
    /// Caller explicitly wants effects that bring their own colors
    pub allow_color_override: bool,
}

impl MatchCriteria {
    pub fn from_analysis(analysis: &QueryAnalysis) -> Self {
        let keywords = analysis
            .theme
            .iter()
            .flat_map(|theme| theme.split('_'))
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            moods: analysis.mood.into_iter().collect(),
            vibes: analysis.vibe.into_iter().collect(),
            motion_type: analysis.motion_type,
            energy_level: analysis.energy_level,
            occasion: analysis.context.clone(),
            color_families: analysis
                .color_preferences
                .iter()
                .map(|c| ColorFamily::of(*c))
                .collect(),
            keywords,
            has_color_preference: analysis.has_color_preference(),
            allow_color_override: analysis.wants_color_override,
        }
    }

    /// Whether effects that ignore supplied colors must be dropped
    pub fn requires_color_respect(&self) -> bool {
        self.has_color_preference && !self.allow_color_override
    }

    pub fn accepts_effect(&self, effect: &EffectMetadata) -> bool {
        if self.requires_color_respect() && !effect.respects_colors {
            return false;
        }
        if !self.moods.is_empty() && self.moods.is_disjoint(&effect.moods) {
            return false;
        }
        if let Some(wanted) = self.motion_type {
            if !motion_compatible(wanted, effect.motion_type) {
                return false;
            }
        }
        if let Some(wanted) = self.energy_level {
            if !wanted.is_near(effect.energy_level) {
                return false;
            }
        }
        if let Some(occasion) = &self.occasion {
            if effect.should_avoid_for(occasion) {
                return false;
            }
        }
        true
    }
}

/// Effects satisfying every supplied constraint, in ascending id order
pub fn find_matching_effects<'c>(
    catalog: &'c EffectCatalog,
    criteria: &MatchCriteria,
) -> Vec<&'c EffectMetadata> {
    catalog.filter(|effect| criteria.accepts_effect(effect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use crate::query::analyze;

    #[test]
    fn motion_groups() {
        assert!(motion_compatible(MotionType::Flowing, MotionType::Pulsing));
        assert!(motion_compatible(MotionType::Scanning, MotionType::Chasing));
        assert!(motion_compatible(MotionType::Static, MotionType::Static));
        assert!(!motion_compatible(MotionType::Flowing, MotionType::Chasing));
        assert!(!motion_compatible(MotionType::Flickering, MotionType::Twinkling));
    }

    #[test]
    fn color_preference_excludes_color_ignoring_effects() {
        let catalog = EffectCatalog::builtin();
        let criteria = MatchCriteria {
            has_color_preference: true,
            color_families: [ColorFamily::of(Rgb::new(255, 0, 0))].into_iter().collect(),
            ..Default::default()
        };
        let ids: Vec<u16> = find_matching_effects(&catalog, &criteria)
            .iter()
            .map(|e| e.id)
            .collect();
        assert!(!ids.contains(&9));
        assert!(ids.contains(&0));

        let relaxed = MatchCriteria {
            allow_color_override: true,
            ..criteria
        };
        let ids: Vec<u16> = find_matching_effects(&catalog, &relaxed)
            .iter()
            .map(|e| e.id)
            .collect();
        assert!(ids.contains(&9));
    }

    #[test]
    fn no_criteria_keeps_everything() {
        let catalog = EffectCatalog::builtin();
        let all = find_matching_effects(&catalog, &MatchCriteria::default());
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn all_constraints_must_hold() {
        let catalog = EffectCatalog::builtin();
        let criteria = MatchCriteria {
            moods: [Mood::Calm].into_iter().collect(),
            motion_type: Some(MotionType::Flowing),
            energy_level: Some(EnergyLevel::Low),
            occasion: Some("party".into()),
            ..Default::default()
        };
        let found = find_matching_effects(&catalog, &criteria);
        assert!(!found.is_empty());
        for effect in found {
            assert!(effect.moods.contains(&Mood::Calm));
            assert!(motion_compatible(MotionType::Flowing, effect.motion_type));
            assert!(EnergyLevel::Low.is_near(effect.energy_level));
            // Lake avoids parties
            assert_ne!(effect.id, 75);
        }
    }

    #[test]
    fn criteria_from_rainbow_query() {
        let criteria = MatchCriteria::from_analysis(&analyze("red rainbow birthday party"));
        assert!(criteria.has_color_preference);
        assert!(criteria.allow_color_override);
        assert!(!criteria.requires_color_respect());
        assert_eq!(criteria.keywords, vec!["birthday".to_string()]);
        assert_eq!(criteria.occasion.as_deref(), Some("party"));
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Device effect identifier. Ids at or above [`CUSTOM_EFFECT_BASE`] are custom
/// effects executed outside the device firmware.
pub type EffectId = u16;

pub const CUSTOM_EFFECT_BASE: EffectId = 1000;

/// Fine-grained emotional tag
#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[ts(export, export_to = "effects.ts")]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Calm,
    Cozy,
    Romantic,
    Elegant,
    Cheerful,
    Playful,
    Festive,
    Energetic,
    Dramatic,
    Mysterious,
    Spooky,
    Patriotic,
}

/// Coarse mood grouping used by the browse screens
#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[ts(export, export_to = "effects.ts")]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    Relaxed,
    Intimate,
    Upbeat,
    Celebratory,
    Intense,
    Eerie,
}

/// Style tag layered on top of mood
#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[ts(export, export_to = "effects.ts")]
#[serde(rename_all = "snake_case")]
pub enum Vibe {
    Chill,
    Dreamy,
    Natural,
    Classic,
    Modern,
    Retro,
    Magical,
    Party,
    Sporty,
    Intense,
}

/// How an effect moves along the strip
#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[ts(export, export_to = "effects.ts")]
#[serde(rename_all = "snake_case")]
pub enum MotionType {
    Static,
    Flowing,
    Pulsing,
    Chasing,
    Scanning,
    Twinkling,
    Explosive,
    Flickering,
}

/// Ordered energy scale
#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[ts(export, export_to = "effects.ts")]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl EnergyLevel {
    /// Position on the ordered scale, starting at 0
    pub fn step(self) -> i8 {
        match self {
            EnergyLevel::VeryLow => 0,
            EnergyLevel::Low => 1,
            EnergyLevel::Medium => 2,
            EnergyLevel::High => 3,
            EnergyLevel::VeryHigh => 4,
        }
    }

    /// True when the two levels are at most one step apart
    pub fn is_near(self, other: EnergyLevel) -> bool {
        (self.step() - other.step()).abs() <= 1
    }
}

/// Static descriptive metadata for one device effect
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "effects.ts")]
#[ts(rename_all = "camelCase")]
pub struct EffectMetadata {
    pub id: EffectId,
    pub name: String,
    /// False when the effect ignores supplied colors and renders its own
    pub respects_colors: bool,
    pub moods: BTreeSet<Mood>,
    pub vibes: BTreeSet<Vibe>,
    pub motion_type: MotionType,
    pub energy_level: EnergyLevel,
    pub min_speed: u8,
    pub max_speed: u8,
    pub default_speed: u8,
    pub min_intensity: u8,
    pub max_intensity: u8,
    pub default_intensity: u8,
    pub best_for_occasions: Vec<String>,
    pub avoid_for_occasions: Vec<String>,
}

impl EffectMetadata {
    /// Permissive fallback used for ids the registry does not know
    pub fn generic(id: EffectId) -> Self {
        Self {
            id,
            name: format!("Effect {}", id),
            respects_colors: true,
            moods: BTreeSet::new(),
            vibes: BTreeSet::new(),
            motion_type: MotionType::Static,
            energy_level: EnergyLevel::Medium,
            min_speed: 0,
            max_speed: 255,
            default_speed: 128,
            min_intensity: 0,
            max_intensity: 255,
            default_intensity: 128,
            best_for_occasions: Vec::new(),
            avoid_for_occasions: Vec::new(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id >= CUSTOM_EFFECT_BASE
    }

    pub fn clamp_speed(&self, speed: u8) -> u8 {
        speed.clamp(self.min_speed, self.max_speed.max(self.min_speed))
    }

    pub fn clamp_intensity(&self, intensity: u8) -> u8 {
        intensity.clamp(self.min_intensity, self.max_intensity.max(self.min_intensity))
    }

    pub fn is_best_for(&self, occasion: &str) -> bool {
        self.best_for_occasions
            .iter()
            .any(|o| o.eq_ignore_ascii_case(occasion))
    }

    pub fn should_avoid_for(&self, occasion: &str) -> bool {
        self.avoid_for_occasions
            .iter()
            .any(|o| o.eq_ignore_ascii_case(occasion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_neighbours_are_one_step_apart() {
        assert!(EnergyLevel::Medium.is_near(EnergyLevel::High));
        assert!(EnergyLevel::Medium.is_near(EnergyLevel::Medium));
        assert!(!EnergyLevel::Low.is_near(EnergyLevel::High));
        assert!(!EnergyLevel::VeryHigh.is_near(EnergyLevel::VeryLow));
    }

    #[test]
    fn clamps_stay_inside_recommended_range() {
        let mut effect = EffectMetadata::generic(2);
        effect.min_speed = 40;
        effect.max_speed = 200;
        assert_eq!(effect.clamp_speed(10), 40);
        assert_eq!(effect.clamp_speed(250), 200);
        assert_eq!(effect.clamp_speed(90), 90);
        assert_eq!(effect.clamp_intensity(255), 255);
    }

    #[test]
    fn occasion_checks_ignore_case() {
        let mut effect = EffectMetadata::generic(2);
        effect.avoid_for_occasions = vec!["Bedtime".into()];
        assert!(effect.should_avoid_for("bedtime"));
        assert!(!effect.is_best_for("bedtime"));
    }

    #[test]
    fn custom_ids_start_at_one_thousand() {
        assert!(!EffectMetadata::generic(999).is_custom());
        assert!(EffectMetadata::generic(1000).is_custom());
    }

    #[test]
    fn tags_serialize_as_snake_case() {
        let json = serde_json::to_string(&EnergyLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
    }
}

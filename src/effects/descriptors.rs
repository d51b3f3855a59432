//! Display descriptors for the semantic tags, and the table that maps the
//! fine-grained moods onto the coarse browse categories.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::effects::ColorFamily;
use crate::models::{EnergyLevel, Mood, MoodCategory, MotionType, QueryAnalysis, Rgb, Vibe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodDescriptor {
    pub mood: Mood,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub accent: Rgb,
    pub category: MoodCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibeDescriptor {
    pub vibe: Vibe,
    pub display_name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub category: MoodCategory,
    pub display_name: &'static str,
    pub icon: &'static str,
}

const MOOD_TABLE: &[MoodDescriptor] = &[
    MoodDescriptor { mood: Mood::Calm, display_name: "Calm", icon: "spa", accent: Rgb::new(120, 170, 255), category: MoodCategory::Relaxed },
    MoodDescriptor { mood: Mood::Cozy, display_name: "Cozy", icon: "fireplace", accent: Rgb::new(255, 150, 60), category: MoodCategory::Relaxed },
    MoodDescriptor { mood: Mood::Romantic, display_name: "Romantic", icon: "favorite", accent: Rgb::new(255, 60, 120), category: MoodCategory::Intimate },
    MoodDescriptor { mood: Mood::Elegant, display_name: "Elegant", icon: "diamond", accent: Rgb::new(255, 215, 140), category: MoodCategory::Intimate },
    MoodDescriptor { mood: Mood::Cheerful, display_name: "Cheerful", icon: "sunny", accent: Rgb::new(255, 220, 0), category: MoodCategory::Upbeat },
    MoodDescriptor { mood: Mood::Playful, display_name: "Playful", icon: "toys", accent: Rgb::new(0, 220, 200), category: MoodCategory::Upbeat },
    MoodDescriptor { mood: Mood::Festive, display_name: "Festive", icon: "celebration", accent: Rgb::new(255, 40, 40), category: MoodCategory::Celebratory },
    MoodDescriptor { mood: Mood::Patriotic, display_name: "Patriotic", icon: "flag", accent: Rgb::new(40, 80, 255), category: MoodCategory::Celebratory },
    MoodDescriptor { mood: Mood::Energetic, display_name: "Energetic", icon: "bolt", accent: Rgb::new(255, 0, 200), category: MoodCategory::Intense },
    MoodDescriptor { mood: Mood::Dramatic, display_name: "Dramatic", icon: "theater_comedy", accent: Rgb::new(160, 0, 40), category: MoodCategory::Intense },
    MoodDescriptor { mood: Mood::Mysterious, display_name: "Mysterious", icon: "nights_stay", accent: Rgb::new(90, 0, 160), category: MoodCategory::Eerie },
    MoodDescriptor { mood: Mood::Spooky, display_name: "Spooky", icon: "skull", accent: Rgb::new(255, 100, 0), category: MoodCategory::Eerie },
];

const VIBE_TABLE: &[VibeDescriptor] = &[
    VibeDescriptor { vibe: Vibe::Chill, display_name: "Chill", icon: "weekend" },
    VibeDescriptor { vibe: Vibe::Dreamy, display_name: "Dreamy", icon: "cloud" },
    VibeDescriptor { vibe: Vibe::Natural, display_name: "Natural", icon: "forest" },
    VibeDescriptor { vibe: Vibe::Classic, display_name: "Classic", icon: "star" },
    VibeDescriptor { vibe: Vibe::Modern, display_name: "Modern", icon: "apartment" },
    VibeDescriptor { vibe: Vibe::Retro, display_name: "Retro", icon: "album" },
    VibeDescriptor { vibe: Vibe::Magical, display_name: "Magical", icon: "auto_awesome" },
    VibeDescriptor { vibe: Vibe::Party, display_name: "Party", icon: "nightlife" },
    VibeDescriptor { vibe: Vibe::Sporty, display_name: "Sporty", icon: "sports" },
    VibeDescriptor { vibe: Vibe::Intense, display_name: "Intense", icon: "local_fire_department" },
];

const CATEGORY_TABLE: &[CategoryDescriptor] = &[
    CategoryDescriptor { category: MoodCategory::Relaxed, display_name: "Relax & Unwind", icon: "spa" },
    CategoryDescriptor { category: MoodCategory::Intimate, display_name: "Intimate", icon: "favorite" },
    CategoryDescriptor { category: MoodCategory::Upbeat, display_name: "Upbeat", icon: "sunny" },
    CategoryDescriptor { category: MoodCategory::Celebratory, display_name: "Celebrate", icon: "celebration" },
    CategoryDescriptor { category: MoodCategory::Intense, display_name: "High Energy", icon: "bolt" },
    CategoryDescriptor { category: MoodCategory::Eerie, display_name: "Eerie", icon: "nights_stay" },
];

impl Mood {
    pub fn descriptor(self) -> &'static MoodDescriptor {
        MOOD_TABLE
            .iter()
            .find(|d| d.mood == self)
            .unwrap_or(&MOOD_TABLE[0])
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    /// Coarse category this mood is browsed under
    pub fn category(self) -> MoodCategory {
        self.descriptor().category
    }
}

impl MoodCategory {
    pub fn descriptor(self) -> &'static CategoryDescriptor {
        CATEGORY_TABLE
            .iter()
            .find(|d| d.category == self)
            .unwrap_or(&CATEGORY_TABLE[0])
    }

    /// Fine-grained moods in this category, in table order
    pub fn moods(self) -> Vec<Mood> {
        MOOD_TABLE
            .iter()
            .filter(|d| d.category == self)
            .map(|d| d.mood)
            .collect()
    }
}

impl Vibe {
    pub fn descriptor(self) -> &'static VibeDescriptor {
        VIBE_TABLE
            .iter()
            .find(|d| d.vibe == self)
            .unwrap_or(&VIBE_TABLE[0])
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }
}

impl MotionType {
    pub fn display_name(self) -> &'static str {
        match self {
            MotionType::Static => "Static",
            MotionType::Flowing => "Flowing",
            MotionType::Pulsing => "Pulsing",
            MotionType::Chasing => "Chasing",
            MotionType::Scanning => "Scanning",
            MotionType::Twinkling => "Twinkling",
            MotionType::Explosive => "Explosive",
            MotionType::Flickering => "Flickering",
        }
    }
}

impl EnergyLevel {
    pub fn display_name(self) -> &'static str {
        match self {
            EnergyLevel::VeryLow => "Very Low",
            EnergyLevel::Low => "Low",
            EnergyLevel::Medium => "Medium",
            EnergyLevel::High => "High",
            EnergyLevel::VeryHigh => "Very High",
        }
    }
}

/// One display chip describing what a query asked for
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "effects.ts")]
#[ts(rename_all = "camelCase")]
pub struct TagLabel {
    pub kind: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub accent: Option<Rgb>,
}

impl TagLabel {
    fn new(kind: &str, label: &str, icon: Option<&str>, accent: Option<Rgb>) -> Self {
        Self {
            kind: kind.to_string(),
            label: label.to_string(),
            icon: icon.map(str::to_string),
            accent,
        }
    }
}

/// Labels for the attributes found in a query: mood and its category, vibe,
/// energy, motion, then one per distinct color family.
pub fn query_labels(analysis: &QueryAnalysis) -> Vec<TagLabel> {
    let mut labels = Vec::new();
    if let Some(mood) = analysis.mood {
        let d = mood.descriptor();
        labels.push(TagLabel::new("mood", d.display_name, Some(d.icon), Some(d.accent)));
        let c = d.category.descriptor();
        labels.push(TagLabel::new("category", c.display_name, Some(c.icon), None));
    }
    if let Some(vibe) = analysis.vibe {
        let d = vibe.descriptor();
        labels.push(TagLabel::new("vibe", d.display_name, Some(d.icon), None));
    }
    if let Some(energy) = analysis.energy_level {
        labels.push(TagLabel::new("energy", energy.display_name(), None, None));
    }
    if let Some(motion) = analysis.motion_type {
        labels.push(TagLabel::new("motion", motion.display_name(), None, None));
    }

    let mut families: Vec<ColorFamily> = Vec::new();
    for family in analysis.color_preferences.iter().map(|c| ColorFamily::of(*c)) {
        if !families.contains(&family) {
            families.push(family);
        }
    }
    labels.extend(
        families
            .into_iter()
            .map(|f| TagLabel::new("color", f.display_name(), None, None)),
    );
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_its_own_descriptor() {
        let all = [
            Mood::Calm,
            Mood::Cozy,
            Mood::Romantic,
            Mood::Elegant,
            Mood::Cheerful,
            Mood::Playful,
            Mood::Festive,
            Mood::Energetic,
            Mood::Dramatic,
            Mood::Mysterious,
            Mood::Spooky,
            Mood::Patriotic,
        ];
        for mood in all {
            assert_eq!(mood.descriptor().mood, mood);
        }
    }

    #[test]
    fn category_conversion_is_consistent_both_ways() {
        for descriptor in MOOD_TABLE {
            let category = descriptor.mood.category();
            assert!(category.moods().contains(&descriptor.mood));
        }
        assert_eq!(
            MoodCategory::Eerie.moods(),
            vec![Mood::Mysterious, Mood::Spooky]
        );
    }

    #[test]
    fn vibe_names_come_from_table() {
        assert_eq!(Vibe::Magical.display_name(), "Magical");
        assert_eq!(MoodCategory::Relaxed.descriptor().display_name, "Relax & Unwind");
    }

    #[test]
    fn labels_follow_the_analysis() {
        let analysis = QueryAnalysis {
            mood: Some(Mood::Calm),
            vibe: Some(Vibe::Dreamy),
            energy_level: Some(EnergyLevel::Low),
            color_preferences: vec![Rgb::new(0, 60, 255), Rgb::new(0, 0, 140), Rgb::new(255, 0, 0)],
            ..Default::default()
        };
        let labels: Vec<(String, String)> = query_labels(&analysis)
            .into_iter()
            .map(|l| (l.kind, l.label))
            .collect();
        let expected: Vec<(String, String)> = [
            ("mood", "Calm"),
            ("category", "Relax & Unwind"),
            ("vibe", "Dreamy"),
            ("energy", "Low"),
            ("color", "Blue"),
            ("color", "Red"),
        ]
        .into_iter()
        .map(|(k, l)| (k.to_string(), l.to_string()))
        .collect();
        assert_eq!(labels, expected);
        assert!(query_labels(&QueryAnalysis::default()).is_empty());
    }
}

//! Expands palette nodes into concrete, named device patterns.
//!
//! Ordinary palettes run against a curated effect template; architectural
//! style nodes are dispatched on their `generator` metadata to the spacing,
//! galaxy and twinkle grids in [`architectural`]. Output depends only on the
//! node, the effect catalog and the settings, so repeated calls return the
//! same ordered list.

pub mod architectural;
pub mod templates;

use crate::effects::EffectCatalog;
use crate::models::{
    DevicePayload, EffectId, GeneratorKind, LibraryNode, PatternItem, Rgb, Segment,
};
use crate::settings::EngineSettings;

pub use templates::{pattern_name, pluralize, template_for_root};

pub struct PatternGenerator<'a> {
    effects: &'a EffectCatalog,
    settings: &'a EngineSettings,
}

/// Everything needed to emit one pattern item
struct PatternSpec<'n> {
    id: String,
    name: String,
    effect: EffectId,
    colors: &'n [Rgb],
    speed: u8,
    intensity: u8,
    grouping: Option<u8>,
    spacing: Option<u8>,
}

impl<'a> PatternGenerator<'a> {
    pub fn new(effects: &'a EffectCatalog, settings: &'a EngineSettings) -> Self {
        Self { effects, settings }
    }

    /// Patterns for a palette node filed under the root `category_id`.
    /// Non-palette nodes and palettes without colors produce nothing.
    pub fn generate_for_palette(&self, node: &LibraryNode, category_id: &str) -> Vec<PatternItem> {
        if !node.is_palette() || node.theme_colors.is_empty() {
            return Vec::new();
        }

        match node.generator() {
            GeneratorKind::Template => {
                let effects = node
                    .suggested_effects()
                    .unwrap_or_else(|| template_for_root(category_id).to_vec());
                self.from_template(node, category_id, &effects)
            }
            GeneratorKind::Spacing => self.spacing_grid(node, category_id),
            GeneratorKind::Galaxy => {
                let mut items = self.galaxy_grid(node, category_id);
                items.extend(self.twinkle_grid(node, category_id));
                items
            }
            GeneratorKind::Twinkle => self.twinkle_grid(node, category_id),
        }
    }

    /// One pattern per effect id, in template order
    pub fn from_template(
        &self,
        node: &LibraryNode,
        category_id: &str,
        effects: &[EffectId],
    ) -> Vec<PatternItem> {
        let speed = node.default_speed().unwrap_or(self.settings.default_speed);
        let intensity = node
            .default_intensity()
            .unwrap_or(self.settings.default_intensity);

        effects
            .iter()
            .map(|&effect| {
                let effect_name = self.effects.name(effect);
                self.build(
                    node,
                    category_id,
                    PatternSpec {
                        id: format!("{}_fx{}", node.id, effect),
                        name: pattern_name(effect, &node.name, &effect_name),
                        effect,
                        colors: &node.theme_colors,
                        speed,
                        intensity,
                        grouping: node.grouping(),
                        spacing: node.spacing(),
                    },
                )
            })
            .collect()
    }

    fn build(&self, node: &LibraryNode, category_id: &str, spec: PatternSpec<'_>) -> PatternItem {
        let segment = Segment::new(
            spec.effect,
            spec.colors,
            self.effects.clamp_speed(spec.effect, spec.speed),
            self.effects.clamp_intensity(spec.effect, spec.intensity),
        )
        .with_grouping(spec.grouping, spec.spacing);
        let brightness = node
            .brightness()
            .unwrap_or(self.settings.default_brightness);

        PatternItem {
            id: spec.id,
            name: spec.name,
            category_id: category_id.to_string(),
            device_payload: DevicePayload::single(brightness, segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::library::{META_DEFAULT_SPEED, META_SUGGESTED_EFFECTS};
    use crate::models::PALETTE_COLORS_ONLY;
    use serde_json::json;

    fn ocean() -> LibraryNode {
        LibraryNode::palette(
            "nature.ocean",
            "Ocean",
            "nature",
            vec![
                Rgb::new(0, 64, 255),
                Rgb::new(0, 192, 192),
                Rgb::new(255, 255, 255),
                Rgb::new(10, 10, 10),
            ],
            0,
        )
    }

    #[test]
    fn generation_is_deterministic() {
        let catalog = EffectCatalog::builtin();
        let settings = EngineSettings::default();
        let generator = PatternGenerator::new(&catalog, &settings);
        let node = ocean();
        assert_eq!(
            generator.generate_for_palette(&node, "nature"),
            generator.generate_for_palette(&node, "nature")
        );
    }

    #[test]
    fn template_items_follow_payload_rules() {
        let catalog = EffectCatalog::builtin();
        let settings = EngineSettings::default();
        let generator = PatternGenerator::new(&catalog, &settings);
        let items = generator.generate_for_palette(&ocean(), "nature");

        assert_eq!(items.len(), template_for_root("nature").len());
        for item in &items {
            let seg = &item.device_payload.seg[0];
            assert_eq!(item.category_id, "nature");
            assert_eq!(seg.col.len(), 3);
            assert!(seg.col.iter().all(|c| c[3] == 0));
            assert_eq!(seg.pal, PALETTE_COLORS_ONLY);
            assert_eq!(item.device_payload.bri, 255);
        }
        assert_eq!(items[0].id, "nature.ocean_fx1003");
        assert_eq!(items[0].name, "Ocean Swell");

        let mut names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }

    #[test]
    fn suggested_effects_override_template_and_speed_is_clamped() {
        let catalog = EffectCatalog::builtin();
        let settings = EngineSettings::default();
        let generator = PatternGenerator::new(&catalog, &settings);
        let node = ocean()
            .with_meta(META_SUGGESTED_EFFECTS, json!([2, 4242]))
            .with_meta(META_DEFAULT_SPEED, 250);

        let items = generator.generate_for_palette(&node, "nature");
        assert_eq!(items.len(), 2);
        // Breathe tops out at 160
        assert_eq!(items[0].device_payload.seg[0].sx, 160);
        assert_eq!(items[0].name, "Breathing Ocean");
        // Unknown effects pass through unclamped with the fallback name
        assert_eq!(items[1].device_payload.seg[0].sx, 250);
        assert_eq!(items[1].name, "Ocean - Effect 4242");
    }

    #[test]
    fn folders_and_colorless_palettes_produce_nothing() {
        let catalog = EffectCatalog::builtin();
        let settings = EngineSettings::default();
        let generator = PatternGenerator::new(&catalog, &settings);
        let folder = LibraryNode::folder("f", "Folder", "nature", 0);
        let empty = LibraryNode::palette("p", "Empty", "nature", vec![], 0);
        assert!(generator.generate_for_palette(&folder, "nature").is_empty());
        assert!(generator.generate_for_palette(&empty, "nature").is_empty());
    }
}

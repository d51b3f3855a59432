use crate::models::{EffectId, LibraryNode, PatternItem};

use super::{PatternGenerator, PatternSpec};

const SOLID: EffectId = 0;
const RUNNING: EffectId = 15;
const TWINKLE: EffectId = 17;

const GRID_SIZE: u8 = 4;
const GALAXY_DIM_LEVELS: [u8; 3] = [50, 40, 30];

const TWINKLE_VARIANTS: &[(EffectId, &str)] = &[
    (TWINKLE, "Twinkle"),
    (20, "Sparkle"),
    (87, "Glitter"),
    (80, "Twinklefox"),
    (51, "Fairy Twinkle"),
];

const TWINKLE_SPEEDS: &[(&str, u8)] = &[("Slow", 64), ("Medium", 128), ("Fast", 192)];

/// Device intensity for a dim percentage
fn intensity_for_dim(percent: u8) -> u8 {
    ((u16::from(percent.min(100)) * 255 + 50) / 100) as u8
}

impl PatternGenerator<'_> {
    /// Every on/off combination up to 4x4, then the unbroken "All" look
    pub fn spacing_grid(&self, node: &LibraryNode, category_id: &str) -> Vec<PatternItem> {
        let style = node.style();
        let colors = &node.theme_colors[..1.min(node.theme_colors.len())];
        let speed = self.settings.default_speed;
        let intensity = self.settings.default_intensity;

        let mut items = Vec::with_capacity(usize::from(GRID_SIZE * GRID_SIZE) + 1);
        for on in 1..=GRID_SIZE {
            for off in 1..=GRID_SIZE {
                items.push(self.build(
                    node,
                    category_id,
                    PatternSpec {
                        id: format!("{}_spacing_{}_{}", node.id, on, off),
                        name: format!("{} On {} Off", on, off),
                        effect: SOLID,
                        colors,
                        speed,
                        intensity,
                        grouping: Some(on),
                        spacing: Some(off),
                    },
                ));
            }
        }
        items.push(self.build(
            node,
            category_id,
            PatternSpec {
                id: format!("{}_all", node.id),
                name: format!("All {}", style),
                effect: SOLID,
                colors,
                speed,
                intensity,
                grouping: Some(1),
                spacing: Some(0),
            },
        ));
        items
    }

    /// Bright/dim runs at each dim level, then a running "Cascade"
    pub fn galaxy_grid(&self, node: &LibraryNode, category_id: &str) -> Vec<PatternItem> {
        let Some(&base) = node.theme_colors.first() else {
            return Vec::new();
        };
        let speed = self.settings.default_speed;

        let mut items = Vec::with_capacity(GALAXY_DIM_LEVELS.len() * 16 + 1);
        for pct in GALAXY_DIM_LEVELS {
            let colors = [base, base.dimmed(pct)];
            for bright in 1..=GRID_SIZE {
                for dim in 1..=GRID_SIZE {
                    items.push(self.build(
                        node,
                        category_id,
                        PatternSpec {
                            id: format!("{}_galaxy_{}_{}_{}", node.id, pct, bright, dim),
                            name: format!("{} Bright {} Dim ({}%)", bright, dim, pct),
                            effect: SOLID,
                            colors: &colors,
                            speed,
                            intensity: intensity_for_dim(pct),
                            grouping: Some(bright),
                            spacing: Some(dim),
                        },
                    ));
                }
            }
        }

        let pct = node.dim_level().unwrap_or(GALAXY_DIM_LEVELS[0]);
        let colors = [base, base.dimmed(pct)];
        items.push(self.build(
            node,
            category_id,
            PatternSpec {
                id: format!("{}_cascade", node.id),
                name: "Cascade".to_string(),
                effect: RUNNING,
                colors: &colors,
                speed,
                intensity: intensity_for_dim(pct),
                grouping: node.grouping(),
                spacing: node.spacing(),
            },
        ));
        items
    }

    /// Five twinkle-family effects, then plain twinkle at three speeds
    pub fn twinkle_grid(&self, node: &LibraryNode, category_id: &str) -> Vec<PatternItem> {
        let style = node.style();
        let colors = &node.theme_colors;
        let intensity = self.settings.default_intensity;

        let mut items = Vec::with_capacity(TWINKLE_VARIANTS.len() + TWINKLE_SPEEDS.len());
        for &(effect, label) in TWINKLE_VARIANTS {
            items.push(self.build(
                node,
                category_id,
                PatternSpec {
                    id: format!("{}_twinkle_fx{}", node.id, effect),
                    name: format!("{} {}", style, label),
                    effect,
                    colors,
                    speed: self.settings.default_speed,
                    intensity,
                    grouping: node.grouping(),
                    spacing: node.spacing(),
                },
            ));
        }
        for &(label, speed) in TWINKLE_SPEEDS {
            items.push(self.build(
                node,
                category_id,
                PatternSpec {
                    id: format!("{}_twinkle_{}", node.id, label.to_lowercase()),
                    name: format!("{} {} Twinkle", label, style),
                    effect: TWINKLE,
                    colors,
                    speed,
                    intensity,
                    grouping: node.grouping(),
                    spacing: node.spacing(),
                },
            ));
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::definitions::architectural_nodes;
    use crate::effects::EffectCatalog;
    use crate::settings::EngineSettings;

    fn style_node(kind: &str) -> LibraryNode {
        architectural_nodes()
            .into_iter()
            .find(|n| n.id == format!("architectural.warm_white.{}", kind))
            .unwrap()
    }

    #[test]
    fn spacing_style_yields_seventeen() {
        let catalog = EffectCatalog::builtin();
        let settings = EngineSettings::default();
        let generator = PatternGenerator::new(&catalog, &settings);
        let items = generator.generate_for_palette(&style_node("spacing"), "architectural");

        assert_eq!(items.len(), 17);
        assert_eq!(items[0].name, "1 On 1 Off");
        assert_eq!(items[15].name, "4 On 4 Off");
        assert_eq!(items[16].name, "All Warm White");
        let seg = &items[16].device_payload.seg[0];
        assert_eq!((seg.grp, seg.spc), (Some(1), Some(0)));
    }

    #[test]
    fn galaxy_style_yields_galaxy_and_twinkle_grids() {
        let catalog = EffectCatalog::builtin();
        let settings = EngineSettings::default();
        let generator = PatternGenerator::new(&catalog, &settings);
        let node = style_node("galaxy");

        assert_eq!(generator.galaxy_grid(&node, "architectural").len(), 49);
        assert_eq!(generator.twinkle_grid(&node, "architectural").len(), 8);

        let items = generator.generate_for_palette(&node, "architectural");
        assert_eq!(items.len(), 57);
        assert_eq!(items[0].name, "1 Bright 1 Dim (50%)");
        assert_eq!(items[48].name, "Cascade");

        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 57);
        let names: HashSet<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names.len(), 57);
    }

    #[test]
    fn galaxy_intensity_tracks_dim_level() {
        assert_eq!(intensity_for_dim(50), 128);
        assert_eq!(intensity_for_dim(40), 102);
        assert_eq!(intensity_for_dim(30), 77);
    }

    #[test]
    fn twinkle_style_yields_eight() {
        let catalog = EffectCatalog::builtin();
        let settings = EngineSettings::default();
        let generator = PatternGenerator::new(&catalog, &settings);
        let items = generator.generate_for_palette(&style_node("twinkle"), "architectural");
        assert_eq!(items.len(), 8);
        assert_eq!(items[5].name, "Slow Warm White Twinkle");
        assert_eq!(items[7].device_payload.seg[0].sx, 192);
    }
}

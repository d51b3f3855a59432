//! Curated effect templates and the per-effect naming rules applied when a
//! palette is expanded against them.

use crate::catalog::definitions::{
    ROOT_HOLIDAYS, ROOT_MY_TEAMS, ROOT_NATURE, ROOT_PARTIES, ROOT_SPORTS,
};
use crate::models::EffectId;

const DEFAULT_TEMPLATE: &[EffectId] = &[0, 2, 12, 46, 3, 67, 110, 17, 20, 28, 13, 80, 74, 87];

const HOLIDAY_TEMPLATE: &[EffectId] = &[
    17, 80, 74, 13, 20, 87, 51, 28, 0, 2, 12, 3, 42, 89, 66, 45, 1001, 67,
];

const SPORTS_TEMPLATE: &[EffectId] = &[1004, 28, 15, 31, 11, 1, 23, 0, 3, 13, 42, 89, 110];

const NATURE_TEMPLATE: &[EffectId] = &[1003, 75, 43, 38, 41, 12, 2, 0, 67, 110, 18, 96, 46];

const PARTY_TEMPLATE: &[EffectId] = &[20, 87, 95, 91, 50, 42, 89, 28, 1, 17, 2, 0, 3];

/// Template used for palettes under `root_id`
pub fn template_for_root(root_id: &str) -> &'static [EffectId] {
    match root_id {
        ROOT_HOLIDAYS => HOLIDAY_TEMPLATE,
        ROOT_SPORTS | ROOT_MY_TEAMS => SPORTS_TEMPLATE,
        ROOT_NATURE => NATURE_TEMPLATE,
        ROOT_PARTIES => PARTY_TEMPLATE,
        _ => DEFAULT_TEMPLATE,
    }
}

// `{name}` is the palette name, `{plural}` its plural form.
const NAMING_RULES: &[(EffectId, &str)] = &[
    (0, "Solid {name}"),
    (1, "Blinking {name}"),
    (2, "Breathing {name}"),
    (3, "{name} Wipe"),
    (11, "{name} Dual Scan"),
    (12, "Fading {name}"),
    (13, "{name} Theater Lights"),
    (15, "Running {name}"),
    (17, "Twinkling {plural}"),
    (18, "Dissolving {name}"),
    (20, "Sparkling {plural}"),
    (23, "{name} Strobe"),
    (28, "{name} Chase"),
    (31, "{name} Flash Chase"),
    (38, "{name} Aurora"),
    (41, "{name} Lighthouse"),
    (42, "{name} Fireworks"),
    (43, "{name} Rain"),
    (45, "Flickering {name}"),
    (46, "{name} Gradient"),
    (50, "{name} Dots"),
    (51, "Fairy {plural}"),
    (66, "{name} Fire"),
    (67, "{name} Waves"),
    (74, "Colorful {name} Twinkles"),
    (75, "{name} Lake"),
    (80, "{name} Twinklefox"),
    (87, "Glittering {plural}"),
    (89, "{name} Starburst"),
    (91, "Bouncing {plural}"),
    (95, "{name} Popcorn"),
    (96, "Dripping {name}"),
    (110, "Flowing {name}"),
    (1001, "{name} Heartbeat"),
    (1003, "{name} Swell"),
    (1004, "{name} Team Cheer"),
];

/// Pattern name for `effect` applied to a palette called `palette_name`.
/// Effects without a rule use "{palette} - {effect}".
pub fn pattern_name(effect: EffectId, palette_name: &str, effect_name: &str) -> String {
    match NAMING_RULES.iter().find(|(id, _)| *id == effect) {
        Some((_, rule)) => rule
            .replace("{plural}", &pluralize(palette_name))
            .replace("{name}", palette_name),
        None => format!("{} - {}", palette_name, effect_name),
    }
}

/// English plural of `word`. Words already ending in "s"
/// are left alone.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if word.is_empty() || lower.ends_with('s') {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix(|c: char| c == 'y' || c == 'Y') {
        let before_y = stem.chars().last().map(|c| c.to_ascii_lowercase());
        if matches!(before_y, Some(c) if c.is_ascii_alphabetic() && !"aeiou".contains(c)) {
            return format!("{}ies", stem);
        }
    }

    if lower.ends_with("sh") || lower.ends_with("ch") || lower.ends_with('x') || lower.ends_with('z')
    {
        return format!("{}es", word);
    }

    format!("{}s", word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectCatalog;

    #[test]
    fn pluralize_handles_common_endings() {
        assert_eq!(pluralize("Rose"), "Roses");
        assert_eq!(pluralize("Sky"), "Skies");
        assert_eq!(pluralize("Stars"), "Stars");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Peach"), "Peaches");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn naming_rule_and_fallback() {
        assert_eq!(pattern_name(2, "Ocean", "Breathe"), "Breathing Ocean");
        assert_eq!(pattern_name(1003, "Ocean", "Ocean Waves"), "Ocean Swell");
        assert_eq!(pattern_name(17, "Rose", "Twinkle"), "Twinkling Roses");
        assert_eq!(pattern_name(10, "Ocean", "Scan"), "Ocean - Scan");
    }

    #[test]
    fn templates_are_sized_and_color_respecting() {
        let catalog = EffectCatalog::builtin();
        for root in [ROOT_HOLIDAYS, ROOT_SPORTS, ROOT_NATURE, ROOT_PARTIES, "seasons"] {
            let template = template_for_root(root);
            assert!((12..=30).contains(&template.len()), "{}", root);
            for id in template {
                assert!(catalog.get(*id).is_some(), "unknown effect {}", id);
                assert!(catalog.respects_colors(*id), "effect {} ignores colors", id);
            }
        }
    }
}

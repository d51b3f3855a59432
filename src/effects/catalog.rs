//! Effect registry.
//!
//! The registry is an immutable map from effect id to [`EffectMetadata`],
//! built once from the static table below. Lookups for ids the table does not
//! know fall back to [`EffectMetadata::generic`].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::models::{
    EffectId, EffectMetadata, EnergyLevel as E, Mood as M, MotionType as Mo, Vibe as V,
    CUSTOM_EFFECT_BASE,
};

struct EffectRow {
    id: EffectId,
    name: &'static str,
    respects_colors: bool,
    moods: &'static [M],
    vibes: &'static [V],
    motion: Mo,
    energy: E,
    /// (min, max, default)
    speed: (u8, u8, u8),
    intensity: (u8, u8, u8),
    best: &'static [&'static str],
    avoid: &'static [&'static str],
}

const FULL: (u8, u8, u8) = (0, 255, 128);

const EFFECT_TABLE: &[EffectRow] = &[
    EffectRow { id: 0, name: "Solid", respects_colors: true, moods: &[M::Calm, M::Elegant, M::Cozy], vibes: &[V::Classic, V::Chill], motion: Mo::Static, energy: E::VeryLow, speed: FULL, intensity: FULL, best: &["dinner", "bedtime", "everyday"], avoid: &[] },
    EffectRow { id: 1, name: "Blink", respects_colors: true, moods: &[M::Playful, M::Energetic], vibes: &[V::Party, V::Retro], motion: Mo::Pulsing, energy: E::High, speed: (60, 255, 160), intensity: FULL, best: &["party"], avoid: &["bedtime", "dinner"] },
    EffectRow { id: 2, name: "Breathe", respects_colors: true, moods: &[M::Calm, M::Romantic, M::Cozy], vibes: &[V::Chill, V::Dreamy], motion: Mo::Pulsing, energy: E::Low, speed: (20, 160, 64), intensity: FULL, best: &["bedtime", "date_night", "relaxing"], avoid: &["game_day"] },
    EffectRow { id: 3, name: "Wipe", respects_colors: true, moods: &[M::Cheerful, M::Playful], vibes: &[V::Modern, V::Classic], motion: Mo::Flowing, energy: E::Medium, speed: (40, 220, 120), intensity: FULL, best: &["everyday", "party"], avoid: &[] },
    EffectRow { id: 6, name: "Sweep", respects_colors: true, moods: &[M::Cheerful], vibes: &[V::Modern], motion: Mo::Scanning, energy: E::Medium, speed: (40, 220, 120), intensity: FULL, best: &["everyday"], avoid: &[] },
    EffectRow { id: 8, name: "Colorloop", respects_colors: false, moods: &[M::Playful, M::Cheerful], vibes: &[V::Party, V::Retro], motion: Mo::Flowing, energy: E::Medium, speed: FULL, intensity: FULL, best: &["party"], avoid: &[] },
    EffectRow { id: 9, name: "Rainbow", respects_colors: false, moods: &[M::Playful, M::Festive, M::Cheerful], vibes: &[V::Party, V::Magical], motion: Mo::Flowing, energy: E::Medium, speed: FULL, intensity: FULL, best: &["party", "birthday", "pride"], avoid: &[] },
    EffectRow { id: 10, name: "Scan", respects_colors: true, moods: &[M::Dramatic, M::Mysterious], vibes: &[V::Modern, V::Intense], motion: Mo::Scanning, energy: E::Medium, speed: (40, 230, 140), intensity: FULL, best: &["halloween"], avoid: &["bedtime"] },
    EffectRow { id: 11, name: "Scan Dual", respects_colors: true, moods: &[M::Dramatic], vibes: &[V::Modern], motion: Mo::Scanning, energy: E::High, speed: (40, 230, 160), intensity: FULL, best: &["game_day"], avoid: &["bedtime"] },
    EffectRow { id: 12, name: "Fade", respects_colors: true, moods: &[M::Calm, M::Elegant, M::Romantic], vibes: &[V::Chill, V::Dreamy], motion: Mo::Flowing, energy: E::Low, speed: (10, 160, 60), intensity: FULL, best: &["dinner", "date_night", "relaxing"], avoid: &[] },
    EffectRow { id: 13, name: "Theater", respects_colors: true, moods: &[M::Festive, M::Cheerful], vibes: &[V::Classic, V::Retro], motion: Mo::Chasing, energy: E::Medium, speed: (30, 220, 110), intensity: FULL, best: &["holiday", "christmas"], avoid: &[] },
    EffectRow { id: 15, name: "Running", respects_colors: true, moods: &[M::Energetic, M::Festive], vibes: &[V::Party, V::Sporty], motion: Mo::Chasing, energy: E::High, speed: (40, 240, 150), intensity: FULL, best: &["game_day", "party"], avoid: &["bedtime"] },
    EffectRow { id: 17, name: "Twinkle", respects_colors: true, moods: &[M::Festive, M::Calm, M::Romantic], vibes: &[V::Magical, V::Dreamy], motion: Mo::Twinkling, energy: E::Low, speed: (20, 200, 90), intensity: (40, 255, 128), best: &["holiday", "christmas", "wedding"], avoid: &[] },
    EffectRow { id: 18, name: "Dissolve", respects_colors: true, moods: &[M::Mysterious, M::Calm], vibes: &[V::Dreamy], motion: Mo::Flowing, energy: E::Low, speed: (20, 200, 80), intensity: FULL, best: &["relaxing"], avoid: &[] },
    EffectRow { id: 20, name: "Sparkle", respects_colors: true, moods: &[M::Festive, M::Playful], vibes: &[V::Magical], motion: Mo::Twinkling, energy: E::Medium, speed: (20, 220, 120), intensity: FULL, best: &["holiday", "wedding", "birthday"], avoid: &[] },
    EffectRow { id: 21, name: "Sparkle Dark", respects_colors: true, moods: &[M::Mysterious, M::Spooky], vibes: &[V::Magical], motion: Mo::Twinkling, energy: E::Medium, speed: (20, 220, 120), intensity: FULL, best: &["halloween"], avoid: &["wedding"] },
    EffectRow { id: 23, name: "Strobe", respects_colors: true, moods: &[M::Energetic, M::Dramatic], vibes: &[V::Intense, V::Party], motion: Mo::Explosive, energy: E::VeryHigh, speed: (100, 255, 200), intensity: FULL, best: &["party", "game_day"], avoid: &["bedtime", "dinner", "relaxing"] },
    EffectRow { id: 25, name: "Strobe Mega", respects_colors: true, moods: &[M::Energetic], vibes: &[V::Intense], motion: Mo::Explosive, energy: E::VeryHigh, speed: (120, 255, 220), intensity: FULL, best: &["party"], avoid: &["bedtime", "dinner", "relaxing", "date_night"] },
    EffectRow { id: 28, name: "Chase", respects_colors: true, moods: &[M::Energetic, M::Festive], vibes: &[V::Party, V::Sporty], motion: Mo::Chasing, energy: E::High, speed: (40, 240, 150), intensity: FULL, best: &["game_day", "holiday"], avoid: &["bedtime"] },
    EffectRow { id: 29, name: "Chase Random", respects_colors: false, moods: &[M::Playful], vibes: &[V::Party], motion: Mo::Chasing, energy: E::High, speed: FULL, intensity: FULL, best: &["party"], avoid: &[] },
    EffectRow { id: 30, name: "Chase Rainbow", respects_colors: false, moods: &[M::Playful, M::Festive], vibes: &[V::Party], motion: Mo::Chasing, energy: E::High, speed: FULL, intensity: FULL, best: &["birthday"], avoid: &[] },
    EffectRow { id: 31, name: "Chase Flash", respects_colors: true, moods: &[M::Energetic, M::Dramatic], vibes: &[V::Intense, V::Sporty], motion: Mo::Chasing, energy: E::VeryHigh, speed: (80, 255, 180), intensity: FULL, best: &["game_day"], avoid: &["bedtime", "dinner"] },
    EffectRow { id: 38, name: "Aurora", respects_colors: true, moods: &[M::Calm, M::Mysterious], vibes: &[V::Natural, V::Dreamy], motion: Mo::Flowing, energy: E::Low, speed: (10, 160, 60), intensity: FULL, best: &["relaxing", "bedtime"], avoid: &[] },
    EffectRow { id: 40, name: "Scanner", respects_colors: true, moods: &[M::Dramatic, M::Mysterious], vibes: &[V::Retro], motion: Mo::Scanning, energy: E::Medium, speed: (40, 230, 130), intensity: FULL, best: &["halloween"], avoid: &[] },
    EffectRow { id: 41, name: "Lighthouse", respects_colors: true, moods: &[M::Calm, M::Mysterious], vibes: &[V::Natural], motion: Mo::Scanning, energy: E::Low, speed: (10, 160, 70), intensity: FULL, best: &["relaxing"], avoid: &[] },
    EffectRow { id: 42, name: "Fireworks", respects_colors: true, moods: &[M::Festive, M::Energetic], vibes: &[V::Party], motion: Mo::Explosive, energy: E::High, speed: (60, 240, 150), intensity: FULL, best: &["independence_day", "new_year", "party"], avoid: &["bedtime"] },
    EffectRow { id: 43, name: "Rain", respects_colors: true, moods: &[M::Calm, M::Mysterious], vibes: &[V::Natural], motion: Mo::Flowing, energy: E::Low, speed: (20, 180, 80), intensity: FULL, best: &["relaxing"], avoid: &[] },
    EffectRow { id: 45, name: "Fire Flicker", respects_colors: true, moods: &[M::Cozy, M::Spooky], vibes: &[V::Natural], motion: Mo::Flickering, energy: E::Low, speed: (20, 200, 100), intensity: FULL, best: &["halloween", "relaxing"], avoid: &[] },
    EffectRow { id: 46, name: "Gradient", respects_colors: true, moods: &[M::Calm, M::Elegant], vibes: &[V::Modern], motion: Mo::Flowing, energy: E::Low, speed: (10, 180, 70), intensity: FULL, best: &["everyday", "dinner"], avoid: &[] },
    EffectRow { id: 50, name: "Two Dots", respects_colors: true, moods: &[M::Playful], vibes: &[V::Retro], motion: Mo::Chasing, energy: E::Medium, speed: (40, 220, 120), intensity: FULL, best: &["party"], avoid: &[] },
    EffectRow { id: 51, name: "Fairytwinkle", respects_colors: true, moods: &[M::Romantic, M::Festive], vibes: &[V::Magical, V::Dreamy], motion: Mo::Twinkling, energy: E::Low, speed: (20, 180, 80), intensity: FULL, best: &["wedding", "holiday"], avoid: &[] },
    EffectRow { id: 57, name: "Lightning", respects_colors: true, moods: &[M::Dramatic, M::Spooky], vibes: &[V::Intense], motion: Mo::Explosive, energy: E::High, speed: (60, 255, 160), intensity: FULL, best: &["halloween"], avoid: &["bedtime", "wedding"] },
    EffectRow { id: 63, name: "Pride 2015", respects_colors: false, moods: &[M::Cheerful, M::Festive], vibes: &[V::Party], motion: Mo::Flowing, energy: E::Medium, speed: FULL, intensity: FULL, best: &["pride"], avoid: &[] },
    EffectRow { id: 66, name: "Fire 2012", respects_colors: true, moods: &[M::Cozy, M::Dramatic], vibes: &[V::Natural], motion: Mo::Flickering, energy: E::Medium, speed: (40, 220, 120), intensity: (60, 255, 160), best: &["halloween"], avoid: &[] },
    EffectRow { id: 67, name: "Colorwaves", respects_colors: true, moods: &[M::Calm, M::Cheerful], vibes: &[V::Dreamy], motion: Mo::Flowing, energy: E::Medium, speed: (20, 200, 100), intensity: FULL, best: &["everyday"], avoid: &[] },
    EffectRow { id: 74, name: "Colortwinkles", respects_colors: true, moods: &[M::Festive, M::Playful], vibes: &[V::Magical], motion: Mo::Twinkling, energy: E::Medium, speed: (20, 200, 100), intensity: FULL, best: &["holiday", "christmas"], avoid: &[] },
    EffectRow { id: 75, name: "Lake", respects_colors: true, moods: &[M::Calm], vibes: &[V::Natural, V::Chill], motion: Mo::Flowing, energy: E::VeryLow, speed: (10, 140, 50), intensity: FULL, best: &["relaxing"], avoid: &["party"] },
    EffectRow { id: 76, name: "Meteor", respects_colors: true, moods: &[M::Dramatic, M::Energetic], vibes: &[V::Modern, V::Magical], motion: Mo::Chasing, energy: E::High, speed: (40, 240, 140), intensity: FULL, best: &["party"], avoid: &[] },
    EffectRow { id: 80, name: "Twinklefox", respects_colors: true, moods: &[M::Festive, M::Cozy], vibes: &[V::Magical], motion: Mo::Twinkling, energy: E::Low, speed: (20, 200, 90), intensity: FULL, best: &["holiday", "christmas"], avoid: &[] },
    EffectRow { id: 87, name: "Glitter", respects_colors: true, moods: &[M::Festive, M::Elegant], vibes: &[V::Magical, V::Party], motion: Mo::Twinkling, energy: E::Medium, speed: (20, 220, 120), intensity: FULL, best: &["wedding", "new_year"], avoid: &[] },
    EffectRow { id: 88, name: "Candle", respects_colors: true, moods: &[M::Cozy, M::Romantic], vibes: &[V::Natural, V::Classic], motion: Mo::Flickering, energy: E::VeryLow, speed: (10, 160, 60), intensity: FULL, best: &["dinner", "date_night", "bedtime"], avoid: &["game_day"] },
    EffectRow { id: 89, name: "Fireworks Starburst", respects_colors: true, moods: &[M::Festive, M::Energetic], vibes: &[V::Party], motion: Mo::Explosive, energy: E::High, speed: (60, 240, 150), intensity: FULL, best: &["independence_day", "new_year"], avoid: &["bedtime"] },
    EffectRow { id: 91, name: "Bouncing Balls", respects_colors: true, moods: &[M::Playful], vibes: &[V::Retro, V::Party], motion: Mo::Chasing, energy: E::Medium, speed: (40, 220, 120), intensity: FULL, best: &["birthday"], avoid: &[] },
    EffectRow { id: 95, name: "Popcorn", respects_colors: true, moods: &[M::Playful, M::Cheerful], vibes: &[V::Party], motion: Mo::Explosive, energy: E::High, speed: (40, 240, 140), intensity: FULL, best: &["party", "birthday"], avoid: &["bedtime"] },
    EffectRow { id: 96, name: "Drip", respects_colors: true, moods: &[M::Calm, M::Spooky], vibes: &[V::Natural], motion: Mo::Flowing, energy: E::Low, speed: (20, 180, 80), intensity: FULL, best: &["halloween"], avoid: &[] },
    EffectRow { id: 101, name: "Pacifica", respects_colors: false, moods: &[M::Calm], vibes: &[V::Natural, V::Chill], motion: Mo::Flowing, energy: E::Low, speed: FULL, intensity: FULL, best: &["relaxing"], avoid: &[] },
    EffectRow { id: 104, name: "Sunrise", respects_colors: false, moods: &[M::Calm, M::Cozy], vibes: &[V::Natural], motion: Mo::Static, energy: E::VeryLow, speed: FULL, intensity: FULL, best: &["bedtime", "wake_up"], avoid: &[] },
    EffectRow { id: 110, name: "Flow", respects_colors: true, moods: &[M::Calm, M::Cheerful], vibes: &[V::Modern, V::Dreamy], motion: Mo::Flowing, energy: E::Medium, speed: (20, 200, 100), intensity: FULL, best: &["everyday"], avoid: &[] },
    EffectRow { id: 112, name: "Dancing Shadows", respects_colors: true, moods: &[M::Mysterious, M::Dramatic], vibes: &[V::Dreamy], motion: Mo::Flowing, energy: E::Medium, speed: (20, 200, 100), intensity: FULL, best: &["halloween", "party"], avoid: &[] },
    EffectRow { id: 116, name: "TV Simulator", respects_colors: false, moods: &[M::Cozy], vibes: &[V::Retro], motion: Mo::Flickering, energy: E::Low, speed: FULL, intensity: FULL, best: &[], avoid: &["party"] },
    // Custom effects, executed by the companion runner rather than firmware
    EffectRow { id: 1001, name: "Heartbeat", respects_colors: true, moods: &[M::Romantic, M::Dramatic], vibes: &[V::Intense], motion: Mo::Pulsing, energy: E::Medium, speed: (40, 200, 100), intensity: FULL, best: &["valentines", "date_night"], avoid: &[] },
    EffectRow { id: 1002, name: "Lightning Storm", respects_colors: true, moods: &[M::Spooky, M::Dramatic], vibes: &[V::Intense, V::Natural], motion: Mo::Explosive, energy: E::High, speed: (60, 255, 170), intensity: FULL, best: &["halloween"], avoid: &["bedtime"] },
    EffectRow { id: 1003, name: "Ocean Waves", respects_colors: true, moods: &[M::Calm], vibes: &[V::Natural, V::Chill], motion: Mo::Flowing, energy: E::Low, speed: (10, 160, 60), intensity: FULL, best: &["relaxing"], avoid: &[] },
    EffectRow { id: 1004, name: "Team Cheer", respects_colors: true, moods: &[M::Energetic, M::Patriotic], vibes: &[V::Sporty], motion: Mo::Chasing, energy: E::VeryHigh, speed: (80, 255, 190), intensity: FULL, best: &["game_day"], avoid: &["bedtime", "dinner"] },
    EffectRow { id: 1005, name: "Flag Wave", respects_colors: true, moods: &[M::Patriotic, M::Festive], vibes: &[V::Classic], motion: Mo::Flowing, energy: E::Medium, speed: (30, 200, 100), intensity: FULL, best: &["independence_day"], avoid: &[] },
];

fn to_metadata(row: &EffectRow) -> EffectMetadata {
    EffectMetadata {
        id: row.id,
        name: row.name.to_string(),
        respects_colors: row.respects_colors,
        moods: row.moods.iter().copied().collect::<BTreeSet<_>>(),
        vibes: row.vibes.iter().copied().collect::<BTreeSet<_>>(),
        motion_type: row.motion,
        energy_level: row.energy,
        min_speed: row.speed.0,
        max_speed: row.speed.1,
        default_speed: row.speed.2,
        min_intensity: row.intensity.0,
        max_intensity: row.intensity.1,
        default_intensity: row.intensity.2,
        best_for_occasions: row.best.iter().map(|s| s.to_string()).collect(),
        avoid_for_occasions: row.avoid.iter().map(|s| s.to_string()).collect(),
    }
}

static BUILTIN: Lazy<Arc<EffectCatalog>> = Lazy::new(|| {
    Arc::new(EffectCatalog::from_effects(
        EFFECT_TABLE.iter().map(to_metadata),
    ))
});

/// Immutable registry of effect metadata keyed by effect id
#[derive(Debug, Clone, Default)]
pub struct EffectCatalog {
    effects: BTreeMap<EffectId, EffectMetadata>,
}

impl EffectCatalog {
    /// Shared registry built from the static effect table
    pub fn builtin() -> Arc<EffectCatalog> {
        BUILTIN.clone()
    }

    pub fn from_effects(effects: impl IntoIterator<Item = EffectMetadata>) -> Self {
        Self {
            effects: effects.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn get(&self, id: EffectId) -> Option<&EffectMetadata> {
        self.effects.get(&id)
    }

    /// Metadata for `id`, or the permissive generic entry when unknown
    pub fn get_or_generic(&self, id: EffectId) -> EffectMetadata {
        self.get(id)
            .cloned()
            .unwrap_or_else(|| EffectMetadata::generic(id))
    }

    pub fn name(&self, id: EffectId) -> String {
        match self.get(id) {
            Some(effect) => effect.name.clone(),
            None => EffectMetadata::generic(id).name,
        }
    }

    /// Effects matching `predicate`, in ascending id order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&EffectMetadata>
    where
        P: FnMut(&EffectMetadata) -> bool,
    {
        self.effects.values().filter(|e| predicate(e)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectMetadata> {
        self.effects.values()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn respects_colors(&self, id: EffectId) -> bool {
        self.get(id).map(|e| e.respects_colors).unwrap_or(true)
    }

    pub fn is_custom(id: EffectId) -> bool {
        id >= CUSTOM_EFFECT_BASE
    }

    pub fn clamp_speed(&self, id: EffectId, speed: u8) -> u8 {
        match self.get(id) {
            Some(effect) => effect.clamp_speed(speed),
            None => speed,
        }
    }

    pub fn clamp_intensity(&self, id: EffectId, intensity: u8) -> u8 {
        match self.get(id) {
            Some(effect) => effect.clamp_intensity(intensity),
            None => intensity,
        }
    }
}

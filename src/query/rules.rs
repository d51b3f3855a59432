//! Ordered rule tables for query extraction.
//!
//! Each table is evaluated top to bottom and the first hit wins, so more
//! specific rules sit above the general ones that would also match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::effects::colors::NAMED_COLORS;
use crate::models::{EnergyLevel, Mood, MotionType, Rgb, Vibe};

/// Words dropped before theme matching
pub const FILLER_WORDS: &[&str] = &[
    "a", "an", "and", "are", "at", "be", "can", "for", "give", "have", "i", "i'd", "in", "is",
    "it", "let", "let's", "lets", "light", "lighting", "lights", "like", "look", "make", "me",
    "mode", "my", "of", "on", "our", "please", "set", "show", "some", "something", "the",
    "theme", "to", "up", "us", "want", "we", "with",
];

/// Single-token themes in priority order. A query mentioning both "wedding"
/// and "party" is a wedding.
pub const THEME_KEYWORDS: &[(&str, &str)] = &[
    ("wedding", "wedding"),
    ("bride", "wedding"),
    ("christmas", "christmas"),
    ("xmas", "christmas"),
    ("halloween", "halloween"),
    ("hanukkah", "hanukkah"),
    ("chanukah", "hanukkah"),
    ("kwanzaa", "kwanzaa"),
    ("diwali", "diwali"),
    ("thanksgiving", "thanksgiving"),
    ("easter", "easter"),
    ("valentines", "valentines"),
    ("valentine", "valentines"),
    ("juneteenth", "juneteenth"),
    ("pride", "pride"),
    ("graduation", "graduation"),
    ("birthday", "birthday"),
    ("anniversary", "anniversary"),
    ("football", "football"),
    ("basketball", "basketball"),
    ("baseball", "baseball"),
    ("hockey", "hockey"),
    ("spring", "spring"),
    ("summer", "summer"),
    ("autumn", "autumn"),
    ("fall", "autumn"),
    ("winter", "winter"),
    ("ocean", "ocean"),
    ("beach", "ocean"),
    ("forest", "forest"),
    ("sunset", "sunset"),
    ("desert", "desert"),
    ("aurora", "northern_lights"),
    ("party", "party"),
];

/// Compound themes matched by containment once single tokens fail. Phrases
/// go through the same filler stripping as the query.
pub const THEME_PHRASES: &[(&str, &str)] = &[
    ("new year", "new_years_eve"),
    ("fourth of july", "independence_day"),
    ("4th of july", "independence_day"),
    ("independence day", "independence_day"),
    ("st patrick", "st_patricks"),
    ("saint patrick", "st_patricks"),
    ("cinco de mayo", "cinco_de_mayo"),
    ("day of the dead", "day_of_the_dead"),
    ("baby shower", "baby_shower"),
    ("game night", "game_night"),
    ("northern lights", "northern_lights"),
];

const CONTEXT_RULES: &[(&str, &str)] = &[
    (r"\bdate night\b|\bromantic evening\b", "date_night"),
    (r"\b(game day|tailgat\w*|watch party|super ?bowl)\b", "game_day"),
    (r"\b(party|parties|celebrat\w*|bash|get together)\b", "party"),
    (r"\b(dinner|dining|meal|feast|brunch)\b", "dinner"),
    (r"\b(bed ?time|sleep\w*|night ?light)\b", "bedtime"),
    (r"\b(relax\w*|unwind\w*|chill(ing)? out|meditat\w*)\b", "relaxing"),
    (r"\b(wake ?up|morning|sunrise)\b", "wake_up"),
    (r"\b(holiday|holidays|festive season)\b", "holiday"),
    (r"\b(everyday|every day|daily)\b", "everyday"),
];

const MOOD_RULES: &[(&str, Mood)] = &[
    (r"\b(spooky|scary|creepy|haunted|eerie)\b", Mood::Spooky),
    (r"\b(romantic|romance|love|date)\b", Mood::Romantic),
    (r"\b(patriotic|usa|america\w*|fourth of july|4th of july)\b", Mood::Patriotic),
    (r"\b(festive|holiday|christmas|celebrat\w*)\b", Mood::Festive),
    (r"\b(energetic|energy|hype|pumped|workout)\b", Mood::Energetic),
    (r"\b(dramatic|bold|theatrical)\b", Mood::Dramatic),
    (r"\b(mysterious|mystery|moody|dark)\b", Mood::Mysterious),
    (r"\b(cozy|cosy|snug|fireplace)\b", Mood::Cozy),
    (r"\b(calm|peaceful|relax\w*|serene|soothing|tranquil)\b", Mood::Calm),
    (r"\b(elegant|classy|sophisticated|fancy|wedding)\b", Mood::Elegant),
    (r"\b(playful|fun|silly|kids?)\b", Mood::Playful),
    (r"\b(cheerful|happy|sunny|joyful)\b", Mood::Cheerful),
];

const VIBE_RULES: &[(&str, Vibe)] = &[
    (r"\b(sport\w*|game day|team|football|basketball|baseball|hockey)\b", Vibe::Sporty),
    (r"\b(party|club|dance|dancing|rave)\b", Vibe::Party),
    (r"\b(chill|lounge|laid[- ]back|lofi)\b", Vibe::Chill),
    (r"\b(dreamy|soft|ethereal|pastel)\b", Vibe::Dreamy),
    (r"\b(natur\w*|ocean|forest|organic|earthy)\b", Vibe::Natural),
    (r"\b(classic|traditional|timeless)\b", Vibe::Classic),
    (r"\b(modern|sleek|minimal\w*)\b", Vibe::Modern),
    (r"\b(retro|vintage|80s|70s|arcade)\b", Vibe::Retro),
    (r"\b(magic\w*|fairy|enchant\w*)\b", Vibe::Magical),
    (r"\b(intense|extreme|wild)\b", Vibe::Intense),
];

const ENERGY_RULES: &[(&str, EnergyLevel)] = &[
    (r"\b(insane|extreme|maximum|rave|strobe)\b", EnergyLevel::VeryHigh),
    (r"\b(sleep\w*|bed ?time|barely)\b", EnergyLevel::VeryLow),
    (r"\b(energetic|high energy|hype|exciting|fast|upbeat|party)\b", EnergyLevel::High),
    (r"\b(calm|relax\w*|slow|gentle|soft|chill)\b", EnergyLevel::Low),
    (r"\b(moderate|medium|balanced)\b", EnergyLevel::Medium),
];

const MOTION_RULES: &[(&str, MotionType)] = &[
    (r"\b(static|solid|steady|still)\b", MotionType::Static),
    (r"\b(twinkl\w*|sparkl\w*|glitter\w*|shimmer\w*)\b", MotionType::Twinkling),
    (r"\b(chas\w*|running|racing)\b", MotionType::Chasing),
    (r"\b(scan\w*|sweep\w*|back and forth)\b", MotionType::Scanning),
    (r"\b(puls\w*|breath\w*|heartbeat)\b", MotionType::Pulsing),
    (r"\b(flow\w*|waves?|fad(e|ing)|smooth)\b", MotionType::Flowing),
    (r"\b(explo\w*|firework\w*|burst\w*|strob\w*|flash\w*)\b", MotionType::Explosive),
    (r"\b(flicker\w*|candle\w*|fire)\b", MotionType::Flickering),
];

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 200, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLUE: Rgb = Rgb::new(0, 60, 255);
const GOLD: Rgb = Rgb::new(255, 200, 0);

const THEMED_COLOR_RULES: &[(&str, &[Rgb])] = &[
    (r"\b(christmas|xmas)\b", &[RED, GREEN, WHITE]),
    (r"\bhalloween\b", &[Rgb::new(255, 100, 0), Rgb::new(128, 0, 192), Rgb::new(64, 255, 0)]),
    (r"\bvalentine", &[RED, Rgb::new(255, 96, 160), WHITE]),
    (r"\b(fourth of july|4th of july|independence day|patriotic)\b", &[RED, WHITE, BLUE]),
    (r"\bst\.? patrick|\bsaint patrick", &[GREEN, GOLD, WHITE]),
    (r"\b(hanukkah|chanukah)\b", &[Rgb::new(0, 56, 184), WHITE, Rgb::new(192, 192, 208)]),
    (r"\beaster\b", &[Rgb::new(255, 176, 208), Rgb::new(176, 224, 255), Rgb::new(255, 240, 160)]),
    (r"\bthanksgiving\b", &[Rgb::new(255, 120, 0), Rgb::new(176, 64, 16), GOLD]),
    (r"\bwedding\b", &[WHITE, Rgb::new(255, 216, 224), GOLD]),
    (r"\b(new year|nye)\b", &[GOLD, Rgb::new(200, 200, 210), WHITE]),
];

const COLOR_OVERRIDE_PATTERN: &str = r"\b(rainbow|multi-?colou?r\w*|all the colou?rs|every colou?r)\b";

fn compile<T: Copy>(table: &[(&str, T)]) -> Vec<(Regex, T)> {
    table
        .iter()
        .map(|(pattern, value)| {
            let regex = Regex::new(pattern).expect("query rule regex must compile");
            (regex, *value)
        })
        .collect()
}

pub static CONTEXT: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| compile(CONTEXT_RULES));
pub static MOODS: Lazy<Vec<(Regex, Mood)>> = Lazy::new(|| compile(MOOD_RULES));
pub static VIBES: Lazy<Vec<(Regex, Vibe)>> = Lazy::new(|| compile(VIBE_RULES));
pub static ENERGY: Lazy<Vec<(Regex, EnergyLevel)>> = Lazy::new(|| compile(ENERGY_RULES));
pub static MOTION: Lazy<Vec<(Regex, MotionType)>> = Lazy::new(|| compile(MOTION_RULES));
pub static THEMED_COLORS: Lazy<Vec<(Regex, &'static [Rgb])>> =
    Lazy::new(|| compile(THEMED_COLOR_RULES));

/// One word-bounded pattern per named color, in table order
pub static NAMED_COLOR_PATTERNS: Lazy<Vec<(Regex, Rgb)>> = Lazy::new(|| {
    NAMED_COLORS
        .iter()
        .map(|(name, color)| {
            let regex = Regex::new(&format!(r"\b{}\b", regex::escape(name)))
                .expect("color name regex must compile");
            (regex, *color)
        })
        .collect()
});

pub static COLOR_OVERRIDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(COLOR_OVERRIDE_PATTERN).expect("override regex must compile"));

/// First rule whose pattern matches `text`
pub fn first_match<T: Copy>(rules: &[(Regex, T)], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|(regex, _)| regex.is_match(text))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_compiles() {
        assert_eq!(CONTEXT.len(), CONTEXT_RULES.len());
        assert_eq!(MOODS.len(), MOOD_RULES.len());
        assert_eq!(VIBES.len(), VIBE_RULES.len());
        assert_eq!(ENERGY.len(), ENERGY_RULES.len());
        assert_eq!(MOTION.len(), MOTION_RULES.len());
        assert_eq!(THEMED_COLORS.len(), THEMED_COLOR_RULES.len());
        assert_eq!(NAMED_COLOR_PATTERNS.len(), NAMED_COLORS.len());
    }

    #[test]
    fn specific_context_beats_general() {
        assert_eq!(first_match(&CONTEXT, "super bowl watch party"), Some("game_day"));
        assert_eq!(first_match(&CONTEXT, "a dinner party"), Some("party"));
        assert_eq!(first_match(&CONTEXT, "quiet evening"), None);
    }

    #[test]
    fn wedding_outranks_party_in_theme_keywords() {
        let pos = |k: &str| THEME_KEYWORDS.iter().position(|(w, _)| *w == k);
        assert!(pos("wedding") < pos("party"));
    }
}

//! Pure attribute extraction from free-text queries. Nothing here reads the
//! cache or any other shared state.

use once_cell::sync::Lazy;

use super::cache::query_hash;
use super::rules::{
    first_match, COLOR_OVERRIDE, CONTEXT, ENERGY, FILLER_WORDS, MOODS, MOTION,
    NAMED_COLOR_PATTERNS, THEMED_COLORS, THEME_KEYWORDS, THEME_PHRASES, VIBES,
};
use crate::models::{EnergyLevel, Mood, MotionType, QueryAnalysis, Rgb, Vibe};

/// Phrase table after the same filler stripping the query gets
static NORMALIZED_PHRASES: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    THEME_PHRASES
        .iter()
        .map(|(phrase, theme)| (content_tokens(phrase).join(" "), *theme))
        .collect()
});

/// Lower-cased words of `query` with punctuation, possessives and filler
/// words removed
pub fn content_tokens(query: &str) -> Vec<String> {
    let cleaned: String = query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '\'' { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !FILLER_WORDS.contains(token))
        .map(|token| {
            token
                .trim_end_matches("'s")
                .trim_matches('\'')
                .replace('\'', "")
        })
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn extract_theme(query: &str) -> Option<String> {
    let tokens = content_tokens(query);
    if tokens.is_empty() {
        return None;
    }

    if let Some((_, theme)) = THEME_KEYWORDS
        .iter()
        .find(|(keyword, _)| tokens.iter().any(|t| t == keyword))
    {
        return Some(theme.to_string());
    }

    let joined = tokens.join(" ");
    NORMALIZED_PHRASES
        .iter()
        .find(|(phrase, _)| !phrase.is_empty() && joined.contains(phrase.as_str()))
        .map(|(_, theme)| theme.to_string())
}

pub fn extract_context(query: &str) -> Option<String> {
    first_match(&CONTEXT, &query.to_lowercase()).map(str::to_string)
}

pub fn extract_mood(query: &str) -> Option<Mood> {
    first_match(&MOODS, &query.to_lowercase())
}

pub fn extract_vibe(query: &str) -> Option<Vibe> {
    first_match(&VIBES, &query.to_lowercase())
}

pub fn extract_energy(query: &str) -> Option<EnergyLevel> {
    first_match(&ENERGY, &query.to_lowercase())
}

pub fn extract_motion(query: &str) -> Option<MotionType> {
    first_match(&MOTION, &query.to_lowercase())
}

/// Named colors in order of appearance. When the query names none, the
/// colors of the first occasion it mentions are used instead.
pub fn extract_colors(query: &str) -> Vec<Rgb> {
    let text = query.to_lowercase();

    let mut hits: Vec<(usize, usize, Rgb)> = NAMED_COLOR_PATTERNS
        .iter()
        .flat_map(|(regex, color)| {
            regex
                .find_iter(&text)
                .map(move |m| (m.start(), m.end(), *color))
        })
        .collect();
    // Longer names first at the same offset so "warm white" beats "warm"
    hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut colors = Vec::new();
    let mut covered_until = 0;
    for (start, end, color) in hits {
        if start < covered_until {
            continue;
        }
        covered_until = end;
        if !colors.contains(&color) {
            colors.push(color);
        }
    }

    if colors.is_empty() {
        if let Some(themed) = first_match(&THEMED_COLORS, &text) {
            colors.extend_from_slice(themed);
        }
    }
    colors
}

/// True when the query asks for effects that paint their own colors
pub fn wants_color_override(query: &str) -> bool {
    COLOR_OVERRIDE.is_match(&query.to_lowercase())
}

/// Run every extractor and stamp the cache key
pub fn analyze(query: &str) -> QueryAnalysis {
    let theme = extract_theme(query);
    let context = extract_context(query);
    let query_hash = query_hash(theme.as_deref(), context.as_deref());

    QueryAnalysis {
        mood: extract_mood(query),
        vibe: extract_vibe(query),
        energy_level: extract_energy(query),
        motion_type: extract_motion(query),
        color_preferences: extract_colors(query),
        wants_color_override: wants_color_override(query),
        theme,
        context,
        query_hash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filler_and_punctuation_are_stripped() {
        assert_eq!(
            content_tokens("Let's have a Wedding party!"),
            vec!["wedding".to_string(), "party".to_string()]
        );
        assert_eq!(content_tokens("Valentine's Day"), vec!["valentine", "day"]);
    }

    #[test]
    fn theme_prefers_priority_keyword() {
        assert_eq!(extract_theme("let's have a wedding party!").as_deref(), Some("wedding"));
        assert_eq!(extract_theme("party time").as_deref(), Some("party"));
        assert_eq!(extract_theme("xmas lights").as_deref(), Some("christmas"));
    }

    #[test]
    fn theme_falls_back_to_phrases() {
        assert_eq!(
            extract_theme("4th of July fireworks").as_deref(),
            Some("independence_day")
        );
        assert_eq!(
            extract_theme("happy new year's eve").as_deref(),
            Some("new_years_eve")
        );
        assert_eq!(extract_theme("something nice"), None);
        assert_eq!(extract_theme("   "), None);
    }

    #[test]
    fn context_and_tags() {
        let analysis = analyze("Spooky slow flickering halloween party");
        assert_eq!(analysis.theme.as_deref(), Some("halloween"));
        assert_eq!(analysis.context.as_deref(), Some("party"));
        assert_eq!(analysis.mood, Some(Mood::Spooky));
        assert_eq!(analysis.vibe, Some(Vibe::Party));
        assert_eq!(analysis.energy_level, Some(EnergyLevel::High));
        assert_eq!(analysis.motion_type, Some(MotionType::Flickering));
    }

    #[test]
    fn explicit_colors_keep_order_and_skip_overlaps() {
        let colors = extract_colors("blue and warm white with a touch of gold, blue again");
        assert_eq!(
            colors,
            vec![
                Rgb::new(0, 60, 255),
                Rgb::new(255, 180, 100),
                Rgb::new(255, 200, 0),
            ]
        );
    }

    #[test]
    fn explicit_colors_beat_themed_fallback() {
        assert_eq!(
            extract_colors("christmas"),
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 200, 0), Rgb::new(255, 255, 255)]
        );
        assert_eq!(extract_colors("blue christmas"), vec![Rgb::new(0, 60, 255)]);
        assert!(extract_colors("quiet evening").is_empty());
    }

    #[test]
    fn rainbow_requests_override() {
        assert!(wants_color_override("rainbow birthday"));
        assert!(wants_color_override("something multicolored"));
        assert!(!wants_color_override("red birthday"));
    }
}

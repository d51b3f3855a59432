//! Token-based fuzzy search over catalog nodes and pattern items.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{LibraryNode, NodeType, PatternItem};
use crate::settings::EngineSettings;

const EXACT_NAME: u32 = 100;
const NAME_PREFIX: u32 = 50;
const NAME_CONTAINS: u32 = 25;
const DESCRIPTION_CONTAINS: u32 = 10;
const SYNONYM: u32 = 15;

/// Words associated with any name containing the key
const SYNONYMS: &[(&str, &[&str])] = &[
    ("christmas", &["holiday", "festive", "winter", "red", "green", "santa", "xmas", "december"]),
    ("hanukkah", &["holiday", "winter", "blue", "menorah", "festival"]),
    ("new year", &["celebration", "midnight", "party", "gold", "silver", "countdown"]),
    ("halloween", &["spooky", "scary", "october", "pumpkin", "orange", "purple", "haunted"]),
    ("thanksgiving", &["harvest", "autumn", "fall", "november", "turkey"]),
    ("valentine", &["love", "romantic", "heart", "red", "pink", "date"]),
    ("patrick", &["irish", "shamrock", "clover", "green", "lucky"]),
    ("easter", &["spring", "pastel", "bunny", "eggs"]),
    ("independence", &["patriotic", "july", "fourth", "usa", "fireworks", "america"]),
    ("pride", &["rainbow", "lgbtq", "june"]),
    ("wedding", &["bride", "marriage", "elegant", "white", "romantic"]),
    ("birthday", &["party", "celebration", "cake", "balloons"]),
    ("graduation", &["school", "celebration", "caps"]),
    ("nfl", &["football", "sports", "game"]),
    ("nba", &["basketball", "sports", "game"]),
    ("mlb", &["baseball", "sports", "game"]),
    ("nhl", &["hockey", "sports", "game"]),
    ("ocean", &["sea", "beach", "water", "blue", "waves", "calm"]),
    ("forest", &["trees", "woods", "green", "nature"]),
    ("sunset", &["evening", "dusk", "warm", "orange"]),
    ("northern lights", &["aurora", "sky", "night"]),
    ("winter", &["snow", "ice", "cold", "blue"]),
    ("autumn", &["fall", "leaves", "harvest"]),
    ("spring", &["flowers", "blossom", "fresh"]),
    ("summer", &["sun", "beach", "bright"]),
    ("warm white", &["cozy", "soft", "classic", "permanent"]),
    ("cool white", &["crisp", "modern", "clean", "permanent"]),
    ("gold", &["elegant", "luxury", "warm"]),
    ("twinkle", &["sparkle", "stars", "glitter"]),
    ("galaxy", &["stars", "space", "sparkle"]),
];

/// Search hits, each list already ordered and capped
#[derive(TS, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "search.ts")]
#[ts(rename_all = "camelCase")]
pub struct SearchResults {
    pub palettes: Vec<LibraryNode>,
    /// Folders and root categories
    pub folders: Vec<LibraryNode>,
    pub patterns: Vec<PatternItem>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty() && self.folders.is_empty() && self.patterns.is_empty()
    }
}

fn has_synonym(name_lower: &str, token: &str, extra: &[String]) -> bool {
    extra.iter().any(|k| k == token)
        || SYNONYMS
            .iter()
            .filter(|(key, _)| name_lower.contains(key))
            .any(|(_, words)| words.contains(&token))
}

/// Accumulated relevance of one item across all tokens
pub fn relevance(name: &str, description: Option<&str>, keywords: &[String], tokens: &[String]) -> u32 {
    let name_lower = name.to_lowercase();
    let description_lower = description.map(str::to_lowercase);

    tokens
        .iter()
        .map(|token| {
            if name_lower == *token {
                EXACT_NAME
            } else if name_lower.starts_with(token.as_str()) {
                NAME_PREFIX
            } else if name_lower.contains(token.as_str()) {
                NAME_CONTAINS
            } else if description_lower
                .as_deref()
                .is_some_and(|d| d.contains(token.as_str()))
            {
                DESCRIPTION_CONTAINS
            } else if has_synonym(&name_lower, token, keywords) {
                SYNONYM
            } else {
                0
            }
        })
        .sum()
}

/// Exact name first, then prefix matches, then alphabetical
fn display_order(query: &str, a: &str, b: &str) -> Ordering {
    let key = |name: &str| {
        let lower = name.to_lowercase();
        (lower != query, !lower.starts_with(query), lower)
    };
    key(a).cmp(&key(b))
}

pub struct LibrarySearch<'a> {
    settings: &'a EngineSettings,
}

impl<'a> LibrarySearch<'a> {
    pub fn new(settings: &'a EngineSettings) -> Self {
        Self { settings }
    }

    /// Search `nodes` and `patterns`. A blank query finds nothing.
    pub fn search(&self, query: &str, nodes: &[LibraryNode], patterns: &[PatternItem]) -> SearchResults {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return SearchResults::default();
        }
        let tokens: Vec<String> = query.split_whitespace().map(str::to_string).collect();

        let mut palettes = Vec::new();
        let mut folders = Vec::new();
        for node in nodes {
            if relevance(&node.name, node.description(), &node.keywords(), &tokens) == 0 {
                continue;
            }
            match node.node_type {
                NodeType::Palette => palettes.push(node.clone()),
                NodeType::Folder | NodeType::Category => folders.push(node.clone()),
            }
        }

        let mut items: Vec<PatternItem> = patterns
            .iter()
            .filter(|p| relevance(&p.name, None, &[], &tokens) > 0)
            .cloned()
            .collect();

        palettes.sort_by(|a, b| display_order(&query, &a.name, &b.name));
        folders.sort_by(|a, b| display_order(&query, &a.name, &b.name));
        items.sort_by(|a, b| display_order(&query, &a.name, &b.name));

        palettes.truncate(self.settings.max_palette_results);
        folders.truncate(self.settings.max_folder_results);
        items.truncate(self.settings.max_pattern_results);

        SearchResults {
            palettes,
            folders,
            patterns: items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::library::META_DESCRIPTION;
    use crate::models::Rgb;

    fn tokens(q: &str) -> Vec<String> {
        q.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn scoring_tiers() {
        let t = tokens("christmas");
        assert_eq!(relevance("Christmas", None, &[], &t), 100);
        assert_eq!(relevance("Christmas Lights Deluxe", None, &[], &t), 50);
        assert_eq!(relevance("Merry Christmas", None, &[], &t), 25);
        assert_eq!(relevance("Holly", Some("A christmas classic"), &[], &t), 10);
        assert_eq!(relevance("Ocean", None, &[], &t), 0);
        assert_eq!(relevance("Christmas Eve", None, &[], &tokens("santa")), 15);
    }

    #[test]
    fn christmas_ranking() {
        let red = vec![Rgb::new(255, 0, 0)];
        let nodes = vec![
            LibraryNode::palette("c", "Holly", "h", red.clone(), 0)
                .with_meta(META_DESCRIPTION, "Great for christmas"),
            LibraryNode::palette("b", "Christmas Lights Deluxe", "h", red.clone(), 1),
            LibraryNode::palette("a", "Christmas", "h", red, 2),
        ];
        let settings = EngineSettings::default();
        let results = LibrarySearch::new(&settings).search("christmas", &nodes, &[]);
        let names: Vec<&str> = results.palettes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Christmas", "Christmas Lights Deluxe", "Holly"]);
    }

    #[test]
    fn blank_query_is_empty() {
        let settings = EngineSettings::default();
        let nodes = vec![LibraryNode::category("x", "X", 0)];
        assert!(LibrarySearch::new(&settings).search("   ", &nodes, &[]).is_empty());
    }

    #[test]
    fn partitions_are_capped() {
        let nodes: Vec<LibraryNode> = (0..12)
            .map(|i| LibraryNode::folder(format!("f{}", i), format!("Blue {}", i), "root", i))
            .chain(std::iter::once(LibraryNode::category("root", "Blue Things", 0)))
            .collect();
        let settings = EngineSettings::default();
        let results = LibrarySearch::new(&settings).search("blue", &nodes, &[]);
        assert_eq!(results.folders.len(), 5);
        assert!(results.palettes.is_empty());
    }
}

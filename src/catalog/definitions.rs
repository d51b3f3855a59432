//! Static catalog content: root categories and the curated sub-hierarchies
//! under them, plus conversion of injected events and teams into nodes.

use std::collections::HashSet;

use serde_json::json;

use crate::models::library::{
    META_DEFAULT_SPEED, META_DESCRIPTION, META_GENERATOR, META_GROUPING, META_KEYWORDS,
    META_SPACING, META_STYLE, META_UNIVERSAL_APPEAL,
};
use crate::models::{FollowedTeam, LibraryNode, LiveEvent, Rgb};

pub const ROOT_HOLIDAYS: &str = "holidays";
pub const ROOT_SPORTS: &str = "sports";
pub const ROOT_SEASONS: &str = "seasons";
pub const ROOT_PARTIES: &str = "parties";
pub const ROOT_FRANCHISES: &str = "franchises";
pub const ROOT_NATURE: &str = "nature";
pub const ROOT_ARCHITECTURAL: &str = "architectural";
pub const ROOT_LIVE_EVENTS: &str = "live_events";
pub const ROOT_MY_TEAMS: &str = "my_teams";

const ROOTS: &[(&str, &str)] = &[
    (ROOT_LIVE_EVENTS, "Live Events"),
    (ROOT_MY_TEAMS, "My Teams"),
    (ROOT_HOLIDAYS, "Holidays"),
    (ROOT_SPORTS, "Sports"),
    (ROOT_SEASONS, "Seasons"),
    (ROOT_PARTIES, "Parties & Occasions"),
    (ROOT_FRANCHISES, "Movies & Games"),
    (ROOT_NATURE, "Nature"),
    (ROOT_ARCHITECTURAL, "Architectural"),
];

const fn c(hex: u32) -> Rgb {
    Rgb::from_u32(hex)
}

/// A palette definition: id suffix, display name, colors, description
type PaletteDef = (&'static str, &'static str, &'static [Rgb], &'static str);

const HOLIDAY_FOLDERS: &[(&str, &str, &[PaletteDef])] = &[
    ("winter", "Winter Holidays", &[
        ("christmas", "Christmas", &[c(0xFF0000), c(0x00A000), c(0xFFFFFF)], "Classic red and green with snowy white"),
        ("hanukkah", "Hanukkah", &[c(0x0038B8), c(0xFFFFFF), c(0xC0C0D0)], "Blue and white with silver candlelight"),
        ("new_years_eve", "New Year's Eve", &[c(0xFFC800), c(0xC8C8D2), c(0xFFFFFF)], "Gold and silver midnight sparkle"),
        ("kwanzaa", "Kwanzaa", &[c(0xE00000), c(0x008000), c(0xFFB000)], "Red, green and harvest gold"),
    ]),
    ("spring", "Spring Holidays", &[
        ("valentines", "Valentine's Day", &[c(0xFF0030), c(0xFF60A0), c(0xFFFFFF)], "Romantic reds and pinks"),
        ("st_patricks", "St. Patrick's Day", &[c(0x00A000), c(0xFFC800), c(0xFFFFFF)], "Shamrock green with a pot of gold"),
        ("easter", "Easter", &[c(0xFFB0D0), c(0xB0E0FF), c(0xFFF0A0)], "Soft pastel eggs"),
        ("cinco_de_mayo", "Cinco de Mayo", &[c(0x006847), c(0xFFFFFF), c(0xCE1126)], "Festive green, white and red"),
    ]),
    ("summer", "Summer Holidays", &[
        ("independence_day", "Independence Day", &[c(0xFF0000), c(0xFFFFFF), c(0x0030FF)], "Red, white and blue fireworks"),
        ("pride", "Pride", &[c(0xFF0000), c(0xFF8C00), c(0xFFEE00), c(0x00A000), c(0x0040FF), c(0x8000C0)], "Every color of the rainbow"),
        ("juneteenth", "Juneteenth", &[c(0xE00000), c(0x0030C0), c(0xFFFFFF)], "Freedom red, blue and white"),
    ]),
    ("fall", "Fall Holidays", &[
        ("halloween", "Halloween", &[c(0xFF6400), c(0x8000C0), c(0x40FF00)], "Pumpkin orange, witchy purple and slime green"),
        ("thanksgiving", "Thanksgiving", &[c(0xFF7800), c(0xB04010), c(0xFFC040)], "Harvest orange and golden wheat"),
        ("diwali", "Diwali", &[c(0xFFC000), c(0xFF6000), c(0xFF00A0)], "Festival of lights in gold and marigold"),
        ("day_of_the_dead", "Day of the Dead", &[c(0xFF8000), c(0xFF00A0), c(0x8000FF)], "Marigold, magenta and violet"),
    ]),
];

/// League id, league name, teams (id suffix, name, colors)
const LEAGUES: &[(&str, &str, &[(&str, &str, &[Rgb])])] = &[
    ("nfl", "NFL", &[
        ("chiefs", "Kansas City Chiefs", &[c(0xE31837), c(0xFFB81C)]),
        ("packers", "Green Bay Packers", &[c(0x203731), c(0xFFB612)]),
        ("cowboys", "Dallas Cowboys", &[c(0x003594), c(0x869397), c(0xFFFFFF)]),
        ("eagles", "Philadelphia Eagles", &[c(0x004C54), c(0xA5ACAF), c(0xFFFFFF)]),
        ("bears", "Chicago Bears", &[c(0x0B162A), c(0xC83803)]),
    ]),
    ("nba", "NBA", &[
        ("lakers", "Los Angeles Lakers", &[c(0x552583), c(0xFDB927)]),
        ("celtics", "Boston Celtics", &[c(0x007A33), c(0xBA9653), c(0xFFFFFF)]),
        ("bulls", "Chicago Bulls", &[c(0xCE1141), c(0xFFFFFF)]),
        ("warriors", "Golden State Warriors", &[c(0x1D428A), c(0xFFC72C)]),
    ]),
    ("mlb", "MLB", &[
        ("yankees", "New York Yankees", &[c(0x0C2340), c(0xC4CED3), c(0xFFFFFF)]),
        ("dodgers", "Los Angeles Dodgers", &[c(0x005A9C), c(0xFFFFFF), c(0xEF3E42)]),
        ("red_sox", "Boston Red Sox", &[c(0xBD3039), c(0x0C2340), c(0xFFFFFF)]),
    ]),
    ("nhl", "NHL", &[
        ("maple_leafs", "Toronto Maple Leafs", &[c(0x00205B), c(0xFFFFFF)]),
        ("blackhawks", "Chicago Blackhawks", &[c(0xCF0A2C), c(0xFF671B), c(0x00833E)]),
    ]),
];

const SEASONS: &[PaletteDef] = &[
    ("spring", "Spring", &[c(0x90EE90), c(0xFFB6C1), c(0xFFFF99)], "Fresh blossoms and new leaves"),
    ("summer", "Summer", &[c(0x00BFFF), c(0xFFD700), c(0xFF7F50)], "Bright skies and beach days"),
    ("autumn", "Autumn", &[c(0xFF8C00), c(0xB22222), c(0xDAA520)], "Falling leaves in amber and rust"),
    ("winter", "Winter", &[c(0xC8DCFF), c(0x4060FF), c(0xFFFFFF)], "Icy blues and fresh snow"),
];

const PARTIES: &[PaletteDef] = &[
    ("birthday", "Birthday", &[c(0xFF40A0), c(0x40C0FF), c(0xFFE000)], "Balloons and confetti"),
    ("wedding", "Wedding", &[c(0xFFFFFF), c(0xFFD8E0), c(0xFFD700)], "Ivory, blush and gold for the big day"),
    ("graduation", "Graduation", &[c(0x000080), c(0xFFD700), c(0xFFFFFF)], "Caps off in navy and gold"),
    ("baby_shower", "Baby Shower", &[c(0xFFB6C1), c(0x89CFF0), c(0xFFFFE0)], "Soft pastels"),
    ("game_night", "Game Night", &[c(0x8000FF), c(0x00FFC0), c(0xFF0080)], "Neon arcade glow"),
    ("anniversary", "Anniversary", &[c(0xC00030), c(0xFFD700), c(0xFFFFFF)], "Deep red and gold"),
];

const FRANCHISE_FOLDERS: &[(&str, &str, &[PaletteDef])] = &[
    ("space_opera", "Space Opera", &[
        ("light_side", "Light Side", &[c(0x00A0FF), c(0x00FF40), c(0xFFFFFF)], "Blue and green blades"),
        ("dark_side", "Dark Side", &[c(0xFF0000), c(0x400000), c(0x808080)], "Crimson blades in the dark"),
    ]),
    ("wizard_school", "Wizard School", &[
        ("lion_house", "Lion House", &[c(0xAE0001), c(0xEEBA30)], "Scarlet and gold"),
        ("serpent_house", "Serpent House", &[c(0x1A472A), c(0xAAAAAA)], "Emerald and silver"),
        ("eagle_house", "Eagle House", &[c(0x0E1A40), c(0x946B2D)], "Blue and bronze"),
        ("badger_house", "Badger House", &[c(0xFFDB00), c(0x60605C)], "Yellow and grey"),
    ]),
    ("fairy_tales", "Fairy Tales", &[
        ("frozen_kingdom", "Frozen Kingdom", &[c(0x9AD8FF), c(0xFFFFFF), c(0x6A5ACD)], "Ice palace blues and lilac"),
        ("under_the_sea", "Under the Sea", &[c(0x00C8B0), c(0x8000C0), c(0xFF6040)], "Sea green, purple and coral"),
    ]),
];

const NATURE: &[PaletteDef] = &[
    ("ocean", "Ocean", &[c(0x0040FF), c(0x00C0C0), c(0xFFFFFF)], "Deep blue waves and sea foam"),
    ("forest", "Forest", &[c(0x006400), c(0x228B22), c(0x8B4513)], "Evergreen and bark"),
    ("sunset", "Sunset", &[c(0xFF4500), c(0xFF8C00), c(0x8000A0)], "Orange sky fading to violet"),
    ("northern_lights", "Northern Lights", &[c(0x00FF80), c(0x00A0FF), c(0x8000FF)], "Aurora greens and violets"),
    ("desert", "Desert", &[c(0xEDC9AF), c(0xE07020), c(0xC04000)], "Sandstone and canyon red"),
    ("roses", "Rose", &[c(0xFF0030), c(0xFF6080), c(0x006000)], "Red petals and green stems"),
    ("sky", "Sky", &[c(0x87CEEB), c(0xFFFFFF), c(0x4080FF)], "Clear blue sky with clouds"),
    ("stars", "Stars", &[c(0xFFFFFF), c(0xC0C8FF), c(0x101040)], "Starlight over the night"),
    ("lavender_fields", "Lavender Fields", &[c(0xB57EDC), c(0x8060C0), c(0x90C060)], "Purple rows in summer"),
];

/// Architectural styles: id suffix, name, base color
const ARCHITECTURAL_STYLES: &[(&str, &str, Rgb)] = &[
    ("warm_white", "Warm White", c(0xFFB464)),
    ("cool_white", "Cool White", c(0xC8DCFF)),
    ("gold", "Gold", c(0xFFC800)),
    ("red", "Red", c(0xFF0000)),
];

pub fn root_categories() -> Vec<LibraryNode> {
    ROOTS
        .iter()
        .enumerate()
        .map(|(i, (id, name))| LibraryNode::category(*id, *name, i as i32))
        .collect()
}

fn palette_nodes(parent_id: &str, defs: &[PaletteDef]) -> Vec<LibraryNode> {
    defs.iter()
        .enumerate()
        .map(|(i, (suffix, name, colors, description))| {
            LibraryNode::palette(
                format!("{}.{}", parent_id, suffix),
                *name,
                parent_id,
                colors.to_vec(),
                i as i32,
            )
            .with_meta(META_DESCRIPTION, *description)
        })
        .collect()
}

fn folder_tree(root: &str, folders: &[(&str, &str, &[PaletteDef])]) -> Vec<LibraryNode> {
    let mut nodes = Vec::new();
    for (i, (suffix, name, palettes)) in folders.iter().enumerate() {
        let folder_id = format!("{}.{}", root, suffix);
        nodes.push(LibraryNode::folder(folder_id.clone(), *name, root, i as i32));
        nodes.extend(palette_nodes(&folder_id, palettes));
    }
    nodes
}

pub fn holiday_nodes() -> Vec<LibraryNode> {
    folder_tree(ROOT_HOLIDAYS, HOLIDAY_FOLDERS)
}

pub fn sports_nodes() -> Vec<LibraryNode> {
    let mut nodes = Vec::new();
    for (i, (league_id, league_name, teams)) in LEAGUES.iter().enumerate() {
        let folder_id = format!("{}.{}", ROOT_SPORTS, league_id);
        nodes.push(LibraryNode::folder(
            folder_id.clone(),
            *league_name,
            ROOT_SPORTS,
            i as i32,
        ));
        for (j, (team_id, team_name, colors)) in teams.iter().enumerate() {
            nodes.push(
                LibraryNode::palette(
                    format!("{}.{}", folder_id, team_id),
                    *team_name,
                    folder_id.as_str(),
                    colors.to_vec(),
                    j as i32,
                )
                .with_meta(META_DESCRIPTION, format!("{} team colors", league_name))
                .with_meta(META_KEYWORDS, json!([league_name.to_lowercase(), "team", "game"])),
            );
        }
    }
    nodes
}

pub fn season_nodes() -> Vec<LibraryNode> {
    palette_nodes(ROOT_SEASONS, SEASONS)
}

pub fn party_nodes() -> Vec<LibraryNode> {
    palette_nodes(ROOT_PARTIES, PARTIES)
}

pub fn franchise_nodes() -> Vec<LibraryNode> {
    folder_tree(ROOT_FRANCHISES, FRANCHISE_FOLDERS)
}

pub fn nature_nodes() -> Vec<LibraryNode> {
    palette_nodes(ROOT_NATURE, NATURE)
        .into_iter()
        .map(|n| n.with_meta(META_DEFAULT_SPEED, 80).with_meta(META_UNIVERSAL_APPEAL, 0.7))
        .collect()
}

/// One folder per style, each holding a spacing, galaxy and twinkle node
pub fn architectural_nodes() -> Vec<LibraryNode> {
    let mut nodes = Vec::new();
    for (i, (suffix, name, color)) in ARCHITECTURAL_STYLES.iter().enumerate() {
        let folder_id = format!("{}.{}", ROOT_ARCHITECTURAL, suffix);
        nodes.push(LibraryNode::folder(
            folder_id.clone(),
            *name,
            ROOT_ARCHITECTURAL,
            i as i32,
        ));
        let variants = [
            ("spacing", "Spacing", 1, 0),
            ("galaxy", "Galaxy", 1, 2),
            ("twinkle", "Twinkle", 1, 1),
        ];
        for (j, (kind, label, grouping, spacing)) in variants.into_iter().enumerate() {
            nodes.push(
                LibraryNode::palette(
                    format!("{}.{}", folder_id, kind),
                    format!("{} {}", name, label),
                    folder_id.as_str(),
                    vec![*color],
                    j as i32,
                )
                .with_meta(META_GENERATOR, kind)
                .with_meta(META_STYLE, *name)
                .with_meta(META_GROUPING, grouping)
                .with_meta(META_SPACING, spacing)
                .with_meta(META_DESCRIPTION, format!("Permanent {} lighting", name.to_lowercase())),
            );
        }
    }
    nodes
}

/// Every static node: roots first, then each sub-hierarchy
pub fn static_nodes() -> Vec<LibraryNode> {
    let mut nodes = root_categories();
    nodes.extend(holiday_nodes());
    nodes.extend(sports_nodes());
    nodes.extend(season_nodes());
    nodes.extend(party_nodes());
    nodes.extend(franchise_nodes());
    nodes.extend(nature_nodes());
    nodes.extend(architectural_nodes());
    nodes
}

/// Keep the first record per id in an already ordered list
fn first_per_id<'a, T>(sorted: Vec<&'a T>, id: impl Fn(&T) -> &str, source: &str) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    sorted
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(id(*record).to_string());
            if !fresh {
                log::warn!("[catalog] dropping duplicate {} id {}", source, id(*record));
            }
            fresh
        })
        .collect()
}

/// Live events become palettes under the live-events root, ordered by start
/// date and then id. Repeated ids keep their earliest event.
pub fn live_event_nodes(events: &[LiveEvent]) -> Vec<LibraryNode> {
    let mut sorted: Vec<&LiveEvent> = events.iter().collect();
    sorted.sort_by(|a, b| a.starts_on.cmp(&b.starts_on).then_with(|| a.id.cmp(&b.id)));
    first_per_id(sorted, |e| e.id.as_str(), "live event")
        .into_iter()
        .enumerate()
        .map(|(i, event)| {
            let mut node = LibraryNode::palette(
                format!("{}.{}", ROOT_LIVE_EVENTS, event.id),
                event.name.as_str(),
                ROOT_LIVE_EVENTS,
                event.colors.clone(),
                i as i32,
            )
            .with_meta("startsOn", event.starts_on.to_string());
            if let Some(description) = &event.description {
                node = node.with_meta(META_DESCRIPTION, description.as_str());
            }
            node
        })
        .collect()
}

/// Followed teams become palettes under the my-teams root, ordered by name.
/// Repeated team ids keep the first by name.
pub fn followed_team_nodes(teams: &[FollowedTeam]) -> Vec<LibraryNode> {
    let mut sorted: Vec<&FollowedTeam> = teams.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.team_id.cmp(&b.team_id)));
    first_per_id(sorted, |t| t.team_id.as_str(), "followed team")
        .into_iter()
        .enumerate()
        .map(|(i, team)| {
            LibraryNode::palette(
                format!("{}.{}", ROOT_MY_TEAMS, team.team_id),
                team.name.as_str(),
                ROOT_MY_TEAMS,
                team.colors.clone(),
                i as i32,
            )
            .with_meta(META_DESCRIPTION, format!("{} team colors", team.league))
            .with_meta(META_KEYWORDS, json!([team.league.to_lowercase(), "team", "game"]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn static_ids_are_unique() {
        let nodes = static_nodes();
        let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), nodes.len());
    }

    #[test]
    fn every_palette_has_colors() {
        for node in static_nodes().iter().filter(|n| n.is_palette()) {
            assert!(!node.theme_colors.is_empty(), "{} has no colors", node.id);
        }
    }

    #[test]
    fn architectural_styles_have_three_generator_nodes() {
        let nodes = architectural_nodes();
        let palettes = nodes.iter().filter(|n| n.is_palette()).count();
        assert_eq!(palettes, ARCHITECTURAL_STYLES.len() * 3);
    }

    #[test]
    fn live_events_are_ordered_by_date() {
        let day = |d| chrono::NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
        let events = vec![
            LiveEvent { id: "b".into(), name: "Later".into(), colors: vec![], starts_on: day(20), description: None },
            LiveEvent { id: "a".into(), name: "Sooner".into(), colors: vec![], starts_on: day(5), description: Some("x".into()) },
        ];
        let nodes = live_event_nodes(&events);
        assert_eq!(nodes[0].name, "Sooner");
        assert_eq!(nodes[0].sort_order, 0);
        assert_eq!(nodes[1].id, "live_events.b");
        assert_eq!(nodes[0].description(), Some("x"));
    }

    #[test]
    fn repeated_dynamic_ids_keep_the_first() {
        let day = |d| chrono::NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
        let event = |name: &str, d| LiveEvent {
            id: "finals".into(),
            name: name.into(),
            colors: vec![],
            starts_on: day(d),
            description: None,
        };
        let nodes = live_event_nodes(&[event("Rematch", 12), event("Finals", 3)]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "Finals");

        let team = |name: &str| FollowedTeam {
            team_id: "packers".into(),
            name: name.into(),
            league: "NFL".into(),
            colors: vec![Rgb::new(32, 55, 49)],
        };
        let nodes = followed_team_nodes(&[team("Packers"), team("Green Bay")]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "Green Bay");
        assert_eq!(nodes[0].sort_order, 0);
    }
}

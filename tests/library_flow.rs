use std::collections::HashMap;

use lumina_lib::models::{FollowedTeam, LiveEvent, NodeType};
use lumina_lib::{EngineSettings, LightingLibrary, Rgb};
use pretty_assertions::assert_eq;

fn day(d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2026, 12, d).unwrap()
}

#[test]
fn browse_from_roots_to_patterns() {
    let library = LightingLibrary::default();

    let roots = library.children(None).unwrap();
    assert!(roots.iter().all(|n| n.node_type == NodeType::Category));
    let orders: Vec<i32> = roots.iter().map(|n| n.sort_order).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);

    let winter = library.children(Some("holidays")).unwrap();
    assert_eq!(winter[0].id, "holidays.winter");

    let crumbs: Vec<String> = library
        .ancestors("holidays.winter.christmas")
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(crumbs, vec!["holidays".to_string(), "holidays.winter".to_string()]);
    assert!(library.ancestors("holidays").unwrap().is_empty());

    let root = library.root_category("holidays.winter.christmas").unwrap().unwrap();
    assert_eq!(root.id, "holidays");

    let first = library.patterns_for_node("holidays.winter.christmas").unwrap();
    let second = library.patterns_for_node("holidays.winter.christmas").unwrap();
    assert_eq!(first, second);
    assert!(first.iter().all(|p| p.category_id == "holidays"));
    assert!(library.patterns_for_node("holidays.winter").unwrap().is_empty());
    assert!(library.patterns_for_node("nowhere").unwrap().is_empty());
}

#[test]
fn architectural_counts() {
    let library = LightingLibrary::default();
    assert_eq!(
        library.patterns_for_node("architectural.gold.spacing").unwrap().len(),
        17
    );
    assert_eq!(
        library.patterns_for_node("architectural.gold.galaxy").unwrap().len(),
        57
    );
    assert_eq!(
        library.patterns_for_node("architectural.gold.twinkle").unwrap().len(),
        8
    );
}

#[test]
fn search_ranks_exact_name_first() {
    let library = LightingLibrary::default();
    let results = library.search("christmas").unwrap();
    assert_eq!(results.palettes[0].name, "Christmas");
    assert!(results.patterns.len() <= 10);
    assert!(library.search("  ").unwrap().is_empty());
}

#[test]
fn payload_serializes_for_the_device() {
    let library = LightingLibrary::default();
    let items = library.patterns_for_node("nature.ocean").unwrap();
    let json = items[0].device_payload.to_json();

    assert_eq!(json["on"], true);
    assert_eq!(json["seg"][0]["pal"], 5);
    assert_eq!(json["seg"][0]["col"][0], serde_json::json!([0, 64, 255, 0]));
    assert!(json["seg"][0].get("grp").is_none());
}

#[test]
fn dynamic_sources_show_up_after_update() {
    let library = LightingLibrary::new(EngineSettings::from_map(&HashMap::new()));
    library.update_live_events(vec![
        LiveEvent {
            id: "finals".into(),
            name: "Championship Finals".into(),
            colors: vec![Rgb::new(255, 215, 0), Rgb::new(0, 0, 128)],
            starts_on: day(20),
            description: Some("Big game".into()),
        },
        LiveEvent {
            id: "parade".into(),
            name: "Holiday Parade".into(),
            colors: vec![Rgb::new(255, 0, 0)],
            starts_on: day(3),
            description: None,
        },
    ]);
    library.update_followed_teams(vec![FollowedTeam {
        team_id: "packers".into(),
        name: "Green Bay Packers".into(),
        league: "NFL".into(),
        colors: vec![Rgb::new(32, 55, 49), Rgb::new(255, 182, 18)],
    }]);

    let events: Vec<String> = library
        .children(Some("live_events"))
        .unwrap()
        .into_iter()
        .map(|n| n.name)
        .collect();
    assert_eq!(events, vec!["Holiday Parade".to_string(), "Championship Finals".to_string()]);

    let team = library.node("my_teams.packers").unwrap().unwrap();
    assert_eq!(team.parent_id.as_deref(), Some("my_teams"));

    let rec = library.recommend(Some("my_teams.packers"), "game day hype").unwrap();
    assert!(!rec.patterns.is_empty());
    let scores: Vec<f64> = rec.patterns.iter().map(|p| p.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn rainbow_query_allows_color_ignoring_effects() {
    let library = LightingLibrary::default();
    let rec = library.recommend(None, "rainbow party").unwrap();
    assert!(rec.analysis.wants_color_override);
    assert!(!rec.patterns.is_empty());
}

#[test]
fn messy_dynamic_feeds_do_not_break_the_catalog() {
    let library = LightingLibrary::default();
    let event = |id: &str, name: &str, d: u32, colors: Vec<Rgb>| LiveEvent {
        id: id.into(),
        name: name.into(),
        colors,
        starts_on: day(d),
        description: None,
    };
    library.update_live_events(vec![
        event("finals", "Finals", 9, vec![Rgb::new(255, 215, 0)]),
        event("finals", "Finals Replay", 12, vec![Rgb::new(0, 0, 128)]),
        event("blank", "No Colors Yet", 1, vec![]),
    ]);

    let events: Vec<String> = library
        .children(Some("live_events"))
        .unwrap()
        .into_iter()
        .map(|n| n.name)
        .collect();
    assert_eq!(events, vec!["No Colors Yet".to_string(), "Finals".to_string()]);
    assert!(library.patterns_for_node("live_events.blank").unwrap().is_empty());
    assert!(!library.patterns_for_node("live_events.finals").unwrap().is_empty());

    assert!(!library.patterns_for_node("nature.ocean").unwrap().is_empty());
    assert_eq!(library.search("christmas").unwrap().palettes[0].name, "Christmas");
}

#[test]
fn recommendation_carries_display_labels() {
    let library = LightingLibrary::default();
    let rec = library.recommend(Some("nature.ocean"), "calm blue").unwrap();
    let labels: Vec<&str> = rec.labels.iter().map(|l| l.label.as_str()).collect();
    assert!(labels.contains(&"Calm"));
    assert!(labels.contains(&"Relax & Unwind"));
    assert!(labels.contains(&"Blue"));
}

use std::path::PathBuf;

use rinkview_model::event::{event_types, parse_events};
use rinkview_model::game::{parse_games, parse_roster, Roster, TeamSide};
use rinkview_model::taxonomy::{EventColorMap, EventTypeGroup};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-game")
        .join(name);
    std::fs::read_to_string(path).expect("fixture should be readable")
}

#[test]
fn fixture_events_belong_to_the_listed_game() {
    let games = parse_games(&fixture("games.json")).expect("games should parse");
    let events = parse_events(&fixture("events.json")).expect("events should parse");

    assert_eq!(games.len(), 1);
    let game = &games[0];
    assert!(events.iter().all(|e| game.owns(e)));
    assert_eq!(game.side_of("canada"), Some(TeamSide::Home));
    assert_eq!(game.side_of("USA"), Some(TeamSide::Away));
}

#[test]
fn fixture_roster_resolves_numbers() {
    let players = parse_roster(&fixture("players.json")).expect("roster should parse");
    let roster = Roster::new(&players);

    assert_eq!(roster.len(), 5);
    assert_eq!(roster.number_for("Hilary Knight"), Some(21));
    assert_eq!(roster.number_for(" marie-philip poulin "), Some(29));
    assert_eq!(roster.number_for("Unknown Skater"), None);
}

#[test]
fn fixture_vocabulary_is_fully_grouped() {
    let events = parse_events(&fixture("events.json")).expect("events should parse");
    let types = event_types(&events);
    let colors = EventColorMap::from_types(&types);

    assert_eq!(colors.len(), types.len());
    assert!(types
        .iter()
        .all(|t| EventTypeGroup::classify(t) != EventTypeGroup::Other));

    let partial: Vec<u64> = events
        .iter()
        .filter(|e| e.has_partial_coordinates())
        .map(|e| e.id)
        .collect();
    assert_eq!(partial, vec![18]);
}

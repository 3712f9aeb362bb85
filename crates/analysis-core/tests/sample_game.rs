use std::path::PathBuf;

use rinkview_analysis::filter::FilterState;
use rinkview_analysis::heatmap::{HeatmapLayer, OverlayKind};
use rinkview_analysis::orientation::Orienter;
use rinkview_analysis::summary::SummaryStats;
use rinkview_analysis::timeline::Timeline;
use rinkview_common::{ClockParseError, DensityConfig, Orientation};
use rinkview_model::event::{parse_events, GameEvent};
use rinkview_model::game::Game;
use rinkview_model::selection::Selector;
use rinkview_model::taxonomy::EventTypeGroup;

fn load_fixture_events() -> Vec<GameEvent> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-game")
        .join("events.json");

    let content = std::fs::read_to_string(path).expect("fixture events should be readable");
    parse_events(&content).expect("fixture events should parse")
}

fn orienter(events: &[GameEvent]) -> Orienter {
    Orienter::new(Game::from_event(1, &events[0]), Orientation::HomeLeft)
}

#[test]
fn fixture_timeline_skips_malformed_clock_only() {
    let events = load_fixture_events();
    let timeline = Timeline::build(&events);

    assert_eq!(events.len(), 20);
    assert_eq!(timeline.len(), 19);
    assert_eq!(timeline.skipped().len(), 1);
    assert_eq!(timeline.skipped()[0].event_id, 13);
    assert!(matches!(
        timeline.skipped()[0].error,
        ClockParseError::Malformed { .. }
    ));

    let times: Vec<u32> = timeline.events().iter().map(|e| e.absolute_time).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(timeline.max_time(), 3750);
}

#[test]
fn fixture_period_markers_cover_overtime() {
    let events = load_fixture_events();
    let timeline = Timeline::build(&events);

    assert_eq!(timeline.period_boundaries(), vec![1199, 2055, 3450, 3750]);
    let labels: Vec<String> = timeline
        .period_markers()
        .into_iter()
        .map(|m| m.label)
        .collect();
    assert_eq!(labels, vec!["P1", "P2", "P3", "OT"]);
}

#[test]
fn fixture_views_share_one_filter() {
    let events = load_fixture_events();
    let mut filter = FilterState::new();
    filter.set_team(Selector::Only("usa".into()));
    let filtered = filter.apply(&events);

    let timeline = Timeline::build(filtered.iter().copied());
    let summary = SummaryStats::from_events(filtered.iter().copied());
    let layer = HeatmapLayer::build(
        OverlayKind::Event,
        filtered.iter().copied(),
        &orienter(&events),
        &DensityConfig::default(),
    );

    assert_eq!(filtered.len(), 10);
    assert_eq!(summary.total_events, filtered.len());
    // one USA event carries a malformed clock
    assert_eq!(timeline.len(), filtered.len() - 1);
    assert_eq!(layer.total(), filtered.len());
}

#[test]
fn fixture_summary_counts() {
    let events = load_fixture_events();
    let summary = SummaryStats::from_events(&events);

    assert_eq!(summary.shots, 7);
    assert_eq!(summary.goals, 3);
    assert_eq!(summary.penalties, 1);
    assert!((summary.shot_accuracy_pct - 30.0).abs() < 1e-9);
    assert_eq!(summary.group_count(EventTypeGroup::Scoring), 10);
}

#[test]
fn fixture_shot_density_lands_in_one_attacking_zone() {
    let events = load_fixture_events();
    let layer = HeatmapLayer::build(
        OverlayKind::Shot,
        &events,
        &orienter(&events),
        &DensityConfig::default(),
    );

    assert_eq!(layer.total(), 7);
    // away shots flip into the left half, home shots stay right
    let left = layer.spots.iter().filter(|s| s.bucket.x < 100.0).count();
    let right = layer.spots.iter().filter(|s| s.bucket.x > 100.0).count();
    assert_eq!((left, right), (4, 3));
}

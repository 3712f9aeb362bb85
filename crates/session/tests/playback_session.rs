use std::path::PathBuf;

use rinkview_common::AppConfig;
use rinkview_model::event::{parse_events, GameEvent};
use rinkview_model::game::Game;
use rinkview_model::selection::Selector;
use rinkview_session::{Dashboard, PlaybackState, PlaybackTick};

fn short_game() -> Vec<GameEvent> {
    serde_json::from_value(serde_json::json!([
        {"id": 1, "period": 1, "clock": "20:00", "team": "Canada", "player": "A",
         "event": "Faceoff Win", "x_coordinate": 100.0, "y_coordinate": 42.5},
        {"id": 2, "period": 1, "clock": "19:57", "team": "USA", "player": "B",
         "event": "Takeaway", "x_coordinate": 80.0, "y_coordinate": 20.0},
        {"id": 3, "period": 1, "clock": "19:55", "team": "USA", "player": "B",
         "event": "Shot", "x_coordinate": 160.0, "y_coordinate": 40.0}
    ]))
    .unwrap()
}

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

fn dashboard_with(events: Vec<GameEvent>) -> Dashboard {
    let mut dashboard = Dashboard::new(AppConfig::default());
    let game = Game::from_event(1, &events[0]);
    let token = dashboard.select_game(game);
    assert!(dashboard.receive_events(token, events));
    dashboard
}

#[tokio::test(start_paused = true)]
async fn playback_runs_to_the_end_and_stops() {
    let mut dashboard = dashboard_with(short_game());
    assert_eq!(dashboard.clock().max_time(), 5);

    dashboard.play().unwrap();
    let mut ticks = 0;
    while let Some(tick) = dashboard.next_tick().await {
        assert!(dashboard.on_tick(tick));
        ticks += 1;
    }

    assert_eq!(ticks, 5);
    assert_eq!(dashboard.clock().current_time(), 5);
    assert_eq!(dashboard.clock().state(), PlaybackState::Stopped);
    assert!(dashboard.next_tick().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn selecting_a_game_stops_playback() {
    let mut dashboard = dashboard_with(short_game());
    dashboard.play().unwrap();
    let tick = dashboard.next_tick().await.unwrap();
    assert!(dashboard.on_tick(tick));

    dashboard.select_game(Game::new(2, "2022-02-20", "Finland", "Sweden"));
    assert!(!dashboard.is_playing());
    assert_eq!(dashboard.clock().current_time(), 0);

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    assert!(dashboard.next_tick().await.is_none());
    assert!(!dashboard.on_tick(tick));
    assert_eq!(dashboard.clock().current_time(), 0);
}

#[tokio::test(start_paused = true)]
async fn ticks_from_a_replaced_timer_are_ignored() {
    let mut dashboard = dashboard_with(short_game());
    dashboard.play().unwrap();
    let first = dashboard.next_tick().await.unwrap();
    dashboard.pause();
    dashboard.play().unwrap();

    assert!(!dashboard.on_tick(first));
    let second = dashboard.next_tick().await.unwrap();
    assert_ne!(second.generation, first.generation);
    assert!(dashboard.on_tick(second));
    assert!(!dashboard.on_tick(PlaybackTick { generation: 999 }));
}

#[tokio::test(start_paused = true)]
async fn toggle_pauses_and_resumes() {
    let mut dashboard = dashboard_with(short_game());
    assert!(dashboard.toggle_playback().unwrap());
    assert!(!dashboard.toggle_playback().unwrap());
    assert!(dashboard.next_tick().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn play_does_nothing_without_events() {
    let mut dashboard = Dashboard::new(AppConfig::default());
    let token = dashboard.select_game(Game::new(1, "2022-02-17", "Canada", "USA"));
    assert!(dashboard.receive_events(token, Vec::new()));
    assert_eq!(dashboard.clock().max_time(), 60);

    dashboard.play().unwrap();
    assert!(!dashboard.is_playing());
    assert!(dashboard.next_tick().await.is_none());
    assert_eq!(dashboard.clock().current_time(), 0);
}

#[tokio::test(start_paused = true)]
async fn play_does_nothing_when_the_filter_matches_nothing() {
    let mut dashboard = dashboard_with(short_game());
    dashboard.set_player(Selector::Only("Nobody".into()));
    assert!(dashboard.timeline().is_empty());

    assert!(!dashboard.toggle_playback().unwrap());
    assert_eq!(dashboard.clock().state(), PlaybackState::Stopped);
    assert!(dashboard.next_tick().await.is_none());
}

#[test]
fn fixture_dashboard_view_is_consistent() {
    let mut dashboard = dashboard_with(load_fixture_events());
    dashboard.set_player(Selector::Only("hilary knight".into()));

    let view = dashboard.view(1200.0, 600.0);
    assert_eq!(view.summary.total_events, 8);
    // the malformed-clock takeaway is counted but not placed on the timeline
    assert_eq!(view.timeline.len(), 7);
    assert_eq!(view.max_time, 3750);
    assert_eq!(view.team_options, vec!["Canada", "USA"]);

    dashboard.scrub_to(65);
    let view = dashboard.view(1200.0, 600.0);
    assert_eq!(view.active_markers.len(), 1);
    assert_eq!(view.active_markers[0].position.x, 160.0);
}

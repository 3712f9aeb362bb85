//! Dashboard: owns every input and recomputes every view on demand.
//!
//! Inputs are the selected game, its raw events, the roster, the filter
//! selection, the scrub clock and the viewport. Nothing derived is cached:
//! [`Dashboard::view`] rebuilds the timeline, markers, overlays and counts
//! from the current inputs, all through the same [`FilterState::apply`].

use std::time::Duration;

use rinkview_analysis::filter::{player_options, team_options, FilterState};
use rinkview_analysis::geometry::RinkScales;
use rinkview_analysis::heatmap::{HeatmapLayer, OverlayKind};
use rinkview_analysis::markers::{event_markers, pass_arrows, EventMarker, PassArrow};
use rinkview_analysis::orientation::Orienter;
use rinkview_analysis::summary::SummaryStats;
use rinkview_analysis::timeline::{PeriodMarker, Timeline, TimelineEvent};
use rinkview_common::clock::format_game_time;
use rinkview_common::config::AppConfig;
use rinkview_common::error::{RinkviewError, RinkviewResult};
use rinkview_model::event::{event_types, GameEvent};
use rinkview_model::export::ExportPayload;
use rinkview_model::game::{Game, PlayerInfo, Roster};
use rinkview_model::selection::{FilterSelection, Selector};
use rinkview_model::taxonomy::{EventColorMap, EventTypeGroup};
use rinkview_model::viewport::ViewTransform;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::loader::{GameLoader, RequestToken};
use crate::playback::{PlaybackClock, PlaybackState, PlaybackTick, PlaybackTimer};
use crate::viewport::ViewportController;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub game: Option<Game>,
    pub filter: FilterSelection,
    pub playback: PlaybackState,
    pub current_time: u32,
    pub max_time: u32,
    /// `P{n} MM:SS` readout for the scrub position.
    pub time_label: String,
    /// Scrub position as a fraction of the timeline.
    pub progress: f64,
    pub timeline: Vec<TimelineEvent>,
    pub period_markers: Vec<PeriodMarker>,
    /// Markers for events live at the scrub position.
    pub active_markers: Vec<EventMarker>,
    pub pass_arrows: Vec<PassArrow>,
    /// Closest event inside the selection window, if any.
    pub selected_event: Option<TimelineEvent>,
    pub heatmaps: Vec<HeatmapLayer>,
    pub summary: SummaryStats,
    pub scales: RinkScales,
    pub view_transform: ViewTransform,
    pub team_options: Vec<String>,
    pub player_options: Vec<String>,
    pub event_types: Vec<String>,
}

pub struct Dashboard {
    config: AppConfig,
    loader: GameLoader,
    game: Option<Game>,
    events: Vec<GameEvent>,
    roster: Roster,
    filter: FilterState,
    clock: PlaybackClock,
    viewport: ViewportController,
    timer: Option<PlaybackTimer>,
    generation: u64,
    tick_tx: mpsc::UnboundedSender<PlaybackTick>,
    tick_rx: mpsc::UnboundedReceiver<PlaybackTick>,
}

impl Dashboard {
    pub fn new(config: AppConfig) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let clock = PlaybackClock::new(
            config.timeline.empty_max_time_secs,
            config.playback.secs_per_tick,
        );
        Self {
            config,
            loader: GameLoader::new(),
            game: None,
            events: Vec::new(),
            roster: Roster::default(),
            filter: FilterState::new(),
            clock,
            viewport: ViewportController::new(),
            timer: None,
            generation: 0,
            tick_tx,
            tick_rx,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn selection(&self) -> &FilterSelection {
        self.filter.selection()
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    // -- selection -----------------------------------------------------

    /// Switch games. Stops playback and discards every input tied to the
    /// previous game; the returned token must accompany the event response.
    pub fn select_game(&mut self, game: Game) -> RequestToken {
        tracing::info!(game_id = game.id, title = %game.title(), "selecting game");
        self.stop_timer();
        self.clock.reset();
        self.filter.reset();
        self.viewport.reset();
        self.events.clear();
        self.roster = Roster::default();

        let token = self.loader.begin(game.id);
        self.game = Some(game);
        self.refresh_range();
        token
    }

    /// Commit loaded events if `token` is still the latest selection.
    pub fn receive_events(&mut self, token: RequestToken, events: Vec<GameEvent>) -> bool {
        if !self.loader.commit(token) {
            return false;
        }
        tracing::info!(
            game_id = token.game_id,
            count = events.len(),
            "game events loaded"
        );
        self.events = events;
        self.refresh_range();
        true
    }

    pub fn set_roster(&mut self, players: &[PlayerInfo]) {
        self.roster = Roster::new(players);
    }

    // -- filters -------------------------------------------------------

    pub fn set_team(&mut self, team: Selector<String>) {
        self.filter.set_team(team);
        self.refresh_range();
    }

    pub fn set_player(&mut self, player: Selector<String>) {
        self.filter.set_player(player);
        self.refresh_range();
    }

    pub fn set_event_type_group(&mut self, group: Selector<EventTypeGroup>) {
        self.filter.set_event_type_group(group);
        self.refresh_range();
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.refresh_range();
    }

    /// Events passing the current filter, in input order.
    pub fn filtered_events(&self) -> Vec<&GameEvent> {
        self.filter.apply(&self.events)
    }

    /// Timeline over the filtered events.
    pub fn timeline(&self) -> Timeline {
        Timeline::build(self.filtered_events())
    }

    fn refresh_range(&mut self) {
        let max = self
            .timeline()
            .max_time_or(self.config.timeline.empty_max_time_secs);
        self.clock.set_max_time(max);
    }

    // -- scrubbing -----------------------------------------------------

    pub fn scrub_to(&mut self, t: u32) {
        self.clock.seek(t);
    }

    /// Jump to the previous event; returns its id, or `None` at the start.
    pub fn step_previous(&mut self) -> Option<u64> {
        let timeline = self.timeline();
        let event = timeline.previous_event(self.clock.current_time())?;
        let (id, time) = (event.id(), event.absolute_time);
        self.clock.seek(time);
        Some(id)
    }

    /// Jump to the next event; returns its id, or `None` at the end.
    pub fn step_next(&mut self) -> Option<u64> {
        let timeline = self.timeline();
        let event = timeline.next_event(self.clock.current_time())?;
        let (id, time) = (event.id(), event.absolute_time);
        self.clock.seek(time);
        Some(id)
    }

    pub fn jump_to_start(&mut self) {
        self.clock.seek(0);
    }

    pub fn jump_to_end(&mut self) {
        self.clock.seek(self.clock.max_time());
    }

    // -- playback ------------------------------------------------------

    /// Start playback and its timer. Needs a tokio runtime.
    pub fn play(&mut self) -> RinkviewResult<()> {
        if self.timer.is_some() {
            return Ok(());
        }
        if self.timeline().is_empty() {
            tracing::debug!("no events to play");
            return Ok(());
        }
        if !self.clock.play() {
            tracing::debug!("nothing to play");
            return Ok(());
        }

        self.generation += 1;
        let interval = Duration::from_millis(self.config.playback.tick_interval_ms);
        match PlaybackTimer::start(interval, self.generation, self.tick_tx.clone()) {
            Ok(timer) => {
                self.timer = Some(timer);
                Ok(())
            }
            Err(e) => {
                self.clock.pause();
                Err(e)
            }
        }
    }

    pub fn pause(&mut self) {
        self.clock.pause();
        self.stop_timer();
    }

    /// Returns whether playback is running afterwards.
    pub fn toggle_playback(&mut self) -> RinkviewResult<bool> {
        if self.clock.is_playing() {
            self.pause();
        } else {
            self.play()?;
        }
        Ok(self.clock.is_playing())
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    /// Wait for the next timer tick. `None` when playback is stopped.
    pub async fn next_tick(&mut self) -> Option<PlaybackTick> {
        self.timer.as_ref()?;
        self.tick_rx.recv().await
    }

    /// Apply a timer tick. Ticks from a replaced or stopped timer are
    /// ignored. Returns whether the clock moved.
    pub fn on_tick(&mut self, tick: PlaybackTick) -> bool {
        let live = self
            .timer
            .as_ref()
            .is_some_and(|t| t.generation() == tick.generation);
        if !live {
            tracing::debug!(generation = tick.generation, "ignoring stale playback tick");
            return false;
        }

        let before = self.clock.current_time();
        self.clock.tick();
        if !self.clock.is_playing() {
            tracing::info!(time = self.clock.current_time(), "playback reached the end");
            self.stop_timer();
        }
        self.clock.current_time() != before
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
        while self.tick_rx.try_recv().is_ok() {}
    }

    // -- views ---------------------------------------------------------

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Snapshot of every derived view for a `width` x `height` container.
    pub fn view(&self, width: f64, height: f64) -> DashboardView {
        let filtered = self.filtered_events();
        let timeline = Timeline::build(filtered.iter().copied());
        let t = self.clock.current_time();
        let max_time = self.clock.max_time();
        let tl_config = self.config.timeline;

        let active = timeline.active_events(t, tl_config.active_epsilon_secs);
        let colors = EventColorMap::from_types(event_types(&self.events));

        let (active_markers, arrows, heatmaps) = match &self.game {
            Some(game) => {
                let orienter = Orienter::new(game.clone(), self.config.view.orientation);
                let markers =
                    event_markers(active.iter().copied(), &orienter, &colors, &self.roster);
                let arrows = pass_arrows(active.iter().copied(), &orienter);
                let heatmaps = OverlayKind::ALL
                    .into_iter()
                    .map(|kind| {
                        HeatmapLayer::build(
                            kind,
                            filtered.iter().copied(),
                            &orienter,
                            &self.config.density,
                        )
                    })
                    .collect();
                (markers, arrows, heatmaps)
            }
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        DashboardView {
            game: self.game.clone(),
            filter: self.filter.selection().clone(),
            playback: self.clock.state(),
            current_time: t,
            max_time,
            time_label: format_game_time(t),
            progress: timeline.proportional_position(t, tl_config.empty_max_time_secs),
            selected_event: timeline
                .nearest_event(t, tl_config.nearest_window_secs)
                .cloned(),
            period_markers: timeline.period_markers(),
            active_markers,
            pass_arrows: arrows,
            heatmaps,
            summary: SummaryStats::from_events(filtered.iter().copied()),
            scales: RinkScales::with_fill(width, height, self.config.view.fill_ratio),
            view_transform: self.viewport.transform(),
            team_options: team_options(&self.events),
            player_options: player_options(&self.events, &self.filter.selection().team),
            event_types: event_types(&self.events),
            timeline: timeline.events().to_vec(),
        }
    }

    /// Export payload for the selected game, all events or only the
    /// filtered ones.
    pub fn export(&self, filtered_only: bool) -> RinkviewResult<ExportPayload> {
        let game = self
            .game
            .clone()
            .ok_or_else(|| RinkviewError::export("no game selected"))?;
        let (events, filter) = if filtered_only {
            (
                self.filter.apply_owned(&self.events),
                self.filter.selection().clone(),
            )
        } else {
            (self.events.clone(), FilterSelection::default())
        };
        tracing::info!(game_id = game.id, count = events.len(), "exporting events");
        Ok(ExportPayload::new(
            game,
            events,
            filter,
            self.clock.current_time(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64) -> Game {
        Game::new(id, "2022-02-17", "Canada", "USA")
    }

    fn events() -> Vec<GameEvent> {
        serde_json::from_value(serde_json::json!([
            {"id": 1, "period": 1, "clock": "19:50", "team": "Canada", "player": "Sarah Nurse",
             "event": "Shot", "x_coordinate": 170.0, "y_coordinate": 40.0},
            {"id": 2, "period": 1, "clock": "19:30", "team": "USA", "player": "Hilary Knight",
             "event": "Shot", "x_coordinate": 165.0, "y_coordinate": 45.0},
            {"id": 3, "period": 1, "clock": "18:00", "team": "USA", "player": "Hilary Knight",
             "event": "Goal", "x_coordinate": 172.0, "y_coordinate": 42.0},
            {"id": 4, "period": 2, "clock": "19:00", "team": "Canada", "player": "Sarah Nurse",
             "event": "Takeaway"}
        ]))
        .unwrap()
    }

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::new(AppConfig::default());
        let token = dashboard.select_game(game(1));
        assert!(dashboard.receive_events(token, events()));
        dashboard
    }

    #[test]
    fn test_empty_dashboard_uses_fallback_range() {
        let dashboard = Dashboard::new(AppConfig::default());
        assert_eq!(dashboard.clock().max_time(), 60);
        let view = dashboard.view(1000.0, 500.0);
        assert!(view.timeline.is_empty());
        assert!(view.heatmaps.is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut dashboard = Dashboard::new(AppConfig::default());
        let stale = dashboard.select_game(game(1));
        let current = dashboard.select_game(game(2));

        assert!(!dashboard.receive_events(stale, events()));
        assert!(dashboard.events().is_empty());
        assert!(dashboard.receive_events(current, events()));
        assert_eq!(dashboard.game().map(|g| g.id), Some(2));
    }

    #[test]
    fn test_select_game_resets_state() {
        let mut dashboard = loaded();
        dashboard.set_team(Selector::Only("USA".into()));
        dashboard.scrub_to(30);
        dashboard.viewport_mut().pan(10.0, 10.0);

        dashboard.select_game(game(2));
        assert!(dashboard.selection().is_unfiltered());
        assert_eq!(dashboard.clock().current_time(), 0);
        assert_eq!(dashboard.viewport().transform(), ViewTransform::IDENTITY);
        assert!(dashboard.events().is_empty());
    }

    #[test]
    fn test_filter_drives_range_and_views() {
        let mut dashboard = loaded();
        assert_eq!(dashboard.clock().max_time(), 1260);

        dashboard.set_team(Selector::Only("usa".into()));
        assert_eq!(dashboard.clock().max_time(), 120);

        let view = dashboard.view(1000.0, 500.0);
        assert_eq!(view.timeline.len(), 2);
        assert_eq!(view.summary.total_events, 2);
        let event_layer = view
            .heatmaps
            .iter()
            .find(|l| l.kind == OverlayKind::Event)
            .unwrap();
        assert_eq!(event_layer.total(), 2);
    }

    #[test]
    fn test_stepping_and_active_markers() {
        let mut dashboard = loaded();
        assert_eq!(dashboard.step_next(), Some(1));
        assert_eq!(dashboard.clock().current_time(), 10);
        assert_eq!(dashboard.step_next(), Some(2));
        assert_eq!(dashboard.step_previous(), Some(1));
        assert_eq!(dashboard.step_previous(), None);

        dashboard.scrub_to(30);
        let view = dashboard.view(1000.0, 500.0);
        assert_eq!(view.time_label, "P1 00:30");
        let ids: Vec<u64> = view.active_markers.iter().map(|m| m.event_id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(view.selected_event.map(|e| e.id()), Some(2));

        dashboard.jump_to_end();
        assert_eq!(dashboard.clock().current_time(), 1260);
        assert_eq!(dashboard.step_next(), None);
    }

    #[test]
    fn test_export_filtered() {
        let mut dashboard = loaded();
        dashboard.set_event_type_group(Selector::Only(EventTypeGroup::Scoring));
        let payload = dashboard.export(true).unwrap();
        assert_eq!(payload.event_count, 3);
        assert_eq!(payload.game.id, 1);

        let all = dashboard.export(false).unwrap();
        assert_eq!(all.event_count, 4);
        assert!(all.filter.is_unfiltered());

        assert!(Dashboard::new(AppConfig::default()).export(false).is_err());
    }

    #[test]
    fn test_play_without_runtime_fails_and_stays_stopped() {
        let mut dashboard = loaded();
        assert!(dashboard.play().is_err());
        assert!(!dashboard.is_playing());
    }
}

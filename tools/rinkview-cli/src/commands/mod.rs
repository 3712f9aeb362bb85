pub mod export;
pub mod heatmap;
pub mod info;
pub mod play;
pub mod timeline;
pub mod validate;

use std::path::Path;

use anyhow::Context;
use rinkview_analysis::filter::FilterState;
use rinkview_common::config::AppConfig;
use rinkview_model::event::{parse_events, GameEvent};
use rinkview_model::game::Game;
use rinkview_model::selection::Selector;
use rinkview_session::Dashboard;

use crate::FilterArgs;

/// Read an events file and derive its game from the first row.
pub fn load_game(path: &Path) -> anyhow::Result<(Game, Vec<GameEvent>)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events = parse_events(&content)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;
    let first = events
        .first()
        .ok_or_else(|| anyhow::anyhow!("No events in {}", path.display()))?;
    let game = Game::from_event(first.id, first);
    Ok((game, events))
}

impl FilterArgs {
    pub fn is_empty(&self) -> bool {
        self.team.is_none() && self.player.is_none() && self.group.is_none()
    }

    /// Filter state with team applied before player, so a player argument
    /// survives the team reset.
    pub fn to_state(&self) -> FilterState {
        let mut state = FilterState::new();
        if let Some(team) = &self.team {
            state.set_team(Selector::from_choice(team));
        }
        if let Some(player) = &self.player {
            state.set_player(Selector::from_choice(player));
        }
        if let Some(group) = self.group {
            state.set_event_type_group(Selector::Only(group));
        }
        state
    }

    pub fn apply_to(&self, dashboard: &mut Dashboard) {
        if let Some(team) = &self.team {
            dashboard.set_team(Selector::from_choice(team));
        }
        if let Some(player) = &self.player {
            dashboard.set_player(Selector::from_choice(player));
        }
        if let Some(group) = self.group {
            dashboard.set_event_type_group(Selector::Only(group));
        }
    }
}

/// Dashboard loaded with one file's game and events.
pub fn load_dashboard(
    path: &Path,
    filter: &FilterArgs,
    config: AppConfig,
) -> anyhow::Result<Dashboard> {
    let (game, events) = load_game(path)?;
    let mut dashboard = Dashboard::new(config);
    let token = dashboard.select_game(game);
    dashboard.receive_events(token, events);
    filter.apply_to(&mut dashboard);
    Ok(dashboard)
}

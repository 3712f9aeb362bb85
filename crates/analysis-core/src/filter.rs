//! The one filtering predicate every derived view uses.
//!
//! Markers, heatmap inputs, the timeline list and summary counts all call
//! [`FilterState::apply`] on the same raw event collection.

use std::collections::BTreeMap;

use rinkview_model::event::{normalize_key, GameEvent};
use rinkview_model::selection::{FilterSelection, Selector};
use rinkview_model::taxonomy::EventTypeGroup;

/// Current filter selection plus the mutation rules that keep it consistent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    selection: FilterSelection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Change the team; always resets the player to "all".
    pub fn set_team(&mut self, team: Selector<String>) {
        tracing::debug!(team = %team, "team filter changed");
        self.selection.team = team;
        self.selection.player = Selector::All;
    }

    /// Change the player. A specific player supersedes the team filter.
    pub fn set_player(&mut self, player: Selector<String>) {
        tracing::debug!(player = %player, "player filter changed");
        self.selection.player = player;
    }

    pub fn set_event_type_group(&mut self, group: Selector<EventTypeGroup>) {
        tracing::debug!(group = %group, "event group filter changed");
        self.selection.event_type_group = group;
    }

    /// Everything back to "all".
    pub fn reset(&mut self) {
        self.selection = FilterSelection::default();
    }

    /// Whether one event passes the current selection.
    pub fn matches(&self, event: &GameEvent) -> bool {
        let subject = match (&self.selection.player, &self.selection.team) {
            (Selector::Only(player), _) => event.involves_player(player),
            (Selector::All, Selector::Only(team)) => event.is_team(team),
            (Selector::All, Selector::All) => true,
        };
        subject
            && match self.selection.event_type_group {
                Selector::All => true,
                Selector::Only(group) => group.contains(&event.event_type),
            }
    }

    /// Filtered subset, in input order.
    pub fn apply<'a>(&self, events: &'a [GameEvent]) -> Vec<&'a GameEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }

    /// Filtered subset as owned events.
    pub fn apply_owned(&self, events: &[GameEvent]) -> Vec<GameEvent> {
        self.apply(events).into_iter().cloned().collect()
    }
}

/// Distinct team names as first spelled, sorted case-insensitively.
pub fn team_options(events: &[GameEvent]) -> Vec<String> {
    distinct(events.iter().map(|e| e.team.as_str()))
}

/// Distinct primary players, limited to `team` when one is selected.
pub fn player_options(events: &[GameEvent], team: &Selector<String>) -> Vec<String> {
    distinct(
        events
            .iter()
            .filter(|e| match team {
                Selector::All => true,
                Selector::Only(team) => e.is_team(team),
            })
            .map(|e| e.player.as_str()),
    )
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        seen.entry(normalize_key(trimmed))
            .or_insert_with(|| trimmed.to_string());
    }
    seen.into_values().collect()
}

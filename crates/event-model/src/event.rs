//! Play-by-play event records.
//!
//! Events arrive from the data-fetch collaborator as a JSON array using the
//! feed's snake_case column names. Coordinates are recorded from the
//! perspective of the team that generated the event (the "eventing team").

use serde::{Deserialize, Serialize};

use crate::viewport::Point2D;

/// Rink length in feet (data-space X extent).
pub const RINK_LENGTH_FT: f64 = 200.0;

/// Rink width in feet (data-space Y extent).
pub const RINK_WIDTH_FT: f64 = 85.0;

/// A single play-by-play event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: u64,

    #[serde(default)]
    pub game_date: String,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,

    /// Period number, starting at 1. Periods past 3 are overtime.
    pub period: u32,

    /// Time remaining in the period as `MM:SS`.
    pub clock: String,

    /// Eventing team.
    pub team: String,

    /// Primary player.
    pub player: String,

    /// Free-text event type (e.g. "Shot", "Zone Entry").
    #[serde(rename = "event")]
    pub event_type: String,

    #[serde(default)]
    pub detail_1: Option<String>,
    #[serde(default)]
    pub detail_2: Option<String>,
    #[serde(default)]
    pub detail_3: Option<String>,
    #[serde(default)]
    pub detail_4: Option<String>,

    #[serde(default)]
    pub x_coordinate: Option<f64>,
    #[serde(default)]
    pub y_coordinate: Option<f64>,

    /// Secondary player (pass target, penalty drawer, ...).
    #[serde(default)]
    pub player_2: Option<String>,
    #[serde(default)]
    pub x_coordinate_2: Option<f64>,
    #[serde(default)]
    pub y_coordinate_2: Option<f64>,
}

impl GameEvent {
    /// Primary location, present only when both coordinates are.
    pub fn position(&self) -> Option<Point2D> {
        match (self.x_coordinate, self.y_coordinate) {
            (Some(x), Some(y)) => Some(Point2D::new(x, y)),
            _ => None,
        }
    }

    /// Secondary (target) location, present only when both coordinates are.
    pub fn target_position(&self) -> Option<Point2D> {
        match (self.x_coordinate_2, self.y_coordinate_2) {
            (Some(x), Some(y)) => Some(Point2D::new(x, y)),
            _ => None,
        }
    }

    /// Event type trimmed and lower-cased.
    pub fn normalized_type(&self) -> String {
        normalize_key(&self.event_type)
    }

    /// Whether this event names `player` as either participant.
    pub fn involves_player(&self, player: &str) -> bool {
        names_match(&self.player, player)
            || self
                .player_2
                .as_deref()
                .is_some_and(|p2| names_match(p2, player))
    }

    /// Whether the eventing team is `team`.
    pub fn is_team(&self, team: &str) -> bool {
        names_match(&self.team, team)
    }

    /// A coordinate pair with exactly one half present.
    pub fn has_partial_coordinates(&self) -> bool {
        self.x_coordinate.is_some() != self.y_coordinate.is_some()
            || self.x_coordinate_2.is_some() != self.y_coordinate_2.is_some()
    }

    /// Non-empty detail fields in order.
    pub fn details(&self) -> Vec<&str> {
        [&self.detail_1, &self.detail_2, &self.detail_3, &self.detail_4]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect()
    }
}

/// Trimmed, lower-cased comparison key for names and event types.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive, whitespace-trimmed name comparison.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Parse events from a JSON array.
pub fn parse_events(json: &str) -> Result<Vec<GameEvent>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Distinct event types (lower-cased), sorted.
pub fn event_types(events: &[GameEvent]) -> Vec<String> {
    let mut types: Vec<String> = events
        .iter()
        .map(GameEvent::normalized_type)
        .filter(|t| !t.is_empty())
        .collect();
    types.sort();
    types.dedup();
    types
}

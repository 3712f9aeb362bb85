//! Game identity and roster types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::{names_match, normalize_key, GameEvent};

/// A game as listed by the data-fetch collaborator. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub game_date: String,
    pub home_team: String,
    pub away_team: String,
}

/// Which side of a game a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl Game {
    pub fn new(
        id: u64,
        game_date: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id,
            game_date: game_date.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
        }
    }

    /// Derive a game identity from one of its event rows.
    pub fn from_event(id: u64, event: &GameEvent) -> Self {
        Self::new(
            id,
            event.game_date.clone(),
            event.home_team.clone(),
            event.away_team.clone(),
        )
    }

    /// Side a team name played on, compared case-insensitively.
    pub fn side_of(&self, team: &str) -> Option<TeamSide> {
        if names_match(&self.home_team, team) {
            Some(TeamSide::Home)
        } else if names_match(&self.away_team, team) {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    /// Whether an event row belongs to this game.
    pub fn owns(&self, event: &GameEvent) -> bool {
        names_match(&self.game_date, &event.game_date)
            && names_match(&self.home_team, &event.home_team)
            && names_match(&self.away_team, &event.away_team)
    }

    /// Short `AWAY @ HOME` title.
    pub fn title(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }
}

/// Parse games from a JSON array.
pub fn parse_games(json: &str) -> Result<Vec<Game>, serde_json::Error> {
    serde_json::from_str(json)
}

/// A player roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub number: Option<u32>,
}

/// Jersey-number lookup keyed by normalised player name.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    numbers: HashMap<String, Option<u32>>,
}

impl Roster {
    pub fn new(players: &[PlayerInfo]) -> Self {
        let numbers = players
            .iter()
            .map(|p| (normalize_key(&p.name), p.number))
            .collect();
        Self { numbers }
    }

    /// Jersey number for a player, if known.
    pub fn number_for(&self, player: &str) -> Option<u32> {
        self.numbers.get(&normalize_key(player)).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Parse a roster from a JSON array.
pub fn parse_roster(json: &str) -> Result<Vec<PlayerInfo>, serde_json::Error> {
    serde_json::from_str(json)
}

//! Filter selections.
//!
//! A [`FilterSelection`] is plain data: the rules that keep it consistent
//! (team changes reset the player) live with the filter state that owns it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::taxonomy::EventTypeGroup;

/// Either "all" or one specific value. Serialized as the string `"all"` or
/// the value's own string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T> Selector<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn as_only(&self) -> Option<&T> {
        match self {
            Selector::All => None,
            Selector::Only(value) => Some(value),
        }
    }
}

impl Selector<String> {
    /// Selector from a raw option value; blank or `"all"` selects everything.
    pub fn from_choice(choice: &str) -> Self {
        let trimmed = choice.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Selector::All
        } else {
            Selector::Only(trimmed.to_string())
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Selector::All);
        }
        trimmed
            .parse()
            .map(Selector::Only)
            .map_err(serde::de::Error::custom)
    }
}

/// Current team/player/event-group selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub team: Selector<String>,
    #[serde(default)]
    pub player: Selector<String>,
    #[serde(default)]
    pub event_type_group: Selector<EventTypeGroup>,
}

impl FilterSelection {
    /// Whether nothing is filtered.
    pub fn is_unfiltered(&self) -> bool {
        self.team.is_all() && self.player.is_all() && self.event_type_group.is_all()
    }
}

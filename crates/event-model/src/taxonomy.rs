//! Event-type taxonomy and colouring.
//!
//! Feed event types are free text. For filtering they are grouped into a
//! fixed taxonomy; anything not listed lands in [`EventTypeGroup::Other`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::normalize_key;

/// Fixed grouping of event types used for filtering and legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventTypeGroup {
    Scoring,
    Possession,
    FaceOff,
    Penalty,
    GeneralPlay,
    Dump,
    Other,
}

impl EventTypeGroup {
    /// Every group, in legend order.
    pub const ALL: [EventTypeGroup; 7] = [
        EventTypeGroup::Scoring,
        EventTypeGroup::Possession,
        EventTypeGroup::FaceOff,
        EventTypeGroup::Penalty,
        EventTypeGroup::GeneralPlay,
        EventTypeGroup::Dump,
        EventTypeGroup::Other,
    ];

    /// Lower-cased event types that belong to this group.
    ///
    /// `Other` has no fixed members; it is the complement of the rest.
    pub fn members(self) -> &'static [&'static str] {
        match self {
            EventTypeGroup::Scoring => &["goal", "shot"],
            EventTypeGroup::Possession => &["puck recovery", "takeaway", "zone entry"],
            EventTypeGroup::FaceOff => &["faceoff win"],
            EventTypeGroup::Penalty => &["penalty taken"],
            EventTypeGroup::GeneralPlay => &["play", "incomplete play"],
            EventTypeGroup::Dump => &["dump in/out"],
            EventTypeGroup::Other => &[],
        }
    }

    /// Group a free-text event type belongs to.
    pub fn classify(event_type: &str) -> Self {
        let key = normalize_key(event_type);
        Self::ALL
            .into_iter()
            .find(|group| group.members().contains(&key.as_str()))
            .unwrap_or(EventTypeGroup::Other)
    }

    /// Whether a free-text event type falls in this group.
    pub fn contains(self, event_type: &str) -> bool {
        Self::classify(event_type) == self
    }

    /// Stable identifier (matches the serde name).
    pub fn id(self) -> &'static str {
        match self {
            EventTypeGroup::Scoring => "scoring",
            EventTypeGroup::Possession => "possession",
            EventTypeGroup::FaceOff => "face-off",
            EventTypeGroup::Penalty => "penalty",
            EventTypeGroup::GeneralPlay => "general-play",
            EventTypeGroup::Dump => "dump",
            EventTypeGroup::Other => "other",
        }
    }

    /// Human-readable legend label.
    pub fn label(self) -> &'static str {
        match self {
            EventTypeGroup::Scoring => "Scoring Events",
            EventTypeGroup::Possession => "Possession Events",
            EventTypeGroup::FaceOff => "Face-off Events",
            EventTypeGroup::Penalty => "Penalties",
            EventTypeGroup::GeneralPlay => "General Play",
            EventTypeGroup::Dump => "Dump Events",
            EventTypeGroup::Other => "Other Events",
        }
    }
}

impl std::fmt::Display for EventTypeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for EventTypeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|group| group.id() == key)
            .ok_or_else(|| format!("unknown event type group {s:?}"))
    }
}

/// Fixed colour palette cycled over sorted event types.
pub const EVENT_PALETTE: [&str; 12] = [
    "#3b82f6", "#10b981", "#ef4444", "#f59e0b", "#a855f7", "#ec4899", "#14b8a6", "#f97316",
    "#6366f1", "#22c55e", "#e11d48", "#0ea5e9",
];

/// Colour used for event types missing from the map.
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Deterministic event-type to colour mapping.
///
/// The same vocabulary always yields the same colours, independent of the
/// order the types were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventColorMap {
    colors: BTreeMap<String, &'static str>,
}

impl EventColorMap {
    pub fn from_types<I, S>(event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys: Vec<String> = event_types
            .into_iter()
            .map(|t| normalize_key(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        keys.sort();
        keys.dedup();

        let colors = keys
            .into_iter()
            .enumerate()
            .map(|(idx, key)| (key, EVENT_PALETTE[idx % EVENT_PALETTE.len()]))
            .collect();
        Self { colors }
    }

    /// Colour for an event type, or the fallback colour.
    pub fn color_for(&self, event_type: &str) -> &'static str {
        self.colors
            .get(&normalize_key(event_type))
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Legend entries in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

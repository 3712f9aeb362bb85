//! Export payload written on explicit user request.
//!
//! The payload pairs the selected game's identity with its event list
//! (optionally already filtered) in a single JSON document.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::GameEvent;
use crate::game::Game;
use crate::selection::FilterSelection;

/// Schema version of the export document.
pub const EXPORT_SCHEMA_VERSION: &str = "1.0";

/// A JSON-serializable snapshot of one game's events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub version: String,

    pub game: Game,

    /// When the export was produced.
    pub exported_at: DateTime<Utc>,

    /// Scrub position (absolute game seconds) at export time.
    pub current_time: u32,

    /// Filter that produced `events`; all-"all" when unfiltered.
    pub filter: FilterSelection,

    pub event_count: usize,

    pub events: Vec<GameEvent>,
}

impl ExportPayload {
    /// Build a payload stamped with the current time.
    pub fn new(
        game: Game,
        events: Vec<GameEvent>,
        filter: FilterSelection,
        current_time: u32,
    ) -> Self {
        Self::new_at(game, events, filter, current_time, Utc::now())
    }

    /// Build a payload with an explicit timestamp.
    pub fn new_at(
        game: Game,
        events: Vec<GameEvent>,
        filter: FilterSelection,
        current_time: u32,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: EXPORT_SCHEMA_VERSION.to_string(),
            game,
            exported_at,
            current_time,
            filter,
            event_count: events.len(),
            events,
        }
    }

    /// Suggested file name: `rinkview-{home}-vs-{away}-{YYYY-MM-DD}.json`.
    pub fn file_name(&self) -> String {
        format!(
            "rinkview-{}-vs-{}-{}.json",
            slug(&self.game.home_team),
            slug(&self.game.away_team),
            self.exported_at.format("%Y-%m-%d")
        )
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialize { source: e })
    }

    /// Write the payload into `dir` under [`Self::file_name`].
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| ExportError::IoError {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = dir.join(self.file_name());
        self.write_file(&path)?;
        Ok(path)
    }

    /// Write the payload to an exact file path.
    pub fn write_file(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| ExportError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn slug(name: &str) -> String {
    let joined = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if joined.is_empty() {
        "team".to_string()
    } else {
        joined
    }
}

/// Errors that can occur when writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize export: {source}")]
    Serialize { source: serde_json::Error },
}

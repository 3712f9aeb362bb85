//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Timeline query tolerances.
    pub timeline: TimelineConfig,

    /// Playback timer settings.
    pub playback: PlaybackConfig,

    /// Heatmap overlay settings.
    pub density: DensityConfig,

    /// Rink rendering settings.
    pub view: ViewConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "rinkview=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

/// Tolerances for time-based event queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Half-width of the "live marker" window around the scrub position.
    pub active_epsilon_secs: f64,

    /// Half-width of the window searched for the selected event.
    pub nearest_window_secs: f64,

    /// Timeline length used when no events survive filtering.
    pub empty_max_time_secs: u32,
}

/// Playback timer settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Wall-clock interval between ticks.
    pub tick_interval_ms: u64,

    /// Game seconds advanced per tick.
    pub secs_per_tick: u32,
}

/// Radius/opacity interpolation bounds for one overlay kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityStyle {
    pub radius_min: f64,
    pub radius_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
}

/// Heatmap overlay settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    /// Decimal places kept when bucketing coordinates.
    pub precision: u32,

    pub shot: DensityStyle,
    pub goal: DensityStyle,
    pub event: DensityStyle,
}

/// Which frame event coordinates are normalised into before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Home team always attacks toward the left; away-recorded points flip.
    #[default]
    HomeLeft,
    /// Arena-fixed frame; every point flips.
    Absolute,
}

impl std::str::FromStr for Orientation {
    type Err = crate::error::RinkviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home-left" => Ok(Self::HomeLeft),
            "absolute" => Ok(Self::Absolute),
            other => Err(crate::error::RinkviewError::config(format!(
                "unknown orientation {other:?} (expected home-left or absolute)"
            ))),
        }
    }
}

/// Rink rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub orientation: Orientation,

    /// Fraction of the container the rink may occupy along its limiting axis.
    pub fill_ratio: f64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            active_epsilon_secs: 1.0,
            nearest_window_secs: 3.0,
            empty_max_time_secs: 60,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            secs_per_tick: 1,
        }
    }
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            precision: 1,
            shot: DensityStyle {
                radius_min: 4.0,
                radius_max: 14.0,
                opacity_min: 0.25,
                opacity_max: 0.8,
            },
            goal: DensityStyle {
                radius_min: 6.0,
                radius_max: 18.0,
                opacity_min: 0.4,
                opacity_max: 0.9,
            },
            event: DensityStyle {
                radius_min: 3.0,
                radius_max: 10.0,
                opacity_min: 0.1,
                opacity_max: 0.6,
            },
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::HomeLeft,
            fill_ratio: 0.9,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            return Self::load_from(&config_path);
        }
        Self::default()
    }

    /// Load config from an explicit file, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse config at {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("rinkview").join("config.json")
}

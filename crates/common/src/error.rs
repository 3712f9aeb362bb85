//! Error types shared across Rinkview crates.

use std::path::PathBuf;

/// Top-level error type for Rinkview operations.
#[derive(Debug, thiserror::Error)]
pub enum RinkviewError {
    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Data error: {message}")]
    Data { message: String },

    #[error("Playback error: {message}")]
    Playback { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Clock(#[from] ClockParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using RinkviewError.
pub type RinkviewResult<T> = Result<T, RinkviewError>;

impl RinkviewError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
        }
    }

    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback {
            message: msg.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

/// A game-clock string that could not be read as `MM:SS`.
///
/// Always recoverable: callers drop the offending event from time-based
/// views and keep going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockParseError {
    #[error("clock {clock:?} is not in MM:SS form")]
    Malformed { clock: String },

    #[error("clock {clock:?} has a non-numeric field")]
    NonNumeric { clock: String },

    #[error("clock {clock:?} has seconds outside 0..60")]
    SecondsOutOfRange { clock: String },

    #[error("clock {clock:?} exceeds the period length of {period_secs}s")]
    ExceedsPeriod { clock: String, period_secs: u32 },

    #[error("period {period} is invalid; periods start at 1")]
    InvalidPeriod { period: u32 },
}

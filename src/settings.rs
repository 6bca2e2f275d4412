//! Game settings and tuning
//!
//! Read from `sky-typer.json` in the working directory when present.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "sky-typer.json";

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Motion ===
    /// Word scroll speed (rows per second)
    pub word_speed: i32,
    /// Bee flight speed (columns per second)
    pub bee_speed: i32,
    /// Whether the bee flies at all
    pub bee_enabled: bool,

    // === Effects ===
    /// Seconds per explosion animation frame
    pub explosion_interval: f32,

    // === Text schedule ===
    /// Minimum seconds between two lines
    pub spawn_gap_min: f32,
    /// Random extra seconds between two lines, uniform in [0, var)
    pub spawn_gap_var: f32,
    /// Column of the first word relative to the screen centre
    pub text_start_offset: i32,
    /// Per-line horizontal jitter (± columns)
    pub column_jitter: i32,

    // === Host ===
    /// Frame period in milliseconds
    pub frame_millis: u64,
    /// RNG seed (random when unset)
    pub seed: Option<u64>,
    /// Text to type, one line per row of words
    pub text_path: PathBuf,
    /// Optional background art; the built-in sky is used when unset
    pub background_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_speed: WORD_SPEED,
            bee_speed: BEE_SPEED,
            bee_enabled: true,

            explosion_interval: EXPLOSION_INTERVAL,

            spawn_gap_min: SPAWN_GAP_MIN,
            spawn_gap_var: SPAWN_GAP_VAR,
            text_start_offset: TEXT_START_OFFSET,
            column_jitter: COLUMN_JITTER,

            frame_millis: FRAME_MILLIS,
            seed: None,
            text_path: PathBuf::from("injust.txt"),
            background_path: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string; missing fields take defaults.
    /// Values that would stall the game are rejected.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(settings)
    }

    /// Check that every speed and interval keeps the game moving
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.word_speed <= 0 {
            return Err(format!("word_speed must be positive, got {}", self.word_speed));
        }
        if self.bee_speed <= 0 {
            return Err(format!("bee_speed must be positive, got {}", self.bee_speed));
        }
        if self.explosion_interval <= 0.0 {
            return Err(format!(
                "explosion_interval must be positive, got {}",
                self.explosion_interval
            ));
        }
        if self.spawn_gap_min < 0.0 || self.spawn_gap_var < 0.0 {
            return Err(format!(
                "spawn gaps must not be negative, got {} + {}",
                self.spawn_gap_min, self.spawn_gap_var
            ));
        }
        Ok(())
    }

    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GameError::SettingsRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = Self::from_json(&json).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Frame period as a `Duration`
    pub fn frame_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_millis)
    }
}

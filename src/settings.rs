//! Runtime settings
//!
//! Loaded from an optional JSON file; every field falls back to its default
//! when missing. Command-line flags are applied on top in `main`.

use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::InputMode;
use crate::surface::Palette;

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "bounce-square.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Initial window size in pixels
    pub window_width: u32,
    pub window_height: u32,

    /// Side length of the square
    pub rect_size: i32,
    /// Initial per-axis speed range, inclusive
    pub min_speed: i32,
    pub max_speed: i32,

    /// Sleep between frames while idle
    pub limit_idle_fps: bool,
    pub idle_frame_delay_ms: u64,
    /// Lock presentation to the display refresh rate
    pub vsync: bool,

    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,

    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Bounce Square".to_string(),
            window_width: SCREEN_WIDTH,
            window_height: SCREEN_HEIGHT,
            rect_size: RECT_SIZE,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            limit_idle_fps: true,
            idle_frame_delay_ms: IDLE_FRAME_DELAY_MS,
            vsync: true,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load settings from `path`.
    ///
    /// A missing file gives the defaults. An unreadable or malformed file is
    /// logged and also gives the defaults.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Couldn't read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&text) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Clamp values into ranges the loop can work with
    pub fn sanitized(mut self) -> Self {
        self.window_width = self.window_width.clamp(1, WINDOW_SIZE_LIMIT);
        self.window_height = self.window_height.clamp(1, WINDOW_SIZE_LIMIT);
        self.rect_size = self.rect_size.clamp(1, RECT_SIZE_LIMIT);
        self.min_speed = self.min_speed.clamp(1, SPEED_LIMIT);
        self.max_speed = self.max_speed.clamp(self.min_speed, SPEED_LIMIT);
        self
    }

    /// Initial speed range for each axis
    pub fn speed_range(&self) -> RangeInclusive<i32> {
        self.min_speed..=self.max_speed
    }

    /// How long to wait before the next frame in `mode`, if at all
    pub fn frame_delay(&self, mode: InputMode) -> Option<Duration> {
        match mode {
            InputMode::Idle if self.limit_idle_fps && self.idle_frame_delay_ms > 0 => {
                Some(Duration::from_millis(self.idle_frame_delay_ms))
            }
            _ => None,
        }
    }
}

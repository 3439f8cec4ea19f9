//! Game settings and preferences
//!
//! Read from a JSON file named by `BRICK_JUNIOR_SETTINGS`. Settings only change what gets
//! drawn and how fast ticks are paced; the simulation ignores them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Screen shake on paddle and brick hits
    pub screen_shake: bool,
    /// Ball trail
    pub trails: bool,
    /// Brick-break particles
    pub particles: bool,
    /// Floating score/pickup text
    pub floating_text: bool,

    // === HUD ===
    /// Show the tick counter in the corner
    pub show_ticks: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,

    // === Pacing ===
    /// Ticks per second
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Visual effects - all on by default
            screen_shake: true,
            trails: true,
            particles: true,
            floating_text: true,

            // HUD
            show_ticks: false,

            // Accessibility
            reduced_motion: false,

            tick_rate: TICK_RATE,
        }
    }
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const PATH_ENV: &'static str = "BRICK_JUNIOR_SETTINGS";

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Duration of one tick; zero disables pacing
    pub fn tick_duration(&self) -> Duration {
        if self.tick_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / self.tick_rate
        }
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(std::io::Error::other)
    }

    /// Load from `BRICK_JUNIOR_SETTINGS` if set, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let path = Path::new(&path);
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Could not load settings from {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

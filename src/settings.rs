//! Runtime configuration
//!
//! Read from JSON: a file given on the command line natively, or the canvas'
//! `data-settings` attribute in the browser. Never written back.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ENEMIES, MAX_ENEMIES};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of enemy lanes in use (1..=MAX_ENEMIES)
    pub enemy_count: usize,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Log filter: "off", "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
    /// Frames simulated by the native headless run
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enemy_count: DEFAULT_ENEMIES,
            seed: None,
            log_level: "info".to_string(),
            demo_frames: 600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Parse `json` if present, falling back to defaults on error
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values
    pub fn validated(mut self) -> Self {
        let clamped = self.enemy_count.clamp(1, MAX_ENEMIES);
        if clamped != self.enemy_count {
            log::warn!(
                "enemy_count {} out of range, using {}",
                self.enemy_count,
                clamped
            );
            self.enemy_count = clamped;
        }
        self
    }

    /// Log filter, defaulting to `Info` when unrecognized
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Configured seed, or `fallback` (usually the clock)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.enemy_count, 3);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{"seed": 17}"#).unwrap();
        assert_eq!(settings.seed, Some(17));
        assert_eq!(settings.enemy_count, 3);
        assert_eq!(settings.seed_or(1), 17);
    }

    #[test]
    fn test_enemy_count_clamped() {
        let settings = Settings::from_json(r#"{"enemy_count": 9}"#).unwrap();
        assert_eq!(settings.enemy_count, MAX_ENEMIES);
        let settings = Settings::from_json(r#"{"enemy_count": 0}"#).unwrap();
        assert_eq!(settings.enemy_count, 1);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(Settings::from_json("{not json").is_err());
        assert_eq!(Settings::load_or_default(Some("{not json")), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }

    #[test]
    fn test_level_filter() {
        let settings = Settings {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.level_filter(), log::LevelFilter::Debug);

        let settings = Settings {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.level_filter(), log::LevelFilter::Info);
    }
}

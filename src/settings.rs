//! Persistent settings for the portfolio app.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::viewport::DEFAULT_OVERSCAN;

/// All persistable UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Dark theme on by default.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    /// Disable typing, fades and backdrop drift.
    #[serde(default)]
    pub reduced_motion: bool,

    /// Extra rows rendered around windowed lists.
    #[serde(default = "default_overscan")]
    pub overscan: usize,

    /// Bottom performance panel visibility.
    #[serde(default)]
    pub show_perf_panel: bool,
}

fn default_dark_mode() -> bool {
    true
}

fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduced_motion: false,
            overscan: DEFAULT_OVERSCAN,
            show_perf_panel: false,
        }
    }
}

impl Settings {
    /// Get the path to the settings file
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("portfolio-native");
            p.push("settings.json");
            p
        })
    }

    /// Load settings from disk, returning defaults if file doesn't exist or is invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            eprintln!("Could not determine config directory, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist yet, that's fine
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            eprintln!("Could not determine config directory, settings not saved");
            return;
        };

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    eprintln!("Failed to write settings file: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Failed to serialize settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_dark_mode() {
        let settings = Settings::default();
        assert!(settings.dark_mode);
        assert!(!settings.reduced_motion);
        assert_eq!(settings.overscan, DEFAULT_OVERSCAN);
        assert!(!settings.show_perf_panel);
    }

    #[test]
    fn roundtrips_through_json() {
        let settings = Settings {
            dark_mode: false,
            reduced_motion: true,
            overscan: 9,
            show_perf_panel: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dark_mode, settings.dark_mode);
        assert_eq!(back.reduced_motion, settings.reduced_motion);
        assert_eq!(back.overscan, settings.overscan);
        assert_eq!(back.show_perf_panel, settings.show_perf_panel);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.overscan, DEFAULT_OVERSCAN);
    }
}

//! Game settings
//!
//! Persisted in LocalStorage on the web; read from a JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, PADDLE_SPEED};
use crate::error::{GameError, Result};
use crate::sim::Arena;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield size in pixels
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Paddle pixels per frame
    pub paddle_speed: f32,
    /// Let the demo pilot steer the paddle
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Playfield described by these settings
    pub fn arena(&self) -> Arena {
        Arena {
            width: self.canvas_width,
            height: self.canvas_height,
        }
    }

    /// Reject sizes and speeds the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "canvas must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.paddle_speed > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "paddle speed must be positive, got {}",
                self.paddle_speed
            )));
        }
        Ok(())
    }

    /// Parse and validate settings JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize for storage
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "brickfall_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };

        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };

        match storage.set_item(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {:?}", e),
        }
    }

    /// Native builds have no stored settings; use `load_file` instead
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "autopilot": true }"#).unwrap();
        assert!(settings.autopilot);
        assert_eq!(settings.canvas_width, CANVAS_WIDTH);
        assert_eq!(settings.paddle_speed, PADDLE_SPEED);
    }

    #[test]
    fn test_rejects_bad_canvas() {
        let err = Settings::from_json(r#"{ "canvas_width": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ canvas_width: ").unwrap_err();
        assert!(matches!(err, GameError::SettingsFormat(_)));
    }

    #[test]
    fn test_saved_json_loads_back() {
        let settings = Settings {
            canvas_width: 640.0,
            canvas_height: 480.0,
            paddle_speed: 6.0,
            autopilot: true,
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains(r#""autopilot":true"#));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_arena_from_settings() {
        let arena = Settings::default().arena();
        assert_eq!(arena.width, CANVAS_WIDTH);
        assert_eq!(arena.height, CANVAS_HEIGHT);
    }
}

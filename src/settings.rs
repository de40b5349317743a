//! Display settings and preferences
//!
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

/// Display settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Colors ===
    /// HUD text, border, player and gauge
    pub hud_color: String,
    /// Bouncing obstacles
    pub obstacle_color: String,
    /// Patrolling obstacles and their thruster
    pub patrol_color: String,

    // === Text ===
    /// CSS font family for all text
    pub font_family: String,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Behavior ===
    /// Pause a running game when the window loses focus
    pub pause_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hud_color: "lime".to_string(),
            obstacle_color: "crimson".to_string(),
            patrol_color: "crimson".to_string(),
            font_family: "\"Kelly Slab\"".to_string(),
            show_fps: false,
            pause_on_blur: true,
        }
    }
}

impl Settings {
    /// CSS font shorthand at the given pixel size
    pub fn font(&self, size_px: u32) -> String {
        format!("{}px {}", size_px, self.font_family)
    }

    /// Parse stored JSON, falling back to defaults when malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "boost_dodge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
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

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save settings");
                } else {
                    log::info!("Settings saved");
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

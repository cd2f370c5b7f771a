//! Calculator preferences
//!
//! Read from LocalStorage on start-up. Only preferences live here; the
//! calculator state itself is never stored.

use serde::{Deserialize, Serialize};

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "Quiet",
            Verbosity::Normal => "Normal",
            Verbosity::Verbose => "Verbose",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quiet" | "off" => Some(Verbosity::Quiet),
            "normal" | "info" => Some(Verbosity::Normal),
            "verbose" | "debug" => Some(Verbosity::Verbose),
            _ => None,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Warn,
            Verbosity::Normal => log::LevelFilter::Info,
            Verbosity::Verbose => log::LevelFilter::Debug,
        }
    }

    /// Level for loggers that take a `log::Level` (console_log)
    pub fn level(&self) -> log::Level {
        match self {
            Verbosity::Quiet => log::Level::Warn,
            Verbosity::Normal => log::Level::Info,
            Verbosity::Verbose => log::Level::Debug,
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mirror the keypad on the keyboard
    pub keyboard_enabled: bool,
    /// Show key captions under AC / DEL
    pub show_key_hints: bool,
    pub verbosity: Verbosity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keyboard_enabled: true,
            show_key_hints: true,
            verbosity: Verbosity::Normal,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "keypad_calc_settings";

    /// Parse settings JSON, falling back to defaults for a bad payload
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                return Self::from_json(&json);
            }
        }

        Self::default()
    }

    /// Native: defaults, with verbosity overridable through `KEYPAD_CALC_VERBOSITY`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Some(v) = std::env::var("KEYPAD_CALC_VERBOSITY")
            .ok()
            .and_then(|v| Verbosity::from_str(&v))
        {
            settings.verbosity = v;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.keyboard_enabled);
        assert!(settings.show_key_hints);
        assert_eq!(settings.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"show_key_hints": false}"#);
        assert!(!settings.show_key_hints);
        assert!(settings.keyboard_enabled);
    }

    #[test]
    fn test_malformed_json_uses_defaults() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_verbosity_from_str() {
        assert_eq!(Verbosity::from_str("DEBUG"), Some(Verbosity::Verbose));
        assert_eq!(Verbosity::from_str("quiet"), Some(Verbosity::Quiet));
        assert_eq!(Verbosity::from_str("loud"), None);
        for v in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose] {
            assert_eq!(Verbosity::from_str(v.as_str()), Some(v));
        }
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Verbosity::Verbose.level_filter(), log::LevelFilter::Debug);
        assert_eq!(Verbosity::Quiet.level(), log::Level::Warn);
    }
}

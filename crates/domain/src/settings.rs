//! User settings persisted as a single document.

use serde::{Deserialize, Serialize};

/// User-facing toggles, stored as one JSON document by the settings
/// repository. Unknown or missing fields fall back to their defaults so a
/// document written by an older version still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play the adhan sound on notifications.
    pub sound_enabled: bool,
    /// Vibrate on notifications.
    pub vibration_enabled: bool,
    /// Prayer-time notifications on/off.
    pub notifications_enabled: bool,
    /// Dark color theme.
    pub dark_theme: bool,
    /// Ad display opt-in (persisted only; nothing in this service serves ads).
    pub ads_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            vibration_enabled: true,
            notifications_enabled: true,
            dark_theme: true,
            ads_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_all_toggles_on() {
        let settings = Settings::default();
        assert!(settings.sound_enabled);
        assert!(settings.vibration_enabled);
        assert!(settings.notifications_enabled);
        assert!(settings.dark_theme);
        assert!(settings.ads_enabled);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let settings = Settings {
            dark_theme: false,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let parsed: Settings = serde_json::from_str(r#"{"sound_enabled":false}"#).unwrap();
        assert!(!parsed.sound_enabled);
        assert!(parsed.dark_theme);
    }
}

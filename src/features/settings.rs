//! Demo settings persistence
//!
//! Handles saving and loading the gallery's preferences: theme, animation
//! switch, the demo step list, the style of every stepper and key bindings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use crate::stepper::{IndicatorShape, StepperError, StepperStyle, Steps};

/// Demo settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub demo: DemoSettings,
    pub styles: StyleSettings,
    pub keybindings: KeyBindings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// When off every transition snaps to its end state
    pub animations: bool,
}

/// Steps shown by every stepper of the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub titles: Vec<String>,
    /// Either empty or one per title
    pub descriptions: Vec<String>,
    /// Step selected at startup; out-of-range values are clamped
    pub start_step: usize,
}

/// Style of each stepper in the gallery.
/// Fields left out of a stored style keep that stepper's own preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    #[serde(deserialize_with = "preset::shaped")]
    pub shaped: StepperStyle,
    #[serde(deserialize_with = "preset::simple")]
    pub simple: StepperStyle,
    #[serde(deserialize_with = "preset::simple_vertical")]
    pub simple_vertical: StepperStyle,
    #[serde(deserialize_with = "preset::animated")]
    pub animated: StepperStyle,
    #[serde(deserialize_with = "preset::card")]
    pub card: StepperStyle,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            animations: true,
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            titles: vec![
                "Pending".to_string(),
                "In Progress".to_string(),
                "Successful".to_string(),
            ],
            descriptions: vec![
                "Your order has been received".to_string(),
                "We are preparing your order".to_string(),
                "Your order is on its way".to_string(),
            ],
            start_step: 0,
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            shaped: StepperStyle::shaped().with_shape(IndicatorShape::Rounded { radius: 8.0 }),
            simple: StepperStyle::simple(),
            simple_vertical: StepperStyle::simple_vertical(),
            animated: StepperStyle::animated(),
            card: StepperStyle::card(),
        }
    }
}

impl DemoSettings {
    /// Numbered steps with their descriptions
    pub fn steps(&self) -> Result<Steps, StepperError> {
        let steps = Steps::from_titles(self.titles.iter().cloned());
        if self.descriptions.is_empty() {
            Ok(steps)
        } else {
            steps.with_descriptions(self.descriptions.iter().cloned())
        }
    }
}

impl StyleSettings {
    /// Check every style, naming the first invalid one
    pub fn validate(&self) -> Result<(), StepperError> {
        for (name, style) in [
            ("shaped", &self.shaped),
            ("simple", &self.simple),
            ("simple_vertical", &self.simple_vertical),
            ("animated", &self.animated),
            ("card", &self.card),
        ] {
            style.validate().map_err(|e| match e {
                StepperError::InvalidStyle { field, reason } => StepperError::InvalidStyle {
                    field,
                    reason: format!("{} style: {}", name, reason),
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Deserializers laying a partial style over a preset
mod preset {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    use super::StyleSettings;
    use crate::stepper::StepperStyle;

    fn overlay<'de, D: Deserializer<'de>>(
        base: StepperStyle,
        deserializer: D,
    ) -> Result<StepperStyle, D::Error> {
        let Value::Object(fields) = Value::deserialize(deserializer)? else {
            return Err(D::Error::custom("style must be an object"));
        };
        let mut merged = serde_json::to_value(&base).map_err(D::Error::custom)?;
        if let Value::Object(target) = &mut merged {
            target.extend(fields);
        }
        serde_json::from_value(merged).map_err(D::Error::custom)
    }

    pub fn shaped<'de, D: Deserializer<'de>>(d: D) -> Result<StepperStyle, D::Error> {
        overlay(StyleSettings::default().shaped, d)
    }

    pub fn simple<'de, D: Deserializer<'de>>(d: D) -> Result<StepperStyle, D::Error> {
        overlay(StyleSettings::default().simple, d)
    }

    pub fn simple_vertical<'de, D: Deserializer<'de>>(d: D) -> Result<StepperStyle, D::Error> {
        overlay(StyleSettings::default().simple_vertical, d)
    }

    pub fn animated<'de, D: Deserializer<'de>>(d: D) -> Result<StepperStyle, D::Error> {
        overlay(StyleSettings::default().animated, d)
    }

    pub fn card<'de, D: Deserializer<'de>>(d: D) -> Result<StepperStyle, D::Error> {
        overlay(StyleSettings::default().card, d)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stepmotion", "StepMotion")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("No config directory, using default settings");
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::debug!("No settings at {:?} ({}), using defaults", path, e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse and validate settings JSON
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings
            .styles
            .validate()
            .map_err(|e| SettingsError::Invalid(e.to_string()))?;
        Ok(settings)
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
    /// Parsed, but a style failed validation
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
            SettingsError::Invalid(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("stepmotion-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.styles.validate().is_ok());
        assert_eq!(settings.demo.steps().unwrap().len(), 3);
        assert!(settings.display.animations);
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = temp_path("round_trip.json");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.demo.start_step = 2;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "display": { "dark_mode": true } }"#).unwrap();
        assert!(settings.display.dark_mode);
        assert!(settings.display.animations);
        assert_eq!(settings.demo, DemoSettings::default());
        assert_eq!(settings.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_invalid_style_rejected() {
        let json = r#"{ "styles": { "card": { "circle_size": -4.0 } } }"#;
        match Settings::from_json(json) {
            Err(SettingsError::Invalid(message)) => assert!(message.contains("card")),
            other => panic!("expected invalid settings, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_style_keeps_its_preset() {
        let settings =
            Settings::from_json(r#"{ "styles": { "card": { "circle_size": 48.0 } } }"#).unwrap();
        assert_eq!(
            settings.styles.card,
            StepperStyle {
                circle_size: 48.0,
                ..StepperStyle::card()
            }
        );
        assert!(!settings.styles.card.pulse);
        assert_eq!(settings.styles.shaped, StyleSettings::default().shaped);

        let settings =
            Settings::from_json(r##"{ "styles": { "shaped": { "active_color": "#ff0000" } } }"##)
                .unwrap();
        assert_eq!(
            settings.styles.shaped.shape,
            IndicatorShape::Rounded { radius: 8.0 }
        );
        assert_eq!(settings.styles.shaped.active_color.into_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_style_must_be_an_object() {
        assert!(matches!(
            Settings::from_json(r#"{ "styles": { "simple": 3 } }"#),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from_file(&temp_path("does_not_exist.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_mismatched_descriptions() {
        let demo = DemoSettings {
            titles: vec!["A".into(), "B".into()],
            descriptions: vec!["only one".into()],
            start_step: 0,
        };
        assert!(matches!(
            demo.steps(),
            Err(StepperError::LengthMismatch { .. })
        ));

        let without = DemoSettings {
            descriptions: Vec::new(),
            ..demo
        };
        assert_eq!(without.steps().unwrap().len(), 2);
    }
}

//! Configuration handling for the contact form TUI

use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// User configuration: optional overrides for colors and poll cadence
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Accent color for the focused field border
    pub accent_color: Option<String>,
    /// Color for soft hints (character counter below the minimum)
    pub warning_color: Option<String>,
    /// Color for errors and the over-limit counter
    pub alert_color: Option<String>,
    /// Event poll interval in milliseconds
    pub poll_interval_ms: Option<u64>,
}

/// A color name in the config file that is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color name: {0}")]
pub struct ParseColorError(pub String);

/// Parse a config color name into a terminal color
pub fn parse_color(name: &str) -> Result<Color, ParseColorError> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        other => Err(ParseColorError(other.to_string())),
    }
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "centy", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Focused-field border color (cyan unless overridden)
    pub fn accent(&self) -> Color {
        self.color_or(&self.accent_color, Color::Cyan)
    }

    /// Warning color (yellow unless overridden)
    pub fn warning(&self) -> Color {
        self.color_or(&self.warning_color, Color::Yellow)
    }

    /// Alert color (red unless overridden)
    pub fn alert(&self) -> Color {
        self.color_or(&self.alert_color, Color::Red)
    }

    fn color_or(&self, name: &Option<String>, default: Color) -> Color {
        name.as_deref()
            .and_then(|n| parse_color(n).ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ContactConfig::default();
        assert!(config.accent_color.is_none());
        assert!(config.warning_color.is_none());
        assert!(config.alert_color.is_none());
        assert!(config.poll_interval_ms.is_none());
    }

    #[test]
    fn test_default_palette() {
        let config = ContactConfig::default();
        assert_eq!(config.accent(), Color::Cyan);
        assert_eq!(config.warning(), Color::Yellow);
        assert_eq!(config.alert(), Color::Red);
    }

    #[test]
    fn test_overridden_palette() {
        let config = ContactConfig {
            warning_color: Some("magenta".to_string()),
            alert_color: Some("white".to_string()),
            ..Default::default()
        };
        assert_eq!(config.warning(), Color::Magenta);
        assert_eq!(config.alert(), Color::White);
    }

    #[test]
    fn test_unknown_color_falls_back_to_default() {
        let config = ContactConfig {
            alert_color: Some("vermilion".to_string()),
            ..Default::default()
        };
        assert_eq!(config.alert(), Color::Red);
    }

    #[test]
    fn test_parse_color_is_case_insensitive() {
        assert_eq!(parse_color("RED"), Ok(Color::Red));
        assert_eq!(parse_color("DarkGray"), Ok(Color::DarkGray));
    }

    #[test]
    fn test_parse_color_unknown_errors() {
        assert_eq!(
            parse_color("vermilion"),
            Err(ParseColorError("vermilion".to_string()))
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = ContactConfig {
            accent_color: Some("cyan".to_string()),
            warning_color: Some("yellow".to_string()),
            alert_color: Some("red".to_string()),
            poll_interval_ms: Some(50),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ContactConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.accent_color, Some("cyan".to_string()));
        assert_eq!(parsed.warning_color, Some("yellow".to_string()));
        assert_eq!(parsed.alert_color, Some("red".to_string()));
        assert_eq!(parsed.poll_interval_ms, Some(50));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ContactConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.accent_color.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"alert_color": "red", "unknown_field": "value"}"#;
        let parsed: ContactConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.alert_color, Some("red".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = ContactConfig::load();
        assert!(result.is_ok());
    }
}

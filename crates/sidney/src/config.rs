#![forbid(unsafe_code)]

//! Application configuration loaded at startup.
//!
//! ```toml
//! # sidney.toml
//! [gui]
//! tool_tip_delay_ms = 750
//! font_size = 18.0
//!
//! [history]
//! max_size = 500
//! ```
//!
//! ```rust,ignore
//! let config = SidneyConfig::from_toml_file("sidney.toml")?;
//! let config = SidneyConfig::from_json_str(json)?;
//! ```
//!
//! Missing sections and keys keep their defaults, so a partial file only
//! overrides what it names.

#[cfg(feature = "config-file")]
use std::path::Path;

use sidney_runtime::HistoryConfig;
use sidney_widgets::GuiConfig;

/// Everything tunable about a Sidney application.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "config-file", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct SidneyConfig {
    /// Widget tree and surface settings.
    pub gui: GuiConfig,
    /// Undo/redo settings.
    pub history: HistoryConfig,
}

impl SidneyConfig {
    #[must_use]
    pub fn with_gui(mut self, gui: GuiConfig) -> Self {
        self.gui = gui;
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(message = "config.load", path = %path.as_ref().display(), format = "toml");
        Ok(config)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(message = "config.load", path = %path.as_ref().display(), format = "json");
        Ok(config)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config-file")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::TomlSerialize)
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-file")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config-file")]
    TomlSerialize(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config-file")]
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-file")]
            Self::TomlSerialize(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::TomlSerialize(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Json(e) => Some(e),
        }
    }
}

#[cfg(all(test, feature = "config-file"))]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SidneyConfig::from_toml_str(
            r#"
            [gui]
            tool_tip_delay_ms = 750

            [history]
            max_size = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.gui.tool_tip_delay_ms, 750);
        assert_eq!(config.gui.font_size, 15.0);
        assert_eq!(config.history.max_size, 10);
    }

    #[test]
    fn empty_documents_are_default() {
        assert_eq!(SidneyConfig::from_toml_str("").unwrap(), SidneyConfig::default());
        assert_eq!(SidneyConfig::from_json_str("{}").unwrap(), SidneyConfig::default());
    }

    #[test]
    fn json_sections_parse() {
        let config =
            SidneyConfig::from_json_str(r#"{"gui": {"debug_layout": true}}"#).unwrap();
        assert!(config.gui.debug_layout);
        assert_eq!(config.history, HistoryConfig::default());
    }

    #[test]
    fn toml_round_trips() {
        let config = SidneyConfig::default()
            .with_history(HistoryConfig::new(42))
            .with_gui(GuiConfig::default().with_caret_period_ms(300));
        let text = config.to_toml_string().unwrap();
        assert_eq!(SidneyConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn malformed_input_reports_format() {
        let err = SidneyConfig::from_toml_str("[gui").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().starts_with("TOML parse error"));

        let err = SidneyConfig::from_json_str("{\"history\": {\"max_size\": -1}}").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SidneyConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

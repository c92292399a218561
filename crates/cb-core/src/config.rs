//! Configuration management for comment-box

use crate::error::{CommentBoxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommentBoxError::Io(e).with_context(format!("Failed to read {}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| CommentBoxError::Toml(e.to_string()))
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Message shown by the alert box while the list is empty
    pub empty_message: String,
    /// Show key hints in the status bar
    pub show_help_bar: bool,
    /// Color theme (default/plain)
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            empty_message: "No comments yet...".to_string(),
            show_help_bar: true,
            theme: "default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.empty_message, "No comments yet...");
        assert!(config.ui.show_help_bar);
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[ui]"));
        assert!(toml.contains("empty_message"));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.ui.empty_message, config2.ui.empty_message);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[ui]\nempty_message = \"quiet in here\"\n").unwrap();
        assert_eq!(config.ui.empty_message, "quiet in here");
        assert!(config.ui.show_help_bar);
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"plain\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.ui.theme, "plain");
        assert!(config.ui.show_help_bar);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ui = not valid toml").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(CommentBoxError::Toml(_))
        ));
    }
}

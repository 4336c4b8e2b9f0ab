//! Configuration handling for the TUI

use crate::i18n::Language;
use crate::submit::DEFAULT_SUBMIT_DELAY;
use crate::theme::Theme;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the simulated submission delay, in milliseconds
pub const SUBMIT_DELAY_ENV: &str = "SIRIUS_SUBMIT_DELAY_MS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Last selected color scheme
    pub theme: Option<Theme>,
    /// Last selected interface language
    pub language: Option<Language>,
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("my", "sirius", "sirius-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            Self::default()
        })
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Submission delay: environment override, then file, then default
    pub fn submit_delay(&self) -> Duration {
        let from_env = std::env::var(SUBMIT_DELAY_ENV)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok());
        self.delay_with_override(from_env)
    }

    fn delay_with_override(&self, override_ms: Option<u64>) -> Duration {
        override_ms
            .or(self.submit_delay_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("sirius-tui-test-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.theme.is_none());
        assert!(config.language.is_none());
        assert!(config.submit_delay_ms.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            theme: Some(Theme::Dark),
            language: Some(Language::Ms),
            submit_delay_ms: Some(250),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"theme\":\"dark\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"language": "ms", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.language, Some(Language::Ms));
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let path = temp_config_path("config.json");
        assert_eq!(TuiConfig::load_from(&path).unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("config.json");
        let config = TuiConfig {
            theme: Some(Theme::Dark),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(TuiConfig::load_from(&path).unwrap(), config);
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = temp_config_path("config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_submit_delay_precedence() {
        let config = TuiConfig {
            submit_delay_ms: Some(250),
            ..Default::default()
        };
        assert_eq!(config.delay_with_override(None), Duration::from_millis(250));
        assert_eq!(config.delay_with_override(Some(5)), Duration::from_millis(5));
        assert_eq!(
            TuiConfig::default().delay_with_override(None),
            Duration::from_millis(1000)
        );
    }
}

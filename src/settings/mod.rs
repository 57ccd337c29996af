//! Settings module for subclash
//!
//! Settings come from an optional TOML file. Every key has a default, so a
//! missing file or a partial one is fine; a file that exists but does not
//! parse is an error.

pub mod toml_settings;

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::utils::file::file_get;
pub use toml_settings::{AdvancedSettings, CommonSettings, TomlSettings};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings structure to hold global configuration
pub type Settings = TomlSettings;

impl TomlSettings {
    /// Parses settings from TOML text.
    pub fn from_content(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from `path`, or returns the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => {
                info!("Loading settings from {}", path.display());
                Self::from_content(&file_get(path)?)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.common.rules_path, "rules.txt");
        assert_eq!(settings.advanced.fetch_timeout, 15);
        assert_eq!(settings.advanced.rejected_sample_size, 10);
        assert!(settings.advanced.user_agent.starts_with("Mozilla/5.0"));
        assert!(settings.advanced.proxy.is_none());
    }

    #[test]
    fn test_partial_content_keeps_other_defaults() {
        let settings = Settings::from_content(
            r#"
[advanced]
fetch_timeout = 30
proxy = "http://127.0.0.1:7890"
"#,
        )
        .unwrap();
        assert_eq!(settings.advanced.fetch_timeout, 30);
        assert_eq!(settings.advanced.proxy.as_deref(), Some("http://127.0.0.1:7890"));
        assert_eq!(settings.advanced.rejected_sample_size, 10);
        assert_eq!(settings.common.rules_path, "rules.txt");
    }

    #[test]
    fn test_invalid_content_is_error() {
        assert!(matches!(
            Settings::from_content("[common\nrules_path = 1"),
            Err(SettingsError::ParseError(_))
        ));
    }
}

use serde::{Deserialize, Serialize};

use crate::interfaces::subconverter::REJECTED_SAMPLE_LIMIT;
use crate::utils::http::DEFAULT_TIMEOUT;

fn default_rules_path() -> String {
    "rules.txt".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

fn default_rejected_sample_size() -> usize {
    REJECTED_SAMPLE_LIMIT
}

/// Common settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonSettings {
    /// Rules file read when no rules are given explicitly; silently skipped
    /// when missing
    #[serde(default = "default_rules_path")]
    pub rules_path: String,
    /// Fixed provenance label for every generated document
    pub source_label: Option<String>,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            rules_path: default_rules_path(),
            source_label: None,
        }
    }
}

/// Advanced settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSettings {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Seconds before a subscription fetch gives up
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
    /// Proxy for subscription fetches, e.g. `http://127.0.0.1:7890`
    pub proxy: Option<String>,
    #[serde(default = "default_rejected_sample_size")]
    pub rejected_sample_size: usize,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            fetch_timeout: default_fetch_timeout(),
            proxy: None,
            rejected_sample_size: default_rejected_sample_size(),
        }
    }
}

/// Root of the TOML settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlSettings {
    pub common: CommonSettings,
    pub advanced: AdvancedSettings,
}

//! Application configuration model.
//!
//! Output defaults and export location, loaded from `config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output and share-text configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format name (text, table, json, plain).
    #[serde(default = "default_format")]
    pub format: String,

    /// Heading of the share summary.
    #[serde(default = "default_share_title")]
    pub share_title: String,

    /// Platform name used in per-user share messages.
    #[serde(default = "default_platform")]
    pub platform: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            share_title: default_share_title(),
            platform: default_platform(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

fn default_share_title() -> String {
    "Instagram Unfollower Analysis".to_string()
}

fn default_platform() -> String {
    "Instagram".to_string()
}

/// Export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exported lists.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".follow-diff")
    }

    /// Get the exports directory, using default if not configured.
    #[must_use]
    pub fn exports_dir(&self) -> PathBuf {
        self.export
            .dir
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join("exports"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.platform, "Instagram");
        assert!(config.export.dir.is_none());
    }

    #[test]
    fn test_exports_dir_override() {
        let mut config = AppConfig::default();
        assert!(config.exports_dir().ends_with("exports"));

        config.export.dir = Some(PathBuf::from("/tmp/lists"));
        assert_eq!(config.exports_dir(), PathBuf::from("/tmp/lists"));
    }
}

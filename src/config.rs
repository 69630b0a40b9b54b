use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// File looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "alien-dashboard.json";

pub const RAW_DATA_URL: &str =
    "https://raw.githubusercontent.com/Iamvideo123/fds/refs/heads/main/alien_mission_data.csv";
pub const PREPROCESSED_DATA_URL: &str = "https://raw.githubusercontent.com/Iamvideo123/fds/refs/heads/main/alien_mission_data_preprocessed.csv";

// ---------------------------------------------------------------------------
// DashboardConfig
// ---------------------------------------------------------------------------

/// Runtime settings.  Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub raw_url: String,
    pub preprocessed_url: String,
    /// Initial window size in logical points.
    pub window_size: [f32; 2],
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    /// Upper bound on a single CSV download.
    pub max_response_bytes: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            raw_url: RAW_DATA_URL.to_string(),
            preprocessed_url: PREPROCESSED_DATA_URL.to_string(),
            window_size: [1200.0, 900.0],
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
            max_response_bytes: 64 * 1024 * 1024,
        }
    }
}

impl DashboardConfig {
    /// Load overrides from `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.raw_url, RAW_DATA_URL);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "raw_url": "http://localhost/raw.csv" }"#).unwrap();

        let config = DashboardConfig::load_or_default(&path).unwrap();
        assert_eq!(config.raw_url, "http://localhost/raw.csv");
        assert_eq!(config.preprocessed_url, PREPROCESSED_DATA_URL);
        assert_eq!(config.read_timeout_secs, 30);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let err = DashboardConfig::load_or_default(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}

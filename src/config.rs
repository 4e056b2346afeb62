/// Application configuration management
///
/// The only thing worth configuring is which external classifier gets
/// launched. The config lives as JSON in the user's config directory; a
/// missing or unreadable file falls back to defaults so the app always
/// starts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// The rater executable to launch
    pub rater_program: String,
    /// Arguments passed before the image path (the path itself is appended
    /// by the app as the final argument)
    pub rater_args: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rater_program: "rate-image".to_string(),
            rater_args: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Get the path where the configuration should be stored
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user config directory");

        path.push("safeview");
        path.push("config.json");
        path
    }

    /// Load the configuration from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path; missing file means defaults, corrupt file
    /// logs a warning and means defaults
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("⚠️  Ignoring corrupt config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save the configuration as pretty JSON
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize config: {}", e))?;

        std::fs::write(path, json)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            rater_program: "/opt/classifiers/runrecog".to_string(),
            rater_args: vec!["--model".to_string(), "default".to_string()],
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }
}

//! Application configuration.

use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Persisted monitor defaults: which alarm server to watch and how often.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub server_url: String,
    #[serde(default)]
    pub refresh_secs: Option<u64>,
}

/// Path of the config file, `~/.alarmmon/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".alarmmon").join("config.json"))
}

impl Config {
    pub fn new(server_url: String, refresh_secs: Option<u64>) -> Self {
        Config {
            server_url,
            refresh_secs,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file, e.g. for `alarmmon reset`.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Base URL to use, honoring the default environment when none was saved.
    pub fn resolve_url(config: Option<&Config>, environment: Environment) -> String {
        match config {
            Some(config) if !config.server_url.is_empty() => config.server_url.clone(),
            _ => environment.alarm_server_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("http://localhost:8080/alarm-webmon".to_string(), Some(5));
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("http://alarms.test/webmon".to_string(), None);
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Clearing a config file should remove it; clearing again is not an error.
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("http://alarms.test/webmon".to_string(), None);
        config.save(&path).unwrap();
        assert!(path.exists());

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // A saved URL wins over the environment default; empty falls back.
    fn test_resolve_url() {
        let config = Config::new("http://alarms.test/webmon".to_string(), None);
        assert_eq!(
            Config::resolve_url(Some(&config), Environment::Local),
            "http://alarms.test/webmon"
        );
        assert_eq!(
            Config::resolve_url(None, Environment::Local),
            Environment::Local.alarm_server_url()
        );
    }
}

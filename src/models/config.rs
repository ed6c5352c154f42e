use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::formatter::Patterns;

pub const CONFIG_FILE_NAME: &str = ".chatstamp.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub patterns: Patterns,
    /// Hours after which `custom` also prints the date
    #[serde(default = "default_hours_threshold")]
    pub hours_threshold: u32,
    /// Append " ago" to short forms unless told otherwise
    #[serde(default)]
    pub with_ago: bool,
    #[serde(default)]
    pub timezone: Zone,
    /// Directory where the config file was loaded from
    /// Not serialized - this is metadata about where we loaded from
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

/// Zone used to render wall-clock fields
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    #[default]
    Local,
    Utc,
}

pub fn default_hours_threshold() -> u32 {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: Patterns::default(),
            hours_threshold: default_hours_threshold(),
            with_ago: false,
            timezone: Zone::default(),
            config_dir: None,
        }
    }
}

impl Config {
    /// Get the path to the global configuration file in user's home directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Search for .chatstamp.yaml starting from `start` and walking up
    /// Stops at $HOME (does not use $HOME/.chatstamp.yaml as project config)
    pub fn find_project_config(start: &Path) -> Option<PathBuf> {
        let home_dir = dirs::home_dir();
        let mut current_dir = start.to_path_buf();

        loop {
            let at_home = home_dir.as_deref() == Some(current_dir.as_path());

            let config_path = current_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() && !at_home {
                return Some(config_path);
            }

            if at_home {
                break;
            }
            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_path_buf(),
                None => break,
            }
        }

        None
    }

    /// Load the project config found above the current directory, then the
    /// global config, then the built-in defaults
    pub fn discover() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;

        if let Some(project_config_path) = Self::find_project_config(&cwd) {
            log::debug!("Using project config {}", project_config_path.display());
            return Self::load(&project_config_path);
        }

        if let Some(global) = Self::load_global()? {
            log::debug!("Using global config");
            return Ok(global);
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load a configuration file, filling values left at their defaults from the global config
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Configuration file '{}' not found", path.display());
        }

        let content = std::fs::read_to_string(path)?;
        let mut local: Config = serde_yaml::from_str(&content)?;
        local.config_dir = path.parent().map(|p| p.to_path_buf());

        let global = match Self::global_config_path() {
            Some(global_path) if global_path != path => Self::read_quiet(&global_path),
            _ => None,
        };

        if let Some(global) = global {
            local.merge_defaults_from(&global);
        }

        Ok(local)
    }

    fn read_quiet(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Config>(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                    None
                }
            },
            Err(_) => None,
        }
    }

    /// Take values from `other` wherever this config still holds the defaults
    pub fn merge_defaults_from(&mut self, other: &Config) {
        let defaults = Patterns::default();

        if self.patterns.message_stamp == defaults.message_stamp {
            self.patterns.message_stamp = other.patterns.message_stamp.clone();
        }
        if self.patterns.message_timestamp == defaults.message_timestamp {
            self.patterns.message_timestamp = other.patterns.message_timestamp.clone();
        }
        if self.patterns.other_year == defaults.other_year {
            self.patterns.other_year = other.patterns.other_year.clone();
        }
        if self.patterns.date == defaults.date {
            self.patterns.date = other.patterns.date.clone();
        }
        if self.hours_threshold == default_hours_threshold() {
            self.hours_threshold = other.hours_threshold;
        }
        if !self.with_ago {
            self.with_ago = other.with_ago;
        }
        if self.timezone == Zone::default() {
            self.timezone = other.timezone;
        }
    }

    /// Load only global configuration
    pub fn load_global() -> anyhow::Result<Option<Self>> {
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let content = std::fs::read_to_string(&global_path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(Some(config));
            }
        }
        Ok(None)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.patterns.message_stamp, "h:mm a");
        assert_eq!(config.hours_threshold, 12);
        assert_eq!(config.timezone, Zone::Local);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "timezone: utc\nhours_threshold: 24\npatterns:\n  date: dd/MM/yyyy\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.timezone, Zone::Utc);
        assert_eq!(config.hours_threshold, 24);
        assert_eq!(config.patterns.date, "dd/MM/yyyy");
        assert_eq!(config.patterns.message_stamp, "h:mm a");
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.with_ago = true;
        config.patterns.message_stamp = "HH:mm".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(loaded.with_ago);
        assert_eq!(loaded.patterns.message_stamp, "HH:mm");
        assert_eq!(loaded.config_dir.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("missing.yaml"));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let found = Config::find_project_config(&nested).unwrap();
        assert_eq!(found, tmp.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_merge_defaults_keeps_local_values() {
        let mut local = Config::default();
        local.patterns.date = "yyyy-MM-dd".to_string();

        let mut global = Config::default();
        global.patterns.date = "dd.MM.yyyy".to_string();
        global.patterns.message_stamp = "HH:mm".to_string();
        global.timezone = Zone::Utc;

        local.merge_defaults_from(&global);
        assert_eq!(local.patterns.date, "yyyy-MM-dd");
        assert_eq!(local.patterns.message_stamp, "HH:mm");
        assert_eq!(local.timezone, Zone::Utc);
    }
}

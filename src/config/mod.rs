use crate::errors::{AppError, AppResult};
use crate::models::hours_notation::HoursNotation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys written by `init`; `config --check` reports the ones a file lacks.
pub const CONFIG_KEYS: [&str; 3] = ["hours_notation", "completed_month_lag", "log_level"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hours_notation: HoursNotation,
    /// Months between "now" and the last selectable billing month.
    #[serde(default = "default_completed_month_lag")]
    pub completed_month_lag: u32,
    /// Used when neither RUST_LOG nor --verbose is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_completed_month_lag() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hours_notation: HoursNotation::default(),
            completed_month_lag: default_completed_month_lag(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("getime")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".getime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("getime.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is absent
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        if cfg.completed_month_lag == 0 {
            return Err(AppError::Config(
                "completed_month_lag must be at least 1".to_string(),
            ));
        }
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Write a default config at `path` unless one exists (or `force`).
    /// Returns true when a file was written.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Keys of [`CONFIG_KEYS`] absent from a YAML document.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|key| !map.contains_key(*key))
            .collect())
    }
}

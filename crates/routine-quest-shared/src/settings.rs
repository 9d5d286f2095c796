//! TOML-based client preferences.
//!
//! Stores the values a client needs to evaluate scoring locally:
//! - Subscription tier
//! - Personal boost time and timezone offset
//! - Current streak
//!
//! Settings are stored at `~/.config/routine-quest/settings.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::models::UserTier;

/// Local client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tier: UserTier,
    /// Personal boost time, "HH:MM"
    #[serde(default)]
    pub pbt_time: Option<String>,
    /// Shift applied to the boost time, in minutes
    #[serde(default)]
    pub timezone_offset_minutes: i64,
    #[serde(default)]
    pub streak_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tier: UserTier::Free,
            pbt_time: None,
            timezone_offset_minutes: 0,
            streak_days: 0,
        }
    }
}

/// Returns `~/.config/routine-quest[-dev]/` based on ROUTINE_QUEST_ENV.
///
/// Set ROUTINE_QUEST_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ROUTINE_QUEST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("routine-quest-dev")
    } else {
        base_dir.join("routine-quest")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::Directory {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

impl Settings {
    const KEYS: [&'static str; 4] = ["tier", "pbt_time", "timezone_offset_minutes", "streak_days"];

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("settings.toml"))
    }

    /// Load from the default location, writing defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if the
    /// defaults cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings: Settings = toml::from_str(&content)?;
                debug!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                settings.save_to(path)?;
                info!(path = %path.display(), "wrote default settings");
                Ok(settings)
            }
            Err(source) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn keys() -> &'static [&'static str] {
        &Self::KEYS
    }

    /// Get a value as a string by key. Unset optional values read as "".
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "tier" => Some(self.tier.to_string()),
            "pbt_time" => Some(self.pbt_time.clone().unwrap_or_default()),
            "timezone_offset_minutes" => Some(self.timezone_offset_minutes.to_string()),
            "streak_days" => Some(self.streak_days.to_string()),
            _ => None,
        }
    }

    /// Set a value by key without persisting. An empty `pbt_time` clears it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        match key {
            "tier" => {
                self.tier = value.parse().map_err(|e: crate::AppError| invalid(e.message()))?;
            }
            "pbt_time" => {
                if value.is_empty() {
                    self.pbt_time = None;
                } else {
                    value
                        .parse::<crate::PbtTime>()
                        .map_err(|e| invalid(e.message()))?;
                    self.pbt_time = Some(value.to_string());
                }
            }
            "timezone_offset_minutes" => {
                self.timezone_offset_minutes =
                    value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            "streak_days" => {
                self.streak_days = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

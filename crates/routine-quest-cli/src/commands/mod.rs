pub mod app_config;
pub mod duration;
pub mod pbt;
pub mod settings;
pub mod tier;
pub mod xp;

use routine_quest_shared::{ConfigError, Settings};
use std::path::PathBuf;

/// Resolves where settings are read from and written to.
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Settings::path(),
        }
    }

    pub fn load(&self) -> Result<Settings, ConfigError> {
        match &self.path {
            Some(path) => Settings::load_from(path),
            None => Settings::load(),
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        match &self.path {
            Some(path) => settings.save_to(path),
            None => settings.save(),
        }
    }
}

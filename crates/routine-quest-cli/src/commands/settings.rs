use clap::Subcommand;
use routine_quest_shared::Settings;

use super::SettingsStore;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Get a settings value
    Get {
        /// Settings key (e.g. "tier", "pbt_time")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value ("" clears pbt_time)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// List all settings values
    List,
    /// Reset settings to defaults
    Reset,
    /// Print the settings file location
    Path,
}

pub fn run(
    action: SettingsAction,
    store: &SettingsStore,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SettingsAction::Get { key } => {
            let settings = store.load()?;
            let value = settings.get(&key).ok_or_else(|| {
                format!(
                    "unknown key: {key} (expected one of {})",
                    Settings::keys().join(", ")
                )
            })?;
            println!("{value}");
        }
        SettingsAction::Set { key, value } => {
            let mut settings = store.load()?;
            settings.set(&key, &value)?;
            store.save(&settings)?;
            tracing::info!(%key, %value, "settings updated");
            println!("ok");
        }
        SettingsAction::List => {
            let settings = store.load()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Reset => {
            store.save(&Settings::default())?;
            println!("settings reset to defaults");
        }
        SettingsAction::Path => {
            println!("{}", store.path()?.display());
        }
    }
    Ok(())
}

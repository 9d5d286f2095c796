use chrono::{DateTime, Local};
use clap::Args;
use routine_quest_shared::is_within_pbt;

use super::SettingsStore;

#[derive(Args)]
pub struct PbtArgs {
    /// Boost time "HH:MM" (defaults to the value in settings)
    #[arg(long)]
    time: Option<String>,
    /// Moment to check, RFC 3339 (defaults to now)
    #[arg(long)]
    at: Option<String>,
    /// Minutes added to the boost time (defaults to the value in settings)
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i64>,
}

pub fn run(args: PbtArgs, store: &SettingsStore) -> Result<(), Box<dyn std::error::Error>> {
    let needs_settings = args.time.is_none() || args.offset.is_none();
    let settings = if needs_settings {
        Some(store.load()?)
    } else {
        None
    };

    let time = match args.time {
        Some(time) => time,
        None => settings
            .as_ref()
            .and_then(|s| s.pbt_time.clone())
            .ok_or("no boost time given and none set in settings")?,
    };
    let offset = args
        .offset
        .or_else(|| settings.as_ref().map(|s| s.timezone_offset_minutes))
        .unwrap_or(0);

    let within = match args.at {
        Some(at) => {
            let at = DateTime::parse_from_rfc3339(&at)
                .map_err(|e| format!("invalid --at '{at}': {e}"))?;
            is_within_pbt(&time, &at, offset)
        }
        None => is_within_pbt(&time, &Local::now(), offset),
    };

    println!("{within}");
    Ok(())
}

use clap::Args;
use routine_quest_shared::{calculate_xp, APP_CONFIG};

use super::SettingsStore;

#[derive(Args)]
pub struct XpArgs {
    /// Base XP (defaults to BASE_XP_PER_STEP)
    #[arg(long)]
    base: Option<f64>,
    /// Action happened inside the personal boost window
    #[arg(long)]
    pbt: bool,
    /// Streak days (defaults to the value in settings)
    #[arg(long, allow_negative_numbers = true)]
    streak: Option<i64>,
}

pub fn run(args: XpArgs, store: &SettingsStore) -> Result<(), Box<dyn std::error::Error>> {
    let streak = match args.streak {
        Some(days) => days,
        None => store.load()?.streak_days,
    };
    let base = args
        .base
        .unwrap_or_else(|| f64::from(APP_CONFIG.base_xp_per_step));

    tracing::debug!(base, pbt = args.pbt, streak, "calculating xp");
    println!("{}", calculate_xp(base, args.pbt, streak));
    Ok(())
}

use clap::Args;
use routine_quest_shared::{TierLimits, UserTier};

use super::SettingsStore;

#[derive(Args)]
pub struct TierArgs {
    /// Tier to show (free, basic, pro, team); "all" lists every tier.
    /// Defaults to the tier in settings.
    tier: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: TierArgs, store: &SettingsStore) -> Result<(), Box<dyn std::error::Error>> {
    let tiers: Vec<UserTier> = match args.tier.as_deref() {
        Some("all") => UserTier::ALL.to_vec(),
        Some(name) => vec![name.parse::<UserTier>()?],
        None => vec![store.load()?.tier],
    };
    let limits: Vec<TierLimits> = tiers.iter().map(UserTier::limits).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&limits)?);
        return Ok(());
    }

    for l in &limits {
        println!("{}", l.tier);
        println!("  routines:          {}", describe(l.routines));
        println!("  steps per routine: {}", describe(l.steps_per_routine));
        println!("  history days:      {}", describe(l.history_days));
        println!("  ai credits:        {}", l.ai_credits);
    }
    Ok(())
}

fn describe(limit: Option<u32>) -> String {
    limit.map_or_else(|| "unlimited".to_string(), |n| n.to_string())
}

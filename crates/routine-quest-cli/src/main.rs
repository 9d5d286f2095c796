use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "routine-quest", version, about = "Routine Quest CLI")]
struct Cli {
    /// Settings file to use instead of ~/.config/routine-quest/settings.toml
    #[arg(long, global = true, env = "ROUTINE_QUEST_SETTINGS")]
    settings: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the XP award for an action
    Xp(commands::xp::XpArgs),
    /// Check whether a moment falls inside the personal boost window
    Pbt(commands::pbt::PbtArgs),
    /// Format a number of seconds as M:SS
    Duration(commands::duration::DurationArgs),
    /// Show tier limits and AI credits
    Tier(commands::tier::TierArgs),
    /// Print the built-in gameplay configuration
    AppConfig,
    /// Local settings management
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = commands::SettingsStore::new(cli.settings);
    let result = match cli.command {
        Commands::Xp(args) => commands::xp::run(args, &store),
        Commands::Pbt(args) => commands::pbt::run(args, &store),
        Commands::Duration(args) => commands::duration::run(args),
        Commands::Tier(args) => commands::tier::run(args, &store),
        Commands::AppConfig => commands::app_config::run(),
        Commands::Settings { action } => commands::settings::run(action, &store),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use clap::Args;
use routine_quest_shared::format_duration;

#[derive(Args)]
pub struct DurationArgs {
    /// Number of seconds
    #[arg(allow_negative_numbers = true)]
    seconds: i64,
}

pub fn run(args: DurationArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_duration(args.seconds));
    Ok(())
}

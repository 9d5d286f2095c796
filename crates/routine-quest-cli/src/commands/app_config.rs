use routine_quest_shared::APP_CONFIG;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&APP_CONFIG)?);
    Ok(())
}

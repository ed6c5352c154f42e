use anyhow::Result;
use chatstamp::models::CONFIG_FILE_NAME;
use chatstamp::Config;
use colored::*;
use std::path::Path;

pub fn init_command() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!("Configuration file already exists at {}", CONFIG_FILE_NAME);
        return Ok(());
    }

    let config = Config::default();
    config.save(config_path)?;
    log::info!("Wrote default configuration to {}", config_path.display());

    println!("{} {}", "Configuration saved to".green(), CONFIG_FILE_NAME);
    println!("Edit the patterns there to change how timestamps render.");

    Ok(())
}

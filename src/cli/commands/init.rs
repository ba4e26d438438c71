//! Init and Config commands.

use anyhow::{Result, anyhow};

use crate::config::Settings;

/// Run init command - create configuration file in the current directory.
pub fn run_init(force: bool) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let path = Settings::init_config_file(&current_dir, force).map_err(|e| anyhow!("{e}"))?;

    crate::log_event!("cli", "config written", "{}", path.display());
    println!("Created configuration file at: {}", path.display());
    println!("Edit this file to customize your settings.");
    Ok(())
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

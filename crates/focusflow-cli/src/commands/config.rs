//! Configuration management commands.

use clap::Subcommand;
use focusflow_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the focus session length in seconds
    SetFocusDuration {
        /// Seconds per session
        secs: u64,
    },
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetFocusDuration { secs } => {
            let mut config = Config::load()?;
            config.focus.duration_secs = secs;
            config.save()?;
            println!("focus.duration_secs = {secs}");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}

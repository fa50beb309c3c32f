//! Aggregate statistics commands.

use clap::Subcommand;
use focusflow_core::task::TaskStore;
use focusflow_core::Store;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show the active user's counters
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = super::require_session(&store)?;

    match action {
        StatsAction::Show => {
            let stats = TaskStore::new(&store).get_stats(&user.id)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

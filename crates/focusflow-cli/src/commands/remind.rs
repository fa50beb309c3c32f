//! Reminder polling commands.

use chrono::{Duration, Utc};
use clap::Subcommand;
use focusflow_core::reminder::due_reminder_within;
use focusflow_core::task::TaskStore;
use focusflow_core::{Config, Store};

#[derive(Subcommand)]
pub enum RemindAction {
    /// Scan the task list once for a due reminder
    Check,
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = super::require_session(&store)?;
    let config = Config::load()?;

    match action {
        RemindAction::Check => {
            let tasks = TaskStore::new(&store).list_tasks(&user.id)?;
            let window = Duration::seconds(config.reminder.window_secs as i64);
            match due_reminder_within(&tasks, Utc::now(), window) {
                Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
                None => println!("No due reminders"),
            }
        }
    }
    Ok(())
}

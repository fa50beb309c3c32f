//! Focus session commands.
//!
//! The countdown engine is persisted as JSON in the key-value store under
//! a user-scoped key, so the session survives between CLI invocations:
//! `status` reloads it, ticks it against the wall clock, and reports the
//! recomputed remaining time. On completion (natural or via `stop`) the
//! user's focus-session counter is incremented exactly once and the
//! persisted engine is removed.

use clap::Subcommand;
use focusflow_core::storage::keys;
use focusflow_core::task::TaskStore;
use focusflow_core::{Config, Event, FocusTimer, Loaded, Store};

#[derive(Subcommand)]
pub enum FocusAction {
    /// Start the countdown
    Start,
    /// Pause the countdown, freezing the remaining time
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Abort the session; finalizes like a completion
    Stop,
    /// Print current timer state as JSON, ticking the countdown
    Status,
}

fn load_timer(store: &Store, key: &str, duration_secs: u64) -> FocusTimer {
    match store.get_json::<FocusTimer>(key) {
        Ok(Loaded::Present(timer)) => timer,
        _ => FocusTimer::new(duration_secs),
    }
}

/// Apply the completion side effect: one focus-session increment.
fn finalize(
    store: &Store,
    user_id: &str,
    event: &Event,
) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = TaskStore::new(store);
    let mut stats = tasks.get_stats(user_id)?;
    stats.focus_sessions += 1;
    tasks.save_stats(user_id, &stats)?;
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

pub fn run(action: FocusAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let user = super::require_session(&store)?;
    let config = Config::load()?;
    let key = keys::focus_timer(&user.id);
    let mut timer = load_timer(&store, &key, config.focus.duration_secs);

    match action {
        FocusAction::Start => {
            if let Some(event) = timer.start() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
        }
        FocusAction::Pause => {
            if let Some(event) = timer.pause() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
        }
        FocusAction::Resume => {
            if let Some(event) = timer.resume() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
        }
        FocusAction::Stop => {
            if let Some(event) = timer.stop() {
                finalize(&store, &user.id, &event)?;
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
        }
        FocusAction::Status => {
            let completed = timer.tick();
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            if let Some(event) = completed {
                finalize(&store, &user.id, &event)?;
            }
        }
    }

    if timer.is_finished() {
        store.remove(&key)?;
    } else {
        store.set_json(&key, &timer)?;
    }
    Ok(())
}

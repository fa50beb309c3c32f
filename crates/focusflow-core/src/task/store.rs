//! Per-user task list and stats persistence.
//!
//! The whole list is the unit of storage: every edit reads the full list,
//! replaces one element structurally, and writes the full list back.
//! There is no partial-update primitive and no concurrency check -- the
//! last writer for a given user's list wins.

use crate::error::Result;
use crate::storage::{keys, Loaded, Store};

use super::{Stats, Task};

/// Access to a user's tasks and aggregate stats, namespaced per user.
pub struct TaskStore<'a> {
    store: &'a Store,
}

impl<'a> TaskStore<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// The user's tasks in insertion order.
    ///
    /// On first access per user this checks the legacy unscoped key and,
    /// if present, migrates its contents into the user-scoped location and
    /// deletes the legacy key. Corrupt or missing data reads as empty.
    pub fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let key = keys::tasks(user_id);
        match self.store.get_json::<Vec<Task>>(&key)? {
            Loaded::Present(tasks) => Ok(tasks),
            Loaded::Corrupt => Ok(Vec::new()),
            Loaded::Missing => match self.store.get_json::<Vec<Task>>(keys::LEGACY_TASKS)? {
                Loaded::Present(tasks) => {
                    self.store.set_json(&key, &tasks)?;
                    self.store.remove(keys::LEGACY_TASKS)?;
                    Ok(tasks)
                }
                // A legacy record that fails to parse is left in place.
                Loaded::Corrupt | Loaded::Missing => Ok(Vec::new()),
            },
        }
    }

    /// Overwrite the user's entire task list in a single write.
    pub fn replace_tasks(&self, user_id: &str, tasks: &[Task]) -> Result<()> {
        self.store.set_json(&keys::tasks(user_id), &tasks)?;
        Ok(())
    }

    /// Append one task to the user's list.
    pub fn add_task(&self, user_id: &str, task: Task) -> Result<()> {
        let mut tasks = self.list_tasks(user_id)?;
        tasks.push(task);
        self.replace_tasks(user_id, &tasks)
    }

    /// Read-modify-write one task by id.
    ///
    /// Reads the full list, applies `f` to the matching element, writes
    /// the full list back. Returns the updated task, or `None` when the
    /// id is unknown (nothing is written in that case).
    pub fn update_task(
        &self,
        user_id: &str,
        task_id: &str,
        f: impl FnOnce(&mut Task),
    ) -> Result<Option<Task>> {
        let mut tasks = self.list_tasks(user_id)?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
            return Ok(None);
        };
        f(task);
        let updated = task.clone();
        self.replace_tasks(user_id, &tasks)?;
        Ok(Some(updated))
    }

    /// The user's stats record.
    ///
    /// Follows the same legacy-migration pattern as tasks; on first access
    /// the default `{0,0,0}` is materialized and written back.
    pub fn get_stats(&self, user_id: &str) -> Result<Stats> {
        let key = keys::stats(user_id);
        match self.store.get_json::<Stats>(&key)? {
            Loaded::Present(stats) => Ok(stats),
            Loaded::Corrupt => Ok(Stats::default()),
            Loaded::Missing => match self.store.get_json::<Stats>(keys::LEGACY_STATS)? {
                Loaded::Present(stats) => {
                    self.store.set_json(&key, &stats)?;
                    self.store.remove(keys::LEGACY_STATS)?;
                    Ok(stats)
                }
                Loaded::Corrupt | Loaded::Missing => {
                    let stats = Stats::default();
                    self.store.set_json(&key, &stats)?;
                    Ok(stats)
                }
            },
        }
    }

    /// Overwrite the user's stats record.
    pub fn save_stats(&self, user_id: &str, stats: &Stats) -> Result<()> {
        self.store.set_json(&keys::stats(user_id), stats)?;
        Ok(())
    }
}

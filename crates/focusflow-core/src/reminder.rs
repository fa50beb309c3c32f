//! Due-reminder poll.
//!
//! Not a scheduler: a stateless scan over the task list for reminders
//! whose trigger fell inside a trailing window. The only state is the
//! page-lifetime dismissal held by [`ReminderPoll`] -- a fresh process
//! re-shows a reminder that is still inside its window.

use chrono::{DateTime, Duration, Utc};

use crate::task::Task;

/// How long after its trigger a reminder keeps surfacing.
pub const REMINDER_WINDOW_SECS: i64 = 60;

/// First task whose reminder triggered within the default window.
pub fn due_reminder(tasks: &[Task], now: DateTime<Utc>) -> Option<&Task> {
    due_reminder_within(tasks, now, Duration::seconds(REMINDER_WINDOW_SECS))
}

/// First task whose reminder triggered within the given trailing window.
///
/// A task qualifies when its reminder is armed, the task is not
/// completed, and the trigger lies in `(now - window, now]`.
pub fn due_reminder_within(
    tasks: &[Task],
    now: DateTime<Utc>,
    window: Duration,
) -> Option<&Task> {
    tasks.iter().find(|task| {
        task.reminder
            && !task.completed
            && task
                .reminder_time
                .is_some_and(|at| at <= now && at > now - window)
    })
}

/// Visibility state for the reminder banner, scoped to one process.
///
/// Surfaces at most one due task until it is dismissed or its window
/// elapses. Nothing is persisted.
#[derive(Debug, Default)]
pub struct ReminderPoll {
    dismissed: Option<String>,
}

impl ReminderPoll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one poll pass. Returns the task to surface, if any.
    pub fn poll<'t>(&mut self, tasks: &'t [Task], now: DateTime<Utc>) -> Option<&'t Task> {
        let due = due_reminder(tasks, now)?;
        if self.dismissed.as_deref() == Some(due.id.as_str()) {
            return None;
        }
        Some(due)
    }

    /// Hide a surfaced reminder for the rest of this process.
    pub fn dismiss(&mut self, task_id: &str) {
        self.dismissed = Some(task_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Category, Priority, Task};

    fn reminder_task(id: &str, trigger: DateTime<Utc>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            category: Category::Personal,
            priority: Priority::Mid,
            completed: false,
            subtasks: Vec::new(),
            reminder: true,
            reminder_time: Some(trigger),
            created_at: trigger - Duration::hours(1),
        }
    }

    #[test]
    fn triggered_within_window_is_surfaced() {
        let now = Utc::now();
        let tasks = vec![reminder_task("1", now - Duration::seconds(30))];
        assert!(due_reminder(&tasks, now).is_some());
    }

    #[test]
    fn older_than_window_is_not_surfaced() {
        let now = Utc::now();
        let tasks = vec![reminder_task("1", now - Duration::seconds(61))];
        assert!(due_reminder(&tasks, now).is_none());
    }

    #[test]
    fn window_boundaries() {
        let now = Utc::now();
        // Exactly at the trigger instant: surfaced.
        assert!(due_reminder(&[reminder_task("1", now)], now).is_some());
        // Exactly window seconds old: no longer surfaced.
        let tasks = vec![reminder_task("1", now - Duration::seconds(REMINDER_WINDOW_SECS))];
        assert!(due_reminder(&tasks, now).is_none());
        // In the future: not yet.
        assert!(due_reminder(&[reminder_task("1", now + Duration::seconds(1))], now).is_none());
    }

    #[test]
    fn completed_and_unarmed_tasks_are_skipped() {
        let now = Utc::now();
        let mut done = reminder_task("1", now - Duration::seconds(5));
        done.completed = true;
        let mut unarmed = reminder_task("2", now - Duration::seconds(5));
        unarmed.reminder = false;
        assert!(due_reminder(&[done, unarmed], now).is_none());
    }

    #[test]
    fn at_most_one_task_is_surfaced() {
        let now = Utc::now();
        let tasks = vec![
            reminder_task("1", now - Duration::seconds(10)),
            reminder_task("2", now - Duration::seconds(20)),
        ];
        let due = due_reminder(&tasks, now).unwrap();
        assert_eq!(due.id, "1");
    }

    #[test]
    fn dismissal_holds_until_the_window_moves_on() {
        let now = Utc::now();
        let tasks = vec![reminder_task("1", now - Duration::seconds(10))];

        let mut poll = ReminderPoll::new();
        assert!(poll.poll(&tasks, now).is_some());

        poll.dismiss("1");
        assert!(poll.poll(&tasks, now).is_none());

        // A different reminder still surfaces.
        let others = vec![reminder_task("2", now - Duration::seconds(10))];
        assert!(poll.poll(&others, now).is_some());

        // A fresh poll (new process) re-shows the dismissed one.
        let mut fresh = ReminderPoll::new();
        assert!(fresh.poll(&tasks, now).is_some());
    }
}

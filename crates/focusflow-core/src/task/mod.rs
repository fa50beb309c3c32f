//! Task model and per-user task storage.

mod store;

pub use store::TaskStore;

use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, a fixed 3-level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Mid,
    High,
}

/// Task category, a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
}

/// A step inside a task. Lives and dies with its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// A user's task.
///
/// Owned by exactly one user, mutated in place for its entire lifetime,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub completed: bool,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub reminder: bool,
    #[serde(default)]
    pub reminder_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Per-user aggregate counters.
///
/// Stored values surfaced for display; `focus_sessions` is the only
/// counter written by the core flows (on focus-session completion).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub completed_count: u64,
    pub streak_days: u64,
    pub focus_sessions: u64,
}

/// Next wall-clock occurrence of `HH:MM`: today at that time, or tomorrow
/// if that instant has already passed.
///
/// Returns `None` for an out-of-range time or a date arithmetic overflow.
pub fn next_reminder_time(
    hour: u32,
    minute: u32,
    now: DateTime<Local>,
) -> Option<DateTime<Utc>> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let mut date = now.date_naive();
    let mut local = Local.from_local_datetime(&date.and_time(time)).earliest()?;
    if local <= now {
        date = date.succ_opt()?;
        local = Local.from_local_datetime(&date.and_time(time)).earliest()?;
    }
    Some(local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn task_serialization_roundtrip() {
        let task = Task {
            id: "t-1".to_string(),
            title: "Buy groceries".to_string(),
            category: Category::Shopping,
            priority: Priority::High,
            completed: false,
            subtasks: vec![Subtask {
                id: "s-1".to_string(),
                text: "milk".to_string(),
                completed: true,
            }],
            reminder: true,
            reminder_time: Some(Utc::now()),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&task).unwrap();
        let decoded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        // Records written before subtasks/reminders existed still parse.
        let json = r#"{
            "id": "t-1",
            "title": "Old record",
            "category": "work",
            "priority": "mid",
            "completed": false,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.subtasks.is_empty());
        assert!(!task.reminder);
        assert!(task.reminder_time.is_none());
    }

    #[test]
    fn reminder_time_later_today() {
        let now = Local.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        let trigger = next_reminder_time(14, 30, now).unwrap();
        assert_eq!(
            trigger,
            Local
                .with_ymd_and_hms(2026, 3, 10, 14, 30, 0)
                .unwrap()
                .with_timezone(&Utc)
        );
    }

    #[test]
    fn reminder_time_already_passed_rolls_to_tomorrow() {
        let now = Local.with_ymd_and_hms(2026, 3, 10, 15, 0, 0).unwrap();
        let trigger = next_reminder_time(14, 30, now).unwrap();
        let expected = Local
            .with_ymd_and_hms(2026, 3, 11, 14, 30, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(trigger, expected);
        assert!(trigger - now.with_timezone(&Utc) < Duration::days(1));
    }

    #[test]
    fn reminder_time_rejects_invalid_clock_values() {
        let now = Local::now();
        assert!(next_reminder_time(24, 0, now).is_none());
        assert!(next_reminder_time(12, 60, now).is_none());
    }
}

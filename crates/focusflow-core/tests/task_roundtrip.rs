//! Property tests for the task list round-trip.

use chrono::{DateTime, TimeZone, Utc};
use focusflow_core::task::{Category, Priority, Subtask, Task, TaskStore};
use focusflow_core::Store;
use proptest::prelude::*;

fn datetime_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    // 2001..2033, millisecond precision.
    (1_000_000_000_000i64..2_000_000_000_000i64)
        .prop_map(|ms| Utc.timestamp_millis_opt(ms).unwrap())
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Mid),
        Just(Priority::High)
    ]
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Work),
        Just(Category::Personal),
        Just(Category::Shopping)
    ]
}

fn subtask_strategy() -> impl Strategy<Value = Subtask> {
    ("[a-z0-9-]{1,12}", ".{0,30}", any::<bool>()).prop_map(|(id, text, completed)| Subtask {
        id,
        text,
        completed,
    })
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (
        "[a-z0-9-]{1,16}",
        ".{0,40}",
        category_strategy(),
        priority_strategy(),
        any::<bool>(),
        prop::collection::vec(subtask_strategy(), 0..4),
        any::<bool>(),
        prop::option::of(datetime_strategy()),
        datetime_strategy(),
    )
        .prop_map(
            |(id, title, category, priority, completed, subtasks, reminder, reminder_time, created_at)| {
                Task {
                    id,
                    title,
                    category,
                    priority,
                    completed,
                    subtasks,
                    reminder,
                    reminder_time,
                    created_at,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// `list_tasks(replace_tasks(u, L))` equals `L`: order preserved,
    /// nothing lost, nothing duplicated.
    #[test]
    fn replace_then_list_is_identity(tasks in prop::collection::vec(task_strategy(), 0..12)) {
        let store = Store::open_memory().unwrap();
        let task_store = TaskStore::new(&store);
        task_store.replace_tasks("u1", &tasks).unwrap();
        prop_assert_eq!(task_store.list_tasks("u1").unwrap(), tasks);
    }

    /// Replacing again fully overwrites the previous list.
    #[test]
    fn replace_overwrites(
        first in prop::collection::vec(task_strategy(), 0..8),
        second in prop::collection::vec(task_strategy(), 0..8),
    ) {
        let store = Store::open_memory().unwrap();
        let task_store = TaskStore::new(&store);
        task_store.replace_tasks("u1", &first).unwrap();
        task_store.replace_tasks("u1", &second).unwrap();
        prop_assert_eq!(task_store.list_tasks("u1").unwrap(), second);
    }
}

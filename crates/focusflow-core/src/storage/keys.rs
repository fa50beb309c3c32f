//! Persisted key layout.
//!
//! Every record lives under the fixed `ff.` prefix; per-user records are
//! additionally scoped by the user id. The two unprefixed names are
//! pre-scoping storage locations kept only as one-time migration sources.

/// Serialized active session user, absent when logged out.
pub const CURRENT_USER: &str = "ff.currentUser";

/// Serialized sequence of all user records.
pub const USERS: &str = "ff.users";

/// Legacy unscoped task list, deleted after migration.
pub const LEGACY_TASKS: &str = "focusflow_tasks";

/// Legacy unscoped stats record, deleted after migration.
pub const LEGACY_STATS: &str = "focusflow_stats";

/// Key for a user's task list.
pub fn tasks(user_id: &str) -> String {
    format!("ff.data.{user_id}.tasks")
}

/// Key for a user's stats record.
pub fn stats(user_id: &str) -> String {
    format!("ff.data.{user_id}.stats")
}

/// Key for a user's persisted focus-timer state.
pub fn focus_timer(user_id: &str) -> String {
    format!("ff.data.{user_id}.focus")
}

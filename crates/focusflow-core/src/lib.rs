//! # FocusFlow Core Library
//!
//! This library provides the core business logic for FocusFlow, a personal
//! task manager with a fixed-length focus timer. It implements a CLI-first
//! philosophy: all operations are available via a standalone CLI binary,
//! with any GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Storage**: a SQLite-backed key-value store holding JSON records
//!   under namespaced keys, plus TOML-based configuration
//! - **Accounts**: local user registry with hashed credentials and a
//!   single active session pointer
//! - **Tasks**: per-user task lists and aggregate counters, mutated via
//!   whole-list read-modify-write
//! - **Timer**: a wall-clock-based countdown state machine that requires
//!   the caller to periodically invoke `tick()`
//! - **Reminders**: a stateless poll over the task list for due reminders
//!
//! ## Key Components
//!
//! - [`Store`]: namespaced key-value persistence
//! - [`AccountStore`]: signup, login, logout, session lookup
//! - [`TaskStore`]: task list and stats persistence with legacy migration
//! - [`FocusTimer`]: countdown state machine
//! - [`Config`]: application configuration management

pub mod auth;
pub mod error;
pub mod events;
pub mod reminder;
pub mod storage;
pub mod task;
pub mod timer;

pub use auth::{AccountStore, User};
pub use error::{AuthError, ConfigError, CoreError, Result, StoreError};
pub use events::Event;
pub use reminder::{due_reminder, ReminderPoll};
pub use storage::{Config, Loaded, Store};
pub use task::{Category, Priority, Stats, Subtask, Task, TaskStore};
pub use timer::{FocusTimer, TimerState};

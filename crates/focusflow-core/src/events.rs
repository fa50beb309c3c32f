//! Focus-session lifecycle events.
//!
//! Every timer transition produces an Event. The presentation layer
//! renders them; the completion events drive the stats side effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    FocusStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    FocusPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    FocusResumed {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero. Emitted exactly once per session.
    FocusCompleted {
        at: DateTime<Utc>,
    },
    /// Manual abort. Finalizes the session like a natural completion.
    FocusStopped {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        remaining_ms: u64,
        total_ms: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
}

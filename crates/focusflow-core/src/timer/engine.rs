//! Focus countdown engine.
//!
//! The timer is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! periodically. Remaining time is always recomputed from the run origin,
//! never decremented, so a throttled or delayed tick cannot accumulate
//! drift: pausing captures elapsed time as an offset, and resuming moves
//! the origin so that time spent paused does not count.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> Completed
//!         Running | Paused -> Stopped
//! ```
//!
//! The engine is serializable: a process can persist it mid-run and a
//! later process picks the countdown up from the same wall-clock origin.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Default focus-session length: 25 minutes.
pub const DEFAULT_FOCUS_DURATION_SECS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    /// The countdown reached zero.
    Completed,
    /// Manual abort; finalized like a completion, remaining time discarded.
    Stopped,
}

/// Fixed-duration countdown driven by wall-clock deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    total_ms: u64,
    state: TimerState,
    /// Wall-clock instant (epoch ms) the current run started from.
    /// `None` unless Running.
    #[serde(default)]
    run_origin_ms: Option<u64>,
    /// Elapsed time captured at the last pause.
    #[serde(default)]
    paused_elapsed_ms: u64,
}

impl FocusTimer {
    /// Create an idle timer with the given session length.
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_ms: total_secs * 1000,
            state: TimerState::Idle,
            run_origin_ms: None,
            paused_elapsed_ms: 0,
        }
    }

    /// Create an idle timer with the default session length.
    pub fn default_session() -> Self {
        Self::new(DEFAULT_FOCUS_DURATION_SECS)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// True once the session has been finalized, naturally or manually.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, TimerState::Completed | TimerState::Stopped)
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms_at(now_ms())
    }

    /// Remaining time at a given wall-clock instant.
    pub fn remaining_ms_at(&self, now: u64) -> u64 {
        match self.state {
            TimerState::Idle => self.total_ms,
            TimerState::Running => match self.run_origin_ms {
                Some(origin) => self.total_ms.saturating_sub(now.saturating_sub(origin)),
                None => self.total_ms,
            },
            TimerState::Paused => self.total_ms.saturating_sub(self.paused_elapsed_ms),
            TimerState::Completed | TimerState::Stopped => 0,
        }
    }

    /// 0.0 .. 1.0 progress through the session.
    pub fn progress(&self) -> f64 {
        self.progress_at(now_ms())
    }

    pub fn progress_at(&self, now: u64) -> f64 {
        if self.total_ms == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_ms_at(now) as f64 / self.total_ms as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let now = now_ms();
        Event::StateSnapshot {
            state: self.state,
            remaining_ms: self.remaining_ms_at(now),
            total_ms: self.total_ms,
            progress: self.progress_at(now),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.start_at(now_ms())
    }

    /// Start the countdown, recording `now` as the run origin.
    pub fn start_at(&mut self, now: u64) -> Option<Event> {
        if self.state != TimerState::Idle {
            return None;
        }
        self.state = TimerState::Running;
        self.run_origin_ms = Some(now);
        Some(Event::FocusStarted {
            duration_secs: self.total_ms / 1000,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.pause_at(now_ms())
    }

    /// Freeze the countdown, capturing elapsed-so-far as an offset.
    pub fn pause_at(&mut self, now: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let origin = self.run_origin_ms.unwrap_or(now);
        self.paused_elapsed_ms = now.saturating_sub(origin).min(self.total_ms);
        self.state = TimerState::Paused;
        self.run_origin_ms = None;
        Some(Event::FocusPaused {
            remaining_ms: self.remaining_ms_at(now),
            at: Utc::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.resume_at(now_ms())
    }

    /// Continue the countdown. The new run origin is backdated by the
    /// elapsed time accumulated before the pause.
    pub fn resume_at(&mut self, now: u64) -> Option<Event> {
        if self.state != TimerState::Paused {
            return None;
        }
        self.state = TimerState::Running;
        self.run_origin_ms = Some(now.saturating_sub(self.paused_elapsed_ms));
        Some(Event::FocusResumed {
            remaining_ms: self.remaining_ms_at(now),
            at: Utc::now(),
        })
    }

    pub fn stop(&mut self) -> Option<Event> {
        self.stop_at(now_ms())
    }

    /// Manual abort: discards remaining time and finalizes the session.
    /// A no-op once the session is already finalized, so the completion
    /// side effect cannot fire twice.
    pub fn stop_at(&mut self, _now: u64) -> Option<Event> {
        match self.state {
            TimerState::Running | TimerState::Paused => {
                self.state = TimerState::Stopped;
                self.run_origin_ms = None;
                Some(Event::FocusStopped { at: Utc::now() })
            }
            _ => None,
        }
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }

    /// Call periodically while Running. Returns `Some(Event::FocusCompleted)`
    /// exactly once, at the tick that observes the countdown reach zero.
    pub fn tick_at(&mut self, now: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        if self.remaining_ms_at(now) == 0 {
            self.state = TimerState::Completed;
            self.run_origin_ms = None;
            return Some(Event::FocusCompleted { at: Utc::now() });
        }
        None
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

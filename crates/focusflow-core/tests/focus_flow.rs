//! Focus-session flow: countdown completion drives exactly one stats
//! increment, including across a serialize/restore boundary.

use focusflow_core::task::TaskStore;
use focusflow_core::{Event, FocusTimer, Store, TimerState};

const T0: u64 = 1_700_000_000_000;

/// Apply the completion side effect the way the presentation layer does.
fn finalize(store: &Store, user_id: &str) {
    let tasks = TaskStore::new(store);
    let mut stats = tasks.get_stats(user_id).unwrap();
    stats.focus_sessions += 1;
    tasks.save_stats(user_id, &stats).unwrap();
}

#[test]
fn natural_completion_increments_once() {
    let store = Store::open_memory().unwrap();
    let mut timer = FocusTimer::new(1500);
    timer.start_at(T0);

    let mut increments = 0;
    for now in [T0 + 500_000, T0 + 1_000_000, T0 + 1_500_000, T0 + 1_501_000] {
        if let Some(Event::FocusCompleted { .. }) = timer.tick_at(now) {
            finalize(&store, "u1");
            increments += 1;
        }
    }
    // A stop right after natural completion must not finalize again.
    if timer.stop_at(T0 + 1_502_000).is_some() {
        finalize(&store, "u1");
        increments += 1;
    }

    assert_eq!(increments, 1);
    let stats = TaskStore::new(&store).get_stats("u1").unwrap();
    assert_eq!(stats.focus_sessions, 1);
}

#[test]
fn manual_stop_finalizes_like_completion() {
    let store = Store::open_memory().unwrap();
    let mut timer = FocusTimer::new(1500);
    timer.start_at(T0);
    timer.tick_at(T0 + 60_000);

    let stopped = timer.stop_at(T0 + 90_000);
    assert!(matches!(stopped, Some(Event::FocusStopped { .. })));
    finalize(&store, "u1");

    // The engine is finished; nothing further fires.
    assert!(timer.tick_at(T0 + 120_000).is_none());
    assert!(timer.stop_at(T0 + 120_000).is_none());

    let stats = TaskStore::new(&store).get_stats("u1").unwrap();
    assert_eq!(stats.focus_sessions, 1);
}

#[test]
fn countdown_survives_process_restart() {
    let store = Store::open_memory().unwrap();
    const KEY: &str = "ff.data.u1.focus";

    // "Process one" starts the countdown and persists the engine.
    let mut timer = FocusTimer::new(1500);
    timer.start_at(T0);
    store.set_json(KEY, &timer).unwrap();

    // "Process two" loads it 10 minutes later; remaining time reflects
    // the wall clock, not how often anyone ticked.
    let loaded = store.get_json::<FocusTimer>(KEY).unwrap();
    let mut timer: FocusTimer = match loaded {
        focusflow_core::Loaded::Present(t) => t,
        other => panic!("expected persisted engine, got {other:?}"),
    };
    assert_eq!(timer.state(), TimerState::Running);
    assert_eq!(timer.remaining_ms_at(T0 + 600_000), 900_000);

    // And completes on schedule.
    assert!(matches!(
        timer.tick_at(T0 + 1_500_000),
        Some(Event::FocusCompleted { .. })
    ));
}

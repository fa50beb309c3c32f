pub mod account;
pub mod config;
pub mod focus;
pub mod remind;
pub mod stats;
pub mod task;

use focusflow_core::auth::{AccountStore, User};
use focusflow_core::Store;

/// Resolve the active session user or fail with a login hint.
pub(crate) fn require_session(store: &Store) -> Result<User, Box<dyn std::error::Error>> {
    let accounts = AccountStore::new(store);
    accounts
        .current_session()?
        .ok_or_else(|| "not logged in (run `focusflow-cli account login`)".into())
}

/// Drive an async core operation to completion on a local runtime.
pub(crate) fn block_on<F: std::future::Future>(
    fut: F,
) -> Result<F::Output, Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(fut))
}

//! Task polling utilities
//!
//! Helpers for collecting results of async tasks spawned on the tokio runtime
//! from the egui frame loop, without blocking.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Take every finished task out of `tasks` and return its result.
///
/// Unfinished tasks stay in place, in their original order. Results come back
/// in spawn order, which is not necessarily completion order.
pub fn drain_finished<T>(tasks: &mut Vec<JoinHandle<T>>) -> Vec<Result<T, JoinError>> {
    let mut finished = Vec::new();
    let mut pending = Vec::with_capacity(tasks.len());

    for mut handle in tasks.drain(..) {
        if !handle.is_finished() {
            pending.push(handle);
            continue;
        }

        // Use now_or_never() since we know the task is finished
        match (&mut handle).now_or_never() {
            Some(result) => finished.push(result),
            None => {
                // Shouldn't happen since we checked is_finished()
                tracing::warn!("Task not ready despite is_finished()");
                pending.push(handle);
            }
        }
    }

    *tasks = pending;
    finished
}

/// Take the task out of `slot` once it has finished.
pub fn take_finished<T>(slot: &mut Option<JoinHandle<T>>) -> Option<Result<T, JoinError>> {
    if !slot.as_ref().is_some_and(|handle| handle.is_finished()) {
        return None;
    }

    let mut handle = slot.take()?;
    match (&mut handle).now_or_never() {
        Some(result) => Some(result),
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            *slot = Some(handle);
            None
        }
    }
}

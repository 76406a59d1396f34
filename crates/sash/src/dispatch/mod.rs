//! Cross-thread dispatch onto the render thread
//!
//! GLFW and OpenGL contexts may only be touched from one specific thread.
//! Every operation in this crate is therefore wrapped in a [`WorkItem`] and
//! handed to a [`RenderThread`], which executes items strictly in the order
//! they were accepted.
//!
//! Two calling conventions exist:
//!
//! - **Blocking** (`enqueue(true, ..)`): the caller parks until the item has
//!   run to completion on the render thread. Operations that produce a value
//!   (window creation, attribute queries) use this mode — the item writes its
//!   outputs into captured storage, and completion-before-release makes the
//!   read back on the caller side race-free.
//! - **Non-blocking** (`enqueue(false, ..)`): the caller continues as soon as
//!   the item is appended. Used for mutations whose result the caller never
//!   observes (set title, resize, swap buffers, destroy).
//!
//! Ordering is total FIFO across both modes: a non-blocking item enqueued
//! before a blocking one is guaranteed to have finished by the time the
//! blocking call returns.
//!
//! [`RenderLoop`] is the stock implementation; embedders that already own a
//! dedicated graphics thread can implement [`RenderThread`] on top of it
//! instead.

mod render_loop;

pub use render_loop::RenderLoop;

use std::sync::{Arc, Mutex};

/// A unit of deferred execution.
///
/// No identity, no priority, no cancellation handle: once accepted it runs
/// exactly once, after everything accepted before it and before everything
/// accepted after it.
pub type WorkItem = Box<dyn FnOnce() + Send + 'static>;

/// The single execution context permitted to touch native windowing state.
///
/// Implementations must service items on one dedicated thread, in acceptance
/// order, one at a time. Calling `enqueue` before the thread exists or after
/// it has shut down is a caller contract violation; implementations are
/// expected to treat it as fatal rather than recoverable.
pub trait RenderThread: Send + Sync {
    /// Submit `work` for execution on the render thread.
    ///
    /// With `blocking` set, does not return until `work` has finished
    /// executing; otherwise returns as soon as the item is queued.
    fn enqueue(&self, blocking: bool, work: WorkItem);
}

/// Run `work` on the render thread and return its result.
///
/// This is the captured-output discipline every blocking query in the crate
/// is built on: the closure writes its result into a shared slot while the
/// caller is parked, and the slot is read only after the blocking enqueue
/// has returned.
pub fn run_blocking<T, F>(thread: &dyn RenderThread, work: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let slot = Arc::new(Mutex::new(None));
    let out = Arc::clone(&slot);
    thread.enqueue(
        true,
        Box::new(move || {
            *out.lock().expect("result slot poisoned") = Some(work());
        }),
    );
    let result = slot
        .lock()
        .expect("result slot poisoned")
        .take();
    match result {
        Some(value) => value,
        None => unreachable!("blocking enqueue returned before its work item ran"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_blocking_returns_value() {
        let thread = RenderLoop::spawn();
        let value = run_blocking(&thread, || 17 * 3);
        assert_eq!(value, 51);
        thread.shutdown();
    }

    #[test]
    fn test_run_blocking_carries_errors_verbatim() {
        let thread = RenderLoop::spawn();
        let result: Result<u32, String> = run_blocking(&thread, || Err("no context".to_string()));
        assert_eq!(result, Err("no context".to_string()));
        thread.shutdown();
    }
}

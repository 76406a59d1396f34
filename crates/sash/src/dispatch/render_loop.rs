//! Stock render thread: one worker, one FIFO job queue
//!
//! The queue is a plain mpsc channel drained by a dedicated thread. Blocking
//! enqueues are released by a one-shot completion channel signalled after the
//! item has run, which is what gives callers the completion-before-release
//! happens-before edge.
//!
//! Lifecycle: `spawn` puts the loop in the running state; `shutdown` appends
//! a shutdown job (so everything already queued drains first) and joins the
//! worker. Enqueueing after shutdown is a contract violation and panics.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;
use std::thread::{self, JoinHandle, ThreadId};

use super::{RenderThread, WorkItem};

enum Job {
    Run(WorkItem),
    Shutdown,
}

const RUNNING: u8 = 0;
const DRAINING: u8 = 1;
const TERMINATED: u8 = 2;

/// A dedicated worker thread servicing a FIFO queue of [`WorkItem`]s.
///
/// Items execute in acceptance order, one at a time, with no reordering,
/// batching or dropping. An item that blocks (the native event wait) stalls
/// everything queued behind it; that is inherent to single-thread affinity
/// with the native library, and the event wait is exposed as its own
/// explicit blocking call for exactly that reason.
pub struct RenderLoop {
    jobs: Sender<Job>,
    worker: ThreadId,
    handle: Mutex<Option<JoinHandle<()>>>,
    state: AtomicU8,
}

impl RenderLoop {
    /// Spawn the worker thread and start servicing the queue.
    pub fn spawn() -> Self {
        let (jobs, queue) = mpsc::channel::<Job>();
        let handle = thread::Builder::new()
            .name("render-thread".into())
            .spawn(move || {
                while let Ok(job) = queue.recv() {
                    match job {
                        Job::Run(work) => work(),
                        Job::Shutdown => break,
                    }
                }
            })
            .expect("failed to spawn render thread");
        let worker = handle.thread().id();
        log::debug!("render thread started");
        Self {
            jobs,
            worker,
            handle: Mutex::new(Some(handle)),
            state: AtomicU8::new(RUNNING),
        }
    }

    /// Whether the calling thread is the worker itself.
    ///
    /// Event callbacks run on the worker, so code inside them can use this to
    /// tell that native state is already directly reachable.
    pub fn is_render_thread(&self) -> bool {
        thread::current().id() == self.worker
    }

    /// Drain everything already queued, then stop and join the worker.
    ///
    /// Idempotent; later calls return immediately.
    pub fn shutdown(&self) {
        if self
            .state
            .compare_exchange(RUNNING, DRAINING, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }
        // The shutdown job is FIFO like any other, so pending items run first.
        let _ = self.jobs.send(Job::Shutdown);
        let handle = self
            .handle
            .lock()
            .expect("render thread handle poisoned")
            .take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
        self.state.store(TERMINATED, Ordering::Release);
        log::debug!("render thread terminated");
    }

    fn submit(&self, job: Job) {
        assert!(
            self.state.load(Ordering::Acquire) == RUNNING,
            "enqueue on a terminated render thread"
        );
        if self.jobs.send(job).is_err() {
            panic!("enqueue on a terminated render thread");
        }
    }
}

impl RenderThread for RenderLoop {
    fn enqueue(&self, blocking: bool, work: WorkItem) {
        // A blocking call issued from the worker itself (from inside a work
        // item or an event callback) would wait on its own queue slot. Run it
        // inline instead; cross-thread FIFO is unaffected.
        if blocking && self.is_render_thread() {
            work();
            return;
        }
        if blocking {
            let (done, released) = mpsc::channel::<()>();
            self.submit(Job::Run(Box::new(move || {
                work();
                let _ = done.send(());
            })));
            released
                .recv()
                .expect("render thread terminated while a blocking call was in flight");
        } else {
            self.submit(Job::Run(work));
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::run_blocking;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn recorder() -> Arc<Mutex<Vec<usize>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn record(log: &Arc<Mutex<Vec<usize>>>, value: usize) -> WorkItem {
        let log = Arc::clone(log);
        Box::new(move || log.lock().unwrap().push(value))
    }

    #[test]
    fn test_executes_in_enqueue_order() {
        let thread = RenderLoop::spawn();
        let log = recorder();
        for i in 0..100 {
            thread.enqueue(false, record(&log, i));
        }
        // Blocking barrier: everything queued before it has run on return.
        thread.enqueue(true, Box::new(|| {}));
        assert_eq!(*log.lock().unwrap(), (0..100).collect::<Vec<_>>());
        thread.shutdown();
    }

    #[test]
    fn test_order_matches_acceptance_under_concurrent_producers() {
        let thread = Arc::new(RenderLoop::spawn());
        let log = recorder();
        // Ticket counter guarded together with the enqueue call so the index
        // sequence equals the acceptance sequence.
        let tickets = Arc::new(Mutex::new(0usize));

        let mut producers = Vec::new();
        for _ in 0..8 {
            let thread = Arc::clone(&thread);
            let log = Arc::clone(&log);
            let tickets = Arc::clone(&tickets);
            producers.push(thread::spawn(move || {
                for _ in 0..50 {
                    let mut next = tickets.lock().unwrap();
                    let index = *next;
                    *next += 1;
                    thread.enqueue(false, record(&log, index));
                }
            }));
        }
        for producer in producers {
            producer.join().unwrap();
        }
        thread.enqueue(true, Box::new(|| {}));
        assert_eq!(*log.lock().unwrap(), (0..400).collect::<Vec<_>>());
        thread.shutdown();
    }

    #[test]
    fn test_non_blocking_returns_before_item_runs() {
        let thread = RenderLoop::spawn();
        let start = Instant::now();
        thread.enqueue(false, Box::new(|| thread::sleep(Duration::from_millis(200))));
        assert!(
            start.elapsed() < Duration::from_millis(200),
            "non-blocking enqueue waited for its work item"
        );
        thread.shutdown();
    }

    #[test]
    fn test_blocking_waits_for_completion() {
        let thread = RenderLoop::spawn();
        let log = recorder();
        let sink = Arc::clone(&log);
        thread.enqueue(
            true,
            Box::new(move || {
                thread::sleep(Duration::from_millis(50));
                sink.lock().unwrap().push(1);
            }),
        );
        // Release happens strictly after completion.
        assert_eq!(*log.lock().unwrap(), vec![1]);
        thread.shutdown();
    }

    #[test]
    fn test_blocking_output_visible_from_many_producers() {
        let thread = Arc::new(RenderLoop::spawn());
        let mut producers = Vec::new();
        for i in 0..16usize {
            let thread = Arc::clone(&thread);
            producers.push(thread::spawn(move || {
                let value = run_blocking(&*thread, move || i * i);
                assert_eq!(value, i * i);
            }));
        }
        for producer in producers {
            producer.join().unwrap();
        }
        thread.shutdown();
    }

    #[test]
    fn test_fifo_across_mixed_modes() {
        let thread = RenderLoop::spawn();
        let log = recorder();
        let slow = Arc::clone(&log);
        thread.enqueue(
            false,
            Box::new(move || {
                thread::sleep(Duration::from_millis(50));
                slow.lock().unwrap().push(1);
            }),
        );
        thread.enqueue(true, record(&log, 2));
        // The non-blocking item completed before the blocking call returned.
        assert_eq!(*log.lock().unwrap(), vec![1, 2]);
        thread.shutdown();
    }

    #[test]
    fn test_blocking_from_render_thread_runs_inline() {
        let thread = Arc::new(RenderLoop::spawn());
        let inner = Arc::clone(&thread);
        let nested = run_blocking(&*thread, move || {
            let mut seen = 0;
            // Without the inline path this would deadlock on its own queue.
            inner.enqueue(true, Box::new(|| {}));
            seen += 1;
            seen
        });
        assert_eq!(nested, 1);
        thread.shutdown();
    }

    #[test]
    fn test_shutdown_drains_pending_items() {
        let thread = RenderLoop::spawn();
        let log = recorder();
        for i in 0..10 {
            thread.enqueue(false, record(&log, i));
        }
        thread.shutdown();
        assert_eq!(*log.lock().unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    #[should_panic(expected = "terminated render thread")]
    fn test_enqueue_after_shutdown_panics() {
        let thread = RenderLoop::spawn();
        thread.shutdown();
        thread.enqueue(false, Box::new(|| {}));
    }
}

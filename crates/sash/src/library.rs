//! Library lifecycle and global operations
//!
//! [`Library`] is the context object a binding instance lives in: it owns the
//! route to the render thread and the event waker, and every global
//! operation (window creation, event pumping, hints, swap interval) goes
//! through it. One instance exists per render thread; there are no process
//! globals, so independent instances on different render threads do not
//! interfere.

use std::sync::Arc;

use thiserror::Error;

use crate::backend::{self, BackendFactory, EventWaker, NativeError};
use crate::context::ContextWatcher;
use crate::dispatch::{run_blocking, RenderThread};
use crate::hints::{SwapInterval, WindowHint};
use crate::session::{self, Pump, Session};
use crate::window::{Monitor, Window};

/// Errors from [`Library::init`].
#[derive(Error, Debug)]
pub enum InitError {
    /// A binding instance already exists on this render thread.
    #[error("a binding instance is already initialized on this render thread")]
    AlreadyInitialized,

    /// The native library failed to start.
    #[error(transparent)]
    Native(#[from] NativeError),
}

/// Errors from window creation.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The native layer could not create the window or its context.
    #[error(transparent)]
    Native(#[from] NativeError),
}

/// An initialized binding instance.
///
/// Created by [`Library::init`], retired by [`Library::terminate`]. All
/// operations may be called from any thread; they are marshalled onto the
/// render thread supplied at init.
pub struct Library {
    render: Arc<dyn RenderThread>,
    waker: Arc<dyn EventWaker>,
}

impl Library {
    /// Initialize the binding with the GLFW backend.
    ///
    /// Expects a render thread to execute commands on. The watcher is
    /// notified whenever a context becomes current or is detached; it should
    /// be provided by the GL bindings in use (pass
    /// [`NullWatcher`](crate::context::NullWatcher) when there are none).
    ///
    /// Native initialization runs as one blocking work item, so failures
    /// surface synchronously here.
    pub fn init(
        render: Arc<dyn RenderThread>,
        watcher: Arc<dyn ContextWatcher>,
    ) -> Result<Self, InitError> {
        Self::init_with_backend(render, watcher, Box::new(backend::glfw::boot))
    }

    /// Initialize the binding with a caller-supplied native backend.
    ///
    /// The factory runs on the render thread; the backend it builds never
    /// leaves that thread.
    pub fn init_with_backend(
        render: Arc<dyn RenderThread>,
        watcher: Arc<dyn ContextWatcher>,
        factory: BackendFactory,
    ) -> Result<Self, InitError> {
        let render_for_session = Arc::clone(&render);
        let waker = run_blocking(&*render, move || -> Result<Arc<dyn EventWaker>, InitError> {
            if session::is_installed() {
                return Err(InitError::AlreadyInitialized);
            }
            let (api, waker) = factory()?;
            session::install(Session {
                api,
                windows: slotmap::SlotMap::with_key(),
                monitors: slotmap::SlotMap::with_key(),
                watcher,
                render: render_for_session,
                current: None,
            });
            Ok(waker)
        })?;
        log::info!("windowing library initialized");
        Ok(Self { render, waker })
    }

    /// Destroy all remaining windows, free native resources and retire the
    /// binding instance.
    ///
    /// Fire-and-forget: callers need no return value, and consuming the
    /// handle makes use-after-terminate unrepresentable through it.
    pub fn terminate(self) {
        log::info!("windowing library terminating");
        self.render.enqueue(false, Box::new(session::teardown));
    }

    /// Create a window and its associated context.
    ///
    /// Fullscreen on `monitor` if given; sharing context objects with
    /// `share` if given. Creation parameters beyond size and title are
    /// controlled through [`window_hint`](Self::window_hint).
    pub fn create_window(
        &self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<&Monitor>,
        share: Option<&Window>,
    ) -> Result<Window, WindowError> {
        let monitor = monitor.map(Monitor::key);
        let share = share.map(Window::key);
        let title = title.to_string();
        let key = run_blocking(&*self.render, move || {
            session::create_window(width, height, &title, monitor, share)
        })?;
        Ok(Window::from_parts(key, Arc::clone(&self.render)))
    }

    /// The primary monitor, if any is connected.
    pub fn primary_monitor(&self) -> Option<Monitor> {
        let key = run_blocking(&*self.render, || {
            session::with(|s| {
                s.api
                    .primary_monitor()
                    .map(|monitor| s.monitors.insert(monitor))
            })
        });
        key.map(|key| Monitor::from_parts(key, Arc::clone(&self.render)))
    }

    /// Apply a hint to subsequently created windows.
    pub fn window_hint(&self, hint: WindowHint) {
        self.render.enqueue(
            false,
            Box::new(move || session::with(|s| s.api.window_hint(&hint))),
        );
    }

    /// Reset all window hints to their default values.
    pub fn default_window_hints(&self) {
        self.render.enqueue(
            false,
            Box::new(|| session::with(|s| s.api.default_window_hints())),
        );
    }

    /// Process pending events and return without waiting.
    ///
    /// Registered handlers fire on the render thread before the pump item
    /// completes.
    pub fn poll_events(&self) {
        self.render
            .enqueue(false, Box::new(|| session::pump_events(Pump::Poll)));
    }

    /// Park the render thread until at least one event has arrived, process
    /// events, then return.
    ///
    /// This blocks the entire dispatch pipeline by design: items enqueued
    /// meanwhile queue up and run once the wait returns. Use
    /// [`post_empty_event`](Self::post_empty_event) to wake the wait without
    /// a real event.
    pub fn wait_events(&self) {
        self.render
            .enqueue(true, Box::new(|| session::pump_events(Pump::Wait)));
    }

    /// Post an empty event to the native queue, waking a render thread
    /// parked in [`wait_events`](Self::wait_events).
    ///
    /// The one operation that does not dispatch: it is a direct, thread-safe
    /// native call — it has to be, since the queue it would dispatch onto is
    /// stalled behind the wait it exists to interrupt.
    pub fn post_empty_event(&self) {
        self.waker.post_empty_event();
    }

    /// Set the swap interval for the current context.
    pub fn set_swap_interval(&self, interval: SwapInterval) {
        self.render.enqueue(
            false,
            Box::new(move || session::with(|s| s.api.set_swap_interval(interval))),
        );
    }

    /// Detach the current context from the render thread.
    ///
    /// The context watcher is notified synchronously, inside the same work
    /// item, strictly after the native call.
    pub fn detach_current_context(&self) {
        self.render
            .enqueue(false, Box::new(session::detach_current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{self, MockShared};
    use crate::context::NullWatcher;
    use crate::dispatch::RenderLoop;
    use crate::events::WindowEvent;
    use crate::input::{Action, Key, Modifiers};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn boot() -> (Arc<RenderLoop>, Arc<MockShared>, Library) {
        let render = Arc::new(RenderLoop::spawn());
        let shared = MockShared::new();
        let library = Library::init_with_backend(
            render.clone() as Arc<dyn crate::dispatch::RenderThread>,
            Arc::new(NullWatcher),
            mock::factory(Arc::clone(&shared)),
        )
        .expect("mock init failed");
        (render, shared, library)
    }

    /// Barrier: everything enqueued before this has executed on return.
    fn sync(render: &RenderLoop) {
        use crate::dispatch::RenderThread as _;
        render.enqueue(true, Box::new(|| {}));
    }

    #[test]
    fn test_init_reports_native_failure() {
        let render = Arc::new(RenderLoop::spawn());
        let shared = MockShared::new();
        shared.fail_init();
        let result = Library::init_with_backend(
            render.clone() as Arc<dyn crate::dispatch::RenderThread>,
            Arc::new(NullWatcher),
            mock::factory(Arc::clone(&shared)),
        );
        assert!(matches!(result, Err(InitError::Native(_))));
        render.shutdown();
    }

    #[test]
    fn test_second_init_on_same_thread_is_rejected() {
        let (render, shared, library) = boot();
        let result = Library::init_with_backend(
            render.clone() as Arc<dyn crate::dispatch::RenderThread>,
            Arc::new(NullWatcher),
            mock::factory(Arc::clone(&shared)),
        );
        assert!(matches!(result, Err(InitError::AlreadyInitialized)));
        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_create_window_fails_verbatim() {
        let (render, shared, library) = boot();
        shared.fail_create();
        let result = library.create_window(640, 480, "doomed", None, None);
        assert!(matches!(result, Err(WindowError::Native(_))));
        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_events_relay_to_registered_handler() {
        let (render, shared, library) = boot();
        let window = library.create_window(640, 480, "events", None, None).unwrap();

        let received = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        window.set_key_callback(move |w, key, scancode, action, mods| {
            sink.lock()
                .unwrap()
                .push((w.id(), key, scancode, action, mods));
        });
        sync(&render);

        shared.push_event(
            mock::FIRST_WINDOW_ID,
            WindowEvent::Key(Key::Escape, 9, Action::Press, Modifiers::SHIFT),
        );
        library.poll_events();
        sync(&render);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (id, key, scancode, action, mods) = &received[0];
        assert_eq!(*id, window.id());
        assert_eq!(*key, Key::Escape);
        assert_eq!(*scancode, 9);
        assert_eq!(*action, Action::Press);
        assert_eq!(*mods, Modifiers::SHIFT);

        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_registering_replaces_previous_handler() {
        let (render, shared, library) = boot();
        let window = library.create_window(640, 480, "events", None, None).unwrap();

        let fired = Arc::new(std::sync::Mutex::new(Vec::new()));
        let first = Arc::clone(&fired);
        window.set_close_callback(move |_| first.lock().unwrap().push("first"));
        let second = Arc::clone(&fired);
        window.set_close_callback(move |_| second.lock().unwrap().push("second"));
        sync(&render);

        shared.push_event(mock::FIRST_WINDOW_ID, WindowEvent::Close);
        library.poll_events();
        sync(&render);

        // The replaced handler never fires again.
        assert_eq!(*fired.lock().unwrap(), vec!["second"]);
        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_destroyed_window_gets_no_events_and_no_native_calls() {
        let (render, shared, library) = boot();
        let window = library.create_window(640, 480, "doomed", None, None).unwrap();

        let fired = Arc::new(std::sync::Mutex::new(0usize));
        let sink = Arc::clone(&fired);
        window.set_refresh_callback(move |_| *sink.lock().unwrap() += 1);
        sync(&render);

        window.destroy();
        sync(&render);
        assert!(shared.was_destroyed(mock::FIRST_WINDOW_ID));

        // Mutations against the dead handle are dropped before reaching the
        // native layer.
        window.set_title("ghost");
        shared.push_event(mock::FIRST_WINDOW_ID, WindowEvent::Refresh);
        library.poll_events();
        sync(&render);

        assert_eq!(*fired.lock().unwrap(), 0);
        assert!(!shared.log_contains("set_title"));
        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_make_current_notifies_watcher_after_native_call() {
        let render = Arc::new(RenderLoop::spawn());
        let shared = MockShared::new();
        let watcher = Arc::new(mock::RecordingWatcher::new(Arc::clone(&shared)));
        let library = Library::init_with_backend(
            render.clone() as Arc<dyn crate::dispatch::RenderThread>,
            watcher,
            mock::factory(Arc::clone(&shared)),
        )
        .unwrap();
        let window = library.create_window(640, 480, "gl", None, None).unwrap();

        window.make_context_current();
        library.detach_current_context();
        sync(&render);

        // Native transition strictly precedes the watcher notification,
        // within one work item each.
        let order = shared.log();
        let make = order
            .iter()
            .position(|entry| entry == "native:make_current(1)")
            .unwrap();
        let told = order
            .iter()
            .position(|entry| entry == "watcher:on_make_current(Some(1))")
            .unwrap();
        let detach = order
            .iter()
            .position(|entry| entry == "native:detach_current")
            .unwrap();
        let told_detach = order
            .iter()
            .position(|entry| entry == "watcher:on_detach")
            .unwrap();
        assert!(make < told);
        assert!(told < detach, "watcher told before the next queued item ran");
        assert!(detach < told_detach);

        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_window_queries_round_trip() {
        let (render, shared, library) = boot();
        let window = library.create_window(800, 600, "queries", None, None).unwrap();

        assert_eq!(window.size(), (800, 600));
        assert_eq!(window.framebuffer_size(), (800, 600));
        assert!(!window.should_close());
        window.set_should_close(true);
        assert!(window.should_close());

        window.set_title("renamed");
        // FIFO: the mutation above has executed by the time a blocking
        // query returns.
        assert_eq!(window.size(), (800, 600));
        assert!(shared.log_contains("set_title(1, \"renamed\")"));

        window.set_clipboard_string("copied");
        assert_eq!(window.clipboard_string(), Some("copied".to_string()));

        assert_eq!(window.key_state(Key::Space), Action::Release);

        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_primary_monitor_and_fullscreen_creation() {
        let (render, shared, library) = boot();
        let monitor = library.primary_monitor().expect("mock has a monitor");
        assert_eq!(monitor.name(), Some("Mock Display".to_string()));

        let window = library
            .create_window(1920, 1080, "fullscreen", Some(&monitor), None)
            .unwrap();
        assert!(shared.log_contains("create_window(1920x1080, fullscreen on Mock Display)"));
        drop(window);

        library.terminate();
        render.shutdown();
    }

    #[test]
    fn test_wait_events_wakes_on_post_empty_event() {
        let (render, shared, library) = boot();
        let library = Arc::new(library);
        let _window = library.create_window(640, 480, "waiting", None, None).unwrap();

        let waiter = {
            let library = Arc::clone(&library);
            thread::spawn(move || library.wait_events())
        };
        // Give the wait item time to park the render thread.
        thread::sleep(Duration::from_millis(50));
        assert!(!waiter.is_finished());

        library.post_empty_event();
        waiter.join().expect("wait_events did not return");
        assert!(shared.log_contains("wait_events"));

        match Arc::try_unwrap(library) {
            Ok(library) => library.terminate(),
            Err(_) => unreachable!("waiter thread still holds the library"),
        }
        render.shutdown();
    }
}

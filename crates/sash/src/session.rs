//! Render-thread-owned binding state
//!
//! All native objects live here, in a thread local of the render thread, and
//! are only ever reached from inside work items. Handles given to callers are
//! slotmap keys; a key whose slot is gone means the caller kept using a
//! destroyed resource.
//!
//! The event relay also lives here: after a native poll/wait, per-window
//! event queues are drained and delivered to the registered handlers without
//! re-dispatch — handlers run on the render thread, inside the same work item
//! that pumped the events.

use std::cell::RefCell;
use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use crate::backend::{NativeApi, NativeError, NativeMonitor, NativeWindow};
use crate::context::ContextWatcher;
use crate::dispatch::RenderThread;
use crate::events::WindowEvent;
use crate::window::callbacks::WindowCallbacks;
use crate::window::Window;

new_key_type! {
    /// Registry key identifying a window on the render thread.
    pub struct WindowKey;
    /// Registry key identifying a monitor on the render thread.
    pub struct MonitorKey;
}

pub(crate) struct WindowSlot {
    pub native: Box<dyn NativeWindow>,
    pub callbacks: WindowCallbacks,
}

pub(crate) struct Session {
    pub api: Box<dyn NativeApi>,
    pub windows: SlotMap<WindowKey, WindowSlot>,
    pub monitors: SlotMap<MonitorKey, Box<dyn NativeMonitor>>,
    pub watcher: Arc<dyn ContextWatcher>,
    pub render: Arc<dyn RenderThread>,
    pub current: Option<WindowKey>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Whether a session is installed on this thread.
pub(crate) fn is_installed() -> bool {
    SESSION.with(|cell| cell.borrow().is_some())
}

/// Install the session for this thread. Fails if one is already installed.
pub(crate) fn install(session: Session) -> bool {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(session);
        true
    })
}

/// Tear down the session, destroying windows before the native layer.
pub(crate) fn teardown() {
    let session = SESSION.with(|cell| cell.borrow_mut().take());
    if let Some(mut session) = session {
        session.windows.clear();
        session.monitors.clear();
        session.api.shutdown();
        log::info!("windowing session terminated");
    } else {
        log::warn!("terminate without an initialized session");
    }
}

/// Run `f` against the session; panics if the binding was used before init
/// or after terminate (a caller contract violation).
pub(crate) fn with<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot
            .as_mut()
            .expect("binding used before init or after terminate");
        f(session)
    })
}

/// Run `f` against the session if one is installed.
fn try_with<R>(f: impl FnOnce(&mut Session) -> R) -> Option<R> {
    SESSION.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Blocking-query access to one window's native object.
///
/// A missing slot means the handle outlived `destroy`; that is a programming
/// error and fatal.
pub(crate) fn with_window<R>(key: WindowKey, f: impl FnOnce(&mut dyn NativeWindow) -> R) -> R {
    with(|session| {
        let slot = session
            .windows
            .get_mut(key)
            .expect("window handle used after destroy");
        f(slot.native.as_mut())
    })
}

/// Fire-and-forget access to one window's native object.
///
/// There is no caller left to report to, so a missing slot or session is
/// logged and the mutation dropped.
pub(crate) fn mutate_window(key: WindowKey, op: &str, f: impl FnOnce(&mut dyn NativeWindow)) {
    let found = try_with(|session| {
        if let Some(slot) = session.windows.get_mut(key) {
            f(slot.native.as_mut());
            true
        } else {
            false
        }
    });
    if found != Some(true) {
        log::warn!("dropped {op}: window no longer exists");
    }
}

/// Replace one handler field; used by every callback setter.
pub(crate) fn set_callback(key: WindowKey, f: impl FnOnce(&mut WindowCallbacks)) {
    let found = try_with(|session| {
        if let Some(slot) = session.windows.get_mut(key) {
            f(&mut slot.callbacks);
            true
        } else {
            false
        }
    });
    if found != Some(true) {
        log::warn!("dropped callback registration: window no longer exists");
    }
}

/// Blocking-query access to one monitor's native object.
pub(crate) fn with_monitor<R>(key: MonitorKey, f: impl FnOnce(&dyn NativeMonitor) -> R) -> R {
    with(|session| {
        let monitor = session
            .monitors
            .get(key)
            .expect("monitor handle used after terminate");
        f(monitor.as_ref())
    })
}

pub(crate) fn create_window(
    width: u32,
    height: u32,
    title: &str,
    monitor: Option<MonitorKey>,
    share: Option<WindowKey>,
) -> Result<WindowKey, NativeError> {
    with(|session| {
        let Session {
            api,
            windows,
            monitors,
            ..
        } = session;
        let monitor = monitor.map(|key| {
            monitors
                .get(key)
                .expect("monitor handle used after terminate")
                .as_ref()
        });
        let share = share.map(|key| {
            windows
                .get(key)
                .expect("share window handle used after destroy")
                .native
                .as_ref()
        });
        let native = api.create_window(width, height, title, monitor, share)?;
        let key = windows.insert(WindowSlot {
            native,
            callbacks: WindowCallbacks::default(),
        });
        log::debug!("created window {:?} ({width}x{height})", key);
        Ok(key)
    })
}

pub(crate) fn destroy_window(key: WindowKey) {
    let found = try_with(|session| {
        if session.current == Some(key) {
            session.current = None;
        }
        session.windows.remove(key).is_some()
    });
    match found {
        Some(true) => log::debug!("destroyed window {:?}", key),
        _ => log::warn!("dropped destroy: window no longer exists"),
    }
}

/// Make `key`'s context current, then notify the watcher.
///
/// Both steps happen inside the single work item that called this, native
/// call strictly first, so the watcher never observes a context the native
/// layer has not switched to yet.
pub(crate) fn make_current(key: WindowKey) {
    let notified = try_with(|session| {
        let Some(slot) = session.windows.get_mut(key) else {
            return None;
        };
        let context = slot.native.make_current();
        session.current = Some(key);
        Some((Arc::clone(&session.watcher), context))
    });
    match notified.flatten() {
        Some((watcher, context)) => watcher.on_make_current(context),
        None => log::warn!("dropped make_context_current: window or session no longer exists"),
    }
}

/// Detach the current context, then notify the watcher.
pub(crate) fn detach_current() {
    let watcher = try_with(|session| {
        session.api.detach_current();
        session.current = None;
        Arc::clone(&session.watcher)
    });
    match watcher {
        Some(watcher) => watcher.on_detach(),
        None => log::warn!("dropped detach_current_context: no session"),
    }
}

/// How the relay should obtain events from the native layer.
#[derive(Clone, Copy)]
pub(crate) enum Pump {
    /// Process whatever is pending and return.
    Poll,
    /// Park until something arrives (or an empty event is posted).
    Wait,
}

/// Pump the native event queue and relay everything drained to the
/// registered handlers.
pub(crate) fn pump_events(mode: Pump) {
    let drained = try_with(|session| {
        match mode {
            Pump::Poll => session.api.poll_events(),
            Pump::Wait => session.api.wait_events(),
        }
        let mut drained: Vec<(WindowKey, WindowEvent)> = Vec::new();
        for (key, slot) in &mut session.windows {
            for event in slot.native.drain_events() {
                drained.push((key, event));
            }
        }
        (Arc::clone(&session.render), drained)
    });
    let Some((render, drained)) = drained else {
        log::warn!("dropped event pump: no session");
        return;
    };
    for (key, event) in drained {
        deliver(&render, key, event);
    }
}

/// Invoke the handler registered for `event`'s kind, if any.
///
/// The handler is taken out of the registry for the duration of the call so
/// it can itself reach back into the binding (including re-registering); it
/// is put back afterwards unless it was replaced meanwhile.
fn deliver(render: &Arc<dyn RenderThread>, key: WindowKey, event: WindowEvent) {
    use WindowEvent as Ev;

    macro_rules! relay {
        ($field:ident, |$cb:ident, $w:ident| $call:expr) => {{
            let taken = try_with(|session| {
                session
                    .windows
                    .get_mut(key)
                    .and_then(|slot| slot.callbacks.$field.take())
            })
            .flatten();
            if let Some(mut $cb) = taken {
                let $w = Window::from_parts(key, Arc::clone(render));
                $call;
                try_with(|session| {
                    if let Some(slot) = session.windows.get_mut(key) {
                        if slot.callbacks.$field.is_none() {
                            slot.callbacks.$field = Some($cb);
                        }
                    }
                });
            }
        }};
    }

    match event {
        Ev::Pos(x, y) => relay!(pos, |cb, w| cb(&w, x, y)),
        Ev::Size(width, height) => relay!(size, |cb, w| cb(&w, width, height)),
        Ev::FramebufferSize(width, height) => {
            relay!(framebuffer_size, |cb, w| cb(&w, width, height));
        }
        Ev::Close => relay!(close, |cb, w| cb(&w)),
        Ev::Refresh => relay!(refresh, |cb, w| cb(&w)),
        Ev::Focus(focused) => relay!(focus, |cb, w| cb(&w, focused)),
        Ev::Iconify(iconified) => relay!(iconify, |cb, w| cb(&w, iconified)),
        Ev::Maximize(maximized) => relay!(maximize, |cb, w| cb(&w, maximized)),
        Ev::ContentScale(x, y) => relay!(content_scale, |cb, w| cb(&w, x, y)),
        Ev::MouseButton(button, action, mods) => {
            relay!(mouse_button, |cb, w| cb(&w, button, action, mods));
        }
        Ev::CursorPos(x, y) => relay!(cursor_pos, |cb, w| cb(&w, x, y)),
        Ev::CursorEnter(entered) => relay!(cursor_enter, |cb, w| cb(&w, entered)),
        Ev::Scroll(x, y) => relay!(scroll, |cb, w| cb(&w, x, y)),
        Ev::Key(k, scancode, action, mods) => {
            relay!(key, |cb, w| cb(&w, k, scancode, action, mods));
        }
        Ev::Char(ch) => relay!(char_input, |cb, w| cb(&w, ch)),
        Ev::CharModifiers(ch, mods) => relay!(char_mods, |cb, w| cb(&w, ch, mods)),
        Ev::FileDrop(paths) => relay!(file_drop, |cb, w| cb(&w, paths)),
    }
}

//! Scripted native layer for tests
//!
//! Records every native and watcher call into one ordered log (so tests can
//! assert cross-collaborator ordering), lets tests inject events and
//! scripted failures, and implements `wait_events` with a real park that
//! only an injected event or the waker can interrupt.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};

use crate::backend::{
    BackendFactory, EventWaker, NativeApi, NativeError, NativeMonitor, NativeWindow,
};
use crate::context::{ContextId, ContextWatcher};
use crate::events::WindowEvent;
use crate::hints::{SwapInterval, WindowAttrib, WindowHint};
use crate::input::{Action, CursorMode, Key, MouseButton};

/// Id the mock assigns to the first created window.
pub(crate) const FIRST_WINDOW_ID: u64 = 1;

#[derive(Default)]
struct State {
    log: Vec<String>,
    pending: Vec<(u64, WindowEvent)>,
    destroyed: Vec<u64>,
    fail_init: bool,
    fail_create: bool,
    wake: bool,
}

/// Test-side handle to the mock's state, shared with the backend objects
/// living on the render thread.
pub(crate) struct MockShared {
    state: Mutex<State>,
    arrived: Condvar,
}

impl MockShared {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State::default()),
            arrived: Condvar::new(),
        })
    }

    pub fn fail_init(&self) {
        self.state.lock().unwrap().fail_init = true;
    }

    pub fn fail_create(&self) {
        self.state.lock().unwrap().fail_create = true;
    }

    /// Queue an event for delivery on the next poll/wait.
    pub fn push_event(&self, window: u64, event: WindowEvent) {
        self.state.lock().unwrap().pending.push((window, event));
        self.arrived.notify_all();
    }

    pub fn log(&self) -> Vec<String> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn log_contains(&self, needle: &str) -> bool {
        self.log().iter().any(|entry| entry.contains(needle))
    }

    pub fn was_destroyed(&self, window: u64) -> bool {
        self.state.lock().unwrap().destroyed.contains(&window)
    }

    fn record(&self, entry: String) {
        self.state.lock().unwrap().log.push(entry);
    }
}

/// Backend factory wiring a [`MockShared`] into `init_with_backend`.
pub(crate) fn factory(shared: Arc<MockShared>) -> BackendFactory {
    Box::new(move || {
        if shared.state.lock().unwrap().fail_init {
            return Err(NativeError::Init("scripted init failure".to_string()));
        }
        shared.record("init".to_string());
        let waker = Arc::new(MockWaker {
            shared: Arc::clone(&shared),
        });
        let api = MockApi {
            shared,
            next_id: FIRST_WINDOW_ID,
        };
        Ok((Box::new(api), waker))
    })
}

struct MockApi {
    shared: Arc<MockShared>,
    next_id: u64,
}

impl NativeApi for MockApi {
    fn window_hint(&mut self, hint: &WindowHint) {
        self.shared.record(format!("window_hint({hint:?})"));
    }

    fn default_window_hints(&mut self) {
        self.shared.record("default_window_hints".to_string());
    }

    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<&dyn NativeMonitor>,
        share: Option<&dyn NativeWindow>,
    ) -> Result<Box<dyn NativeWindow>, NativeError> {
        if self.shared.state.lock().unwrap().fail_create {
            return Err(NativeError::WindowCreation(
                "scripted creation failure".to_string(),
            ));
        }
        let placement = match monitor.and_then(|m| m.name()) {
            Some(name) => format!("fullscreen on {name}"),
            None => "windowed".to_string(),
        };
        let sharing = match share.and_then(|w| w.as_any().downcast_ref::<MockWindow>()) {
            Some(partner) => format!(", sharing with {}", partner.id),
            None => String::new(),
        };
        let id = self.next_id;
        self.next_id += 1;
        self.shared.record(format!(
            "create_window({width}x{height}, {placement}{sharing})"
        ));
        Ok(Box::new(MockWindow {
            id,
            shared: Arc::clone(&self.shared),
            title: title.to_string(),
            pos: (0, 0),
            size: (width as i32, height as i32),
            opacity: 1.0,
            should_close: false,
            attribs: HashMap::new(),
            cursor_mode: CursorMode::Normal,
            sticky_keys: false,
            sticky_mouse_buttons: false,
            clipboard: None,
        }))
    }

    fn primary_monitor(&mut self) -> Option<Box<dyn NativeMonitor>> {
        self.shared.record("primary_monitor".to_string());
        Some(Box::new(MockMonitor {
            name: "Mock Display".to_string(),
        }))
    }

    fn poll_events(&mut self) {
        self.shared.record("poll_events".to_string());
    }

    fn wait_events(&mut self) {
        self.shared.record("wait_events".to_string());
        let mut state = self.shared.state.lock().unwrap();
        while !state.wake && state.pending.is_empty() {
            state = self.shared.arrived.wait(state).unwrap();
        }
        state.wake = false;
    }

    fn set_swap_interval(&mut self, interval: SwapInterval) {
        self.shared.record(format!("set_swap_interval({interval:?})"));
    }

    fn detach_current(&mut self) {
        self.shared.record("native:detach_current".to_string());
    }

    fn shutdown(&mut self) {
        self.shared.record("shutdown".to_string());
    }
}

struct MockWindow {
    id: u64,
    shared: Arc<MockShared>,
    title: String,
    pos: (i32, i32),
    size: (i32, i32),
    opacity: f32,
    should_close: bool,
    attribs: HashMap<WindowAttrib, bool>,
    cursor_mode: CursorMode,
    sticky_keys: bool,
    sticky_mouse_buttons: bool,
    clipboard: Option<String>,
}

impl NativeWindow for MockWindow {
    fn drain_events(&mut self) -> Vec<WindowEvent> {
        let mut state = self.shared.state.lock().unwrap();
        let (mine, rest): (Vec<_>, Vec<_>) = state
            .pending
            .drain(..)
            .partition(|(window, _)| *window == self.id);
        state.pending = rest;
        mine.into_iter().map(|(_, event)| event).collect()
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn pos(&self) -> (i32, i32) {
        self.pos
    }

    fn set_pos(&mut self, x: i32, y: i32) {
        self.shared.record(format!("set_pos({}, {x}, {y})", self.id));
        self.pos = (x, y);
    }

    fn size(&self) -> (i32, i32) {
        self.size
    }

    fn set_size(&mut self, width: i32, height: i32) {
        self.shared
            .record(format!("set_size({}, {width}, {height})", self.id));
        self.size = (width, height);
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.size
    }

    fn content_scale(&self) -> (f32, f32) {
        (1.0, 1.0)
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn set_title(&mut self, title: &str) {
        self.shared
            .record(format!("set_title({}, {title:?})", self.id));
        self.title = title.to_string();
    }

    fn iconify(&mut self) {
        self.shared.record(format!("iconify({})", self.id));
    }

    fn restore(&mut self) {
        self.shared.record(format!("restore({})", self.id));
    }

    fn show(&mut self) {
        self.shared.record(format!("show({})", self.id));
    }

    fn hide(&mut self) {
        self.shared.record(format!("hide({})", self.id));
    }

    fn attrib(&self, attrib: WindowAttrib) -> bool {
        self.attribs.get(&attrib).copied().unwrap_or(false)
    }

    fn set_attrib(&mut self, attrib: WindowAttrib, value: bool) {
        self.shared
            .record(format!("set_attrib({}, {attrib:?}, {value})", self.id));
        self.attribs.insert(attrib, value);
    }

    fn key_state(&self, _key: Key) -> Action {
        Action::Release
    }

    fn mouse_button_state(&self, _button: MouseButton) -> Action {
        Action::Release
    }

    fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor_mode = mode;
    }

    fn sticky_keys(&self) -> bool {
        self.sticky_keys
    }

    fn set_sticky_keys(&mut self, enabled: bool) {
        self.sticky_keys = enabled;
    }

    fn sticky_mouse_buttons(&self) -> bool {
        self.sticky_mouse_buttons
    }

    fn set_sticky_mouse_buttons(&mut self, enabled: bool) {
        self.sticky_mouse_buttons = enabled;
    }

    fn clipboard_string(&mut self) -> Option<String> {
        self.clipboard.clone()
    }

    fn set_clipboard_string(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn swap_buffers(&mut self) {
        self.shared.record(format!("swap_buffers({})", self.id));
    }

    fn make_current(&mut self) -> Option<ContextId> {
        self.shared
            .record(format!("native:make_current({})", self.id));
        Some(ContextId::new(self.id))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.shared.record(format!("destroy({})", self.id));
        self.shared.state.lock().unwrap().destroyed.push(self.id);
    }
}

struct MockMonitor {
    name: String,
}

impl NativeMonitor for MockMonitor {
    fn name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct MockWaker {
    shared: Arc<MockShared>,
}

impl EventWaker for MockWaker {
    fn post_empty_event(&self) {
        let mut state = self.shared.state.lock().unwrap();
        state.wake = true;
        self.shared.arrived.notify_all();
    }
}

/// Watcher that records notifications into the mock's ordered log.
pub(crate) struct RecordingWatcher {
    shared: Arc<MockShared>,
}

impl RecordingWatcher {
    pub fn new(shared: Arc<MockShared>) -> Self {
        Self { shared }
    }
}

impl ContextWatcher for RecordingWatcher {
    fn on_make_current(&self, context: Option<ContextId>) {
        self.shared.record(format!(
            "watcher:on_make_current({:?})",
            context.map(ContextId::raw)
        ));
    }

    fn on_detach(&self) {
        self.shared.record("watcher:on_detach".to_string());
    }
}

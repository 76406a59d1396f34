//! High-level window and monitor handles
//!
//! A [`Window`] is a slotmap key plus a route to the render thread. Cloning
//! one is cheap and does not duplicate the native resource. After
//! [`Window::destroy`] has executed, continuing to use any clone of the
//! handle is a caller contract violation: queries panic on the render
//! thread, mutations are logged and dropped.

use std::path::PathBuf;
use std::sync::Arc;

use slotmap::Key as _;

use crate::dispatch::{run_blocking, RenderThread};
use crate::input::{Action, CursorMode, Key, Modifiers, MouseButton};
use crate::hints::WindowAttrib;
use crate::session::{self, MonitorKey, WindowKey};
use crate::backend::NativeWindow;
use crate::window::callbacks::{
    CharCallback, CharModsCallback, CloseCallback, ContentScaleCallback, CursorEnterCallback,
    CursorPosCallback, FileDropCallback, FocusCallback, FramebufferSizeCallback, IconifyCallback,
    KeyCallback, MaximizeCallback, MouseButtonCallback, PosCallback, RefreshCallback,
    ScrollCallback, SizeCallback,
};

/// Handle to a window and its associated context.
#[derive(Clone)]
pub struct Window {
    key: WindowKey,
    render: Arc<dyn RenderThread>,
}

impl Window {
    pub(crate) fn from_parts(key: WindowKey, render: Arc<dyn RenderThread>) -> Self {
        Self { key, render }
    }

    pub(crate) fn key(&self) -> WindowKey {
        self.key
    }

    /// Stable diagnostic id for this window, unique for the lifetime of the
    /// session. Useful for labelling log output.
    pub fn id(&self) -> u64 {
        self.key.data().as_ffi()
    }

    fn mutate(&self, op: &'static str, f: impl FnOnce(&mut dyn NativeWindow) + Send + 'static) {
        let key = self.key;
        self.render
            .enqueue(false, Box::new(move || session::mutate_window(key, op, f)));
    }

    fn query<R>(&self, f: impl FnOnce(&mut dyn NativeWindow) -> R + Send + 'static) -> R
    where
        R: Send + 'static,
    {
        let key = self.key;
        run_blocking(&*self.render, move || session::with_window(key, f))
    }

    /// Whether closing has been requested, by the user or programmatically.
    pub fn should_close(&self) -> bool {
        self.query(|w| w.should_close())
    }

    /// Request (or cancel a request) that the window close.
    pub fn set_should_close(&self, value: bool) {
        self.mutate("set_should_close", move |w| w.set_should_close(value));
    }

    /// Screen position of the upper-left corner of the content area.
    pub fn pos(&self) -> (i32, i32) {
        self.query(|w| w.pos())
    }

    /// Move the window.
    pub fn set_pos(&self, x: i32, y: i32) {
        self.mutate("set_pos", move |w| w.set_pos(x, y));
    }

    /// Size of the content area in screen coordinates.
    pub fn size(&self) -> (i32, i32) {
        self.query(|w| w.size())
    }

    /// Resize the content area.
    pub fn set_size(&self, width: i32, height: i32) {
        self.mutate("set_size", move |w| w.set_size(width, height));
    }

    /// Framebuffer size in pixels.
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.query(|w| w.framebuffer_size())
    }

    /// Content scale of the monitor the window is currently on.
    pub fn content_scale(&self) -> (f32, f32) {
        self.query(|w| w.content_scale())
    }

    /// Window opacity, 1.0 being fully opaque.
    pub fn opacity(&self) -> f32 {
        self.query(|w| w.opacity())
    }

    /// Set the window opacity.
    pub fn set_opacity(&self, opacity: f32) {
        self.mutate("set_opacity", move |w| w.set_opacity(opacity));
    }

    /// Set the title bar text.
    pub fn set_title(&self, title: &str) {
        let title = title.to_string();
        self.mutate("set_title", move |w| w.set_title(&title));
    }

    /// Iconify (minimize) the window.
    pub fn iconify(&self) {
        self.mutate("iconify", |w| w.iconify());
    }

    /// Restore the window from iconified or maximized state.
    pub fn restore(&self) {
        self.mutate("restore", |w| w.restore());
    }

    /// Make the window visible.
    pub fn show(&self) {
        self.mutate("show", |w| w.show());
    }

    /// Hide the window.
    pub fn hide(&self) {
        self.mutate("hide", |w| w.hide());
    }

    /// Read a window attribute.
    pub fn attrib(&self, attrib: WindowAttrib) -> bool {
        self.query(move |w| w.attrib(attrib))
    }

    /// Change a window attribute.
    ///
    /// The settable subset is Decorated, Resizable, Floating and
    /// AutoIconify; backends log and ignore the rest. Some attributes are
    /// ignored for fullscreen windows and take effect when the window is
    /// later made windowed, and vice versa.
    pub fn set_attrib(&self, attrib: WindowAttrib, value: bool) {
        self.mutate("set_attrib", move |w| w.set_attrib(attrib, value));
    }

    /// Last reported state of `key` for this window.
    pub fn key_state(&self, key: Key) -> Action {
        self.query(move |w| w.key_state(key))
    }

    /// Last reported state of `button` for this window.
    pub fn mouse_button_state(&self, button: MouseButton) -> Action {
        self.query(move |w| w.mouse_button_state(button))
    }

    /// Current cursor input mode.
    pub fn cursor_mode(&self) -> CursorMode {
        self.query(|w| w.cursor_mode())
    }

    /// Change the cursor input mode.
    pub fn set_cursor_mode(&self, mode: CursorMode) {
        self.mutate("set_cursor_mode", move |w| w.set_cursor_mode(mode));
    }

    /// Whether sticky keys are enabled.
    pub fn sticky_keys(&self) -> bool {
        self.query(|w| w.sticky_keys())
    }

    /// Enable or disable sticky keys.
    pub fn set_sticky_keys(&self, enabled: bool) {
        self.mutate("set_sticky_keys", move |w| w.set_sticky_keys(enabled));
    }

    /// Whether sticky mouse buttons are enabled.
    pub fn sticky_mouse_buttons(&self) -> bool {
        self.query(|w| w.sticky_mouse_buttons())
    }

    /// Enable or disable sticky mouse buttons.
    pub fn set_sticky_mouse_buttons(&self, enabled: bool) {
        self.mutate("set_sticky_mouse_buttons", move |w| {
            w.set_sticky_mouse_buttons(enabled);
        });
    }

    /// Clipboard contents, if they are a UTF-8 string.
    pub fn clipboard_string(&self) -> Option<String> {
        self.query(|w| w.clipboard_string())
    }

    /// Replace the clipboard contents.
    pub fn set_clipboard_string(&self, text: &str) {
        let text = text.to_string();
        self.mutate("set_clipboard_string", move |w| {
            w.set_clipboard_string(&text);
        });
    }

    /// Swap the front and back buffers.
    pub fn swap_buffers(&self) {
        self.mutate("swap_buffers", |w| w.swap_buffers());
    }

    /// Make this window's context current on the render thread.
    ///
    /// The context watcher is notified synchronously, inside the same work
    /// item, strictly after the native transition.
    pub fn make_context_current(&self) {
        let key = self.key;
        self.render
            .enqueue(false, Box::new(move || session::make_current(key)));
    }

    /// Destroy the window and its context.
    ///
    /// Fire-and-forget; once the item has executed, every clone of this
    /// handle is dead and further use is a contract violation.
    pub fn destroy(&self) {
        let key = self.key;
        self.render
            .enqueue(false, Box::new(move || session::destroy_window(key)));
    }

    /// Register the window-position handler, replacing any previous one.
    pub fn set_pos_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, i32, i32) + Send + 'static,
    {
        let callback: PosCallback = Box::new(callback);
        self.install(move |c| c.pos = Some(callback));
    }

    /// Register the content-area-size handler, replacing any previous one.
    pub fn set_size_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, i32, i32) + Send + 'static,
    {
        let callback: SizeCallback = Box::new(callback);
        self.install(move |c| c.size = Some(callback));
    }

    /// Register the framebuffer-size handler, replacing any previous one.
    pub fn set_framebuffer_size_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, i32, i32) + Send + 'static,
    {
        let callback: FramebufferSizeCallback = Box::new(callback);
        self.install(move |c| c.framebuffer_size = Some(callback));
    }

    /// Register the close-request handler, replacing any previous one.
    pub fn set_close_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window) + Send + 'static,
    {
        let callback: CloseCallback = Box::new(callback);
        self.install(move |c| c.close = Some(callback));
    }

    /// Register the refresh handler, replacing any previous one.
    pub fn set_refresh_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window) + Send + 'static,
    {
        let callback: RefreshCallback = Box::new(callback);
        self.install(move |c| c.refresh = Some(callback));
    }

    /// Register the focus handler, replacing any previous one.
    pub fn set_focus_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, bool) + Send + 'static,
    {
        let callback: FocusCallback = Box::new(callback);
        self.install(move |c| c.focus = Some(callback));
    }

    /// Register the iconify handler, replacing any previous one.
    pub fn set_iconify_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, bool) + Send + 'static,
    {
        let callback: IconifyCallback = Box::new(callback);
        self.install(move |c| c.iconify = Some(callback));
    }

    /// Register the maximize handler, replacing any previous one.
    pub fn set_maximize_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, bool) + Send + 'static,
    {
        let callback: MaximizeCallback = Box::new(callback);
        self.install(move |c| c.maximize = Some(callback));
    }

    /// Register the content-scale handler, replacing any previous one.
    pub fn set_content_scale_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, f32, f32) + Send + 'static,
    {
        let callback: ContentScaleCallback = Box::new(callback);
        self.install(move |c| c.content_scale = Some(callback));
    }

    /// Register the mouse-button handler, replacing any previous one.
    pub fn set_mouse_button_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, MouseButton, Action, Modifiers) + Send + 'static,
    {
        let callback: MouseButtonCallback = Box::new(callback);
        self.install(move |c| c.mouse_button = Some(callback));
    }

    /// Register the cursor-position handler, replacing any previous one.
    pub fn set_cursor_pos_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, f64, f64) + Send + 'static,
    {
        let callback: CursorPosCallback = Box::new(callback);
        self.install(move |c| c.cursor_pos = Some(callback));
    }

    /// Register the cursor-enter handler, replacing any previous one.
    pub fn set_cursor_enter_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, bool) + Send + 'static,
    {
        let callback: CursorEnterCallback = Box::new(callback);
        self.install(move |c| c.cursor_enter = Some(callback));
    }

    /// Register the scroll handler, replacing any previous one.
    pub fn set_scroll_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, f64, f64) + Send + 'static,
    {
        let callback: ScrollCallback = Box::new(callback);
        self.install(move |c| c.scroll = Some(callback));
    }

    /// Register the key handler, replacing any previous one.
    pub fn set_key_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, Key, i32, Action, Modifiers) + Send + 'static,
    {
        let callback: KeyCallback = Box::new(callback);
        self.install(move |c| c.key = Some(callback));
    }

    /// Register the character handler, replacing any previous one.
    pub fn set_char_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, char) + Send + 'static,
    {
        let callback: CharCallback = Box::new(callback);
        self.install(move |c| c.char_input = Some(callback));
    }

    /// Register the character-with-modifiers handler, replacing any
    /// previous one.
    pub fn set_char_mods_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, char, Modifiers) + Send + 'static,
    {
        let callback: CharModsCallback = Box::new(callback);
        self.install(move |c| c.char_mods = Some(callback));
    }

    /// Register the file-drop handler, replacing any previous one.
    pub fn set_file_drop_callback<F>(&self, callback: F)
    where
        F: FnMut(&Window, Vec<PathBuf>) + Send + 'static,
    {
        let callback: FileDropCallback = Box::new(callback);
        self.install(move |c| c.file_drop = Some(callback));
    }

    fn install(
        &self,
        f: impl FnOnce(&mut crate::window::callbacks::WindowCallbacks) + Send + 'static,
    ) {
        let key = self.key;
        self.render
            .enqueue(false, Box::new(move || session::set_callback(key, f)));
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window").field("id", &self.id()).finish()
    }
}

/// Handle to a monitor.
#[derive(Clone)]
pub struct Monitor {
    key: MonitorKey,
    render: Arc<dyn RenderThread>,
}

impl Monitor {
    pub(crate) fn from_parts(key: MonitorKey, render: Arc<dyn RenderThread>) -> Self {
        Self { key, render }
    }

    pub(crate) fn key(&self) -> MonitorKey {
        self.key
    }

    /// Human-readable monitor name.
    pub fn name(&self) -> Option<String> {
        let key = self.key;
        run_blocking(&*self.render, move || {
            session::with_monitor(key, |m| m.name())
        })
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor").finish_non_exhaustive()
    }
}

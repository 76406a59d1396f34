//! Backend seam between the binding layer and the native windowing library
//!
//! These traits define what the binding needs from a native layer. Backend
//! objects are created on the render thread and never leave it — handles
//! carried across threads are plain registry keys, so none of these traits
//! require `Send`. The single exception is [`EventWaker`], the one entry
//! point the native library documents as callable from any thread.
//!
//! The GLFW implementation in [`glfw`](self::glfw) is the production
//! backend; tests drive the binding against a scripted mock instead.

pub mod glfw;

#[cfg(test)]
pub(crate) mod mock;

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;

use crate::context::ContextId;
use crate::events::WindowEvent;
use crate::hints::{SwapInterval, WindowAttrib, WindowHint};
use crate::input::{Action, CursorMode, Key, MouseButton};

/// Errors surfaced by a native backend.
#[derive(Error, Debug, Clone)]
pub enum NativeError {
    /// The native library failed to start.
    #[error("native library initialization failed: {0}")]
    Init(String),

    /// Window creation failed.
    #[error("window creation failed: {0}")]
    WindowCreation(String),
}

/// Constructor for a backend, run once on the render thread during `init`.
pub type BackendFactory = Box<
    dyn FnOnce() -> Result<(Box<dyn NativeApi>, Arc<dyn EventWaker>), NativeError> + Send,
>;

/// Library-global operations of the native layer.
///
/// Every method is invoked from inside a work item on the render thread.
pub trait NativeApi {
    /// Apply a sticky hint to subsequently created windows.
    fn window_hint(&mut self, hint: &WindowHint);

    /// Reset all window hints to their defaults.
    fn default_window_hints(&mut self);

    /// Create a window, fullscreen on `monitor` if given, sharing context
    /// objects with `share` if given.
    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<&dyn NativeMonitor>,
        share: Option<&dyn NativeWindow>,
    ) -> Result<Box<dyn NativeWindow>, NativeError>;

    /// The primary monitor, if any is connected.
    fn primary_monitor(&mut self) -> Option<Box<dyn NativeMonitor>>;

    /// Process pending window system events and return immediately.
    fn poll_events(&mut self);

    /// Park until at least one event arrives (or an empty event is posted),
    /// then process events.
    fn wait_events(&mut self);

    /// Set the swap interval for the current context.
    fn set_swap_interval(&mut self, interval: SwapInterval);

    /// Detach the current context from the render thread.
    fn detach_current(&mut self);

    /// Called once from the teardown work item, before the backend is
    /// dropped.
    fn shutdown(&mut self) {}
}

/// A native window owned by the render thread.
pub trait NativeWindow {
    /// Events decoded since the last poll/wait, in arrival order.
    fn drain_events(&mut self) -> Vec<WindowEvent>;

    /// Whether closing has been requested.
    fn should_close(&self) -> bool;
    /// Request (or cancel a request) that the window close.
    fn set_should_close(&mut self, value: bool);

    /// Screen position of the upper-left corner.
    fn pos(&self) -> (i32, i32);
    /// Move the window.
    fn set_pos(&mut self, x: i32, y: i32);
    /// Content-area size.
    fn size(&self) -> (i32, i32);
    /// Resize the content area.
    fn set_size(&mut self, width: i32, height: i32);
    /// Framebuffer size in pixels.
    fn framebuffer_size(&self) -> (i32, i32);
    /// Content scale of the monitor the window is on.
    fn content_scale(&self) -> (f32, f32);

    /// Window opacity, 1.0 being opaque.
    fn opacity(&self) -> f32;
    /// Set the window opacity.
    fn set_opacity(&mut self, opacity: f32);

    /// Set the title bar text.
    fn set_title(&mut self, title: &str);
    /// Iconify (minimize) the window.
    fn iconify(&mut self);
    /// Restore from iconified or maximized state.
    fn restore(&mut self);
    /// Make the window visible.
    fn show(&mut self);
    /// Hide the window.
    fn hide(&mut self);

    /// Read a window attribute.
    fn attrib(&self, attrib: WindowAttrib) -> bool;
    /// Change a settable window attribute.
    fn set_attrib(&mut self, attrib: WindowAttrib, value: bool);

    /// Last reported state of a key.
    fn key_state(&self, key: Key) -> Action;
    /// Last reported state of a mouse button.
    fn mouse_button_state(&self, button: MouseButton) -> Action;
    /// Current cursor input mode.
    fn cursor_mode(&self) -> CursorMode;
    /// Change the cursor input mode.
    fn set_cursor_mode(&mut self, mode: CursorMode);
    /// Whether sticky keys are enabled.
    fn sticky_keys(&self) -> bool;
    /// Enable or disable sticky keys.
    fn set_sticky_keys(&mut self, enabled: bool);
    /// Whether sticky mouse buttons are enabled.
    fn sticky_mouse_buttons(&self) -> bool;
    /// Enable or disable sticky mouse buttons.
    fn set_sticky_mouse_buttons(&mut self, enabled: bool);

    /// Clipboard contents, if they are a UTF-8 string.
    fn clipboard_string(&mut self) -> Option<String>;
    /// Replace the clipboard contents.
    fn set_clipboard_string(&mut self, text: &str);

    /// Swap front and back buffers.
    fn swap_buffers(&mut self);
    /// Make this window's context current and report its identity, if the
    /// backend exposes one.
    fn make_current(&mut self) -> Option<ContextId>;

    /// Concrete-type access, used to pass this window back to
    /// [`NativeApi::create_window`] as a share partner.
    fn as_any(&self) -> &dyn Any;
}

/// A native monitor reference.
pub trait NativeMonitor {
    /// Human-readable monitor name.
    fn name(&self) -> Option<String>;

    /// Concrete-type access for fullscreen window creation.
    fn as_any(&self) -> &dyn Any;
}

/// Wakes a render thread parked inside [`NativeApi::wait_events`].
///
/// This is the one operation in the crate that does not dispatch: it is a
/// direct call, safe from any thread, and exists precisely because the
/// dispatch queue is stalled while the wait is in progress.
pub trait EventWaker: Send + Sync {
    /// Post an empty event to the native event queue.
    fn post_empty_event(&self);
}

//! Event payloads delivered to window callbacks
//!
//! One variant per callback kind. The relay delivers these on the render
//! thread, substituting the native window identity with the binding's
//! [`Window`](crate::Window) handle.

use std::path::PathBuf;

use crate::input::{Action, Key, Modifiers, MouseButton};

/// A window system event, as decoded by the active backend.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// The window moved; screen coordinates of the upper-left corner.
    Pos(i32, i32),
    /// The window was resized; new size of the content area.
    Size(i32, i32),
    /// The framebuffer was resized; new size in pixels.
    FramebufferSize(i32, i32),
    /// The user requested the window be closed.
    Close,
    /// The window contents need to be redrawn.
    Refresh,
    /// The window gained or lost input focus.
    Focus(bool),
    /// The window was iconified or restored.
    Iconify(bool),
    /// The window was maximized or restored.
    Maximize(bool),
    /// The content scale of the window changed.
    ContentScale(f32, f32),
    /// A mouse button was pressed or released.
    MouseButton(MouseButton, Action, Modifiers),
    /// The cursor moved; position in content-area coordinates.
    CursorPos(f64, f64),
    /// The cursor entered or left the content area.
    CursorEnter(bool),
    /// A scroll device was used.
    Scroll(f64, f64),
    /// A key was pressed, repeated or released.
    Key(Key, i32, Action, Modifiers),
    /// A Unicode character was input.
    Char(char),
    /// A Unicode character was input together with the held modifiers.
    CharModifiers(char, Modifiers),
    /// Files or directories were dropped onto the window.
    FileDrop(Vec<PathBuf>),
}

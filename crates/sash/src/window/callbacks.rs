//! Per-window handler registry
//!
//! One optional handler per event kind per window. Registering a handler
//! replaces the previous one for that kind; the replaced handler never fires
//! again. Retrieval of the previous handler is not supported — callers that
//! need chaining compose it themselves.

use std::path::PathBuf;

use crate::input::{Action, Key, Modifiers, MouseButton};
use crate::window::Window;

/// Handler for window position changes.
pub type PosCallback = Box<dyn FnMut(&Window, i32, i32) + Send>;
/// Handler for content-area size changes.
pub type SizeCallback = Box<dyn FnMut(&Window, i32, i32) + Send>;
/// Handler for framebuffer size changes.
pub type FramebufferSizeCallback = Box<dyn FnMut(&Window, i32, i32) + Send>;
/// Handler for close requests.
pub type CloseCallback = Box<dyn FnMut(&Window) + Send>;
/// Handler for damage/refresh notifications.
pub type RefreshCallback = Box<dyn FnMut(&Window) + Send>;
/// Handler for focus gain/loss.
pub type FocusCallback = Box<dyn FnMut(&Window, bool) + Send>;
/// Handler for iconify/restore transitions.
pub type IconifyCallback = Box<dyn FnMut(&Window, bool) + Send>;
/// Handler for maximize/restore transitions.
pub type MaximizeCallback = Box<dyn FnMut(&Window, bool) + Send>;
/// Handler for content scale changes.
pub type ContentScaleCallback = Box<dyn FnMut(&Window, f32, f32) + Send>;
/// Handler for mouse button transitions.
pub type MouseButtonCallback = Box<dyn FnMut(&Window, MouseButton, Action, Modifiers) + Send>;
/// Handler for cursor movement.
pub type CursorPosCallback = Box<dyn FnMut(&Window, f64, f64) + Send>;
/// Handler for the cursor entering or leaving the content area.
pub type CursorEnterCallback = Box<dyn FnMut(&Window, bool) + Send>;
/// Handler for scroll input.
pub type ScrollCallback = Box<dyn FnMut(&Window, f64, f64) + Send>;
/// Handler for key transitions.
pub type KeyCallback = Box<dyn FnMut(&Window, Key, i32, Action, Modifiers) + Send>;
/// Handler for character input.
pub type CharCallback = Box<dyn FnMut(&Window, char) + Send>;
/// Handler for character input with held modifiers.
pub type CharModsCallback = Box<dyn FnMut(&Window, char, Modifiers) + Send>;
/// Handler for file drops.
pub type FileDropCallback = Box<dyn FnMut(&Window, Vec<PathBuf>) + Send>;

/// Typed delegate table for one window, keyed by event kind.
#[derive(Default)]
pub(crate) struct WindowCallbacks {
    pub pos: Option<PosCallback>,
    pub size: Option<SizeCallback>,
    pub framebuffer_size: Option<FramebufferSizeCallback>,
    pub close: Option<CloseCallback>,
    pub refresh: Option<RefreshCallback>,
    pub focus: Option<FocusCallback>,
    pub iconify: Option<IconifyCallback>,
    pub maximize: Option<MaximizeCallback>,
    pub content_scale: Option<ContentScaleCallback>,
    pub mouse_button: Option<MouseButtonCallback>,
    pub cursor_pos: Option<CursorPosCallback>,
    pub cursor_enter: Option<CursorEnterCallback>,
    pub scroll: Option<ScrollCallback>,
    pub key: Option<KeyCallback>,
    pub char_input: Option<CharCallback>,
    pub char_mods: Option<CharModsCallback>,
    pub file_drop: Option<FileDropCallback>,
}

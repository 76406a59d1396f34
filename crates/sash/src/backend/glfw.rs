//! GLFW-backed native layer
//!
//! Wraps the `glfw` crate for desktop platforms. All objects here are
//! created on the render thread by [`boot`] and stay there; events arrive
//! through the per-window receiver the crate hands out at creation time and
//! are drained after each poll/wait.

use std::any::Any;
use std::sync::Arc;

use glfw::Context as _;

use crate::backend::{EventWaker, NativeApi, NativeError, NativeMonitor, NativeWindow};
use crate::context::ContextId;
use crate::events::WindowEvent;
use crate::hints::{ClientApi, OpenGlProfile, SwapInterval, WindowAttrib, WindowHint};
use crate::input::{Action, CursorMode, Key, Modifiers, MouseButton};

/// Initialize GLFW and hand back the backend plus its waker.
///
/// Runs on the render thread as part of the library's init work item, so a
/// failed native start surfaces synchronously to the `init` caller.
pub fn boot() -> Result<(Box<dyn NativeApi>, Arc<dyn EventWaker>), NativeError> {
    let glfw = glfw::init(glfw::fail_on_errors)
        .map_err(|error| NativeError::Init(format!("{error:?}")))?;
    log::info!("GLFW started");
    Ok((Box::new(GlfwApi { glfw }), Arc::new(GlfwWaker)))
}

struct GlfwApi {
    glfw: glfw::Glfw,
}

impl NativeApi for GlfwApi {
    fn window_hint(&mut self, hint: &WindowHint) {
        self.glfw.window_hint(convert_hint(hint));
    }

    fn default_window_hints(&mut self) {
        self.glfw.default_window_hints();
    }

    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        monitor: Option<&dyn NativeMonitor>,
        share: Option<&dyn NativeWindow>,
    ) -> Result<Box<dyn NativeWindow>, NativeError> {
        let fullscreen = monitor
            .and_then(|m| m.as_any().downcast_ref::<GlfwMonitor>())
            .is_some();
        let share = share.and_then(|w| w.as_any().downcast_ref::<GlfwWindow>());

        let created = if fullscreen {
            self.glfw.with_primary_monitor(|glfw, primary| {
                let mode = primary.map_or(glfw::WindowMode::Windowed, |m| {
                    glfw::WindowMode::FullScreen(m)
                });
                match share {
                    Some(partner) => partner.window.create_shared(width, height, title, mode),
                    None => glfw.create_window(width, height, title, mode),
                }
            })
        } else {
            match share {
                Some(partner) => {
                    partner
                        .window
                        .create_shared(width, height, title, glfw::WindowMode::Windowed)
                }
                None => {
                    self.glfw
                        .create_window(width, height, title, glfw::WindowMode::Windowed)
                }
            }
        };

        let (mut window, events) = created.ok_or_else(|| {
            NativeError::WindowCreation(format!("GLFW refused a {width}x{height} window"))
        })?;
        window.set_all_polling(true);
        Ok(Box::new(GlfwWindow { window, events }))
    }

    fn primary_monitor(&mut self) -> Option<Box<dyn NativeMonitor>> {
        self.glfw.with_primary_monitor(|_, monitor| {
            monitor.map(|m| {
                Box::new(GlfwMonitor { name: m.get_name() }) as Box<dyn NativeMonitor>
            })
        })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn wait_events(&mut self) {
        self.glfw.wait_events();
    }

    fn set_swap_interval(&mut self, interval: SwapInterval) {
        self.glfw.set_swap_interval(match interval {
            SwapInterval::None => glfw::SwapInterval::None,
            SwapInterval::Adaptive => glfw::SwapInterval::Adaptive,
            SwapInterval::Sync(n) => glfw::SwapInterval::Sync(n),
        });
    }

    fn detach_current(&mut self) {
        self.glfw.make_context_current(None);
    }

    fn shutdown(&mut self) {
        // Dropping the token (after the session has dropped every window)
        // terminates the library.
        log::info!("GLFW shutting down");
    }
}

struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl NativeWindow for GlfwWindow {
    fn drain_events(&mut self) -> Vec<WindowEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| convert_event(event))
            .collect()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn pos(&self) -> (i32, i32) {
        self.window.get_pos()
    }

    fn set_pos(&mut self, x: i32, y: i32) {
        self.window.set_pos(x, y);
    }

    fn size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    fn set_size(&mut self, width: i32, height: i32) {
        self.window.set_size(width, height);
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn content_scale(&self) -> (f32, f32) {
        self.window.get_content_scale()
    }

    fn opacity(&self) -> f32 {
        self.window.get_opacity()
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.window.set_opacity(opacity);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn iconify(&mut self) {
        self.window.iconify();
    }

    fn restore(&mut self) {
        self.window.restore();
    }

    fn show(&mut self) {
        self.window.show();
    }

    fn hide(&mut self) {
        self.window.hide();
    }

    fn attrib(&self, attrib: WindowAttrib) -> bool {
        match attrib {
            WindowAttrib::Focused => self.window.is_focused(),
            WindowAttrib::Iconified => self.window.is_iconified(),
            WindowAttrib::Maximized => self.window.is_maximized(),
            WindowAttrib::Visible => self.window.is_visible(),
            WindowAttrib::Hovered => self.window.is_hovered(),
            WindowAttrib::Resizable => self.window.is_resizable(),
            WindowAttrib::Decorated => self.window.is_decorated(),
            WindowAttrib::Floating => self.window.is_floating(),
            WindowAttrib::AutoIconify => self.window.is_auto_iconify(),
            WindowAttrib::FocusOnShow => self.window.is_focus_on_show(),
            WindowAttrib::TransparentFramebuffer => self.window.is_framebuffer_transparent(),
        }
    }

    fn set_attrib(&mut self, attrib: WindowAttrib, value: bool) {
        match attrib {
            WindowAttrib::Resizable => self.window.set_resizable(value),
            WindowAttrib::Decorated => self.window.set_decorated(value),
            WindowAttrib::Floating => self.window.set_floating(value),
            WindowAttrib::AutoIconify => self.window.set_auto_iconify(value),
            other => log::warn!("window attribute {other:?} is not settable"),
        }
    }

    fn key_state(&self, key: Key) -> Action {
        action_from_glfw(self.window.get_key(key_to_glfw(key)))
    }

    fn mouse_button_state(&self, button: MouseButton) -> Action {
        action_from_glfw(self.window.get_mouse_button(button_to_glfw(button)))
    }

    fn cursor_mode(&self) -> CursorMode {
        match self.window.get_cursor_mode() {
            glfw::CursorMode::Normal => CursorMode::Normal,
            glfw::CursorMode::Hidden => CursorMode::Hidden,
            glfw::CursorMode::Disabled => CursorMode::Disabled,
        }
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.window.set_cursor_mode(match mode {
            CursorMode::Normal => glfw::CursorMode::Normal,
            CursorMode::Hidden => glfw::CursorMode::Hidden,
            CursorMode::Disabled => glfw::CursorMode::Disabled,
        });
    }

    fn sticky_keys(&self) -> bool {
        self.window.has_sticky_keys()
    }

    fn set_sticky_keys(&mut self, enabled: bool) {
        self.window.set_sticky_keys(enabled);
    }

    fn sticky_mouse_buttons(&self) -> bool {
        self.window.has_sticky_mouse_buttons()
    }

    fn set_sticky_mouse_buttons(&mut self, enabled: bool) {
        self.window.set_sticky_mouse_buttons(enabled);
    }

    fn clipboard_string(&mut self) -> Option<String> {
        self.window.get_clipboard_string()
    }

    fn set_clipboard_string(&mut self, text: &str) {
        self.window.set_clipboard_string(text);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn make_current(&mut self) -> Option<ContextId> {
        self.window.make_current();
        // Platform context handles (GLX/WGL/NSGL) exist but are deliberately
        // not surfaced; GL bindings key off the notification alone.
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct GlfwMonitor {
    name: Option<String>,
}

impl NativeMonitor for GlfwMonitor {
    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `glfwPostEmptyEvent` is the one GLFW entry point documented as callable
/// from any thread. The safe wrapper hangs off the non-`Send` `Glfw` token,
/// so the waker goes through the ffi layer directly.
struct GlfwWaker;

impl EventWaker for GlfwWaker {
    fn post_empty_event(&self) {
        unsafe { glfw::ffi::glfwPostEmptyEvent() }
    }
}

fn convert_hint(hint: &WindowHint) -> glfw::WindowHint {
    match *hint {
        WindowHint::Focused(v) => glfw::WindowHint::Focused(v),
        WindowHint::Resizable(v) => glfw::WindowHint::Resizable(v),
        WindowHint::Visible(v) => glfw::WindowHint::Visible(v),
        WindowHint::Decorated(v) => glfw::WindowHint::Decorated(v),
        WindowHint::AutoIconify(v) => glfw::WindowHint::AutoIconify(v),
        WindowHint::Floating(v) => glfw::WindowHint::Floating(v),
        WindowHint::Maximized(v) => glfw::WindowHint::Maximized(v),
        WindowHint::TransparentFramebuffer(v) => glfw::WindowHint::TransparentFramebuffer(v),
        WindowHint::FocusOnShow(v) => glfw::WindowHint::FocusOnShow(v),
        WindowHint::ScaleToMonitor(v) => glfw::WindowHint::ScaleToMonitor(v),
        WindowHint::RedBits(v) => glfw::WindowHint::RedBits(v),
        WindowHint::GreenBits(v) => glfw::WindowHint::GreenBits(v),
        WindowHint::BlueBits(v) => glfw::WindowHint::BlueBits(v),
        WindowHint::AlphaBits(v) => glfw::WindowHint::AlphaBits(v),
        WindowHint::DepthBits(v) => glfw::WindowHint::DepthBits(v),
        WindowHint::StencilBits(v) => glfw::WindowHint::StencilBits(v),
        WindowHint::Samples(v) => glfw::WindowHint::Samples(v),
        WindowHint::SRgbCapable(v) => glfw::WindowHint::SRgbCapable(v),
        WindowHint::DoubleBuffer(v) => glfw::WindowHint::DoubleBuffer(v),
        WindowHint::Stereo(v) => glfw::WindowHint::Stereo(v),
        WindowHint::RefreshRate(v) => glfw::WindowHint::RefreshRate(v),
        WindowHint::ClientApi(api) => glfw::WindowHint::ClientApi(match api {
            ClientApi::OpenGl => glfw::ClientApiHint::OpenGl,
            ClientApi::OpenGlEs => glfw::ClientApiHint::OpenGlEs,
            ClientApi::NoApi => glfw::ClientApiHint::NoApi,
        }),
        WindowHint::ContextVersionMajor(v) => glfw::WindowHint::ContextVersionMajor(v),
        WindowHint::ContextVersionMinor(v) => glfw::WindowHint::ContextVersionMinor(v),
        WindowHint::OpenGlForwardCompat(v) => glfw::WindowHint::OpenGlForwardCompat(v),
        WindowHint::OpenGlDebugContext(v) => glfw::WindowHint::OpenGlDebugContext(v),
        WindowHint::OpenGlProfile(profile) => glfw::WindowHint::OpenGlProfile(match profile {
            OpenGlProfile::Any => glfw::OpenGlProfileHint::Any,
            OpenGlProfile::Core => glfw::OpenGlProfileHint::Core,
            OpenGlProfile::Compat => glfw::OpenGlProfileHint::Compat,
        }),
    }
}

fn convert_event(event: glfw::WindowEvent) -> Option<WindowEvent> {
    use glfw::WindowEvent as Native;
    Some(match event {
        Native::Pos(x, y) => WindowEvent::Pos(x, y),
        Native::Size(w, h) => WindowEvent::Size(w, h),
        Native::FramebufferSize(w, h) => WindowEvent::FramebufferSize(w, h),
        Native::Close => WindowEvent::Close,
        Native::Refresh => WindowEvent::Refresh,
        Native::Focus(focused) => WindowEvent::Focus(focused),
        Native::Iconify(iconified) => WindowEvent::Iconify(iconified),
        Native::Maximize(maximized) => WindowEvent::Maximize(maximized),
        Native::ContentScale(x, y) => WindowEvent::ContentScale(x, y),
        Native::MouseButton(button, action, mods) => WindowEvent::MouseButton(
            button_from_glfw(button),
            action_from_glfw(action),
            mods_from_glfw(mods),
        ),
        Native::CursorPos(x, y) => WindowEvent::CursorPos(x, y),
        Native::CursorEnter(entered) => WindowEvent::CursorEnter(entered),
        Native::Scroll(x, y) => WindowEvent::Scroll(x, y),
        Native::Key(key, scancode, action, mods) => WindowEvent::Key(
            key_from_glfw(key),
            scancode,
            action_from_glfw(action),
            mods_from_glfw(mods),
        ),
        Native::Char(ch) => WindowEvent::Char(ch),
        Native::CharModifiers(ch, mods) => WindowEvent::CharModifiers(ch, mods_from_glfw(mods)),
        Native::FileDrop(paths) => WindowEvent::FileDrop(paths),
        _ => return None,
    })
}

fn action_from_glfw(action: glfw::Action) -> Action {
    match action {
        glfw::Action::Release => Action::Release,
        glfw::Action::Press => Action::Press,
        glfw::Action::Repeat => Action::Repeat,
    }
}

fn mods_from_glfw(mods: glfw::Modifiers) -> Modifiers {
    // Bit positions match; caps-lock/num-lock state bits are not exposed.
    Modifiers::from_bits_truncate(mods.bits() as u32)
}

fn button_from_glfw(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        glfw::MouseButton::Button4 => MouseButton::Button4,
        glfw::MouseButton::Button5 => MouseButton::Button5,
        glfw::MouseButton::Button6 => MouseButton::Button6,
        glfw::MouseButton::Button7 => MouseButton::Button7,
        glfw::MouseButton::Button8 => MouseButton::Button8,
    }
}

fn button_to_glfw(button: MouseButton) -> glfw::MouseButton {
    match button {
        MouseButton::Left => glfw::MouseButton::Button1,
        MouseButton::Right => glfw::MouseButton::Button2,
        MouseButton::Middle => glfw::MouseButton::Button3,
        MouseButton::Button4 => glfw::MouseButton::Button4,
        MouseButton::Button5 => glfw::MouseButton::Button5,
        MouseButton::Button6 => glfw::MouseButton::Button6,
        MouseButton::Button7 => glfw::MouseButton::Button7,
        MouseButton::Button8 => glfw::MouseButton::Button8,
    }
}

fn key_from_glfw(key: glfw::Key) -> Key {
    match key {
        glfw::Key::Space => Key::Space,
        glfw::Key::Apostrophe => Key::Apostrophe,
        glfw::Key::Comma => Key::Comma,
        glfw::Key::Minus => Key::Minus,
        glfw::Key::Period => Key::Period,
        glfw::Key::Slash => Key::Slash,
        glfw::Key::Num0 => Key::Num0,
        glfw::Key::Num1 => Key::Num1,
        glfw::Key::Num2 => Key::Num2,
        glfw::Key::Num3 => Key::Num3,
        glfw::Key::Num4 => Key::Num4,
        glfw::Key::Num5 => Key::Num5,
        glfw::Key::Num6 => Key::Num6,
        glfw::Key::Num7 => Key::Num7,
        glfw::Key::Num8 => Key::Num8,
        glfw::Key::Num9 => Key::Num9,
        glfw::Key::Semicolon => Key::Semicolon,
        glfw::Key::Equal => Key::Equal,
        glfw::Key::A => Key::A,
        glfw::Key::B => Key::B,
        glfw::Key::C => Key::C,
        glfw::Key::D => Key::D,
        glfw::Key::E => Key::E,
        glfw::Key::F => Key::F,
        glfw::Key::G => Key::G,
        glfw::Key::H => Key::H,
        glfw::Key::I => Key::I,
        glfw::Key::J => Key::J,
        glfw::Key::K => Key::K,
        glfw::Key::L => Key::L,
        glfw::Key::M => Key::M,
        glfw::Key::N => Key::N,
        glfw::Key::O => Key::O,
        glfw::Key::P => Key::P,
        glfw::Key::Q => Key::Q,
        glfw::Key::R => Key::R,
        glfw::Key::S => Key::S,
        glfw::Key::T => Key::T,
        glfw::Key::U => Key::U,
        glfw::Key::V => Key::V,
        glfw::Key::W => Key::W,
        glfw::Key::X => Key::X,
        glfw::Key::Y => Key::Y,
        glfw::Key::Z => Key::Z,
        glfw::Key::LeftBracket => Key::LeftBracket,
        glfw::Key::Backslash => Key::Backslash,
        glfw::Key::RightBracket => Key::RightBracket,
        glfw::Key::GraveAccent => Key::GraveAccent,
        glfw::Key::World1 => Key::World1,
        glfw::Key::World2 => Key::World2,
        glfw::Key::Escape => Key::Escape,
        glfw::Key::Enter => Key::Enter,
        glfw::Key::Tab => Key::Tab,
        glfw::Key::Backspace => Key::Backspace,
        glfw::Key::Insert => Key::Insert,
        glfw::Key::Delete => Key::Delete,
        glfw::Key::Right => Key::Right,
        glfw::Key::Left => Key::Left,
        glfw::Key::Down => Key::Down,
        glfw::Key::Up => Key::Up,
        glfw::Key::PageUp => Key::PageUp,
        glfw::Key::PageDown => Key::PageDown,
        glfw::Key::Home => Key::Home,
        glfw::Key::End => Key::End,
        glfw::Key::CapsLock => Key::CapsLock,
        glfw::Key::ScrollLock => Key::ScrollLock,
        glfw::Key::NumLock => Key::NumLock,
        glfw::Key::PrintScreen => Key::PrintScreen,
        glfw::Key::Pause => Key::Pause,
        glfw::Key::F1 => Key::F1,
        glfw::Key::F2 => Key::F2,
        glfw::Key::F3 => Key::F3,
        glfw::Key::F4 => Key::F4,
        glfw::Key::F5 => Key::F5,
        glfw::Key::F6 => Key::F6,
        glfw::Key::F7 => Key::F7,
        glfw::Key::F8 => Key::F8,
        glfw::Key::F9 => Key::F9,
        glfw::Key::F10 => Key::F10,
        glfw::Key::F11 => Key::F11,
        glfw::Key::F12 => Key::F12,
        glfw::Key::F13 => Key::F13,
        glfw::Key::F14 => Key::F14,
        glfw::Key::F15 => Key::F15,
        glfw::Key::F16 => Key::F16,
        glfw::Key::F17 => Key::F17,
        glfw::Key::F18 => Key::F18,
        glfw::Key::F19 => Key::F19,
        glfw::Key::F20 => Key::F20,
        glfw::Key::F21 => Key::F21,
        glfw::Key::F22 => Key::F22,
        glfw::Key::F23 => Key::F23,
        glfw::Key::F24 => Key::F24,
        glfw::Key::F25 => Key::F25,
        glfw::Key::Kp0 => Key::Kp0,
        glfw::Key::Kp1 => Key::Kp1,
        glfw::Key::Kp2 => Key::Kp2,
        glfw::Key::Kp3 => Key::Kp3,
        glfw::Key::Kp4 => Key::Kp4,
        glfw::Key::Kp5 => Key::Kp5,
        glfw::Key::Kp6 => Key::Kp6,
        glfw::Key::Kp7 => Key::Kp7,
        glfw::Key::Kp8 => Key::Kp8,
        glfw::Key::Kp9 => Key::Kp9,
        glfw::Key::KpDecimal => Key::KpDecimal,
        glfw::Key::KpDivide => Key::KpDivide,
        glfw::Key::KpMultiply => Key::KpMultiply,
        glfw::Key::KpSubtract => Key::KpSubtract,
        glfw::Key::KpAdd => Key::KpAdd,
        glfw::Key::KpEnter => Key::KpEnter,
        glfw::Key::KpEqual => Key::KpEqual,
        glfw::Key::LeftShift => Key::LeftShift,
        glfw::Key::LeftControl => Key::LeftControl,
        glfw::Key::LeftAlt => Key::LeftAlt,
        glfw::Key::LeftSuper => Key::LeftSuper,
        glfw::Key::RightShift => Key::RightShift,
        glfw::Key::RightControl => Key::RightControl,
        glfw::Key::RightAlt => Key::RightAlt,
        glfw::Key::RightSuper => Key::RightSuper,
        glfw::Key::Menu => Key::Menu,
        glfw::Key::Unknown => Key::Unknown,
    }
}

fn key_to_glfw(key: Key) -> glfw::Key {
    match key {
        Key::Space => glfw::Key::Space,
        Key::Apostrophe => glfw::Key::Apostrophe,
        Key::Comma => glfw::Key::Comma,
        Key::Minus => glfw::Key::Minus,
        Key::Period => glfw::Key::Period,
        Key::Slash => glfw::Key::Slash,
        Key::Num0 => glfw::Key::Num0,
        Key::Num1 => glfw::Key::Num1,
        Key::Num2 => glfw::Key::Num2,
        Key::Num3 => glfw::Key::Num3,
        Key::Num4 => glfw::Key::Num4,
        Key::Num5 => glfw::Key::Num5,
        Key::Num6 => glfw::Key::Num6,
        Key::Num7 => glfw::Key::Num7,
        Key::Num8 => glfw::Key::Num8,
        Key::Num9 => glfw::Key::Num9,
        Key::Semicolon => glfw::Key::Semicolon,
        Key::Equal => glfw::Key::Equal,
        Key::A => glfw::Key::A,
        Key::B => glfw::Key::B,
        Key::C => glfw::Key::C,
        Key::D => glfw::Key::D,
        Key::E => glfw::Key::E,
        Key::F => glfw::Key::F,
        Key::G => glfw::Key::G,
        Key::H => glfw::Key::H,
        Key::I => glfw::Key::I,
        Key::J => glfw::Key::J,
        Key::K => glfw::Key::K,
        Key::L => glfw::Key::L,
        Key::M => glfw::Key::M,
        Key::N => glfw::Key::N,
        Key::O => glfw::Key::O,
        Key::P => glfw::Key::P,
        Key::Q => glfw::Key::Q,
        Key::R => glfw::Key::R,
        Key::S => glfw::Key::S,
        Key::T => glfw::Key::T,
        Key::U => glfw::Key::U,
        Key::V => glfw::Key::V,
        Key::W => glfw::Key::W,
        Key::X => glfw::Key::X,
        Key::Y => glfw::Key::Y,
        Key::Z => glfw::Key::Z,
        Key::LeftBracket => glfw::Key::LeftBracket,
        Key::Backslash => glfw::Key::Backslash,
        Key::RightBracket => glfw::Key::RightBracket,
        Key::GraveAccent => glfw::Key::GraveAccent,
        Key::World1 => glfw::Key::World1,
        Key::World2 => glfw::Key::World2,
        Key::Escape => glfw::Key::Escape,
        Key::Enter => glfw::Key::Enter,
        Key::Tab => glfw::Key::Tab,
        Key::Backspace => glfw::Key::Backspace,
        Key::Insert => glfw::Key::Insert,
        Key::Delete => glfw::Key::Delete,
        Key::Right => glfw::Key::Right,
        Key::Left => glfw::Key::Left,
        Key::Down => glfw::Key::Down,
        Key::Up => glfw::Key::Up,
        Key::PageUp => glfw::Key::PageUp,
        Key::PageDown => glfw::Key::PageDown,
        Key::Home => glfw::Key::Home,
        Key::End => glfw::Key::End,
        Key::CapsLock => glfw::Key::CapsLock,
        Key::ScrollLock => glfw::Key::ScrollLock,
        Key::NumLock => glfw::Key::NumLock,
        Key::PrintScreen => glfw::Key::PrintScreen,
        Key::Pause => glfw::Key::Pause,
        Key::F1 => glfw::Key::F1,
        Key::F2 => glfw::Key::F2,
        Key::F3 => glfw::Key::F3,
        Key::F4 => glfw::Key::F4,
        Key::F5 => glfw::Key::F5,
        Key::F6 => glfw::Key::F6,
        Key::F7 => glfw::Key::F7,
        Key::F8 => glfw::Key::F8,
        Key::F9 => glfw::Key::F9,
        Key::F10 => glfw::Key::F10,
        Key::F11 => glfw::Key::F11,
        Key::F12 => glfw::Key::F12,
        Key::F13 => glfw::Key::F13,
        Key::F14 => glfw::Key::F14,
        Key::F15 => glfw::Key::F15,
        Key::F16 => glfw::Key::F16,
        Key::F17 => glfw::Key::F17,
        Key::F18 => glfw::Key::F18,
        Key::F19 => glfw::Key::F19,
        Key::F20 => glfw::Key::F20,
        Key::F21 => glfw::Key::F21,
        Key::F22 => glfw::Key::F22,
        Key::F23 => glfw::Key::F23,
        Key::F24 => glfw::Key::F24,
        Key::F25 => glfw::Key::F25,
        Key::Kp0 => glfw::Key::Kp0,
        Key::Kp1 => glfw::Key::Kp1,
        Key::Kp2 => glfw::Key::Kp2,
        Key::Kp3 => glfw::Key::Kp3,
        Key::Kp4 => glfw::Key::Kp4,
        Key::Kp5 => glfw::Key::Kp5,
        Key::Kp6 => glfw::Key::Kp6,
        Key::Kp7 => glfw::Key::Kp7,
        Key::Kp8 => glfw::Key::Kp8,
        Key::Kp9 => glfw::Key::Kp9,
        Key::KpDecimal => glfw::Key::KpDecimal,
        Key::KpDivide => glfw::Key::KpDivide,
        Key::KpMultiply => glfw::Key::KpMultiply,
        Key::KpSubtract => glfw::Key::KpSubtract,
        Key::KpAdd => glfw::Key::KpAdd,
        Key::KpEnter => glfw::Key::KpEnter,
        Key::KpEqual => glfw::Key::KpEqual,
        Key::LeftShift => glfw::Key::LeftShift,
        Key::LeftControl => glfw::Key::LeftControl,
        Key::LeftAlt => glfw::Key::LeftAlt,
        Key::LeftSuper => glfw::Key::LeftSuper,
        Key::RightShift => glfw::Key::RightShift,
        Key::RightControl => glfw::Key::RightControl,
        Key::RightAlt => glfw::Key::RightAlt,
        Key::RightSuper => glfw::Key::RightSuper,
        Key::Menu => glfw::Key::Menu,
        Key::Unknown => glfw::Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_conversion_round_trips() {
        for key in [Key::Space, Key::Num0, Key::A, Key::F25, Key::KpEqual, Key::Menu] {
            assert_eq!(key_from_glfw(key_to_glfw(key)), key);
        }
    }

    #[test]
    fn test_key_tokens_line_up_with_glfw() {
        assert_eq!(Key::Escape.code(), glfw::Key::Escape as i32);
        assert_eq!(Key::Kp0.code(), glfw::Key::Kp0 as i32);
        assert_eq!(Key::RightSuper.code(), glfw::Key::RightSuper as i32);
    }

    #[test]
    fn test_modifier_bits_line_up_with_glfw() {
        let native = glfw::Modifiers::Shift | glfw::Modifiers::Alt;
        assert_eq!(
            mods_from_glfw(native),
            Modifiers::SHIFT | Modifiers::ALT
        );
    }
}

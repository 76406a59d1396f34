//! Input value types delivered through event callbacks
//!
//! Keyboard keys, mouse buttons, key actions and modifier masks, with the
//! display renderings the event demo prints. Values mirror the native USB/GLFW
//! key tokens so backends can convert without lookup tables of their own.

use bitflags::bitflags;
use std::fmt;

/// Keyboard key token.
///
/// Layout-independent physical key identity, as reported by the native layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
#[allow(missing_docs)]
pub enum Key {
    Unknown = -1,
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    World1 = 161,
    World2 = 162,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl Key {
    /// The native key token value.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Unknown => "UNKNOWN",
            Key::Space => "SPACE",
            Key::Apostrophe => "APOSTROPHE",
            Key::Comma => "COMMA",
            Key::Minus => "MINUS",
            Key::Period => "PERIOD",
            Key::Slash => "SLASH",
            Key::Num0 => "0",
            Key::Num1 => "1",
            Key::Num2 => "2",
            Key::Num3 => "3",
            Key::Num4 => "4",
            Key::Num5 => "5",
            Key::Num6 => "6",
            Key::Num7 => "7",
            Key::Num8 => "8",
            Key::Num9 => "9",
            Key::Semicolon => "SEMICOLON",
            Key::Equal => "EQUAL",
            Key::A => "A",
            Key::B => "B",
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::H => "H",
            Key::I => "I",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::M => "M",
            Key::N => "N",
            Key::O => "O",
            Key::P => "P",
            Key::Q => "Q",
            Key::R => "R",
            Key::S => "S",
            Key::T => "T",
            Key::U => "U",
            Key::V => "V",
            Key::W => "W",
            Key::X => "X",
            Key::Y => "Y",
            Key::Z => "Z",
            Key::LeftBracket => "LEFT BRACKET",
            Key::Backslash => "BACKSLASH",
            Key::RightBracket => "RIGHT BRACKET",
            Key::GraveAccent => "GRAVE ACCENT",
            Key::World1 => "WORLD 1",
            Key::World2 => "WORLD 2",
            Key::Escape => "ESCAPE",
            Key::Enter => "ENTER",
            Key::Tab => "TAB",
            Key::Backspace => "BACKSPACE",
            Key::Insert => "INSERT",
            Key::Delete => "DELETE",
            Key::Right => "RIGHT",
            Key::Left => "LEFT",
            Key::Down => "DOWN",
            Key::Up => "UP",
            Key::PageUp => "PAGE UP",
            Key::PageDown => "PAGE DOWN",
            Key::Home => "HOME",
            Key::End => "END",
            Key::CapsLock => "CAPS LOCK",
            Key::ScrollLock => "SCROLL LOCK",
            Key::NumLock => "NUM LOCK",
            Key::PrintScreen => "PRINT SCREEN",
            Key::Pause => "PAUSE",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::F13 => "F13",
            Key::F14 => "F14",
            Key::F15 => "F15",
            Key::F16 => "F16",
            Key::F17 => "F17",
            Key::F18 => "F18",
            Key::F19 => "F19",
            Key::F20 => "F20",
            Key::F21 => "F21",
            Key::F22 => "F22",
            Key::F23 => "F23",
            Key::F24 => "F24",
            Key::F25 => "F25",
            Key::Kp0 => "KEYPAD 0",
            Key::Kp1 => "KEYPAD 1",
            Key::Kp2 => "KEYPAD 2",
            Key::Kp3 => "KEYPAD 3",
            Key::Kp4 => "KEYPAD 4",
            Key::Kp5 => "KEYPAD 5",
            Key::Kp6 => "KEYPAD 6",
            Key::Kp7 => "KEYPAD 7",
            Key::Kp8 => "KEYPAD 8",
            Key::Kp9 => "KEYPAD 9",
            Key::KpDecimal => "KEYPAD DECIMAL",
            Key::KpDivide => "KEYPAD DIVIDE",
            Key::KpMultiply => "KEYPAD MULTIPLY",
            Key::KpSubtract => "KEYPAD SUBTRACT",
            Key::KpAdd => "KEYPAD ADD",
            Key::KpEnter => "KEYPAD ENTER",
            Key::KpEqual => "KEYPAD EQUAL",
            Key::LeftShift => "LEFT SHIFT",
            Key::LeftControl => "LEFT CONTROL",
            Key::LeftAlt => "LEFT ALT",
            Key::LeftSuper => "LEFT SUPER",
            Key::RightShift => "RIGHT SHIFT",
            Key::RightControl => "RIGHT CONTROL",
            Key::RightAlt => "RIGHT ALT",
            Key::RightSuper => "RIGHT SUPER",
            Key::Menu => "MENU",
        };
        f.write_str(name)
    }
}

/// Mouse button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Button4,
    Button5,
    Button6,
    Button7,
    Button8,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => f.write_str("LEFT"),
            MouseButton::Right => f.write_str("RIGHT"),
            MouseButton::Middle => f.write_str("MIDDLE"),
            MouseButton::Button4 => f.write_str("BUTTON 4"),
            MouseButton::Button5 => f.write_str("BUTTON 5"),
            MouseButton::Button6 => f.write_str("BUTTON 6"),
            MouseButton::Button7 => f.write_str("BUTTON 7"),
            MouseButton::Button8 => f.write_str("BUTTON 8"),
        }
    }
}

/// Key or button state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Release,
    Press,
    Repeat,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Press => f.write_str("PRESSED"),
            Action::Release => f.write_str("RELEASED"),
            Action::Repeat => f.write_str("REPEATED"),
        }
    }
}

bitflags! {
    /// Modifier keys held during a key or button event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// One of the shift keys.
        const SHIFT = 1;
        /// One of the control keys.
        const CONTROL = 2;
        /// One of the alt keys.
        const ALT = 4;
        /// One of the super (command) keys.
        const SUPER = 8;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Modifiers::SHIFT) {
            names.push("SHIFT");
        }
        if self.contains(Modifiers::CONTROL) {
            names.push("CONTROL");
        }
        if self.contains(Modifiers::ALT) {
            names.push("ALT");
        }
        if self.contains(Modifiers::SUPER) {
            names.push("SUPER");
        }
        write!(f, "[{}]", names.join(","))
    }
}

/// Cursor behavior while the window has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorMode {
    /// Cursor visible and free to leave the window.
    Normal,
    /// Cursor hidden over the content area, otherwise free.
    Hidden,
    /// Cursor hidden and locked to the window; provides unbounded deltas.
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display_names() {
        assert_eq!(Key::A.to_string(), "A");
        assert_eq!(Key::Num7.to_string(), "7");
        assert_eq!(Key::LeftBracket.to_string(), "LEFT BRACKET");
        assert_eq!(Key::KpEnter.to_string(), "KEYPAD ENTER");
    }

    #[test]
    fn test_key_codes_match_native_tokens() {
        assert_eq!(Key::Space.code(), 32);
        assert_eq!(Key::Escape.code(), 256);
        assert_eq!(Key::Menu.code(), 348);
    }

    #[test]
    fn test_modifier_rendering() {
        assert_eq!(Modifiers::empty().to_string(), "[]");
        assert_eq!(
            (Modifiers::SHIFT | Modifiers::CONTROL).to_string(),
            "[SHIFT,CONTROL]"
        );
        assert_eq!(Modifiers::SUPER.to_string(), "[SUPER]");
    }

    #[test]
    fn test_action_rendering() {
        assert_eq!(Action::Press.to_string(), "PRESSED");
        assert_eq!(Action::Release.to_string(), "RELEASED");
        assert_eq!(Action::Repeat.to_string(), "REPEATED");
    }
}

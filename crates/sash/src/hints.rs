//! Window creation hints and queryable attributes

/// Client API to create a context for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientApi {
    /// Desktop OpenGL.
    OpenGl,
    /// OpenGL ES.
    OpenGlEs,
    /// No context at all (Vulkan or CPU-side windows).
    NoApi,
}

/// OpenGL profile to request. Hard constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenGlProfile {
    /// Let the driver pick.
    Any,
    /// Core profile.
    Core,
    /// Compatibility profile.
    Compat,
}

/// A hint applied to subsequently created windows.
///
/// Hints are sticky: they stay in effect until changed or reset with
/// `default_window_hints`. Browser-only hints from the canvas backend have no
/// desktop counterpart and are not represented here.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowHint {
    /// Whether the window will be given input focus when created.
    Focused(bool),
    /// Whether the window will be resizable by the user.
    Resizable(bool),
    /// Whether the window will be initially visible.
    Visible(bool),
    /// Whether the window will have decorations such as a border.
    Decorated(bool),
    /// Whether fullscreen windows iconify and restore the video mode on focus loss.
    AutoIconify(bool),
    /// Whether the window will be always-on-top.
    Floating(bool),
    /// Whether the window will be initially maximized.
    Maximized(bool),
    /// Whether the framebuffer should be transparent.
    TransparentFramebuffer(bool),
    /// Whether the window gains input focus when shown.
    FocusOnShow(bool),
    /// Whether the content area resizes with the monitor content scale.
    ScaleToMonitor(bool),
    /// Desired bit depth of the framebuffer's red channel.
    RedBits(Option<u32>),
    /// Desired bit depth of the framebuffer's green channel.
    GreenBits(Option<u32>),
    /// Desired bit depth of the framebuffer's blue channel.
    BlueBits(Option<u32>),
    /// Desired bit depth of the framebuffer's alpha channel.
    AlphaBits(Option<u32>),
    /// Desired bit depth of the depth buffer.
    DepthBits(Option<u32>),
    /// Desired bit depth of the stencil buffer.
    StencilBits(Option<u32>),
    /// Desired multisampling sample count. Zero disables multisampling.
    Samples(Option<u32>),
    /// Whether the framebuffer should be sRGB capable.
    SRgbCapable(bool),
    /// Whether the framebuffer should be double buffered. Hard constraint.
    DoubleBuffer(bool),
    /// Whether to use stereoscopic rendering. Hard constraint.
    Stereo(bool),
    /// Desired refresh rate for fullscreen windows; `None` picks the highest available.
    RefreshRate(Option<u32>),
    /// Which client API to create the context for. Hard constraint.
    ClientApi(ClientApi),
    /// Client API major version the created context must be compatible with.
    ContextVersionMajor(u32),
    /// Client API minor version the created context must be compatible with.
    ContextVersionMinor(u32),
    /// Whether the OpenGL context should be forward-compatible. Hard constraint.
    OpenGlForwardCompat(bool),
    /// Whether to create a debug OpenGL context.
    OpenGlDebugContext(bool),
    /// Which OpenGL profile to create the context for. Hard constraint.
    OpenGlProfile(OpenGlProfile),
}

/// A queryable window attribute.
///
/// `set_attrib` supports the Decorated, Resizable, Floating and AutoIconify
/// subset; the rest are read-only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowAttrib {
    /// Window has input focus.
    Focused,
    /// Window is iconified.
    Iconified,
    /// Window is maximized.
    Maximized,
    /// Window is visible.
    Visible,
    /// Cursor is directly over the content area with no windows in between.
    Hovered,
    /// Window is resizable by the user.
    Resizable,
    /// Window has decorations.
    Decorated,
    /// Window is always-on-top.
    Floating,
    /// Fullscreen window iconifies on focus loss.
    AutoIconify,
    /// Window gains input focus when shown.
    FocusOnShow,
    /// Framebuffer is transparent.
    TransparentFramebuffer,
}

/// Buffer-swap synchronization with the display refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapInterval {
    /// Swap immediately.
    None,
    /// Adaptive vsync: sync unless the frame is late.
    Adaptive,
    /// Wait for `n` screen updates before swapping ("vsync" when `n` is 1).
    Sync(u32),
}

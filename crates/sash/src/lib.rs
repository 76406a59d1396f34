//! # sash
//!
//! A GLFW windowing and input binding in which every native call is
//! marshalled onto one dedicated render thread.
//!
//! ## Features
//!
//! - **Single-thread affinity**: GLFW and GL contexts are only touched from
//!   the render thread; callers on any thread go through a FIFO dispatch
//!   queue with blocking or fire-and-forget semantics per operation
//! - **Typed event callbacks**: one handler per event kind per window,
//!   delivered on the render thread without re-dispatch
//! - **Context watcher**: GL bindings are told synchronously when a context
//!   becomes current or is detached
//! - **Pluggable backend**: the native seam is a trait, so tests run against
//!   a scripted backend with no window system at all
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sash::{Library, NullWatcher, RenderLoop};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let render = Arc::new(RenderLoop::spawn());
//!     let lib = Library::init(render.clone(), Arc::new(NullWatcher))?;
//!
//!     let window = lib.create_window(640, 480, "sash", None, None)?;
//!     window.set_key_callback(|w, key, _scancode, action, _mods| {
//!         println!("window {}: {key} was {action}", w.id());
//!     });
//!
//!     while !window.should_close() {
//!         lib.wait_events();
//!     }
//!
//!     lib.terminate();
//!     render.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod backend;
pub mod context;
pub mod dispatch;
pub mod events;
pub mod hints;
pub mod input;
pub mod window;

mod library;
mod session;

pub use context::{ContextId, ContextWatcher, NullWatcher};
pub use dispatch::{RenderLoop, RenderThread, WorkItem};
pub use events::WindowEvent;
pub use hints::{ClientApi, OpenGlProfile, SwapInterval, WindowAttrib, WindowHint};
pub use input::{Action, CursorMode, Key, Modifiers, MouseButton};
pub use library::{InitError, Library, WindowError};
pub use window::{Monitor, Window};

/// Common imports for binding users.
pub mod prelude {
    pub use crate::{
        Action, ContextWatcher, CursorMode, Key, Library, Modifiers, Monitor, MouseButton,
        NullWatcher, RenderLoop, RenderThread, SwapInterval, Window, WindowAttrib, WindowEvent,
        WindowHint,
    };
}

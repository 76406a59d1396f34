//! Window and monitor handles
//!
//! Handles are thin cloneable identifiers; the native objects they refer to
//! live on the render thread, and every method here routes through the
//! dispatch queue with the calling convention its result requires.

pub mod callbacks;
mod handle;

pub use handle::{Monitor, Window};

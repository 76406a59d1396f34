//! Event linter: hooks every available callback and prints their arguments.
//!
//! Each line carries an event counter, the window id, and seconds since the
//! process started, so event ordering and timing problems stand out.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use sash::{Library, NullWatcher, RenderLoop};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_event() -> usize {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Seconds since the process started.
fn stamp() -> f64 {
    static STARTED: OnceLock<Instant> = OnceLock::new();
    STARTED.get_or_init(Instant::now).elapsed().as_secs_f64()
}

fn main() {
    env_logger::init();
    stamp(); // pin the start of the clock

    let render = Arc::new(RenderLoop::spawn());
    let lib = Library::init(render.clone(), Arc::new(NullWatcher))
        .expect("failed to initialize the windowing library");
    println!("Library initialized.");

    let window = lib
        .create_window(640, 480, "Event Linter", None, None)
        .expect("failed to create window");

    window.set_pos_callback(move |w, x, y| {
        println!(
            "{:08x} to {} at {:0.3}: Window position: {} {}",
            next_event(),
            w.id(),
            stamp(),
            x,
            y
        );
    });
    window.set_size_callback(move |w, width, height| {
        println!(
            "{:08x} to {} at {:0.3}: Window size: {} {}",
            next_event(),
            w.id(),
            stamp(),
            width,
            height
        );
    });
    window.set_framebuffer_size_callback(move |w, width, height| {
        println!(
            "{:08x} to {} at {:0.3}: Framebuffer size: {} {}",
            next_event(),
            w.id(),
            stamp(),
            width,
            height
        );
    });
    window.set_close_callback(move |w| {
        println!(
            "{:08x} to {} at {:0.3}: Window close",
            next_event(),
            w.id(),
            stamp()
        );
    });
    window.set_refresh_callback(move |w| {
        println!(
            "{:08x} to {} at {:0.3}: Window refresh",
            next_event(),
            w.id(),
            stamp()
        );
    });
    window.set_focus_callback(move |w, focused| {
        println!(
            "{:08x} to {} at {:0.3}: Window {}",
            next_event(),
            w.id(),
            stamp(),
            if focused { "focused" } else { "defocused" }
        );
    });
    window.set_iconify_callback(move |w, iconified| {
        println!(
            "{:08x} to {} at {:0.3}: Window was {}",
            next_event(),
            w.id(),
            stamp(),
            if iconified { "iconified" } else { "restored" }
        );
    });
    window.set_maximize_callback(move |w, maximized| {
        println!(
            "{:08x} to {} at {:0.3}: Window was {}",
            next_event(),
            w.id(),
            stamp(),
            if maximized { "maximized" } else { "restored" }
        );
    });
    window.set_content_scale_callback(move |w, x, y| {
        println!(
            "{:08x} to {} at {:0.3}: Content scale: {} {}",
            next_event(),
            w.id(),
            stamp(),
            x,
            y
        );
    });
    window.set_mouse_button_callback(move |w, button, action, mods| {
        println!(
            "{:08x} to {} at {:0.3}: Mouse button {:?} ({}) (with{}) was {}",
            next_event(),
            w.id(),
            stamp(),
            button,
            button,
            mods,
            action
        );
    });
    window.set_cursor_pos_callback(move |w, x, y| {
        println!(
            "{:08x} to {} at {:0.3}: Cursor position: {:.6} {:.6}",
            next_event(),
            w.id(),
            stamp(),
            x,
            y
        );
    });
    window.set_cursor_enter_callback(move |w, entered| {
        println!(
            "{:08x} to {} at {:0.3}: Cursor {} window",
            next_event(),
            w.id(),
            stamp(),
            if entered { "entered" } else { "left" }
        );
    });
    window.set_scroll_callback(move |w, x, y| {
        println!(
            "{:08x} to {} at {:0.3}: Scroll: {:0.3} {:0.3}",
            next_event(),
            w.id(),
            stamp(),
            x,
            y
        );
    });
    window.set_key_callback(move |w, key, scancode, action, mods| {
        println!(
            "{:08x} to {} at {:0.3}: Key 0x{:04x} Scancode 0x{:04x} ({}) (with{}) was {}",
            next_event(),
            w.id(),
            stamp(),
            key.code(),
            scancode,
            key,
            mods,
            action
        );
    });
    window.set_char_callback(move |w, ch| {
        println!(
            "{:08x} to {} at {:0.3}: Character 0x{:08x} ({:?}) input",
            next_event(),
            w.id(),
            stamp(),
            ch as u32,
            ch
        );
    });
    window.set_char_mods_callback(move |w, ch, mods| {
        println!(
            "{:08x} to {} at {:0.3}: Character 0x{:08x} ({:?}) with modifiers (with{}) input",
            next_event(),
            w.id(),
            stamp(),
            ch as u32,
            ch,
            mods
        );
    });
    window.set_file_drop_callback(move |w, paths| {
        println!(
            "{:08x} to {} at {:0.3}: Drop input",
            next_event(),
            w.id(),
            stamp()
        );
        for (i, path) in paths.iter().enumerate() {
            println!("  {}: {:?}", i, path);
        }
    });

    println!("Main loop starting.");

    while !window.should_close() {
        lib.wait_events();
    }

    lib.terminate();
    render.shutdown();
}

//! Windowed input/render adapter.
//!
//! The window, event polling, and frame presentation live here; the
//! engine underneath only ever sees pointer samples and hands back a
//! finished pixel field. Uses winit for the window and pixels for the
//! framebuffer blit.

mod window_app;

pub use window_app::{WindowConfig, run_window};

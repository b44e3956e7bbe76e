//! # View Layer
//!
//! Scroll math and frame rendering. Views never mutate the buffer; they only read it
//! together with the editor state and produce terminal output.

pub mod viewport_renderer;

pub use viewport_renderer::ViewportRenderer;

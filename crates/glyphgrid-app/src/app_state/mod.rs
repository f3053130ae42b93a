//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the glyph buffer and the viewport transform and lends
//! both to the renderer once per frame.

mod core;
mod event_handler;
mod init;
mod keys;
mod polling;
mod render;

pub use core::GlyphgridApp;

//! Window integration.
//!
//! The application owns the `winit` event loop and the GL context; it hands
//! window events to a [`WindowBridge`], which republishes them on the hub.

mod bridge;

pub use bridge::WindowBridge;

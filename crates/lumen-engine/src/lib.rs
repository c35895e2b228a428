//! Lumen engine crate.
//!
//! Batched 2D quad rendering over OpenGL: fixed-capacity vertex/index buffers
//! whose GPU lifetime follows lifecycle notifications (context ready, resize,
//! shutdown), textures and glyph atlases, and the window bridge that emits
//! those notifications.

pub mod config;
pub mod coords;
pub mod error;
pub mod gl;
pub mod gpu_data;
pub mod logging;
pub mod notify;
pub mod render;
pub mod text;
pub mod texture;
pub mod window;

pub use config::{RendererConfig, ShaderPrograms};
pub use error::{RenderError, Result};

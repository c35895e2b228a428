//! OpenGL call surface.
//!
//! - [`Gl`]: the raw calls buffers and textures need
//! - [`GlService`]: bind/unbind helpers, debug groups, object labels
//! - [`GlowGl`]: native backend
//! - [`RecordingGl`]: headless backend that records the command stream

mod api;
mod glow_backend;
mod recording;
mod service;

pub use api::{
    BufferTarget, BufferUsage, Gl, ObjectKind, TextureFilter, TextureParam, TextureWrap,
    VertexAttrib,
};
pub use glow_backend::GlowGl;
pub use recording::{GlCall, RecordingGl};
pub use service::{GlCapabilities, GlService};

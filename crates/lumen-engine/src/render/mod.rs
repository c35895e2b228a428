//! Batched quad rendering on top of the [`Gl`](crate::gl::Gl) surface.
//!
//! - [`GpuBuffer`]: VAO/VBO/EBO lifecycle driven by lifecycle notifications
//! - [`shapes`]: what goes into the buffers (rectangles, lines, textures, glyphs)
//! - [`BatchRenderer`]/[`Renderer`]: queueing and flushing per frame

mod batch;
mod buffer;
pub mod shapes;

pub use batch::{BatchRenderer, Renderer};
pub use buffer::{BufferHandles, BufferShape, BufferState, GpuBuffer, DEFAULT_BATCH_SIZE};

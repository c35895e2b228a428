//! CPU-side vertex records and quad bundles written into GPU vertex buffers.

mod quad;
pub mod transform;
mod vertex;

pub use quad::{LineGpuData, Quad, RectGpuData, TextureGpuData};
pub use vertex::{LineVertexData, RectVertexData, TextureVertexData, VertexNumber};

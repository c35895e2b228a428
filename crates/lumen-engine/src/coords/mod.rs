//! Coordinate and geometry types shared by the buffers and the batch renderer.
//!
//! Canonical CPU space:
//! - pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Vertex records carry NDC positions; conversion happens in `Viewport::to_ndc`.

mod color;
mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

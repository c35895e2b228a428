//! Concrete buffer shapes.
//!
//! Every shape draws quads: 4 vertices and 6 indices per item. Geometry comes
//! in as pixels (top-left origin, +Y down) and is converted to NDC on the CPU
//! using the last viewport size the buffer was notified about.

mod common;

pub mod line;
pub mod rect;
pub mod texture;

pub use line::{LineItem, LineShape};
pub use rect::{RectItem, RectShape};
pub use texture::{TextureItem, TextureShape};

//! Fonts and glyph atlases.
//!
//! Text is drawn as textured quads: glyphs are rasterized once into a
//! [`GlyphAtlas`], the atlas is uploaded as a texture, and
//! [`GlyphAtlas::layout`] turns a string into texture items for the glyph batch.

mod atlas;
mod font_system;
mod packer;

pub use atlas::{GlyphAtlas, GlyphBitmap, GlyphMetrics, LineMetrics};
pub use font_system::{FontId, FontSystem};
pub use packer::{AtlasPacker, GLYPH_PADDING};

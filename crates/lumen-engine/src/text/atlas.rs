use std::collections::HashMap;

use crate::coords::{ColorRgba, Rect, Vec2};
use crate::error::{RenderError, Result};
use crate::render::shapes::TextureItem;
use crate::texture::{Argb, ImageData};

use super::packer::AtlasPacker;
use super::{FontId, FontSystem};

/// Rasterized coverage for one character.
///
/// `xmin`/`ymin` follow fontdue: offsets from the pen position on the
/// baseline to the bitmap's bottom-left corner, +Y up.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    pub ch: char,
    pub width: u32,
    pub height: u32,
    pub xmin: f32,
    pub ymin: f32,
    pub advance: f32,
    /// One coverage byte per pixel, row-major from the top.
    pub coverage: Vec<u8>,
}

/// Where a glyph sits in the atlas and how it is positioned on a line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphMetrics {
    /// Texel rectangle inside the atlas. Empty for blank glyphs such as space.
    pub atlas_rect: Rect,
    pub xmin: f32,
    pub ymin: f32,
    pub advance: f32,
}

/// Vertical metrics shared by every glyph of one atlas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineMetrics {
    /// Distance from the top of a line to its baseline.
    pub ascent: f32,
    pub line_height: f32,
}

/// Glyphs of one font at one pixel size, packed into a single image.
///
/// The image is white with glyph coverage in the alpha channel, so tinting a
/// glyph quad colors the text.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    source: String,
    font_size: f32,
    line: LineMetrics,
    glyphs: HashMap<char, GlyphMetrics>,
    image: ImageData,
}

impl GlyphAtlas {
    /// Packs already rasterized glyphs into a `width`×`height` atlas.
    pub fn from_bitmaps(
        source: &str,
        font_size: f32,
        line: LineMetrics,
        width: u32,
        height: u32,
        bitmaps: &[GlyphBitmap],
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid_argument("atlas size", "atlas must be at least 1x1"));
        }

        let mut packer = AtlasPacker::new(width, height);
        let mut pixels = vec![Argb::new(0, 0xFF, 0xFF, 0xFF); width as usize * height as usize];
        let mut glyphs = HashMap::with_capacity(bitmaps.len());

        for bitmap in bitmaps {
            if bitmap.coverage.len() != bitmap.width as usize * bitmap.height as usize {
                return Err(RenderError::invalid_argument(
                    "coverage",
                    format!("glyph {:?} coverage does not match {}x{}", bitmap.ch, bitmap.width, bitmap.height),
                ));
            }

            let atlas_rect = if bitmap.width == 0 || bitmap.height == 0 {
                Rect::default()
            } else {
                let (x, y) = packer.place(bitmap.width, bitmap.height)?;
                blit(&mut pixels, width, x, y, bitmap);
                Rect::new(x as f32, y as f32, bitmap.width as f32, bitmap.height as f32)
            };

            glyphs.insert(
                bitmap.ch,
                GlyphMetrics { atlas_rect, xmin: bitmap.xmin, ymin: bitmap.ymin, advance: bitmap.advance },
            );
        }

        log::debug!("glyph atlas `{source}` @ {font_size}px: {} glyphs in {width}x{height}", glyphs.len());

        Ok(Self {
            source: source.to_string(),
            font_size,
            line,
            glyphs,
            image: ImageData::new(width, height, pixels)?,
        })
    }

    /// Rasterizes `chars` from a loaded font and packs them.
    pub fn build(
        fonts: &FontSystem,
        font: FontId,
        font_size: f32,
        chars: impl IntoIterator<Item = char>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let Some(face) = fonts.get(font) else {
            return Err(RenderError::invalid_argument("font", format!("unknown font {font:?}")));
        };

        let line = face.horizontal_line_metrics(font_size).map_or(
            LineMetrics { ascent: font_size, line_height: font_size * 1.2 },
            |m| LineMetrics { ascent: m.ascent, line_height: m.new_line_size },
        );

        let bitmaps: Vec<GlyphBitmap> = chars
            .into_iter()
            .map(|ch| {
                let (m, coverage) = face.rasterize(ch, font_size);
                GlyphBitmap {
                    ch,
                    width: m.width as u32,
                    height: m.height as u32,
                    xmin: m.xmin as f32,
                    ymin: m.ymin as f32,
                    advance: m.advance_width,
                    coverage,
                }
            })
            .collect();

        Self::from_bitmaps(&format!("font#{}", font.0), font_size, line, width, height, &bitmaps)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    #[inline]
    pub fn line_metrics(&self) -> LineMetrics {
        self.line
    }

    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.get(&ch)
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    /// Glyph quads for `text` with the first line's top-left at `origin`.
    ///
    /// Characters missing from the atlas are skipped without advancing the pen.
    /// `'\n'` starts a new line.
    pub fn layout(&self, text: &str, origin: Vec2, color: ColorRgba, texture_id: u32) -> Vec<TextureItem> {
        let mut items = Vec::with_capacity(text.len());
        let mut pen = origin.x;
        let mut baseline = origin.y + self.line.ascent;

        for ch in text.chars() {
            if ch == '\n' {
                pen = origin.x;
                baseline += self.line.line_height;
                continue;
            }
            let Some(g) = self.glyphs.get(&ch) else {
                log::trace!("glyph {ch:?} not in atlas `{}`", self.source);
                continue;
            };

            if !g.atlas_rect.is_empty() {
                let w = g.atlas_rect.width();
                let h = g.atlas_rect.height();
                let left = pen + g.xmin;
                let top = baseline - (g.ymin + h);

                items.push(TextureItem {
                    texture_id,
                    texture_width: self.image.width(),
                    texture_height: self.image.height(),
                    src_rect: g.atlas_rect,
                    dest_position: Vec2::new(left + w / 2.0, top + h / 2.0),
                    scale: Vec2::new(1.0, 1.0),
                    angle: 0.0,
                    tint: color,
                    flip_horizontal: false,
                    flip_vertical: false,
                });
            }
            pen += g.advance;
        }
        items
    }
}

fn blit(pixels: &mut [Argb], atlas_width: u32, x: u32, y: u32, bitmap: &GlyphBitmap) {
    for row in 0..bitmap.height {
        let src = (row * bitmap.width) as usize;
        let dst = ((y + row) * atlas_width + x) as usize;
        for col in 0..bitmap.width as usize {
            pixels[dst + col].a = bitmap.coverage[src + col];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: LineMetrics = LineMetrics { ascent: 10.0, line_height: 14.0 };

    fn bitmap(ch: char, width: u32, height: u32, advance: f32) -> GlyphBitmap {
        GlyphBitmap {
            ch,
            width,
            height,
            xmin: 1.0,
            ymin: -2.0,
            advance,
            coverage: (0..width * height).map(|i| (i * 10) as u8).collect(),
        }
    }

    fn atlas() -> GlyphAtlas {
        let bitmaps = [bitmap('a', 4, 6, 5.0), bitmap(' ', 0, 0, 3.0), bitmap('b', 2, 2, 4.0)];
        GlyphAtlas::from_bitmaps("test", 12.0, LINE, 16, 16, &bitmaps).unwrap()
    }

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn glyphs_get_padded_atlas_rects() {
        let a = atlas();
        assert_eq!(a.glyph('a').unwrap().atlas_rect, Rect::new(1.0, 1.0, 4.0, 6.0));
        assert_eq!(a.glyph('b').unwrap().atlas_rect, Rect::new(6.0, 1.0, 2.0, 2.0));
        assert!(a.glyph(' ').unwrap().atlas_rect.is_empty());
    }

    #[test]
    fn coverage_lands_in_alpha_of_white_pixels() {
        let a = atlas();
        let img = a.image();
        assert_eq!(img.pixel(1, 1), Some(Argb::new(0, 0xFF, 0xFF, 0xFF)));
        assert_eq!(img.pixel(2, 1), Some(Argb::new(10, 0xFF, 0xFF, 0xFF)));
        assert_eq!(img.pixel(1, 2), Some(Argb::new(40, 0xFF, 0xFF, 0xFF)));
        assert_eq!(img.pixel(0, 0).map(|p| p.a), Some(0));
    }

    #[test]
    fn overflowing_atlas_fails() {
        let bitmaps = [bitmap('a', 10, 10, 1.0), bitmap('b', 10, 10, 1.0)];
        let err = GlyphAtlas::from_bitmaps("test", 12.0, LINE, 16, 16, &bitmaps).unwrap_err();
        assert_eq!(err, RenderError::AtlasFull { width: 16, height: 16 });
    }

    #[test]
    fn mismatched_coverage_is_rejected() {
        let mut b = bitmap('a', 2, 2, 1.0);
        b.coverage.pop();
        let err = GlyphAtlas::from_bitmaps("test", 12.0, LINE, 16, 16, &[b]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument { name: "coverage", .. }));
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_advances_pen_and_skips_blank_quads() {
        let a = atlas();
        let items = a.layout("a b", Vec2::new(100.0, 50.0), ColorRgba::black(), 9);

        assert_eq!(items.len(), 2);
        // 'a': left = 100 + 1, top = 60 - (-2 + 6) = 56.
        assert_eq!(items[0].dest_position, Vec2::new(103.0, 59.0));
        assert_eq!(items[0].src_rect, Rect::new(1.0, 1.0, 4.0, 6.0));
        assert_eq!(items[0].texture_id, 9);
        assert_eq!((items[0].texture_width, items[0].texture_height), (16, 16));
        // 'b' after 'a' (5) and ' ' (3): left = 109, top = 60 - 0 = 60.
        assert_eq!(items[1].dest_position, Vec2::new(110.0, 61.0));
        assert!(items.iter().all(|i| i.tint == ColorRgba::black()));
    }

    #[test]
    fn newline_resets_pen_and_moves_down() {
        let a = atlas();
        let items = a.layout("b\nb", Vec2::zero(), ColorRgba::white(), 1);
        assert_eq!(items[0].dest_position, Vec2::new(2.0, 11.0));
        assert_eq!(items[1].dest_position, Vec2::new(2.0, 25.0));
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let a = atlas();
        let items = a.layout("zzb", Vec2::zero(), ColorRgba::white(), 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].dest_position.x, 2.0);
    }
}

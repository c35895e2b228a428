use crate::coords::{ColorRgba, Rect, Vec2, Viewport};
use crate::gl::GlService;
use crate::gpu_data::{transform, TextureGpuData, TextureVertexData, VertexNumber};
use crate::notify::ViewportSizeData;
use crate::render::buffer::BufferShape;

use super::common::{quad_indices, setup_float_attribs, write_quad, zeroed_quads};

/// A sub-rectangle of a texture drawn at a destination point.
///
/// `src_rect` is in texel units. The drawn size is `src_rect.size * scale`,
/// centered on `dest_position` and rotated by `angle` degrees around it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureItem {
    pub texture_id: u32,
    pub texture_width: u32,
    pub texture_height: u32,
    pub src_rect: Rect,
    pub dest_position: Vec2,
    pub scale: Vec2,
    pub angle: f32,
    pub tint: ColorRgba,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl TextureItem {
    /// Whole texture at its natural size, untinted.
    pub fn whole(texture_id: u32, width: u32, height: u32, dest_position: Vec2) -> Self {
        Self {
            texture_id,
            texture_width: width,
            texture_height: height,
            src_rect: Rect::new(0.0, 0.0, width as f32, height as f32),
            dest_position,
            scale: Vec2::new(1.0, 1.0),
            angle: 0.0,
            tint: ColorRgba::white(),
            flip_horizontal: false,
            flip_vertical: false,
        }
    }

    /// Texture coordinates for the quad corners in winding order.
    pub fn texture_coords(&self) -> [Vec2; 4] {
        let tw = self.texture_width.max(1) as f32;
        let th = self.texture_height.max(1) as f32;
        let src = self.src_rect;

        let (mut u0, mut u1) = (src.origin.x / tw, (src.origin.x + src.width()) / tw);
        let (mut v0, mut v1) = (src.origin.y / th, (src.origin.y + src.height()) / th);
        if self.flip_horizontal {
            std::mem::swap(&mut u0, &mut u1);
        }
        if self.flip_vertical {
            std::mem::swap(&mut v0, &mut v1);
        }

        [Vec2::new(u0, v0), Vec2::new(u1, v0), Vec2::new(u1, v1), Vec2::new(u0, v1)]
    }

    /// Destination corners in pixels, after rotation.
    pub fn dest_corners(&self) -> [Vec2; 4] {
        let w = self.src_rect.width() * self.scale.x;
        let h = self.src_rect.height() * self.scale.y;
        Rect::from_center(self.dest_position, w, h)
            .corners()
            .map(|c| c.rotate_around(self.dest_position, self.angle))
    }
}

/// `loc 0 position vec2`, `loc 1 texture_coord vec2`, `loc 2 tint vec4`; stride 32.
const ATTRIBS: [i32; 3] = [2, 2, 4];

/// Batches [`TextureItem`]s that share a texture.
///
/// The same shape drives glyph rendering; only the name differs so the two
/// buffers are distinguishable in a frame capture.
#[derive(Debug)]
pub struct TextureShape {
    name: &'static str,
    viewport: Viewport,
}

impl Default for TextureShape {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureShape {
    pub fn new() -> Self {
        Self { name: "Texture", viewport: Viewport::default() }
    }

    /// Shape used for text; items sample the glyph atlas.
    pub fn glyphs() -> Self {
        Self { name: "Font", viewport: Viewport::default() }
    }

    pub fn quad_for(&self, item: &TextureItem) -> TextureGpuData {
        let corners = item.dest_corners();
        let uvs = item.texture_coords();

        let mut quad = TextureGpuData::splat(TextureVertexData::default());
        for n in VertexNumber::ALL {
            let i = n.index();
            quad = transform::texture::set_position(quad, self.viewport.to_ndc(corners[i]), n);
            quad = transform::texture::set_texture_coord(quad, uvs[i], n);
        }
        transform::texture::set_tint_all(quad, item.tint)
    }
}

impl BufferShape for TextureShape {
    type Item = TextureItem;

    fn name(&self) -> &str {
        self.name
    }

    fn generate_vertex_data(&self, capacity: u32) -> Vec<u8> {
        zeroed_quads::<TextureVertexData>(capacity)
    }

    fn generate_index_data(&self, capacity: u32) -> Vec<u32> {
        quad_indices(capacity)
    }

    fn setup_vao(&self, svc: &GlService) {
        setup_float_attribs(svc, std::mem::size_of::<TextureVertexData>() as i32, &ATTRIBS);
    }

    fn prepare_for_upload(&mut self, svc: &GlService, item: &TextureItem) {
        svc.gl().active_texture(0);
        svc.bind_texture_2d(item.texture_id);
    }

    fn update_vertex_data(&mut self, svc: &GlService, item: &TextureItem, batch_index: u32) {
        write_quad(svc, &self.quad_for(item), batch_index);
    }

    fn viewport_changed(&mut self, size: ViewportSizeData) {
        self.viewport = Viewport::new(size.width as f32, size.height as f32);
    }

    fn batch_key(&self, item: &TextureItem) -> Option<u32> {
        Some(item.texture_id)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::gl::{GlCall, GlCapabilities, RecordingGl};

    fn item() -> TextureItem {
        TextureItem {
            src_rect: Rect::new(16.0, 0.0, 16.0, 32.0),
            ..TextureItem::whole(7, 64, 32, Vec2::new(32.0, 32.0))
        }
    }

    // ── texture coordinates ───────────────────────────────────────────────

    #[test]
    fn uvs_cover_source_rect() {
        assert_eq!(
            item().texture_coords(),
            [
                Vec2::new(0.25, 0.0),
                Vec2::new(0.5, 0.0),
                Vec2::new(0.5, 1.0),
                Vec2::new(0.25, 1.0),
            ]
        );
    }

    #[test]
    fn flips_swap_uv_axes() {
        let flipped = TextureItem { flip_horizontal: true, flip_vertical: true, ..item() };
        let uv = flipped.texture_coords();
        assert_eq!(uv[0], Vec2::new(0.5, 1.0));
        assert_eq!(uv[2], Vec2::new(0.25, 0.0));
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn scale_multiplies_source_size() {
        let scaled = TextureItem { scale: Vec2::new(2.0, 0.5), ..item() };
        let c = scaled.dest_corners();
        assert_eq!(c[0], Vec2::new(16.0, 24.0));
        assert_eq!(c[2], Vec2::new(48.0, 40.0));
    }

    #[test]
    fn rotation_keeps_center() {
        let rotated = TextureItem { angle: 90.0, ..item() };
        let c = rotated.dest_corners();
        let center = (c[0] + c[2]) * 0.5;
        assert!((center - Vec2::new(32.0, 32.0)).length() < 1e-4);
        // 16x32 on its side spans 32 horizontally.
        assert!(((c[0].x - c[2].x).abs() - 32.0).abs() < 1e-4);
    }

    #[test]
    fn tint_is_shared() {
        let shape = TextureShape::new();
        let tint = ColorRgba::new(1.0, 0.0, 0.0, 0.5);
        let q = shape.quad_for(&TextureItem { tint, ..item() });
        assert!(q.vertices().iter().all(|v| v.tint() == tint));
    }

    // ── gl ────────────────────────────────────────────────────────────────

    #[test]
    fn prepare_binds_item_texture_on_unit_zero() {
        let gl = Rc::new(RecordingGl::new());
        let svc = GlService::new(gl.clone(), GlCapabilities::default());
        let mut shape = TextureShape::new();

        shape.prepare_for_upload(&svc, &item());

        assert_eq!(gl.calls(), vec![GlCall::ActiveTexture(0), GlCall::BindTexture(7)]);
    }

    #[test]
    fn batch_key_is_texture_id() {
        assert_eq!(TextureShape::new().batch_key(&item()), Some(7));
        assert_eq!(TextureShape::glyphs().name(), "Font");
    }
}

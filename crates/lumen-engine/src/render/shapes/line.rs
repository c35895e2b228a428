use crate::coords::{ColorRgba, Vec2, Viewport};
use crate::gl::GlService;
use crate::gpu_data::{transform, LineGpuData, LineVertexData, VertexNumber};
use crate::notify::ViewportSizeData;
use crate::render::buffer::BufferShape;

use super::common::{quad_indices, setup_float_attribs, write_quad, zeroed_quads};

/// Straight segment from `p1` to `p2` in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineItem {
    pub p1: Vec2,
    pub p2: Vec2,
    pub color: ColorRgba,
    pub thickness: f32,
}

impl LineItem {
    pub fn new(p1: Vec2, p2: Vec2, color: ColorRgba, thickness: f32) -> Self {
        Self { p1, p2, color, thickness }
    }
}

/// `loc 0 position vec2`, `loc 1 color vec4`; stride 24.
const ATTRIBS: [i32; 2] = [2, 4];

/// Batches [`LineItem`]s, each expanded on the CPU into a thick quad.
#[derive(Debug, Default)]
pub struct LineShape {
    viewport: Viewport,
}

impl LineShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quad extruded by half the thickness on both sides of the segment.
    ///
    /// A zero-length segment yields a degenerate quad at `p1`.
    pub fn quad_for(&self, item: &LineItem) -> LineGpuData {
        let dir = (item.p2 - item.p1).normalized_or_zero();
        let offset = dir.perp() * (item.thickness.max(0.0) / 2.0);

        let corners = [
            item.p1 + offset,
            item.p2 + offset,
            item.p2 - offset,
            item.p1 - offset,
        ];

        let mut quad = LineGpuData::splat(LineVertexData::default());
        for (n, corner) in VertexNumber::ALL.into_iter().zip(corners) {
            quad = transform::line::set_position(quad, self.viewport.to_ndc(corner), n);
        }
        transform::line::set_color_all(quad, item.color)
    }
}

impl BufferShape for LineShape {
    type Item = LineItem;

    fn name(&self) -> &str {
        "Line"
    }

    fn generate_vertex_data(&self, capacity: u32) -> Vec<u8> {
        zeroed_quads::<LineVertexData>(capacity)
    }

    fn generate_index_data(&self, capacity: u32) -> Vec<u32> {
        quad_indices(capacity)
    }

    fn setup_vao(&self, svc: &GlService) {
        setup_float_attribs(svc, std::mem::size_of::<LineVertexData>() as i32, &ATTRIBS);
    }

    fn update_vertex_data(&mut self, svc: &GlService, item: &LineItem, batch_index: u32) {
        write_quad(svc, &self.quad_for(item), batch_index);
    }

    fn viewport_changed(&mut self, size: ViewportSizeData) {
        self.viewport = Viewport::new(size.width as f32, size.height as f32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(w: u32, h: u32) -> LineShape {
        let mut s = LineShape::new();
        s.viewport_changed(ViewportSizeData { width: w, height: h });
        s
    }

    #[test]
    fn horizontal_line_extrudes_vertically() {
        let s = shape(128, 128);
        let item = LineItem::new(Vec2::new(0.0, 64.0), Vec2::new(128.0, 64.0), ColorRgba::white(), 32.0);
        let q = s.quad_for(&item);

        // perp of +X is +Y (down in pixels), which maps to -Y in NDC.
        assert_eq!(q.vertex1().position(), Vec2::new(-1.0, -0.25));
        assert_eq!(q.vertex2().position(), Vec2::new(1.0, -0.25));
        assert_eq!(q.vertex3().position(), Vec2::new(1.0, 0.25));
        assert_eq!(q.vertex4().position(), Vec2::new(-1.0, 0.25));
    }

    #[test]
    fn color_is_set_on_every_vertex() {
        let s = shape(10, 10);
        let c = ColorRgba::new(0.1, 0.2, 0.3, 0.4);
        let q = s.quad_for(&LineItem::new(Vec2::zero(), Vec2::new(5.0, 5.0), c, 2.0));
        assert!(q.vertices().iter().all(|v| v.color() == c));
    }

    #[test]
    fn zero_length_line_collapses_to_a_point() {
        let s = shape(10, 10);
        let p = Vec2::new(5.0, 5.0);
        let q = s.quad_for(&LineItem::new(p, p, ColorRgba::black(), 4.0));
        assert!(q.vertices().iter().all(|v| v.position() == Vec2::zero()));
    }
}

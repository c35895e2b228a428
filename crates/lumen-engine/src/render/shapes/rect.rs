use crate::coords::{ColorRgba, CornerRadii, Rect, Vec2, Viewport};
use crate::gl::GlService;
use crate::gpu_data::{transform, RectGpuData, RectVertexData, VertexNumber};
use crate::notify::ViewportSizeData;
use crate::render::buffer::BufferShape;

use super::common::{quad_indices, setup_float_attribs, write_quad, zeroed_quads};

/// One rectangle, positioned by its center in pixels.
///
/// A non-solid rectangle draws only its border. The fragment stage uses the
/// pixel-space `rectangle` bounds and radii carried on every vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectItem {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: ColorRgba,
    pub is_solid: bool,
    pub border_thickness: f32,
    pub radii: CornerRadii,
}

impl RectItem {
    /// Solid, square-cornered rectangle.
    pub fn filled(position: Vec2, width: f32, height: f32, color: ColorRgba) -> Self {
        Self {
            position,
            width,
            height,
            color,
            is_solid: true,
            border_thickness: 1.0,
            radii: CornerRadii::zero(),
        }
    }

    /// Border-only rectangle.
    pub fn outlined(position: Vec2, width: f32, height: f32, color: ColorRgba, thickness: f32) -> Self {
        Self { is_solid: false, border_thickness: thickness, ..Self::filled(position, width, height, color) }
    }

    pub fn with_radii(self, radii: CornerRadii) -> Self {
        Self { radii, ..self }
    }

    /// Pixel bounds with negative sizes flipped.
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.position, self.width, self.height).normalized()
    }
}

/// Vertex layout (stride 64):
///
/// ```text
///  loc 0  position            vec2
///  loc 1  rectangle           vec4
///  loc 2  color               vec4
///  loc 3  is_solid            float
///  loc 4  border_thickness    float
///  loc 5  top_left_radius     float
///  loc 6  bottom_left_radius  float
///  loc 7  bottom_right_radius float
///  loc 8  top_right_radius    float
/// ```
const ATTRIBS: [i32; 9] = [2, 4, 4, 1, 1, 1, 1, 1, 1];

/// Batches [`RectItem`]s into a single quad buffer.
#[derive(Debug, Default)]
pub struct RectShape {
    viewport: Viewport,
}

impl RectShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the quad for `item`: corners in NDC, everything else in pixels.
    pub fn quad_for(&self, item: &RectItem) -> RectGpuData {
        let bounds = item.bounds();
        let half = bounds.width().min(bounds.height()) / 2.0;

        let radii = item.radii.clamped(half);
        let thickness = item.border_thickness.max(1.0).min(half.max(1.0));

        let mut quad = RectGpuData::splat(RectVertexData::default());
        for (n, corner) in VertexNumber::ALL.into_iter().zip(bounds.corners()) {
            quad = transform::rect::set_position(quad, self.viewport.to_ndc(corner), n);
        }
        quad = transform::rect::set_rectangle_all(quad, bounds);
        quad = transform::rect::set_color_all(quad, item.color);
        quad = transform::rect::set_as_solid_all(quad, item.is_solid);
        quad = transform::rect::set_border_thickness_all(quad, thickness);
        quad = transform::rect::set_top_left_radius_all(quad, radii.top_left);
        quad = transform::rect::set_bottom_left_radius_all(quad, radii.bottom_left);
        quad = transform::rect::set_bottom_right_radius_all(quad, radii.bottom_right);
        transform::rect::set_top_right_radius_all(quad, radii.top_right)
    }
}

impl BufferShape for RectShape {
    type Item = RectItem;

    fn name(&self) -> &str {
        "Rectangle"
    }

    fn generate_vertex_data(&self, capacity: u32) -> Vec<u8> {
        zeroed_quads::<RectVertexData>(capacity)
    }

    fn generate_index_data(&self, capacity: u32) -> Vec<u32> {
        quad_indices(capacity)
    }

    fn setup_vao(&self, svc: &GlService) {
        setup_float_attribs(svc, std::mem::size_of::<RectVertexData>() as i32, &ATTRIBS);
    }

    fn update_vertex_data(&mut self, svc: &GlService, item: &RectItem, batch_index: u32) {
        write_quad(svc, &self.quad_for(item), batch_index);
    }

    fn viewport_changed(&mut self, size: ViewportSizeData) {
        self.viewport = Viewport::new(size.width as f32, size.height as f32);
    }
}

//! Field setters over quad bundles.
//!
//! Each `set_*` returns a new quad with one field replaced on one vertex; the
//! matching `set_*_all` applies it to vertices 1, 2, 3, 4 in order. Nothing
//! else in the quad changes.

pub mod rect {
    use crate::coords::{ColorRgba, Rect, Vec2};
    use crate::gpu_data::{RectGpuData, VertexNumber};

    pub fn set_position(data: RectGpuData, pos: Vec2, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_position(pos))
    }

    pub fn set_position_all(data: RectGpuData, pos: Vec2) -> RectGpuData {
        data.with_all(|v| v.with_position(pos))
    }

    pub fn set_rectangle(data: RectGpuData, rect: Rect, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_rectangle(rect))
    }

    pub fn set_rectangle_all(data: RectGpuData, rect: Rect) -> RectGpuData {
        data.with_all(|v| v.with_rectangle(rect))
    }

    pub fn set_color(data: RectGpuData, color: ColorRgba, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_color(color))
    }

    pub fn set_color_all(data: RectGpuData, color: ColorRgba) -> RectGpuData {
        data.with_all(|v| v.with_color(color))
    }

    pub fn set_as_solid(data: RectGpuData, is_solid: bool, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_is_solid(is_solid))
    }

    pub fn set_as_solid_all(data: RectGpuData, is_solid: bool) -> RectGpuData {
        data.with_all(|v| v.with_is_solid(is_solid))
    }

    pub fn set_border_thickness(data: RectGpuData, thickness: f32, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_border_thickness(thickness))
    }

    pub fn set_border_thickness_all(data: RectGpuData, thickness: f32) -> RectGpuData {
        data.with_all(|v| v.with_border_thickness(thickness))
    }

    pub fn set_top_left_radius(data: RectGpuData, radius: f32, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_top_left_radius(radius))
    }

    pub fn set_top_left_radius_all(data: RectGpuData, radius: f32) -> RectGpuData {
        data.with_all(|v| v.with_top_left_radius(radius))
    }

    pub fn set_bottom_left_radius(data: RectGpuData, radius: f32, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_bottom_left_radius(radius))
    }

    pub fn set_bottom_left_radius_all(data: RectGpuData, radius: f32) -> RectGpuData {
        data.with_all(|v| v.with_bottom_left_radius(radius))
    }

    pub fn set_bottom_right_radius(data: RectGpuData, radius: f32, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_bottom_right_radius(radius))
    }

    pub fn set_bottom_right_radius_all(data: RectGpuData, radius: f32) -> RectGpuData {
        data.with_all(|v| v.with_bottom_right_radius(radius))
    }

    pub fn set_top_right_radius(data: RectGpuData, radius: f32, n: VertexNumber) -> RectGpuData {
        data.with_vertex(n, |v| v.with_top_right_radius(radius))
    }

    pub fn set_top_right_radius_all(data: RectGpuData, radius: f32) -> RectGpuData {
        data.with_all(|v| v.with_top_right_radius(radius))
    }
}

pub mod line {
    use crate::coords::{ColorRgba, Vec2};
    use crate::gpu_data::{LineGpuData, VertexNumber};

    pub fn set_position(data: LineGpuData, pos: Vec2, n: VertexNumber) -> LineGpuData {
        data.with_vertex(n, |v| v.with_position(pos))
    }

    pub fn set_position_all(data: LineGpuData, pos: Vec2) -> LineGpuData {
        data.with_all(|v| v.with_position(pos))
    }

    pub fn set_color(data: LineGpuData, color: ColorRgba, n: VertexNumber) -> LineGpuData {
        data.with_vertex(n, |v| v.with_color(color))
    }

    pub fn set_color_all(data: LineGpuData, color: ColorRgba) -> LineGpuData {
        data.with_all(|v| v.with_color(color))
    }
}

pub mod texture {
    use crate::coords::{ColorRgba, Vec2};
    use crate::gpu_data::{TextureGpuData, VertexNumber};

    pub fn set_position(data: TextureGpuData, pos: Vec2, n: VertexNumber) -> TextureGpuData {
        data.with_vertex(n, |v| v.with_position(pos))
    }

    pub fn set_position_all(data: TextureGpuData, pos: Vec2) -> TextureGpuData {
        data.with_all(|v| v.with_position(pos))
    }

    pub fn set_texture_coord(data: TextureGpuData, coord: Vec2, n: VertexNumber) -> TextureGpuData {
        data.with_vertex(n, |v| v.with_texture_coord(coord))
    }

    pub fn set_texture_coord_all(data: TextureGpuData, coord: Vec2) -> TextureGpuData {
        data.with_all(|v| v.with_texture_coord(coord))
    }

    pub fn set_tint(data: TextureGpuData, tint: ColorRgba, n: VertexNumber) -> TextureGpuData {
        data.with_vertex(n, |v| v.with_tint(tint))
    }

    pub fn set_tint_all(data: TextureGpuData, tint: ColorRgba) -> TextureGpuData {
        data.with_all(|v| v.with_tint(tint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, CornerRadii, Rect, Vec2};
    use crate::gpu_data::{
        LineGpuData, LineVertexData, Quad, RectGpuData, RectVertexData, TextureGpuData,
        TextureVertexData, VertexNumber,
    };

    fn rect_quad() -> RectGpuData {
        let v = |i: f32| {
            RectVertexData::new(
                Vec2::new(i, -i),
                Rect::new(1.0, 2.0, 30.0, 40.0),
                ColorRgba::new(0.1, 0.2, 0.3, 1.0),
                false,
                2.0,
                CornerRadii::new(1.0, 2.0, 3.0, 4.0),
            )
        };
        Quad::new(v(1.0), v(2.0), v(3.0), v(4.0))
    }

    /// Single-vertex setter applied to every corner equals the `_all` variant.
    fn merged<V: Copy + PartialEq + std::fmt::Debug>(
        start: Quad<V>,
        single: impl Fn(Quad<V>, VertexNumber) -> Quad<V>,
        all: impl Fn(Quad<V>) -> Quad<V>,
    ) {
        let orders = [
            [VertexNumber::One, VertexNumber::Two, VertexNumber::Three, VertexNumber::Four],
            [VertexNumber::Four, VertexNumber::Three, VertexNumber::Two, VertexNumber::One],
            [VertexNumber::Three, VertexNumber::One, VertexNumber::Four, VertexNumber::Two],
        ];
        for order in orders {
            let by_vertex = order.into_iter().fold(start, &single);
            assert_eq!(by_vertex, all(start));
        }
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_single_vertex_setters_touch_one_corner() {
        let q = rect_quad();
        let out = rect::set_color(q, ColorRgba::white(), VertexNumber::Two);

        assert_eq!(out.vertex2().color(), ColorRgba::white());
        assert_eq!(out.vertex1(), q.vertex1());
        assert_eq!(out.vertex3(), q.vertex3());
        assert_eq!(out.vertex4(), q.vertex4());
        assert_eq!(out.vertex2().with_color(q.vertex2().color()), q.vertex2());
    }

    #[test]
    fn rect_position_keeps_other_fields() {
        let q = rect_quad();
        let out = rect::set_position(q, Vec2::new(9.0, 9.0), VertexNumber::Four);
        assert_eq!(out.vertex4().position(), Vec2::new(9.0, 9.0));
        assert_eq!(out.vertex4().rectangle(), q.vertex4().rectangle());
        assert_eq!(out.vertex4().color(), q.vertex4().color());
    }

    #[test]
    fn rect_all_variants_match_per_vertex_merge() {
        let q = rect_quad();
        let r = Rect::new(5.0, 6.0, 7.0, 8.0);
        let c = ColorRgba::new(0.5, 0.5, 0.5, 0.5);
        let p = Vec2::new(-3.0, 7.0);

        merged(q, |d, n| rect::set_position(d, p, n), |d| rect::set_position_all(d, p));
        merged(q, |d, n| rect::set_rectangle(d, r, n), |d| rect::set_rectangle_all(d, r));
        merged(q, |d, n| rect::set_color(d, c, n), |d| rect::set_color_all(d, c));
        merged(q, |d, n| rect::set_as_solid(d, true, n), |d| rect::set_as_solid_all(d, true));
        merged(
            q,
            |d, n| rect::set_border_thickness(d, 6.0, n),
            |d| rect::set_border_thickness_all(d, 6.0),
        );
        merged(
            q,
            |d, n| rect::set_top_left_radius(d, 9.0, n),
            |d| rect::set_top_left_radius_all(d, 9.0),
        );
        merged(
            q,
            |d, n| rect::set_bottom_left_radius(d, 9.0, n),
            |d| rect::set_bottom_left_radius_all(d, 9.0),
        );
        merged(
            q,
            |d, n| rect::set_bottom_right_radius(d, 9.0, n),
            |d| rect::set_bottom_right_radius_all(d, 9.0),
        );
        merged(
            q,
            |d, n| rect::set_top_right_radius(d, 9.0, n),
            |d| rect::set_top_right_radius_all(d, 9.0),
        );
    }

    #[test]
    fn rect_radius_setters_address_distinct_fields() {
        let q = RectGpuData::default();
        let out = rect::set_bottom_right_radius_all(q, 5.0);
        for v in out.vertices() {
            assert_eq!(v.bottom_right_radius(), 5.0);
            assert_eq!(v.top_left_radius(), 0.0);
            assert_eq!(v.bottom_left_radius(), 0.0);
            assert_eq!(v.top_right_radius(), 0.0);
        }
    }

    // ── line / texture ────────────────────────────────────────────────────

    #[test]
    fn line_setters() {
        let q = LineGpuData::splat(LineVertexData::new(Vec2::zero(), ColorRgba::black()));
        let out = line::set_position(q, Vec2::new(1.0, 1.0), VertexNumber::One);
        assert_eq!(out.vertex1().position(), Vec2::new(1.0, 1.0));
        assert_eq!(out.vertex2(), q.vertex2());

        let p = Vec2::new(2.0, -2.0);
        merged(q, |d, n| line::set_position(d, p, n), |d| line::set_position_all(d, p));

        let red = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
        merged(q, |d, n| line::set_color(d, red, n), |d| line::set_color_all(d, red));
    }

    #[test]
    fn texture_setters() {
        let q = TextureGpuData::splat(TextureVertexData::new(
            Vec2::zero(),
            Vec2::zero(),
            ColorRgba::white(),
        ));
        let out = texture::set_texture_coord(q, Vec2::new(1.0, 0.0), VertexNumber::Two);
        assert_eq!(out.vertex2().texture_coord(), Vec2::new(1.0, 0.0));
        assert_eq!(out.vertex2().position(), Vec2::zero());
        assert_eq!(out.vertex1(), q.vertex1());

        let out = texture::set_position(q, Vec2::new(-1.0, 1.0), VertexNumber::One);
        assert_eq!(out.vertex1().position(), Vec2::new(-1.0, 1.0));

        let p = Vec2::new(4.0, 5.0);
        merged(q, |d, n| texture::set_position(d, p, n), |d| texture::set_position_all(d, p));
        let uv = Vec2::new(0.5, 1.0);
        merged(
            q,
            |d, n| texture::set_texture_coord(d, uv, n),
            |d| texture::set_texture_coord_all(d, uv),
        );

        let tint = ColorRgba::new(0.0, 1.0, 0.0, 1.0);
        merged(q, |d, n| texture::set_tint(d, tint, n), |d| texture::set_tint_all(d, tint));
    }
}

use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, CornerRadii, Rect, Vec2};
use crate::error::{RenderError, Result};

/// Selects one corner of a quad.
///
/// Winding: `One` top-left, `Two` top-right, `Three` bottom-right, `Four` bottom-left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexNumber {
    One,
    Two,
    Three,
    Four,
}

impl VertexNumber {
    /// All four selectors in update order.
    pub const ALL: [VertexNumber; 4] =
        [VertexNumber::One, VertexNumber::Two, VertexNumber::Three, VertexNumber::Four];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            VertexNumber::One => 0,
            VertexNumber::Two => 1,
            VertexNumber::Three => 2,
            VertexNumber::Four => 3,
        }
    }
}

impl TryFrom<u8> for VertexNumber {
    type Error = RenderError;

    /// Accepts the 1-based corner numbers `1..=4`.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(VertexNumber::One),
            2 => Ok(VertexNumber::Two),
            3 => Ok(VertexNumber::Three),
            4 => Ok(VertexNumber::Four),
            _ => Err(RenderError::out_of_range("vertex number", value as u64, 4)),
        }
    }
}

// ── rect ──────────────────────────────────────────────────────────────────

/// One vertex of a rounded, optionally hollow rectangle.
///
/// Layout (64 bytes, all `f32`):
///
///  offset  0  position            [f32; 2]   loc 0  (NDC)
///  offset  8  rectangle           [f32; 4]   loc 1  (x, y, w, h in pixels)
///  offset 24  color               [f32; 4]   loc 2
///  offset 40  is_solid            f32        loc 3  (0.0 or 1.0)
///  offset 44  border_thickness    f32        loc 4
///  offset 48  top_left_radius     f32        loc 5
///  offset 52  bottom_left_radius  f32        loc 6
///  offset 56  bottom_right_radius f32        loc 7
///  offset 60  top_right_radius    f32        loc 8
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RectVertexData {
    position: Vec2,
    rectangle: Rect,
    color: ColorRgba,
    is_solid: f32,
    border_thickness: f32,
    top_left_radius: f32,
    bottom_left_radius: f32,
    bottom_right_radius: f32,
    top_right_radius: f32,
}

impl RectVertexData {
    pub fn new(
        position: Vec2,
        rectangle: Rect,
        color: ColorRgba,
        is_solid: bool,
        border_thickness: f32,
        radii: CornerRadii,
    ) -> Self {
        Self {
            position,
            rectangle,
            color,
            is_solid: if is_solid { 1.0 } else { 0.0 },
            border_thickness,
            top_left_radius: radii.top_left,
            bottom_left_radius: radii.bottom_left,
            bottom_right_radius: radii.bottom_right,
            top_right_radius: radii.top_right,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rectangle(&self) -> Rect {
        self.rectangle
    }

    #[inline]
    pub fn color(&self) -> ColorRgba {
        self.color
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.is_solid != 0.0
    }

    #[inline]
    pub fn border_thickness(&self) -> f32 {
        self.border_thickness
    }

    #[inline]
    pub fn top_left_radius(&self) -> f32 {
        self.top_left_radius
    }

    #[inline]
    pub fn bottom_left_radius(&self) -> f32 {
        self.bottom_left_radius
    }

    #[inline]
    pub fn bottom_right_radius(&self) -> f32 {
        self.bottom_right_radius
    }

    #[inline]
    pub fn top_right_radius(&self) -> f32 {
        self.top_right_radius
    }

    #[inline]
    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }

    #[inline]
    pub fn with_rectangle(self, rectangle: Rect) -> Self {
        Self { rectangle, ..self }
    }

    #[inline]
    pub fn with_color(self, color: ColorRgba) -> Self {
        Self { color, ..self }
    }

    #[inline]
    pub fn with_is_solid(self, is_solid: bool) -> Self {
        Self { is_solid: if is_solid { 1.0 } else { 0.0 }, ..self }
    }

    #[inline]
    pub fn with_border_thickness(self, border_thickness: f32) -> Self {
        Self { border_thickness, ..self }
    }

    #[inline]
    pub fn with_top_left_radius(self, top_left_radius: f32) -> Self {
        Self { top_left_radius, ..self }
    }

    #[inline]
    pub fn with_bottom_left_radius(self, bottom_left_radius: f32) -> Self {
        Self { bottom_left_radius, ..self }
    }

    #[inline]
    pub fn with_bottom_right_radius(self, bottom_right_radius: f32) -> Self {
        Self { bottom_right_radius, ..self }
    }

    #[inline]
    pub fn with_top_right_radius(self, top_right_radius: f32) -> Self {
        Self { top_right_radius, ..self }
    }
}

// ── line ──────────────────────────────────────────────────────────────────

/// One vertex of a thick line quad (24 bytes: position, color).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertexData {
    position: Vec2,
    color: ColorRgba,
}

impl LineVertexData {
    #[inline]
    pub const fn new(position: Vec2, color: ColorRgba) -> Self {
        Self { position, color }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> ColorRgba {
        self.color
    }

    #[inline]
    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }

    #[inline]
    pub fn with_color(self, color: ColorRgba) -> Self {
        Self { color, ..self }
    }
}

// ── texture ───────────────────────────────────────────────────────────────

/// One vertex of a textured quad (32 bytes: position, texture coordinate, tint).
///
/// Glyph quads use the same record and sample the font atlas.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TextureVertexData {
    position: Vec2,
    texture_coord: Vec2,
    tint: ColorRgba,
}

impl TextureVertexData {
    #[inline]
    pub const fn new(position: Vec2, texture_coord: Vec2, tint: ColorRgba) -> Self {
        Self { position, texture_coord, tint }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn texture_coord(&self) -> Vec2 {
        self.texture_coord
    }

    #[inline]
    pub fn tint(&self) -> ColorRgba {
        self.tint
    }

    #[inline]
    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }

    #[inline]
    pub fn with_texture_coord(self, texture_coord: Vec2) -> Self {
        Self { texture_coord, ..self }
    }

    #[inline]
    pub fn with_tint(self, tint: ColorRgba) -> Self {
        Self { tint, ..self }
    }
}

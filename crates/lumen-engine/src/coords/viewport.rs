use super::Vec2;

/// Viewport size in pixels.
///
/// Shapes whose vertices are produced on the CPU use this to convert pixel
/// positions into normalized device coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Maps a pixel position (top-left origin, +Y down) to NDC (`[-1, 1]`, +Y up).
    ///
    /// A zero-sized viewport is treated as 1x1 so the result stays finite.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0)
    }
}

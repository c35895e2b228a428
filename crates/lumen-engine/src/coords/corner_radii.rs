/// Per-corner radii for a rounded rectangle (pixels).
///
/// Negative values are treated as zero when converted to vertex data.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
    pub top_right: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, bottom_left: f32, bottom_right: f32, top_right: f32) -> Self {
        Self { top_left, bottom_left, bottom_right, top_right }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, bottom_left: r, bottom_right: r, top_right: r }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Clamps every corner to `[0, max]`.
    #[inline]
    pub fn clamped(self, max: f32) -> Self {
        let max = max.max(0.0);
        let c = |r: f32| r.max(0.0).min(max);
        Self {
            top_left: c(self.top_left),
            bottom_left: c(self.bottom_left),
            bottom_right: c(self.bottom_right),
            top_right: c(self.top_right),
        }
    }
}

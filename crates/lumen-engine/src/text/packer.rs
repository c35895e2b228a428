use crate::error::{RenderError, Result};

/// Pixels left empty around every glyph so linear filtering does not bleed.
pub const GLYPH_PADDING: u32 = 1;

/// Shelf packer for a fixed-size atlas.
///
/// Glyphs are placed left to right; when a glyph does not fit horizontally a
/// new shelf starts below the tallest glyph of the current one. Once a glyph
/// does not fit vertically the atlas is marked full and every later placement
/// fails. A glyph larger than the whole atlas is rejected without marking it
/// full.
#[derive(Debug, Clone)]
pub struct AtlasPacker {
    width: u32,
    height: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl AtlasPacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            full: false,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Reserves a `w`×`h` region and returns its top-left corner.
    pub fn place(&mut self, w: u32, h: u32) -> Result<(u32, u32)> {
        if self.full {
            return Err(self.full_error());
        }
        let fits = |len: u32, limit: u32| len.checked_add(2 * GLYPH_PADDING).is_some_and(|l| l <= limit);
        if !fits(w, self.width) || !fits(h, self.height) {
            log::warn!("glyph {w}x{h} can never fit a {}x{} atlas", self.width, self.height);
            return Err(self.full_error());
        }

        let end_x = self.cursor_x.checked_add(w + GLYPH_PADDING);
        if end_x.is_none_or(|x| x > self.width) {
            let Some(y) = self.cursor_y.checked_add(self.row_height + GLYPH_PADDING) else {
                return Err(self.mark_full());
            };
            self.cursor_y = y;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        let end_y = self.cursor_y.checked_add(h + GLYPH_PADDING);
        if end_y.is_none_or(|y| y > self.height) {
            return Err(self.mark_full());
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Ok(pos)
    }

    fn mark_full(&mut self) -> RenderError {
        log::warn!("glyph atlas is full ({}x{})", self.width, self.height);
        self.full = true;
        self.full_error()
    }

    fn full_error(&self) -> RenderError {
        RenderError::AtlasFull { width: self.width, height: self.height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_left_to_right_with_padding() {
        let mut p = AtlasPacker::new(16, 16);
        assert_eq!(p.place(6, 4).unwrap(), (1, 1));
        assert_eq!(p.place(6, 3).unwrap(), (8, 1));
    }

    #[test]
    fn wraps_to_new_shelf_below_tallest_glyph() {
        let mut p = AtlasPacker::new(16, 16);
        p.place(6, 4).unwrap();
        p.place(6, 2).unwrap();
        assert_eq!(p.place(6, 4).unwrap(), (1, 6));
    }

    #[test]
    fn reports_full_and_stays_full() {
        let mut p = AtlasPacker::new(16, 16);
        assert_eq!(p.place(14, 6).unwrap(), (1, 1));
        assert_eq!(p.place(14, 6).unwrap(), (1, 8));

        let err = p.place(1, 1).unwrap_err();
        assert_eq!(err, RenderError::AtlasFull { width: 16, height: 16 });
        assert!(p.is_full());
        assert!(p.place(1, 1).is_err());
    }

    #[test]
    fn glyph_wider_than_atlas_is_rejected() {
        let mut p = AtlasPacker::new(8, 8);
        assert!(p.place(7, 1).is_err());
        assert!(!p.is_full());
    }

    #[test]
    fn glyph_taller_than_atlas_is_rejected_without_filling() {
        let mut p = AtlasPacker::new(8, 8);
        assert_eq!(p.place(1, 7).unwrap_err(), RenderError::AtlasFull { width: 8, height: 8 });
        assert!(!p.is_full());
        assert_eq!(p.place(2, 2).unwrap(), (1, 1));
    }

    #[test]
    fn huge_dimensions_do_not_overflow() {
        let mut p = AtlasPacker::new(u32::MAX, u32::MAX);
        assert!(p.place(u32::MAX, 1).is_err());
        assert!(p.place(1, u32::MAX - 1).is_err());
        assert!(!p.is_full());

        assert_eq!(p.place(u32::MAX - 2, 4).unwrap(), (1, 1));
        assert_eq!(p.place(u32::MAX - 2, 4).unwrap(), (1, 6));
    }
}

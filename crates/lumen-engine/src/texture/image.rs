use crate::error::{RenderError, Result};

/// One pixel with channels stored alpha first.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub const fn from_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Decoded image, row-major from the top row. Holds at least one pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl ImageData {
    /// Fails when `pixels` is empty or does not hold exactly `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Argb>) -> Result<Self> {
        if pixels.is_empty() {
            return Err(RenderError::invalid_argument("pixels", "image has no pixel data"));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RenderError::invalid_argument(
                "pixels",
                format!("expected {width}x{height} = {expected} pixels, got {}", pixels.len()),
            ));
        }
        Ok(Self { width, height, pixels })
    }

    /// Image of one repeated pixel.
    pub fn filled(width: u32, height: u32, pixel: Argb) -> Result<Self> {
        Self::new(width, height, vec![pixel; width as usize * height as usize])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Tightly packed `R, G, B, A` bytes in the same row order.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba()).collect()
    }
}

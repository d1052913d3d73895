//! PixelBuffer: the rectangular RGBA image every pipeline stage consumes.
//!
//! A [`PixelBuffer`] can only be constructed with a non-zero width and
//! height and exactly `width * height` pixels, so every stage downstream
//! can treat its input as valid.

use crate::api::PipelineError;
use crate::color::Rgba;

/// A row-major RGBA image with the origin at the top-left corner.
///
/// # Example
///
/// ```
/// use epaper_dither::{PixelBuffer, Rgba};
///
/// let mut image = PixelBuffer::from_pixel(3, 2, Rgba::opaque(255, 255, 255)).unwrap();
/// image.set(2, 1, Rgba::opaque(255, 0, 0));
///
/// assert_eq!(image.width(), 3);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.get(2, 1), Rgba::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Wrap row-major pixels in a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidImage`] if either dimension is zero,
    /// `width * height` overflows, or `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, PipelineError> {
        if pixel_count(width, height) != Some(pixels.len()) {
            return Err(PipelineError::InvalidImage {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap pixels produced by a pipeline stage that already guarantees
    /// the dimensions.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Rgba>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixels length ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer filled with a single colour.
    pub fn from_pixel(width: usize, height: usize, color: Rgba) -> Result<Self, PipelineError> {
        let len = pixel_count(width, height).ok_or(PipelineError::InvalidImage {
            width,
            height,
            len: 0,
        })?;
        Self::new(width, height, vec![color; len])
    }

    /// Create a buffer from interleaved `[R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidImage`] if the byte count is not a
    /// multiple of four or does not match the dimensions.
    pub fn from_rgba_bytes(
        width: usize,
        height: usize,
        bytes: &[u8],
    ) -> Result<Self, PipelineError> {
        if bytes.len() % 4 != 0 {
            return Err(PipelineError::InvalidImage {
                width,
                height,
                len: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Consume the buffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the buffer.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Interleaved `[R, G, B, ...]` bytes with alpha dropped, as a 24-bit
    /// encoder expects them.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            rgb.extend_from_slice(&px.rgb());
        }
        rgb
    }

    /// Interleaved `[R, G, B, A, ...]` bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            rgba.extend_from_slice(&px.to_bytes());
        }
        rgba
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

/// `width * height` for a non-empty image, `None` on zero or overflow.
fn pixel_count(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height).filter(|&n| n > 0)
}

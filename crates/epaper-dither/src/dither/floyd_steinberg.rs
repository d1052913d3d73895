//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! neighbors, which keeps the average tone of the image intact even with a
//! six-colour palette.

use crate::buffer::PixelBuffer;
use crate::palette::NearestColor;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Neighbours outside the image are skipped without renormalising the
/// remaining weights.
///
/// # Example
///
/// ```
/// use epaper_dither::{Dither, FloydSteinberg, Palette, PixelBuffer, Rgba};
///
/// let image = PixelBuffer::from_pixel(4, 4, Rgba::opaque(128, 128, 128)).unwrap();
/// let result = FloydSteinberg.dither(image, &Palette::SIX_COLOR);
///
/// assert!(result.pixels().iter().all(|&p| Palette::SIX_COLOR.contains(p)));
/// ```
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: PixelBuffer, quantizer: &dyn NearestColor) -> PixelBuffer {
        dither_with_kernel(image, quantizer, &FLOYD_STEINBERG)
    }
}

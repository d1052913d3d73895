//! Error diffusion dithering.
//!
//! The display supports exactly one algorithm, [`FloydSteinberg`], built on
//! the generic [`dither_with_kernel`] engine.
//!
//! # Example
//!
//! ```
//! use epaper_dither::{Dither, FloydSteinberg, Palette, PixelBuffer, Rgba};
//!
//! let image = PixelBuffer::from_pixel(8, 8, Rgba::opaque(200, 60, 60)).unwrap();
//! let dithered = FloydSteinberg.dither(image, &Palette::SIX_COLOR);
//! assert_eq!(dithered.dimensions(), (8, 8));
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;

use crate::buffer::PixelBuffer;
use crate::color::Rgba;
use crate::palette::NearestColor;

/// Trait for error diffusion dithering algorithms.
///
/// Error diffusion works by:
/// 1. For each pixel, find the nearest palette color
/// 2. Compute the quantization error (accumulated - quantized)
/// 3. Distribute that error to neighboring unprocessed pixels
/// 4. Repeat, with accumulated error influencing future decisions
pub trait Dither {
    /// Dither `image` in place and return it.
    ///
    /// Every output pixel is a colour returned by `quantizer` with the
    /// input pixel's alpha.
    fn dither(&self, image: PixelBuffer, quantizer: &dyn NearestColor) -> PixelBuffer;
}

/// Diffuse quantization error through `image` using `kernel`.
///
/// Pixels are visited left-to-right, top-to-bottom. The buffer holds
/// finalized colours behind the scan position and error-adjusted source
/// colours ahead of it; the kernel only ever writes ahead of the scan, so
/// no finalized pixel is touched twice.
///
/// Each neighbour channel receives `error * weight / divisor` truncated
/// toward zero, and the sum is clamped to `0..=255`.
pub fn dither_with_kernel(
    mut image: PixelBuffer,
    quantizer: &dyn NearestColor,
    kernel: &Kernel,
) -> PixelBuffer {
    let (width, height) = image.dimensions();
    tracing::debug!(width, height, "Applying error diffusion");

    for y in 0..height {
        for x in 0..width {
            let old = image.get(x, y);
            let new = quantizer.nearest(old);
            image.set(x, y, new.with_alpha(old.a));

            let err = [
                old.r as i32 - new.r as i32,
                old.g as i32 - new.g as i32,
                old.b as i32 - new.b as i32,
            ];
            if err == [0, 0, 0] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy as usize;
                if nx < 0 || nx >= width as i64 || ny >= height {
                    continue;
                }
                let nx = nx as usize;
                let factor = kernel.factor(weight);
                let px = image.get(nx, ny);
                image.set(
                    nx,
                    ny,
                    Rgba::new(
                        add_error(px.r, err[0], factor),
                        add_error(px.g, err[1], factor),
                        add_error(px.b, err[2], factor),
                        px.a,
                    ),
                );
            }
        }
    }

    image
}

#[inline]
fn add_error(channel: u8, error: i32, factor: f64) -> u8 {
    // `as i32` truncates toward zero
    (channel as i32 + (error as f64 * factor) as i32).clamp(0, 255) as u8
}

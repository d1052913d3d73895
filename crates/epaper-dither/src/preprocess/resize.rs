//! Aspect-preserving resize: optional portrait rotation, centre crop to the
//! target aspect ratio, then bilinear scaling to the exact target size.

use crate::api::PipelineError;
use crate::buffer::PixelBuffer;
use crate::color::Rgba;

use super::rotate::{rotate, Rotation};

/// A rectangle inside a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Centre crop of a `width` x `height` image that matches the aspect ratio
/// of `target_width` x `target_height`.
///
/// The over-long dimension is trimmed equally from both sides (an odd
/// remainder goes to the far side). Sizes are computed with integer
/// arithmetic, so an exact aspect match never crops, and the crop is never
/// smaller than one pixel.
///
/// # Example
///
/// ```
/// use epaper_dither::{crop_region, CropRect};
///
/// // 4:3 into 5:3 keeps the full width and trims rows top and bottom.
/// let crop = crop_region(1600, 1200, 800, 480);
/// assert_eq!(crop, CropRect { x: 0, y: 120, width: 1600, height: 960 });
/// ```
pub fn crop_region(
    width: usize,
    height: usize,
    target_width: usize,
    target_height: usize,
) -> CropRect {
    // Compare width/height with target_width/target_height without floats.
    let source = width as u64 * target_height as u64;
    let target = height as u64 * target_width as u64;

    if source > target {
        // relatively wider: trim columns
        let new_width = (height as u64 * target_width as u64 / target_height as u64)
            .clamp(1, width as u64) as usize;
        CropRect {
            x: (width - new_width) / 2,
            y: 0,
            width: new_width,
            height,
        }
    } else if source < target {
        // relatively taller: trim rows
        let new_height = (width as u64 * target_height as u64 / target_width as u64)
            .clamp(1, height as u64) as usize;
        CropRect {
            x: 0,
            y: (height - new_height) / 2,
            width,
            height: new_height,
        }
    } else {
        CropRect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Scale `region` of `image` to exactly `target_width` x `target_height`
/// with bilinear interpolation.
///
/// Output pixel centres are mapped into the region with
/// `s = (d + 0.5) * region / target - 0.5`; samples past either edge clamp
/// to the edge pixel. All four channels, alpha included, are blended and
/// rounded to the nearest integer.
pub fn scale_bilinear(
    image: &PixelBuffer,
    region: CropRect,
    target_width: usize,
    target_height: usize,
) -> PixelBuffer {
    let x_scale = region.width as f64 / target_width as f64;
    let y_scale = region.height as f64 / target_height as f64;

    let columns: Vec<(usize, usize, f64)> = (0..target_width)
        .map(|dx| sample_axis(dx, x_scale, region.width))
        .collect();

    let mut pixels = Vec::with_capacity(target_width * target_height);
    for dy in 0..target_height {
        let (sy0, sy1, fy) = sample_axis(dy, y_scale, region.height);
        let (y0, y1) = (region.y + sy0, region.y + sy1);

        for &(sx0, sx1, fx) in &columns {
            let (x0, x1) = (region.x + sx0, region.x + sx1);
            pixels.push(blend(
                image.get(x0, y0),
                image.get(x1, y0),
                image.get(x0, y1),
                image.get(x1, y1),
                fx,
                fy,
            ));
        }
    }

    PixelBuffer::from_parts(target_width, target_height, pixels)
}

/// Resize `image` to exactly `target_width` x `target_height`.
///
/// With `auto_rotate`, a portrait source (width < height) is first turned
/// 90° clockwise; cropping and scaling then use the rotated dimensions.
///
/// # Errors
///
/// Returns [`PipelineError::UnsupportedGeometry`] if either target
/// dimension is zero.
pub fn resize(
    image: PixelBuffer,
    target_width: usize,
    target_height: usize,
    auto_rotate: bool,
) -> Result<PixelBuffer, PipelineError> {
    if target_width == 0 || target_height == 0 {
        return Err(PipelineError::UnsupportedGeometry {
            width: target_width,
            height: target_height,
        });
    }

    let image = if auto_rotate && image.width() < image.height() {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "Portrait image, rotating clockwise"
        );
        rotate(&image, Rotation::Clockwise)
    } else {
        image
    };

    let region = crop_region(image.width(), image.height(), target_width, target_height);
    tracing::debug!(
        src_width = image.width(),
        src_height = image.height(),
        crop_x = region.x,
        crop_y = region.y,
        crop_width = region.width,
        crop_height = region.height,
        target_width,
        target_height,
        "Cropping and scaling"
    );

    Ok(scale_bilinear(&image, region, target_width, target_height))
}

/// Source indices and weight of the second sample for output index `d`.
#[inline]
fn sample_axis(d: usize, scale: f64, len: usize) -> (usize, usize, f64) {
    let s = (d as f64 + 0.5) * scale - 0.5;
    if s < 0.0 {
        return (0, 0, 0.0);
    }
    let s0 = s as usize;
    if s0 + 1 > len - 1 {
        return (len - 1, len - 1, 0.0);
    }
    (s0, s0 + 1, s - s0 as f64)
}

#[inline]
fn blend(p00: Rgba, p10: Rgba, p01: Rgba, p11: Rgba, fx: f64, fy: f64) -> Rgba {
    let channel = |c00: u8, c10: u8, c01: u8, c11: u8| -> u8 {
        let top = c00 as f64 * (1.0 - fx) + c10 as f64 * fx;
        let bottom = c01 as f64 * (1.0 - fx) + c11 as f64 * fx;
        (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8
    };
    Rgba::new(
        channel(p00.r, p10.r, p01.r, p11.r),
        channel(p00.g, p10.g, p01.g, p11.g),
        channel(p00.b, p10.b, p01.b, p11.b),
        channel(p00.a, p10.a, p01.a, p11.a),
    )
}

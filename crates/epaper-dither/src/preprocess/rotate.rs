//! Quarter-turn image rotation.

use crate::buffer::PixelBuffer;

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Source `(x, y)` lands on `(height - 1 - y, x)`.
    Clockwise,
    /// Source `(x, y)` lands on `(y, width - 1 - x)`.
    CounterClockwise,
}

impl Rotation {
    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// Rotate an image by 90 degrees.
///
/// The output has width and height swapped. Pixels are moved, never
/// resampled.
///
/// # Example
///
/// ```
/// use epaper_dither::{rotate, PixelBuffer, Rgba, Rotation};
///
/// let mut image = PixelBuffer::from_pixel(3, 2, Rgba::opaque(0, 0, 0)).unwrap();
/// image.set(0, 0, Rgba::opaque(255, 0, 0));
///
/// let rotated = rotate(&image, Rotation::Clockwise);
/// assert_eq!(rotated.dimensions(), (2, 3));
/// assert_eq!(rotated.get(1, 0), Rgba::opaque(255, 0, 0));
/// ```
pub fn rotate(image: &PixelBuffer, rotation: Rotation) -> PixelBuffer {
    let (w, h) = image.dimensions();
    tracing::debug!(w, h, ?rotation, "Rotating image 90 degrees");

    let mut out = image.pixels().to_vec();
    for y in 0..h {
        for x in 0..w {
            // destination buffer is h wide
            let (nx, ny) = match rotation {
                Rotation::Clockwise => (h - 1 - y, x),
                Rotation::CounterClockwise => (y, w - 1 - x),
            };
            out[ny * h + nx] = image.get(x, y);
        }
    }

    PixelBuffer::from_parts(h, w, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use pretty_assertions::assert_eq;

    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40, rest 128.
    fn create_corner_image(width: usize, height: usize) -> PixelBuffer {
        let mut img = PixelBuffer::from_pixel(width, height, gray(128)).unwrap();
        img.set(0, 0, gray(10));
        img.set(width - 1, 0, gray(20));
        img.set(0, height - 1, gray(30));
        img.set(width - 1, height - 1, gray(40));
        img
    }

    fn gray(v: u8) -> Rgba {
        Rgba::opaque(v, v, v)
    }

    fn value(img: &PixelBuffer, x: usize, y: usize) -> u8 {
        img.get(x, y).r
    }

    #[test]
    fn test_clockwise_corner_values() {
        let img = create_corner_image(6, 3);
        let result = rotate(&img, Rotation::Clockwise);

        assert_eq!(result.dimensions(), (3, 6));
        // (x, y) -> (height - 1 - y, x)
        assert_eq!(value(&result, 2, 0), 10);
        assert_eq!(value(&result, 2, 5), 20);
        assert_eq!(value(&result, 0, 0), 30);
        assert_eq!(value(&result, 0, 5), 40);
    }

    #[test]
    fn test_counter_clockwise_corner_values() {
        let img = create_corner_image(6, 3);
        let result = rotate(&img, Rotation::CounterClockwise);

        assert_eq!(result.dimensions(), (3, 6));
        // (x, y) -> (y, width - 1 - x)
        assert_eq!(value(&result, 0, 5), 10);
        assert_eq!(value(&result, 0, 0), 20);
        assert_eq!(value(&result, 2, 5), 30);
        assert_eq!(value(&result, 2, 0), 40);
    }

    #[test]
    fn test_round_trip_restores_original() {
        let pixels = (0..35u8).map(|i| Rgba::new(i, 2 * i, 3 * i, 255 - i)).collect();
        let img = PixelBuffer::new(5, 7, pixels).unwrap();

        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            let back = rotate(&rotate(&img, rotation), rotation.inverse());
            assert_eq!(back, img);
        }
    }

    #[test]
    fn test_four_turns_is_identity() {
        let img = create_corner_image(4, 9);
        let mut result = img.clone();
        for _ in 0..4 {
            result = rotate(&result, Rotation::Clockwise);
        }
        assert_eq!(result, img);
    }

    #[test]
    fn test_single_row_and_single_pixel() {
        let row = create_corner_image(5, 1);
        assert_eq!(rotate(&row, Rotation::Clockwise).dimensions(), (1, 5));

        let dot = PixelBuffer::from_pixel(1, 1, gray(7)).unwrap();
        assert_eq!(rotate(&dot, Rotation::CounterClockwise), dot);
    }
}

//! Geometry stages that run before dithering.
//!
//! 1. **Rotate** - portrait sources are turned 90° clockwise when
//!    auto-rotation is enabled
//! 2. **Crop** - centre crop to the target aspect ratio
//! 3. **Scale** - bilinear resampling to the exact target size
//!
//! # Example
//!
//! ```
//! use epaper_dither::{resize, PixelBuffer, Rgba};
//!
//! let portrait = PixelBuffer::from_pixel(480, 800, Rgba::opaque(0, 0, 0)).unwrap();
//! let landscape = resize(portrait, 800, 480, true).unwrap();
//! assert_eq!(landscape.dimensions(), (800, 480));
//! ```

mod resize;
mod rotate;

pub use resize::{crop_region, resize, scale_bilinear, CropRect};
pub use rotate::{rotate, Rotation};

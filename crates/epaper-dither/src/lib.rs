//! epaper-dither: Resize and dither images for six-colour e-paper panels
//!
//! This library turns an arbitrary RGBA image into one that a six-colour
//! e-paper display (black, white, red, green, blue, yellow) can show
//! directly: every output pixel is exactly one of the panel's colours.
//!
//! # Quick Start
//!
//! The [`EpaperConverter`] is the primary entry point:
//!
//! ```
//! use epaper_dither::{ConversionConfig, EpaperConverter, PixelBuffer, Rgba};
//!
//! let converter = EpaperConverter::new(ConversionConfig::new(800, 480));
//!
//! let photo = PixelBuffer::from_pixel(1600, 1200, Rgba::opaque(255, 255, 255)).unwrap();
//! let panel_image = converter.convert(photo).unwrap();
//!
//! assert_eq!(panel_image.dimensions(), (800, 480));
//! assert!(panel_image.pixels().iter().all(|p| p.rgb() == [255, 255, 255]));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! decoded RGBA image         (any size)
//!     |
//!     v
//! [Rotate]                    (portrait -> landscape, if auto-rotate)
//!     |
//!     v
//! [Centre crop]               (match target aspect ratio)
//!     |
//!     v
//! [Bilinear scale]            (exact target width x height)
//!     |
//!     v
//! ╔═══════════════════════════════════════════╗
//! ║  Floyd-Steinberg loop (row-major)         ║
//! ║                                           ║
//! ║  pixel + diffused error                   ║
//! ║      |                                    ║
//! ║  nearest palette colour (RGB distance)    ║
//! ║      |                                    ║
//! ║  error = pixel - palette colour           ║
//! ║      |                                    ║
//! ║  7/16 right, 3/16 down-left,              ║
//! ║  5/16 down, 1/16 down-right               ║
//! ╚═══════════════════════════════════════════╝
//!     |
//!     v
//! six-colour RGBA image      (alpha preserved)
//! ```
//!
//! # Numeric Behaviour
//!
//! Output is bit-reproducible:
//!
//! - Palette matching uses squared Euclidean distance over R, G, B. Ties go
//!   to the colour declared first in [`Palette::SIX_COLOR`].
//! - Each diffused share is `error * weight / 16` truncated toward zero,
//!   added to the neighbour and clamped to `0..=255`.
//! - Error that would fall outside the image is dropped; the remaining
//!   weights are not renormalised.
//!
//! # Concurrency
//!
//! Everything is synchronous and allocation-owned. The palette is a
//! constant, so independent conversions can run on separate threads with
//! their own buffers.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod palette;
pub mod preprocess;


pub use api::{ConversionConfig, EpaperConverter, PipelineError};
pub use buffer::PixelBuffer;
pub use color::Rgba;
pub use dither::{Dither, FloydSteinberg};
pub use palette::{NearestColor, Palette};
pub use preprocess::{crop_region, resize, rotate, scale_bilinear, CropRect, Rotation};

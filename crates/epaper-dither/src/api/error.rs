//! Error type for the epaper-dither public API.

use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Only buffer construction and resizing can fail; quantization,
/// rotation and dithering are total over valid buffers. A failed
/// conversion never yields a partial image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Zero width or height, or a pixel count that does not match the dimensions.
    #[error("invalid image: {width}x{height} with {len} pixels")]
    InvalidImage {
        width: usize,
        height: usize,
        len: usize,
    },

    /// Zero target width or height.
    #[error("unsupported target geometry: {width}x{height}")]
    UnsupportedGeometry { width: usize, height: usize },
}

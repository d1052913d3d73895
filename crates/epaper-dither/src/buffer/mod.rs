//! Image buffers passed between pipeline stages.

mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;

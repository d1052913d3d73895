//! Color types
//!
//! The pipeline operates on plain 8-bit RGBA samples throughout: decoding,
//! resizing, dithering and encoding all agree on [`Rgba`].

mod rgba;

pub use rgba::Rgba;

//! Palette types and nearest-colour matching
//!
//! This module provides the fixed display palette and the [`NearestColor`]
//! capability the ditherer quantizes through.

mod palette;

pub use palette::{NearestColor, Palette};

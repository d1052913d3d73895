//! PhotoPainter - six-colour e-paper image converter
//!
//! Decodes photos, runs them through the [`epaper_dither`] pipeline and
//! writes 24-bit BMP files the PhotoPainter frame can display.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

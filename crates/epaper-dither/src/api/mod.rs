//! Public API for the epaper-dither crate.
//!
//! This module provides the high-level API: the [`EpaperConverter`]
//! pipeline, its [`ConversionConfig`], and the [`PipelineError`] type.

mod converter;
mod error;

pub use converter::{ConversionConfig, EpaperConverter};
pub use error::PipelineError;

//! EpaperConverter -- the resize-then-dither pipeline behind one call.

use crate::buffer::PixelBuffer;
use crate::dither::{Dither, FloydSteinberg};
use crate::palette::Palette;
use crate::preprocess::resize;

use super::PipelineError;

/// Target geometry and orientation handling for one conversion.
///
/// Built once per invocation and passed by value; nothing mutates it
/// during a conversion. The pipeline accepts any non-zero size; limiting
/// it to the panel's resolutions is the caller's concern.
///
/// # Example
///
/// ```
/// use epaper_dither::ConversionConfig;
///
/// let config = ConversionConfig::new(480, 800).auto_rotate(false);
/// assert_eq!((config.width, config.height), (480, 800));
/// assert!(!config.auto_rotate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// Turn portrait sources 90° clockwise before cropping.
    pub auto_rotate: bool,
}

impl ConversionConfig {
    /// Target size with auto-rotation enabled.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            auto_rotate: true,
        }
    }

    /// Enable or disable auto-rotation of portrait sources.
    #[inline]
    pub const fn auto_rotate(mut self, enabled: bool) -> Self {
        self.auto_rotate = enabled;
        self
    }

    /// Reject zero-sized targets.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::UnsupportedGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for ConversionConfig {
    /// 800x480 landscape with auto-rotation.
    fn default() -> Self {
        Self::new(800, 480)
    }
}

/// Converts arbitrary images into six-colour panel images.
///
/// Resizes to the configured target (see [`resize`]) and then applies
/// [`FloydSteinberg`] against [`Palette::SIX_COLOR`]. [`convert()`](Self::convert)
/// takes `&self`, so one converter can be reused for a whole batch.
///
/// # Example
///
/// ```
/// use epaper_dither::{ConversionConfig, EpaperConverter, Palette, PixelBuffer, Rgba};
///
/// let converter = EpaperConverter::new(ConversionConfig::new(80, 48));
/// let photo = PixelBuffer::from_pixel(160, 120, Rgba::opaque(90, 140, 200)).unwrap();
///
/// let result = converter.convert(photo).unwrap();
/// assert_eq!(result.dimensions(), (80, 48));
/// assert!(result.pixels().iter().all(|&p| Palette::SIX_COLOR.contains(p)));
/// ```
#[derive(Debug, Clone)]
pub struct EpaperConverter {
    config: ConversionConfig,
    palette: Palette,
}

impl EpaperConverter {
    /// Create a converter for `config` using the six-colour palette.
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            palette: Palette::SIX_COLOR,
        }
    }

    /// The configuration this converter was built with.
    #[inline]
    pub fn config(&self) -> ConversionConfig {
        self.config
    }

    /// The palette output pixels are drawn from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resize and dither `image`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnsupportedGeometry`] for a zero-sized
    /// target. Nothing is produced on error.
    pub fn convert(&self, image: PixelBuffer) -> Result<PixelBuffer, PipelineError> {
        self.config.validate()?;

        let (src_width, src_height) = image.dimensions();
        let resized = resize(
            image,
            self.config.width,
            self.config.height,
            self.config.auto_rotate,
        )?;
        let dithered = FloydSteinberg.dither(resized, &self.palette);

        tracing::debug!(
            src_width,
            src_height,
            width = dithered.width(),
            height = dithered.height(),
            "Converted image"
        );
        Ok(dithered)
    }
}

use std::fmt;

use epaper_dither::ConversionConfig;

/// Panel resolutions supported by the PhotoPainter frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
}

impl DisplaySpec {
    /// Landscape: 800x480
    pub const LANDSCAPE: Self = Self {
        width: 800,
        height: 480,
    };

    /// Portrait: 480x800
    pub const PORTRAIT: Self = Self {
        width: 480,
        height: 800,
    };

    /// Parse a resolution string. Only the exact strings "800x480" and
    /// "480x800" are recognised; anything else falls back to landscape
    /// with a warning.
    pub fn parse(resolution: &str) -> Self {
        match resolution {
            "800x480" => Self::LANDSCAPE,
            "480x800" => Self::PORTRAIT,
            _ => {
                tracing::warn!(
                    resolution,
                    "Unsupported resolution, using {}",
                    Self::LANDSCAPE
                );
                Self::LANDSCAPE
            }
        }
    }

    /// Pipeline configuration targeting this panel
    pub fn conversion_config(&self, auto_rotate: bool) -> ConversionConfig {
        ConversionConfig::new(self.width as usize, self.height as usize).auto_rotate(auto_rotate)
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::LANDSCAPE
    }
}

impl fmt::Display for DisplaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

//! The fixed six-colour display palette and nearest-colour matching.
//!
//! The panel can only show black, white, red, green, blue and yellow. The
//! palette is a compile-time constant, so it can be read from any number of
//! concurrent conversions without synchronisation.

use crate::color::Rgba;

/// Nearest-colour lookup against a set of display colours.
///
/// The ditherer only needs this capability, which lets tests drive error
/// diffusion with a stand-in quantizer (identity, constant output, ...)
/// instead of real distance math.
pub trait NearestColor {
    /// Return the display colour closest to `pixel`.
    fn nearest(&self, pixel: Rgba) -> Rgba;
}

/// An ordered, immutable set of opaque display colours.
///
/// Declaration order decides ties: when two entries are equally close, the
/// one declared first wins. This keeps output bit-reproducible.
///
/// # Example
///
/// ```
/// use epaper_dither::{NearestColor, Palette, Rgba};
///
/// let palette = &Palette::SIX_COLOR;
/// assert_eq!(palette.len(), 6);
/// assert_eq!(palette.nearest(Rgba::opaque(250, 10, 10)), Rgba::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Rgba],
}

impl Palette {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);

    /// The six colours of the e-paper panel, in tie-break order.
    pub const SIX_COLOR: Palette = Palette {
        colors: &[
            Self::BLACK,
            Self::WHITE,
            Self::RED,
            Self::GREEN,
            Self::BLUE,
            Self::YELLOW,
        ],
    };

    /// Palette entries in declaration order.
    #[inline]
    pub fn colors(&self) -> &'static [Rgba] {
        self.colors
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether `pixel`'s RGB channels exactly equal one of the entries.
    /// Alpha is not compared.
    pub fn contains(&self, pixel: Rgba) -> bool {
        self.colors.iter().any(|c| c.rgb() == pixel.rgb())
    }

    /// Index of the entry with the smallest squared RGB distance to `pixel`.
    ///
    /// Scans in declaration order and only replaces the current best on a
    /// strictly smaller distance, so the first of several equidistant
    /// entries is returned.
    pub fn find_nearest(&self, pixel: Rgba) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, color) in self.colors.iter().enumerate() {
            let dist = pixel.distance_squared(*color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx
    }
}

impl NearestColor for Palette {
    #[inline]
    fn nearest(&self, pixel: Rgba) -> Rgba {
        self.colors[self.find_nearest(pixel)]
    }
}

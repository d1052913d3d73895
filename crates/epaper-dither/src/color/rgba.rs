//! 8-bit RGBA pixel type
//!
//! Every stage of the pipeline works on straight (non-premultiplied) 8-bit
//! samples. Alpha travels with the pixel but never takes part in colour
//! distance calculations.

/// A single RGBA sample with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a colour from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque colour.
    ///
    /// # Example
    /// ```
    /// use epaper_dither::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a colour from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The colour channels only, `[R, G, B]`.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Replace the alpha channel, keeping the colour.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Squared Euclidean distance in RGB space. Alpha is ignored.
    ///
    /// # Example
    /// ```
    /// use epaper_dither::Rgba;
    /// let d = Rgba::opaque(10, 0, 0).distance_squared(Rgba::new(13, 4, 0, 0));
    /// assert_eq!(d, 25);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgba) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}

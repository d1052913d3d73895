//! Error diffusion kernel definition.
//!
//! A kernel lists the not-yet-visited neighbours that receive a share of
//! each pixel's quantization error.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`; a neighbour receives
/// `error * weight / divisor`. Every entry must point at a pixel that a
/// left-to-right, top-to-bottom scan visits later than the current one.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Weight of entry `(.., .., weight)` as a fraction of the error.
    #[inline]
    pub fn factor(&self, weight: u8) -> f64 {
        weight as f64 / self.divisor as f64
    }

    /// Sum of all weights. Equal to `divisor` when the kernel propagates
    /// the full error.
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

//! Assertion helpers for tests.

use std::fs;
use std::path::Path;

use image::RgbImage;
use pretty_assertions::assert_eq;

use super::fixtures::colors;

/// Assert the file is an uncompressed 24-bit BMP and return its pixels.
pub fn read_bmp24(path: &Path) -> RgbImage {
    let bytes = fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output file {}: {e}", path.display()));
    assert_eq!(&bytes[..2], b"BM", "{} is not a BMP file", path.display());
    let bits_per_pixel = u16::from_le_bytes([bytes[28], bytes[29]]);
    assert_eq!(bits_per_pixel, 24, "{} should be 24-bit", path.display());
    let compression = u32::from_le_bytes([bytes[30], bytes[31], bytes[32], bytes[33]]);
    assert_eq!(compression, 0, "{} should be uncompressed", path.display());

    image::load_from_memory(&bytes).unwrap().to_rgb8()
}

/// Assert the file is a panel image: 24-bit BMP, exact size, and only the
/// six palette colours.
pub fn assert_panel_bmp(path: &Path, width: u32, height: u32) -> RgbImage {
    let img = read_bmp24(path);
    assert_eq!(img.dimensions(), (width, height), "{}", path.display());
    if let Some(px) = img.pixels().find(|p| !colors::PALETTE.contains(&p.0)) {
        panic!("{} contains non-palette colour {:?}", path.display(), px.0);
    }
    img
}

/// Assert every pixel of the image has the given colour.
pub fn assert_uniform(img: &RgbImage, color: [u8; 3]) {
    if let Some((x, y, px)) = img.enumerate_pixels().find(|(_, _, p)| p.0 != color) {
        panic!("Pixel ({x}, {y}) is {:?}, expected {color:?}", px.0);
    }
}

/// Sorted file names in a directory.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

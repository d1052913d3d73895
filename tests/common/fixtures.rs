//! Test fixtures: colours and image files on disk.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const YELLOW: [u8; 3] = [255, 255, 0];

    pub const PALETTE: [[u8; 3]; 6] = [BLACK, WHITE, RED, GREEN, BLUE, YELLOW];
}

/// Write a single-colour image. The format follows the file extension.
pub fn write_solid(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    ensure_parent(path);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .unwrap();
}

/// Write a white portrait image with a red block touching the left edge,
/// vertically centred.
pub fn write_portrait_with_marker(path: &Path) {
    ensure_parent(path);
    let mut img = RgbImage::from_pixel(480, 800, Rgb(colors::WHITE));
    for y in 380..420 {
        for x in 0..40 {
            img.put_pixel(x, y, Rgb(colors::RED));
        }
    }
    img.save(path).unwrap();
}

/// Write a smooth colour gradient.
pub fn write_gradient(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / (width - 1)) as u8,
            (y * 255 / (height - 1)) as u8,
            ((x + y) * 255 / (width + height - 2)) as u8,
        ])
    });
    img.save(path).unwrap();
}

/// Write bytes that no decoder accepts.
pub fn write_corrupt(path: &Path) {
    ensure_parent(path);
    fs::write(path, b"this is not an image").unwrap();
}

/// Small photo tree used by the batch tests:
///
/// ```text
/// root/
///   a.jpg  b.png  notes.txt
///   alpha/x.png
///   alpha/deep/y.png
///   beta/z.gif
/// ```
pub fn build_photo_tree(root: &Path) {
    write_solid(&root.join("a.jpg"), 64, 48, colors::WHITE);
    write_solid(&root.join("b.png"), 48, 64, colors::RED);
    fs::write(root.join("notes.txt"), "not a photo").unwrap();
    write_solid(&root.join("alpha/x.png"), 30, 20, colors::GREEN);
    write_solid(&root.join("alpha/deep/y.png"), 20, 30, colors::BLUE);
    write_solid(&root.join("beta/z.gif"), 40, 24, colors::BLACK);
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
}

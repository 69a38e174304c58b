use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb, RgbImage, Rgba};
use tempfile::TempDir;

/// Color constants for tests
pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Creates a temp directory that lives as long as the returned guard.
pub fn workspace() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Writes a solid-color RGB image; the format follows `name`'s extension.
pub fn write_image(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
    img.save(&path).expect("Failed to save test image");
    path
}

/// Writes an RGBA PNG whose left half is fully transparent.
pub fn write_half_transparent(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color: [u8; 3],
) -> PathBuf {
    let path = dir.join(name);
    let img = ImageBuffer::from_fn(width, height, |x, _| {
        let alpha = if x < width / 2 { 0 } else { 255 };
        Rgba([color[0], color[1], color[2], alpha])
    });
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("Failed to save test image");
    path
}

/// Writes bytes that no decoder accepts, under an image extension.
pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"definitely not an image").expect("Failed to write corrupt file");
    path
}

pub fn open_rgb(path: &Path) -> RgbImage {
    image::open(path).expect("Failed to open output").into_rgb8()
}

/// Bounding box `(x, y, width, height)` of all pixels equal to `color`.
pub fn find_color(img: &RgbImage, color: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0 == color {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Number of regular files in `dir`.
pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .filter(|entry| entry.as_ref().is_ok_and(|e| e.path().is_file()))
        .count()
}

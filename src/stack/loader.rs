use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, Rgb, RgbImage};
use tracing::debug;

use crate::stack::{BACKGROUND, Result, StackError};

pub trait ImageLoader {
    /// Decode `path` into an RGB bitmap.
    fn load(&self, path: &Path) -> Result<RgbImage>;
}

/// Decodes files from disk with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<RgbImage> {
        let decode_error = |source: ImageError| StackError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let img = ImageReader::open(path)
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)?;

        debug!(
            "Decoded {}: {}x{} {:?}",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );
        Ok(to_rgb(img))
    }
}

/// Normalize to RGB8, flattening any alpha against the background.
pub fn to_rgb(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }

    let rgba = img.into_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in rgb.pixels_mut().zip(rgba.pixels()) {
        let alpha = src[3] as u32;
        let blend = |c: u8, bg: u8| {
            ((c as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255) as u8
        };
        *dst = Rgb([
            blend(src[0], BACKGROUND[0]),
            blend(src[1], BACKGROUND[1]),
            blend(src[2], BACKGROUND[2]),
        ]);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn test_transparent_becomes_white() {
        let mut rgba = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 0]));
        rgba.put_pixel(1, 0, Rgba([10, 20, 30, 255]));

        let rgb = to_rgb(DynamicImage::ImageRgba8(rgba));

        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_half_alpha_blends_toward_white() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let rgb = to_rgb(DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([127, 127, 127]));
    }

    #[test]
    fn test_grayscale_expands_to_rgb() {
        let gray = GrayImage::from_pixel(3, 2, Luma([77]));
        let rgb = to_rgb(DynamicImage::ImageLuma8(gray));
        assert_eq!(rgb.dimensions(), (3, 2));
        assert!(rgb.pixels().all(|p| *p == Rgb([77, 77, 77])));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = FsImageLoader.load(Path::new("does/not/exist.png")).unwrap_err();
        match err {
            StackError::Decode { path, .. } => assert_eq!(path, Path::new("does/not/exist.png")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

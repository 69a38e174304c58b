//! Vertical image stacking.
//!
//! Decoding and encoding sit behind the [`ImageLoader`] and [`ImageWriter`]
//! traits; [`Stacker`] drives them and does the layout and compositing.

pub mod error;
pub mod layout;
pub mod loader;
pub mod progress;
pub mod writer;


use std::path::PathBuf;
use std::time::Instant;

use image::{Rgb, RgbImage, imageops};
use tracing::{debug, info, instrument};

use crate::models::{Alignment, StackOutcome, StackRequest};

pub use error::{Result, StackError};
pub use layout::compute_layout;
pub use loader::{FsImageLoader, ImageLoader};
pub use progress::{CancelToken, NoProgress, ProgressObserver, WithCancel};
pub use writer::{FileImageWriter, ImageWriter};

/// Canvas fill, also used to flatten transparency.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub struct Stacker<L: ImageLoader, W: ImageWriter> {
    loader: L,
    writer: W,
}

impl Stacker<FsImageLoader, FileImageWriter> {
    pub fn new() -> Self {
        Self {
            loader: FsImageLoader,
            writer: FileImageWriter,
        }
    }
}

impl Default for Stacker<FsImageLoader, FileImageWriter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ImageLoader, W: ImageWriter> Stacker<L, W> {
    pub fn with_custom(loader: L, writer: W) -> Self {
        Self { loader, writer }
    }

    /// Decode `paths` and stack them into one image.
    pub fn stack(
        &self,
        paths: &[PathBuf],
        spacing: u32,
        alignment: Alignment,
        progress: &mut impl ProgressObserver,
    ) -> Result<RgbImage> {
        if paths.is_empty() {
            return Err(StackError::Input("No images selected!".to_string()));
        }
        let total = paths.len() as f32;

        let mut images = Vec::with_capacity(paths.len());
        for (i, path) in paths.iter().enumerate() {
            check_cancelled(&*progress)?;
            images.push(self.loader.load(path)?);
            progress.on_progress((i + 1) as f32 / total * 50.0);
        }

        let sizes: Vec<(u32, u32)> = images.iter().map(|img| img.dimensions()).collect();
        let layout = compute_layout(&sizes, spacing, alignment)?;
        debug!(
            "Canvas {}x{} for {} images (spacing={}, alignment={})",
            layout.width,
            layout.height,
            images.len(),
            spacing,
            alignment
        );

        let mut canvas = RgbImage::from_pixel(layout.width, layout.height, BACKGROUND);
        for (i, (img, placement)) in images.iter().zip(&layout.placements).enumerate() {
            check_cancelled(&*progress)?;
            imageops::replace(&mut canvas, img, placement.x as i64, placement.y as i64);
            debug!("Placed image {} at ({}, {})", i + 1, placement.x, placement.y);
            progress.on_progress(50.0 + (i + 1) as f32 / total * 50.0);
        }

        Ok(canvas)
    }

    /// Stack the request's inputs and write the result to its output path.
    #[instrument(
        skip_all,
        fields(images = request.paths.len(), output = %request.output.display())
    )]
    pub fn combine(
        &self,
        request: &StackRequest,
        progress: &mut impl ProgressObserver,
    ) -> Result<StackOutcome> {
        let format = request.validate()?;
        let started = Instant::now();
        info!("Combining {} images", request.paths.len());

        let canvas = self.stack(&request.paths, request.spacing, request.alignment, progress)?;

        check_cancelled(&*progress)?;
        self.writer.write(&canvas, &request.output, format)?;

        info!(
            "Wrote {}x{} image in {:.3}ms",
            canvas.width(),
            canvas.height(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(StackOutcome {
            images: request.paths.len(),
            width: canvas.width(),
            height: canvas.height(),
            output: request.output.clone(),
        })
    }
}

fn check_cancelled(progress: &impl ProgressObserver) -> Result<()> {
    if progress.is_cancelled() {
        return Err(StackError::Cancelled);
    }
    Ok(())
}

/// Combine with the filesystem loader and writer.
pub fn combine(
    request: &StackRequest,
    progress: &mut impl ProgressObserver,
) -> Result<StackOutcome> {
    Stacker::new().combine(request, progress)
}

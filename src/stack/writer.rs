use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::stack::Result;

pub trait ImageWriter {
    fn write(&self, image: &RgbImage, path: &Path, format: ImageFormat) -> Result<()>;
}

/// Encodes next to the destination, then renames into place.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageWriter;

impl ImageWriter for FileImageWriter {
    fn write(&self, image: &RgbImage, path: &Path, format: ImageFormat) -> Result<()> {
        debug!(
            "Encoding {}x{} {:?} to {}",
            image.width(),
            image.height(),
            format,
            path.display()
        );

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = temp_file_in(dir)?;
        {
            let mut out = BufWriter::new(tmp.as_file());
            image.write_to(&mut out, format)?;
            out.flush()?;
        }
        // a replaced file keeps its mode
        if let Ok(existing) = std::fs::metadata(path) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
        tmp.persist(path).map_err(|e| e.error)?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Temp file created with the mode a plain `File::create` would get.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

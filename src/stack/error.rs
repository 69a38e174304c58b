use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("{0}")]
    Input(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid canvas dimensions: width={0}, height={1}")]
    InvalidDimensions(u64, u64),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StackError>;

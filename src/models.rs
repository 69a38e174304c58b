use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::ImageFormat;

use crate::stack::{Result, StackError};

/// Horizontal placement of images narrower than the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub const ALL: &'static [Alignment] = &[Alignment::Left, Alignment::Center, Alignment::Right];

    /// X offset of an image of `width` on a canvas of `canvas_width`.
    pub fn offset(self, canvas_width: u32, width: u32) -> u32 {
        let slack = canvas_width.saturating_sub(width);
        match self {
            Alignment::Left => 0,
            Alignment::Center => slack / 2,
            Alignment::Right => slack,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(StackError::Input(format!("unknown alignment: {other}"))),
        }
    }
}

/// Everything one combine needs, captured once from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRequest {
    /// Input images, top to bottom.
    pub paths: Vec<PathBuf>,
    pub spacing: u32,
    pub alignment: Alignment,
    pub output: PathBuf,
}

impl StackRequest {
    pub fn new<I, P>(paths: I, output: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            spacing: 0,
            alignment: Alignment::default(),
            output: output.into(),
        }
    }

    pub fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Checks the request without touching the filesystem and returns the
    /// encoder to use for the output.
    pub fn validate(&self) -> Result<ImageFormat> {
        if self.paths.is_empty() {
            return Err(StackError::Input("No images selected!".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(StackError::Input("Please specify an output file!".to_string()));
        }
        output_format(&self.output)
    }
}

/// Output encoder chosen by file extension.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path)
        .map_err(|_| StackError::UnsupportedFormat(path.display().to_string()))?;
    if !format.writing_enabled() {
        return Err(StackError::UnsupportedFormat(path.display().to_string()));
    }
    Ok(format)
}

/// Where one input lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Canvas size plus one placement per input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Summary of a finished combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutcome {
    pub images: usize,
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

impl fmt::Display for StackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully combined {} images into:\n{}",
            self.images,
            self.output.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_offsets() {
        assert_eq!(Alignment::Left.offset(120, 80), 0);
        assert_eq!(Alignment::Center.offset(120, 80), 20);
        assert_eq!(Alignment::Center.offset(120, 79), 20);
        assert_eq!(Alignment::Right.offset(120, 80), 40);
        assert_eq!(Alignment::Right.offset(120, 120), 0);
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!("LEFT".parse::<Alignment>().unwrap(), Alignment::Left);
        assert_eq!(" center ".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!("right".parse::<Alignment>().unwrap(), Alignment::Right);
        assert!(matches!("top".parse::<Alignment>(), Err(StackError::Input(_))));
        assert_eq!(Alignment::default().to_string(), "center");
    }

    #[test]
    fn test_validate_request() {
        let empty = StackRequest::new(Vec::<PathBuf>::new(), "out.png");
        assert!(matches!(empty.validate(), Err(StackError::Input(_))));

        let no_output = StackRequest::new(["a.png"], "");
        assert!(matches!(no_output.validate(), Err(StackError::Input(_))));

        let bad_ext = StackRequest::new(["a.png"], "out.notanimage");
        assert!(matches!(bad_ext.validate(), Err(StackError::UnsupportedFormat(_))));

        let no_ext = StackRequest::new(["a.png"], "out");
        assert!(matches!(no_ext.validate(), Err(StackError::UnsupportedFormat(_))));

        let ok = StackRequest::new(["a.png", "b.jpg"], "out.jpg")
            .spacing(4)
            .alignment(Alignment::Right);
        assert_eq!(ok.validate().unwrap(), ImageFormat::Jpeg);
        assert_eq!(ok.spacing, 4);
        assert_eq!(ok.alignment, Alignment::Right);
    }

    #[test]
    fn test_outcome_message() {
        let outcome = StackOutcome {
            images: 3,
            width: 120,
            height: 170,
            output: PathBuf::from("out.png"),
        };
        assert_eq!(outcome.to_string(), "Successfully combined 3 images into:\nout.png");
    }
}

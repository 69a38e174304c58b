use std::path::PathBuf;

use crate::models::{Alignment, StackOutcome};

#[derive(Debug, Clone)]
pub enum Message {
    AddImages,
    ImagesPicked(Vec<PathBuf>),
    RemoveImage(usize),
    MoveUp(usize),
    MoveDown(usize),
    ClearAll,
    SpacingChanged(String),
    AlignmentSelected(Alignment),
    OutputChanged(String),
    BrowseOutput,
    OutputPicked(Option<PathBuf>),
    Combine,
    Cancel,
    Progress(f32),
    Finished(JobResult),
}

/// How a background combine ended.
#[derive(Debug, Clone)]
pub enum JobResult {
    Done(StackOutcome),
    Cancelled,
    Failed(String),
}

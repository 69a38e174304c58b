pub mod logger;
pub mod models;
pub mod stack;

pub use models::{Alignment, Layout, Placement, StackOutcome, StackRequest};
pub use stack::{
    CancelToken, ImageLoader, ImageWriter, NoProgress, ProgressObserver, StackError, Stacker,
    combine, compute_layout,
};

#[cfg(feature = "gui")]
pub mod gui;

use std::path::PathBuf;

use crate::gui::JobResult;
use crate::models::{Alignment, StackRequest};
use crate::stack::CancelToken;

/// Largest spacing the form accepts.
pub const MAX_SPACING: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Done(String),
    Cancelled,
    /// The form was incomplete; shown as-is.
    Invalid(String),
    Failed(String),
}

/// Form contents and the running job, if any.
#[derive(Debug, Default)]
pub struct AppState {
    pub images: Vec<PathBuf>,
    /// Raw text of the spacing field.
    pub spacing: String,
    pub alignment: Alignment,
    pub output: String,
    pub progress: f32,
    pub status: Status,
    job: Option<CancelToken>,
}

impl AppState {
    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    /// Appends paths not already in the list, keeping their order.
    pub fn add_images(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        for path in paths {
            if !self.images.contains(&path) {
                self.images.push(path);
            }
        }
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.images.len() {
            self.images.swap(index - 1, index);
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.images.len() {
            self.images.swap(index, index + 1);
        }
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Keeps the edit only if it is empty or a whole number up to [`MAX_SPACING`].
    pub fn set_spacing(&mut self, text: String) {
        let text = text.trim().to_string();
        if text.is_empty() || text.parse::<u32>().is_ok_and(|v| v <= MAX_SPACING) {
            self.spacing = text;
        }
    }

    pub fn spacing_value(&self) -> u32 {
        self.spacing.parse().unwrap_or(0)
    }

    /// Snapshot of the form as a request, or the message to show instead.
    pub fn request(&self) -> Result<StackRequest, String> {
        let request = StackRequest::new(self.images.iter().cloned(), self.output.trim())
            .spacing(self.spacing_value())
            .alignment(self.alignment);
        request.validate().map_err(|e| e.to_string())?;
        Ok(request)
    }

    pub fn start(&mut self, token: CancelToken) {
        self.job = Some(token);
        self.progress = 0.0;
        self.status = Status::Running;
    }

    pub fn cancel(&self) {
        if let Some(token) = &self.job {
            token.cancel();
        }
    }

    /// Progress arriving after the job ended is dropped.
    pub fn set_progress(&mut self, percent: f32) {
        if self.is_running() {
            self.progress = percent.clamp(0.0, 100.0);
        }
    }

    pub fn finish(&mut self, result: JobResult) {
        self.job = None;
        match result {
            JobResult::Done(outcome) => {
                self.progress = 100.0;
                self.status = Status::Done(outcome.to_string());
            }
            JobResult::Cancelled => {
                self.progress = 0.0;
                self.status = Status::Cancelled;
            }
            JobResult::Failed(message) => {
                self.progress = 0.0;
                self.status = Status::Failed(message);
            }
        }
    }

    pub fn reject(&mut self, message: String) {
        self.status = Status::Invalid(message);
    }
}

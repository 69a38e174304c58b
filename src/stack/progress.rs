use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives percentages in `[0, 100]` while a stack runs.
pub trait ProgressObserver {
    fn on_progress(&mut self, percent: f32);

    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(f32)> ProgressObserver for F {
    fn on_progress(&mut self, percent: f32) {
        self(percent)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _percent: f32) {}
}

/// Shared flag a host sets to stop a running stack.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Pairs an observer with a [`CancelToken`].
pub struct WithCancel<P> {
    pub inner: P,
    pub token: CancelToken,
}

impl<P: ProgressObserver> ProgressObserver for WithCancel<P> {
    fn on_progress(&mut self, percent: f32) {
        self.inner.on_progress(percent);
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.inner.is_cancelled()
    }
}

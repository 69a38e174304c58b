use iced::Task;
use iced::futures::channel::mpsc::{self, UnboundedSender};
use tracing::warn;

use crate::gui::{JobResult, Message};
use crate::models::StackRequest;
use crate::stack::{self, CancelToken, StackError, WithCancel};

/// Runs one combine on the blocking pool, streaming progress back as messages.
pub fn start(request: StackRequest, token: CancelToken) -> Task<Message> {
    let (sender, receiver) = mpsc::unbounded::<f32>();

    Task::batch([
        Task::run(receiver, Message::Progress),
        Task::perform(run_job(request, token, sender), Message::Finished),
    ])
}

async fn run_job(
    request: StackRequest,
    token: CancelToken,
    sender: UnboundedSender<f32>,
) -> JobResult {
    let result = tokio::task::spawn_blocking(move || {
        let mut observer = WithCancel {
            inner: move |percent: f32| {
                let _ = sender.unbounded_send(percent);
            },
            token,
        };
        stack::combine(&request, &mut observer)
    })
    .await;

    match result {
        Ok(Ok(outcome)) => JobResult::Done(outcome),
        Ok(Err(StackError::Cancelled)) => JobResult::Cancelled,
        Ok(Err(e)) => {
            warn!("Combine failed: {}", e);
            JobResult::Failed(e.to_string())
        }
        Err(e) => JobResult::Failed(format!("worker stopped: {}", e)),
    }
}

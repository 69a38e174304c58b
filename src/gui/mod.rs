mod app;
mod message;
mod state;
mod widgets;
mod worker;

pub use app::{StackerApp, run};
pub use message::{JobResult, Message};
pub use state::{AppState, MAX_SPACING, Status};

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from imgstack for tests
pub use imgstack::{Alignment, NoProgress, StackError, StackRequest};

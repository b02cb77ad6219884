//! Submission collaborator for validated registrations

mod dispatch;
mod logger;
mod traits;

pub use dispatch::{spawn_submit, SubmissionFinished};
pub use logger::LoggingSubmitter;
pub use traits::{SubmissionHandler, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockSubmissionHandler;

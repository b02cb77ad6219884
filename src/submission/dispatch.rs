//! Runs a submission off the event loop

use super::traits::{SubmissionHandler, SubmissionReceipt};
use crate::state::FormValues;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Answer from the submitter for one dispatched form
#[derive(Debug)]
pub struct SubmissionFinished {
    pub result: Result<SubmissionReceipt>,
}

/// Hand `values` to `handler` on a background task; the answer is sent to `tx`
pub fn spawn_submit(
    handler: Arc<dyn SubmissionHandler>,
    values: FormValues,
    tx: UnboundedSender<SubmissionFinished>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // a panicking handler must still unlock the form
        let task = tokio::spawn(async move { handler.submit(&values).await });
        let result = match task.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!("submission task failed: {err}");
                Err(anyhow!("submission stopped unexpectedly"))
            }
        };
        if tx.send(SubmissionFinished { result }).is_err() {
            tracing::debug!("submission finished after receiver closed");
        }
    })
}

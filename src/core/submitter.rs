//! Submission backends
//!
//! Only a simulated backend exists: it logs the record, keeps a copy in
//! local storage and resolves after a fixed delay. It fails when the copy
//! cannot be stored.

use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::storage::{KeyValueStore, StorageError, SubmissionLog};
use super::submission::FormSubmission;
use super::surface::Scheduler;

/// Submission errors
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Failed to back up submission: {0}")]
    Storage(#[from] StorageError),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Entries in the local backup after this submission
    pub stored_entries: usize,
}

pub trait Submitter {
    fn submit<'a>(
        &'a self,
        submission: &'a FormSubmission,
    ) -> LocalBoxFuture<'a, Result<SubmitReceipt, SubmitError>>;
}

/// Stand-in for a real endpoint
pub struct SimulatedSubmitter {
    store: Rc<dyn KeyValueStore>,
    scheduler: Rc<dyn Scheduler>,
    storage_key: String,
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        scheduler: Rc<dyn Scheduler>,
        storage_key: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            scheduler,
            storage_key: storage_key.into(),
            delay,
        }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit<'a>(
        &'a self,
        submission: &'a FormSubmission,
    ) -> LocalBoxFuture<'a, Result<SubmitReceipt, SubmitError>> {
        Box::pin(async move {
            tracing::info!(?submission, "Form submission");

            let stored_entries =
                SubmissionLog::new(self.store.as_ref(), &self.storage_key).append(submission)?;

            self.scheduler.sleep(self.delay).await;

            Ok(SubmitReceipt { stored_entries })
        })
    }
}

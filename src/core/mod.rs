//! Landing page behavior, independent of the browser

pub mod analytics;
pub mod config;
pub mod controller;
pub mod counter;
pub mod modal;
pub mod phone;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod storage;
pub mod submission;
pub mod submitter;
pub mod surface;
pub mod validation;
#[cfg(test)]
mod tests;

pub use analytics::{TrackedEvent, track_event};
pub use config::{ConfigError, LandingConfig};
pub use controller::{FormState, KeyResponse, LandingController, SubmitOutcome};
pub use modal::ModalKind;
pub use storage::{KeyValueStore, MemoryStore, StorageError, SubmissionLog};
pub use submission::{FormFields, FormSubmission};
pub use submitter::{SimulatedSubmitter, SubmitError, SubmitReceipt, Submitter};
pub use surface::{PageSurface, Scheduler, ScrollTarget};
pub use validation::{ValidationError, validate_submission};

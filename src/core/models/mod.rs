//! Domain models for momo-status
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TimelineDocument`] - The dashboard's JSON file
//! - [`StatusUpdate`] / [`ProjectUpdate`] - Partial updates, `None` means unchanged
//! - [`PublishStep`] - One step of the stage, commit, push pipeline

mod publish;
mod timeline;
mod update;

pub use publish::{PublishStep, StepKind, commit_message, publish_plan};
pub use timeline::{Event, Status, TimelineDocument};
pub use update::{ProjectUpdate, StatusUpdate};

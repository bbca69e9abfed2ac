//! Version control system port
//!
//! Defines the interface the publisher drives.

use crate::core::models::PublishStep;
use crate::error::PublishError;

/// Version control system abstraction
///
/// Implementations run one publish step at a time and block until it
/// finishes.
pub trait VersionControl: Send + Sync {
    /// Run a single step, failing if it does not succeed
    fn run_step(&self, step: &PublishStep) -> Result<(), PublishError>;
}

//! Timeline repository port
//!
//! Defines the interface for reading and writing the timeline document.

use std::path::Path;

use crate::core::models::TimelineDocument;
use crate::error::StatusError;

/// Durable storage for the timeline document
///
/// Reads and writes are always whole-document.
pub trait TimelineRepository: Send + Sync {
    /// Read the full document
    ///
    /// Fails with [`StatusError::NotFound`] when nothing is stored yet and
    /// [`StatusError::Parse`] when the stored content is malformed.
    fn read(&self) -> Result<TimelineDocument, StatusError>;

    /// Replace the stored document
    fn write(&self, doc: &TimelineDocument) -> Result<(), StatusError>;

    /// Where the document lives, for messages
    fn location(&self) -> &Path;
}

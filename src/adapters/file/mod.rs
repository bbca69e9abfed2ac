//! File-based timeline storage
//!
//! Implements `TimelineRepository` over a single JSON file.

mod timeline;

pub use timeline::JsonTimelineFile;

//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - JSON timeline file
//! - `git/` - Publish steps via the git CLI
//! - `clock` - System local time

pub mod clock;
pub mod file;
pub mod git;

pub use clock::SystemClock;
pub use file::JsonTimelineFile;
pub use git::GitVersionControl;

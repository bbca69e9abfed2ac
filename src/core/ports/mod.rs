//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and external
//! systems (the filesystem, git, the wall clock).
//!
//! Implementations live in the `adapters` module.

mod clock;
mod timeline_repo;
mod vcs;

pub use clock::Clock;
pub use timeline_repo::TimelineRepository;
pub use vcs::VersionControl;

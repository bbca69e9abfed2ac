//! Business logic services
//!
//! Orchestration over the port traits. Services never touch the filesystem
//! or spawn processes directly.
//!
//! - [`status_store`] - Load, mutate and save the timeline document
//! - [`publisher`] - Stage, commit and push the website repository

pub mod publisher;
pub mod status_store;

pub use publisher::{PublishReport, PublishSettings, Publisher};
pub use status_store::{StatusStore, format_timestamp};

//! Core domain logic for momo-status
//!
//! This module contains the update and publish logic with no direct I/O.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`TimelineDocument`, `Event`, updates, publish steps)
//! - `services/` - `StatusStore` and `Publisher`
//! - `ports/` - Trait definitions for storage, git and the clock

pub mod models;
pub mod ports;
pub mod services;

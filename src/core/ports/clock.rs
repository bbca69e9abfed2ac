//! Clock port

use chrono::{DateTime, FixedOffset};

/// Source of the current local time
pub trait Clock: Send + Sync {
    /// Current local time, carrying its UTC offset
    fn now(&self) -> DateTime<FixedOffset>;
}

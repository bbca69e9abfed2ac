//! Wall clock adapter

use chrono::{DateTime, FixedOffset, Local};

use crate::core::ports::Clock;

/// The system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

//! System clock adapter.
//!
//! Production implementation of `ClockPort` backed by chrono. For tests,
//! use `infrastructure::testing::MockClock` instead.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::ClockPort;

/// System clock implementation using real time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

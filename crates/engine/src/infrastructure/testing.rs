//! Test support: controllable clock for deterministic TTL testing.
//!
//! Lives in the library (not behind `cfg(test)`) so integration tests in
//! `tests/` can drive store expiry.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::infrastructure::ports::ClockPort;

/// Mock clock frozen at a controllable instant
pub struct MockClock {
    frozen_time: RwLock<DateTime<Utc>>,
}

impl MockClock {
    /// Create a new mock clock frozen at the given time
    pub fn new(frozen_time: DateTime<Utc>) -> Self {
        Self {
            frozen_time: RwLock::new(frozen_time),
        }
    }

    /// Create a mock clock frozen at "now"
    pub fn now_frozen() -> Self {
        Self::new(Utc::now())
    }

    /// Advance the frozen time by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut time = self.frozen_time.write().expect("clock lock poisoned");
        *time += duration;
    }

    /// Set the frozen time to a specific value
    pub fn set_time(&self, time: DateTime<Utc>) {
        *self.frozen_time.write().expect("clock lock poisoned") = time;
    }
}

impl ClockPort for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.frozen_time.read().expect("clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_time_forward() {
        let clock = MockClock::now_frozen();
        let before = clock.now_millis();
        clock.advance(Duration::milliseconds(250));
        assert_eq!(clock.now_millis(), before + 250);
    }

    #[test]
    fn test_time_is_frozen_between_advances() {
        let clock = MockClock::now_frozen();
        assert_eq!(clock.now(), clock.now());
    }
}

//! Outbound port traits.

use chrono::{DateTime, Utc};

/// Time operations abstraction.
///
/// Stores age their entries against this port rather than calling
/// `Utc::now()` directly, so TTL behavior is deterministic under test.
pub trait ClockPort: Send + Sync {
    /// Get current time as DateTime<Utc>
    fn now(&self) -> DateTime<Utc>;

    /// Get current time as Unix timestamp in milliseconds
    fn now_millis(&self) -> u64 {
        self.now().timestamp_millis().max(0) as u64
    }
}

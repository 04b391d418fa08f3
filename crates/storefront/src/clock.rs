//! Injectable wall clock.
//!
//! On-sale evaluation compares discount expiries against "now"; routing that
//! through a trait keeps the catalog engine deterministic under test.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Create a clock that always reports `at`.
    #[must_use]
    pub const fn at(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_fixed_clock_reports_pinned_instant() {
        let at = Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::at(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }
}

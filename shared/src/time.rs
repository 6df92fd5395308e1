//! Injectable time sources
//!
//! Every time-sensitive operation in the domain receives a [`TimeSource`]
//! instead of reading the wall clock. Production code wires in
//! [`SystemTimeSource`]; tests pin and advance a [`FixedTimeSource`].

use chrono::{DateTime, Duration, Utc};
use std::sync::RwLock;

/// Supplies the current UTC instant.
///
/// Implementations must be side-effect free: reading the time never changes it.
pub trait TimeSource: Send + Sync {
    /// Current instant in UTC
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Time source backed by the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time source that returns a controlled instant
///
/// The instant only moves when [`FixedTimeSource::set`] or
/// [`FixedTimeSource::advance`] is called, so expiry checks are reproducible.
#[derive(Debug)]
pub struct FixedTimeSource {
    now: RwLock<DateTime<Utc>>,
}

impl FixedTimeSource {
    /// Create a time source pinned at `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Pin the time source at a new instant
    pub fn set(&self, now: DateTime<Utc>) {
        let mut guard = self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }

    /// Move the pinned instant forward (or backward, for negative durations)
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += by;
    }
}

impl TimeSource for FixedTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn utc_now(&self) -> DateTime<Utc> {
        (**self).utc_now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn utc_now(&self) -> DateTime<Utc> {
        (**self).utc_now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn pinned() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 29, 22, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_time_source_is_stable() {
        let clock = FixedTimeSource::new(pinned());
        assert_eq!(clock.utc_now(), pinned());
        assert_eq!(clock.utc_now(), clock.utc_now());
    }

    #[test]
    fn test_fixed_time_source_advance_and_set() {
        let clock = FixedTimeSource::new(pinned());
        clock.advance(Duration::minutes(6));
        assert_eq!(clock.utc_now(), pinned() + Duration::minutes(6));

        clock.set(pinned());
        assert_eq!(clock.utc_now(), pinned());
    }

    #[test]
    fn test_shared_time_source_sees_updates() {
        let clock = Arc::new(FixedTimeSource::new(pinned()));
        let shared: Arc<dyn TimeSource> = clock.clone();

        clock.advance(Duration::seconds(30));
        assert_eq!(shared.utc_now(), pinned() + Duration::seconds(30));
    }

    #[test]
    fn test_system_time_source_tracks_wall_clock() {
        let before = Utc::now();
        let now = SystemTimeSource::new().utc_now();
        let after = Utc::now();
        assert!(before <= now && now <= after);
    }
}

//! Injectable wall-clock so time-dependent components stay deterministic
use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::sync::Arc;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Tests advance it past the
/// settlement deadline instead of sleeping on real delays.
#[derive(Debug)]
pub struct ManualClock(Cell<DateTime<Utc>>);

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self(Cell::new(now))
    }
    pub fn set(&self, now: DateTime<Utc>) {
        self.0.set(now);
    }
    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

// Lets the flow controller own `Arc<ManualClock>` while a test keeps its
// own handle to advance it.
impl<C: Clock> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveTime};

/// Supplies the wall-clock time of day a scene should depict.
///
/// Callers sample once per frame and treat the result as authoritative; sources do
/// not smooth or buffer.
pub trait TimeSource {
    fn now(&self) -> NaiveTime;
}

/// System local time via `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Settable fake clock for tests and replays.
///
/// Clones share the same underlying time, so a test can keep one handle and give
/// another to the code under test.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<NaiveTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveTime) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    /// Convenience constructor from `h:m:s`. `None` if out of range.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hours, minutes, seconds).map(Self::new)
    }

    /// Moves the clock forward, wrapping past midnight.
    pub fn advance(&self, by: chrono::Duration) {
        let mut current = self.lock();
        *current = current.overflowing_add_signed(by).0;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveTime> {
        // NaiveTime writes are a single store; a poisoned guard still holds a valid value.
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> NaiveTime {
        *self.lock()
    }
}

use chrono::Timelike;

use crate::error::FaceError;

/// Time of day a frame depicts, in 24-hour form.
///
/// Sampled fresh from a time source every step and never cached across frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TimeSample {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeSample {
    /// Validated constructor.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, FaceError> {
        let sample = Self { hours, minutes, seconds };
        sample.validate()?;
        Ok(sample)
    }

    /// Checks `hours < 24`, `minutes < 60`, `seconds < 60`.
    pub fn validate(&self) -> Result<(), FaceError> {
        check("hours", self.hours, 24)?;
        check("minutes", self.minutes, 60)?;
        check("seconds", self.seconds, 60)
    }

    /// Same minute and second, hours shifted by `offset` and wrapped into `0..24`.
    pub fn offset_hours(self, offset: i32) -> Self {
        let hours = (self.hours as i64 + offset as i64).rem_euclid(24) as u32;
        Self { hours, ..self }
    }
}

fn check(field: &'static str, value: u32, limit: u32) -> Result<(), FaceError> {
    if value < limit {
        Ok(())
    } else {
        Err(FaceError::InvalidTimeSample { field, value, limit })
    }
}

impl<T: Timelike> From<&T> for TimeSample {
    /// Drops sub-second precision. Leap seconds still report `second() == 59`.
    fn from(time: &T) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
            seconds: time.second(),
        }
    }
}

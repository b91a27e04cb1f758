use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots and pacing deadlines.
///
/// Delta time is clamped so a loop paused by a debugger or a stalled host does not
/// hand downstream systems a pathological value.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    frame_budget: Option<Duration>,
}

impl FrameClock {
    /// Creates a new unpaced clock with default clamps.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
            frame_budget: None,
        }
    }

    /// Paces frames to `fps`. Zero disables pacing.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.frame_budget = (fps > 0).then(|| Duration::from_secs(1) / fps);
        self
    }

    /// Per-frame budget, if paced.
    #[inline]
    pub fn frame_budget(&self) -> Option<Duration> {
        self.frame_budget
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Time left in the budget of the frame that started at `frame`.
    ///
    /// `Duration::ZERO` when unpaced or already over budget.
    pub fn remaining(&self, frame: &FrameTime) -> Duration {
        match self.frame_budget {
            Some(budget) => budget.saturating_sub(frame.now.elapsed()),
            None => Duration::ZERO,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

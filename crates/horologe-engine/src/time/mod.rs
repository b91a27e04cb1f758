//! Time subsystem.
//!
//! Two independent notions of time live here:
//! - frame time: monotonic deltas and pacing for the frame loop (`FrameClock`)
//! - wall time: the time of day a scene depicts (`TimeSource`)
//!
//! Keeping them apart lets tests drive wall time with a fake clock while the loop
//! still paces on the real monotonic clock.

mod frame_clock;
mod time_source;

pub use frame_clock::{FrameClock, FrameTime};
pub use time_source::{LocalClock, ManualClock, TimeSource};

//! Headless frame runtime.
//!
//! Plays the role of a display's animation-frame scheduler: one `App::on_frame` per
//! tick, paced by a `FrameClock`, with no window or GPU ownership. Whatever draws
//! the frames sits behind the `SceneSink` the runtime is given.

mod frame_loop;

pub use frame_loop::{Runtime, RuntimeConfig, RuntimeCtx};

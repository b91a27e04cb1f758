use anyhow::Result;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime calls `on_frame` exactly once per frame, on one thread, and never
/// re-enters it. An `Err` stops the loop and is returned from `Runtime::run`.
pub trait App {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl>;

    /// Called once after the last frame, whatever stopped the loop.
    fn on_stop(&mut self) {}
}

//! Core engine-facing contracts.
//!
//! Defines the stable interface between the frame runtime and higher layers
//! (studio, tools): the `App` callback trait and the per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;

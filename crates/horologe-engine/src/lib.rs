//! Horologe engine crate.
//!
//! Renderer-agnostic scene plumbing used by the clock face and the studio:
//! coordinates and transforms, colors and materials, a retained mesh list with
//! stable handles, procedural lathe geometry, frame and wall-clock time, a headless
//! frame runtime, and logging setup.

pub mod core;
pub mod runtime;
pub mod time;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;

//! Coordinate and transform types shared by scene construction and sinks.
//!
//! Canonical scene space:
//! - right-handed, +X right, +Y up, +Z toward the viewer
//! - face-plane points use clock angles: measured clockwise from +Y ("12 o'clock")
//!
//! Sinks convert to their own clip space; nothing here knows about projection.

mod clock_angle;
mod transform;

pub use clock_angle::clock_point;
pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use transform::Transform;

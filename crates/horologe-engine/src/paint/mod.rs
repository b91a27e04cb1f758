//! Paint model shared between scene construction and sinks.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - per-mesh material switches (depth test, sidedness, flat shading)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod material;

pub use color::Color;
pub use material::Material;

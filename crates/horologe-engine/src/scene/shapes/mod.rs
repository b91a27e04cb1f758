//! Shape kinds a scene can describe.
//!
//! Every shape is centered on its local origin. Local-frame conventions:
//! - `Cylinder`: axis along +Z, caps at `z = ±height/2`
//! - `Plate`: zero-thickness rectangle in the XY plane, `length` along +Y, normal +Z
//! - `Sphere` / `Ellipsoid`: centered; ellipsoid radii are per local axis
//! - `Lathe`: profile revolved about +Z (see [`LatheGeometry`])

pub mod lathe;

use crate::coords::Vec3;

pub use lathe::{LatheGeometry, Vertex3d};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Cylinder { radius: f32, height: f32, radial_segments: u32 },
    Plate { width: f32, length: f32 },
    Sphere { radius: f32 },
    Ellipsoid { radii: Vec3 },
    Lathe(LatheGeometry),
}
